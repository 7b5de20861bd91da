//! Transfer service
//!
//! Deposits and withdrawals against stored accounts. Each applied transfer
//! is saved immediately and recorded in the audit log.

use tracing::{info, warn};

use crate::audit::AuditEntry;
use crate::config::settings::Settings;
use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountId, TransferOutcome, TransferType};
use crate::storage::{AccountStore, Storage};

/// The account after a deposit or withdrawal, and what happened to it
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    pub account: Account,
    pub kind: TransferType,
    pub outcome: TransferOutcome,
}

/// Service for deposits and withdrawals
pub struct TransferService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> TransferService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    pub fn deposit(&self, id: AccountId, amount: i64) -> BankResult<TransferReceipt> {
        self.apply(id, TransferType::Deposit, amount)
    }

    pub fn withdraw(&self, id: AccountId, amount: i64) -> BankResult<TransferReceipt> {
        self.apply(id, TransferType::Withdraw, amount)
    }

    fn apply(&self, id: AccountId, kind: TransferType, amount: i64) -> BankResult<TransferReceipt> {
        let mut account = self
            .storage
            .accounts
            .find(id)?
            .ok_or_else(|| BankError::account_not_found(id.to_string()))?;
        let before = account.clone();

        let date = self.settings.timestamp_now()?;
        let result = match kind {
            TransferType::Deposit => account.deposit(amount, date),
            TransferType::Withdraw => account.withdraw(amount, date),
        };
        let outcome = result.map_err(|e| {
            warn!(account = %id, kind = %kind, amount, error = %e, "transfer rejected");
            BankError::from(e)
        })?;

        match &outcome {
            TransferOutcome::Applied(transfer) => {
                self.storage.accounts.save(&account)?;
                self.storage
                    .audit()
                    .log(&AuditEntry::transferred(id, &before, &account, transfer))?;
                info!(account = %id, kind = %kind, amount, balance = account.balance(), "transfer applied");
            }
            TransferOutcome::Cancelled => {
                info!(account = %id, kind = %kind, "zero amount, transfer cancelled");
            }
        }

        Ok(TransferReceipt {
            account,
            kind,
            outcome,
        })
    }
}
