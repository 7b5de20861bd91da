//! Account model
//!
//! Represents a customer account: contact details, the running balance and
//! the ledger of transfers that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::ids::{AccountId, PhoneNumber};
use super::transfer::{Transfer, TransferType};
use super::validation::{self, ContactFields, ValidationReport};

/// Why a deposit or withdrawal was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Negative amounts, or amounts that would overflow the balance
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: i64, available: i64 },
}

/// Result of a deposit or withdrawal that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The balance changed and this transfer was appended
    Applied(Transfer),
    /// A zero amount was requested; nothing changed
    Cancelled,
}

impl TransferOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// A bank account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account number, assigned once when the account is first saved
    id: Option<AccountId>,

    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: PhoneNumber,
    pub email: String,

    /// Current balance in whole currency units
    balance: i64,

    /// Ledger in the order the transfers were applied
    transfers: Vec<Transfer>,
}

impl Account {
    /// Create an unsaved account with a zero balance
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        phone: PhoneNumber,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            phone,
            email: email.into(),
            balance: 0,
            transfers: Vec::new(),
        }
    }

    /// Rebuild a saved account from its persisted parts
    pub fn restore(
        id: AccountId,
        contact: Account,
        balance: i64,
        transfers: Vec<Transfer>,
    ) -> Self {
        Self {
            id: Some(id),
            balance,
            transfers,
            ..contact
        }
    }

    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    /// Give this account its number. Has no effect if one is already set.
    pub fn assign_id(&mut self, id: AccountId) -> bool {
        if self.id.is_some() {
            return false;
        }
        self.id = Some(id);
        true
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Trim surrounding whitespace from every text field
    pub fn normalize(&mut self) {
        for field in [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.address,
            &mut self.email,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
    }

    /// Check the contact fields, reporting every violated rule
    pub fn validate(&self) -> ValidationReport {
        validation::validate(ContactFields {
            first_name: &self.first_name,
            last_name: &self.last_name,
            address: &self.address,
            email: &self.email,
        })
    }

    /// Add `amount` to the balance and record it in the ledger
    pub fn deposit(
        &mut self,
        amount: i64,
        date: impl Into<String>,
    ) -> Result<TransferOutcome, TransactionError> {
        if amount < 0 {
            return Err(TransactionError::InvalidAmount(amount));
        }
        if amount == 0 {
            return Ok(TransferOutcome::Cancelled);
        }

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(TransactionError::InvalidAmount(amount))?;

        Ok(self.commit(TransferType::Deposit, amount, balance, date.into()))
    }

    /// Take `amount` from the balance and record it in the ledger
    ///
    /// The balance is never allowed to go below zero.
    pub fn withdraw(
        &mut self,
        amount: i64,
        date: impl Into<String>,
    ) -> Result<TransferOutcome, TransactionError> {
        if amount < 0 {
            return Err(TransactionError::InvalidAmount(amount));
        }
        if amount == 0 {
            return Ok(TransferOutcome::Cancelled);
        }
        if amount > self.balance {
            return Err(TransactionError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }

        let balance = self.balance - amount;
        Ok(self.commit(TransferType::Withdraw, amount, balance, date.into()))
    }

    fn commit(
        &mut self,
        kind: TransferType,
        amount: i64,
        balance: i64,
        date: String,
    ) -> TransferOutcome {
        let transfer = Transfer::new(date, kind, amount, balance);
        self.balance = balance;
        self.transfers.push(transfer.clone());
        TransferOutcome::Applied(transfer)
    }

    /// Whether every transfer follows from the one before it and the balance
    /// matches the last transfer
    pub fn ledger_is_consistent(&self) -> bool {
        let mut running = 0i64;
        for transfer in &self.transfers {
            if transfer.amount <= 0 || transfer.opening_balance() != running {
                return false;
            }
            running = transfer.balance;
        }
        running == self.balance
    }

    /// First name with a possessive suffix ("Ann's", "James'")
    pub fn possessive_name(&self) -> String {
        match self.first_name.chars().last() {
            Some('s') | Some('S') => format!("{}'", self.first_name),
            _ => format!("{}'s", self.first_name),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} ({})", self.full_name(), id),
            None => write!(f, "{} (unsaved)", self.full_name()),
        }
    }
}
