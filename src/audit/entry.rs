//! Audit entries
//!
//! Each entry records one change to one account together with typed
//! snapshots of the account before and after it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Account, AccountId, Transfer, TransferType};

/// What happened to the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Open,
    Deposit,
    Withdraw,
    Close,
}

impl From<TransferType> for Operation {
    fn from(kind: TransferType) -> Self {
        match kind {
            TransferType::Deposit => Self::Deposit,
            TransferType::Withdraw => Self::Withdraw,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Open => "OPEN",
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
            Self::Close => "CLOSE",
        })
    }
}

/// The parts of an account worth keeping in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub holder: String,
    pub email: String,
    pub balance: i64,
    /// Length of the ledger at the time
    pub transfers: usize,
}

impl From<&Account> for AccountSnapshot {
    fn from(account: &Account) -> Self {
        Self {
            holder: account.full_name(),
            email: account.email.clone(),
            balance: account.balance(),
            transfers: account.transfers().len(),
        }
    }
}

/// A single audit log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub account: AccountId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<AccountSnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<AccountSnapshot>,

    /// The ledger line a deposit or withdrawal appended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer: Option<Transfer>,
}

impl AuditEntry {
    fn new(operation: Operation, account: AccountId) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            account,
            before: None,
            after: None,
            transfer: None,
        }
    }

    pub fn opened(id: AccountId, account: &Account) -> Self {
        Self {
            after: Some(account.into()),
            ..Self::new(Operation::Open, id)
        }
    }

    /// `before` and `after` are the account either side of `transfer`
    pub fn transferred(id: AccountId, before: &Account, after: &Account, transfer: &Transfer) -> Self {
        Self {
            before: Some(before.into()),
            after: Some(after.into()),
            transfer: Some(transfer.clone()),
            ..Self::new(transfer.kind.into(), id)
        }
    }

    pub fn closed(id: AccountId, account: &Account) -> Self {
        Self {
            before: Some(account.into()),
            ..Self::new(Operation::Close, id)
        }
    }

    /// Name of the account holder at the time of the entry
    pub fn holder(&self) -> Option<&str> {
        self.after
            .as_ref()
            .or(self.before.as_ref())
            .map(|snapshot| snapshot.holder.as_str())
    }

    /// One line summary, e.g.
    /// `[2024-03-01 09:00:00 UTC] DEPOSIT  10000001 Ann Lee: 200 (balance 0 -> 200)`
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "[{}] {:<8} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.account
        );
        if let Some(holder) = self.holder() {
            line.push(' ');
            line.push_str(holder);
        }

        match (&self.before, &self.after, &self.transfer) {
            (Some(before), Some(after), Some(transfer)) => line.push_str(&format!(
                ": {} (balance {} -> {})",
                transfer.amount, before.balance, after.balance
            )),
            (None, Some(after), _) => line.push_str(&format!(" <{}>", after.email)),
            (Some(before), None, _) => {
                line.push_str(&format!(" (final balance {})", before.balance))
            }
            _ => {}
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhoneNumber;

    fn ann() -> Account {
        let mut account = Account::new(
            "Ann",
            "Lee",
            "1 Main St",
            PhoneNumber::new(412_345_678).unwrap(),
            "ann@gmail.com",
        );
        account.assign_id(AccountId::FIRST);
        account
    }

    #[test]
    fn test_opened_entry() {
        let entry = AuditEntry::opened(AccountId::FIRST, &ann());

        assert_eq!(entry.operation, Operation::Open);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap().balance, 0);
        assert_eq!(entry.holder(), Some("Ann Lee"));
        assert!(entry
            .format_human_readable()
            .ends_with("OPEN     10000001 Ann Lee <ann@gmail.com>"));
    }

    #[test]
    fn test_transferred_entry() {
        let before = ann();
        let mut after = before.clone();
        let outcome = after.deposit(200, "Monday").unwrap();
        let crate::models::TransferOutcome::Applied(transfer) = outcome else {
            panic!("expected an applied transfer");
        };

        let entry = AuditEntry::transferred(AccountId::FIRST, &before, &after, &transfer);

        assert_eq!(entry.operation, Operation::Deposit);
        assert_eq!(entry.after.as_ref().unwrap().transfers, 1);
        assert!(entry
            .format_human_readable()
            .ends_with("DEPOSIT  10000001 Ann Lee: 200 (balance 0 -> 200)"));
    }

    #[test]
    fn test_closed_entry() {
        let mut account = ann();
        account.deposit(75, "d").unwrap();

        let entry = AuditEntry::closed(AccountId::FIRST, &account);
        assert_eq!(entry.operation, Operation::Close);
        assert!(entry.after.is_none());
        assert!(entry
            .format_human_readable()
            .ends_with("CLOSE    10000001 Ann Lee (final balance 75)"));
    }

    #[test]
    fn test_json_line_shape() {
        let entry = AuditEntry::closed(AccountId::FIRST, &ann());
        let line = serde_json::to_string(&entry).unwrap();

        assert!(line.contains(r#""operation":"close""#));
        assert!(line.contains(r#""account":10000001"#));
        assert!(!line.contains("after"));
        assert!(!line.contains("transfer\""));

        let parsed: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, entry);
    }
}
