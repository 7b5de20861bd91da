//! Transfer model
//!
//! A transfer is one committed deposit or withdrawal. It is never edited once
//! it has been appended to an account's ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferType {
    Deposit,
    Withdraw,
}

impl TransferType {
    /// Map a persisted type name to a transfer type
    ///
    /// Only the exact string `Deposit` is a deposit; every other value,
    /// including corrupted ones, reads back as a withdrawal.
    pub fn from_record(name: &str) -> Self {
        if name == "Deposit" {
            Self::Deposit
        } else {
            Self::Withdraw
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
        }
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A completed deposit or withdrawal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Human-readable timestamp, stored and redisplayed verbatim
    pub date: String,

    #[serde(rename = "type")]
    pub kind: TransferType,

    /// Always positive
    pub amount: i64,

    /// Account balance immediately after this transfer
    pub balance: i64,
}

impl Transfer {
    pub fn new(date: impl Into<String>, kind: TransferType, amount: i64, balance: i64) -> Self {
        Self {
            date: date.into(),
            kind,
            amount,
            balance,
        }
    }

    /// Balance this transfer was applied to
    pub fn opening_balance(&self) -> i64 {
        match self.kind {
            TransferType::Deposit => self.balance - self.amount,
            TransferType::Withdraw => self.balance + self.amount,
        }
    }
}

impl fmt::Display for Transfer {
    /// The record line form: `date|type|amount|balance`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.date, self.kind, self.amount, self.balance
        )
    }
}
