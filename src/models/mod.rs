//! Core data models for simple-bank
//!
//! Accounts, the transfers recorded against them, and the rules that decide
//! whether an account's details are acceptable.

pub mod account;
pub mod ids;
pub mod transfer;
pub mod validation;

pub use account::{Account, TransactionError, TransferOutcome};
pub use ids::{AccountId, NumberParseError, PhoneNumber};
pub use transfer::{Transfer, TransferType};
pub use validation::{ValidationIssue, ValidationReport, ACCEPTED_DOMAINS, RECORD_DELIMITER};
