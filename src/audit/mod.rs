//! Audit logging for simple-bank
//!
//! Opening and closing an account and every applied deposit or withdrawal
//! is appended to a line-delimited JSON log, with snapshots of the account
//! on either side of the change. `bank log` reads it back.

mod entry;
mod logger;

pub use entry::{AccountSnapshot, AuditEntry, Operation};
pub use logger::AuditLogger;
