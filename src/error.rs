//! Custom error types for simple-bank
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{TransactionError, ValidationReport};
use crate::storage::record::RecordError;

/// The main error type for simple-bank operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// One or more account fields failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    /// A deposit or withdrawal was rejected
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// A persisted account record could not be decoded
    #[error("Malformed record {identifier}: {source}")]
    Record {
        identifier: String,
        #[source]
        source: RecordError,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Login rejected
    #[error("Login failed for user '{0}'")]
    Login(String),

    /// All account numbers in the 8-digit range are taken
    #[error("No free account numbers remain")]
    IdsExhausted,

    /// Email composition or outbox errors
    #[error("Email error: {0}")]
    Email(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BankError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Wrap a record decoding failure with the record it came from
    pub fn record(identifier: impl Into<String>, source: RecordError) -> Self {
        Self::Record {
            identifier: identifier.into(),
            source,
        }
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for simple-bank operations
pub type BankResult<T> = Result<T, BankError>;
