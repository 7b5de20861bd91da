//! Storage layer for simple-bank
//!
//! Account records are flat `|`-delimited text files written atomically;
//! every change is also appended to the audit log.

pub mod accounts;
pub mod file_io;
pub mod init;
pub mod logins;
pub mod record;

pub use accounts::{AccountRepository, AccountStore};
pub use file_io::{read_lines, write_json_atomic, write_lines_atomic};
pub use init::initialize_storage;
pub use logins::CredentialStore;

use crate::audit::AuditLogger;
use crate::config::paths::BankPaths;
use crate::config::settings::Settings;
use crate::error::BankError;

/// Main storage coordinator that provides access to the repositories
pub struct Storage {
    paths: BankPaths,
    pub accounts: AccountRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BankPaths, settings: &Settings) -> Result<Self, BankError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_dir(), &settings.record_extension),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BankPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }
}
