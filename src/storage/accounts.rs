//! Account repository backed by one record file per account
//!
//! Each account lives in `<accounts dir>/<account number>.<ext>`; the file
//! contents are described in [`super::record`].

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountId};

use super::file_io::{read_lines, write_lines_atomic};
use super::record::{self, RecordError};

/// Persistence operations the services need for accounts
pub trait AccountStore {
    /// Whether a record exists for `id`
    fn exists(&self, id: AccountId) -> BankResult<bool>;

    /// Load the account stored under `id`, or `None` if there is no record
    fn find(&self, id: AccountId) -> BankResult<Option<Account>>;

    /// Write an account's full record, replacing any previous one
    fn save(&self, account: &Account) -> BankResult<()>;

    /// Remove the record for `id`, returning whether one existed
    fn delete(&self, id: AccountId) -> BankResult<bool>;
}

/// Repository for account record files
pub struct AccountRepository {
    dir: PathBuf,
    extension: String,
}

impl AccountRepository {
    /// Create a repository over `dir`, naming files `<id>.<extension>`
    pub fn new(dir: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            dir,
            extension: extension.into(),
        }
    }

    /// Path of the record file for `id`
    pub fn path_for(&self, id: AccountId) -> PathBuf {
        self.dir.join(format!("{}.{}", id, self.extension))
    }
}

impl AccountStore for AccountRepository {
    fn exists(&self, id: AccountId) -> BankResult<bool> {
        Ok(self.path_for(id).is_file())
    }

    fn find(&self, id: AccountId) -> BankResult<Option<Account>> {
        let Some(lines) = read_lines(self.path_for(id))? else {
            return Ok(None);
        };

        let account =
            record::decode(&lines).map_err(|e| BankError::record(id.to_string(), e))?;

        if let Some(recorded) = account.id().filter(|recorded| *recorded != id) {
            return Err(BankError::record(
                id.to_string(),
                RecordError::AccountNoMismatch { file: id, recorded },
            ));
        }
        if !account.ledger_is_consistent() {
            warn!(account = %id, "balance does not match the transfer history");
        }

        debug!(account = %id, transfers = account.transfers().len(), "loaded account");
        Ok(Some(account))
    }

    fn save(&self, account: &Account) -> BankResult<()> {
        let lines = record::encode(account)
            .map_err(|e| BankError::record(account.full_name(), e))?;
        let id = account.id().ok_or_else(|| {
            BankError::Storage("cannot save an account without an account number".into())
        })?;

        write_lines_atomic(self.path_for(id), &lines)?;
        debug!(account = %id, lines = lines.len(), "saved account record");
        Ok(())
    }

    fn delete(&self, id: AccountId) -> BankResult<bool> {
        match fs::remove_file(self.path_for(id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(BankError::Storage(format!(
                "Failed to delete account {}: {}",
                id, e
            ))),
        }
    }
}
