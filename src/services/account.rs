//! Account service
//!
//! Opening, looking up and closing accounts, and sending statements.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::audit::AuditEntry;
use crate::config::settings::Settings;
use crate::email::{compose_details, compose_statement, Mailer};
use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountId};
use crate::storage::{AccountStore, Storage};

use super::allocator::IdAllocator;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    mailer: &'a dyn Mailer,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, mailer: &'a dyn Mailer) -> Self {
        Self {
            storage,
            settings,
            mailer,
        }
    }

    /// Open a new account
    ///
    /// The fields are trimmed and validated; on success the account gets the
    /// first free number, is saved, and a details email is sent. A failed
    /// email is logged but does not undo the account.
    pub fn create(&self, mut account: Account) -> BankResult<Account> {
        account.normalize();

        let report = account.validate();
        if !report.passed() {
            return Err(BankError::Validation(report));
        }

        let mut allocator =
            IdAllocator::new(&self.storage.accounts, self.settings.first_account_number);
        let id = allocator.next_id()?;
        if !account.assign_id(id) {
            return Err(BankError::Storage(format!(
                "account {} already has a number",
                account
            )));
        }

        self.storage.accounts.save(&account)?;
        self.storage
            .audit()
            .log(&AuditEntry::opened(id, &account))?;
        info!(account = %id, "account created");

        let message = compose_details(&account, &self.settings.currency_symbol);
        if let Err(e) = self.mailer.send(&message) {
            warn!(account = %id, error = %e, "failed to send account details");
        }

        Ok(account)
    }

    /// Look up an account, `None` if it does not exist
    pub fn find(&self, id: AccountId) -> BankResult<Option<Account>> {
        self.storage.accounts.find(id)
    }

    /// Look up an account that must exist
    pub fn get(&self, id: AccountId) -> BankResult<Account> {
        self.find(id)?
            .ok_or_else(|| BankError::account_not_found(id.to_string()))
    }

    /// Delete an account's record, returning the account as it was
    pub fn delete(&self, id: AccountId) -> BankResult<Account> {
        let account = self.get(id)?;

        if !self.storage.accounts.delete(id)? {
            return Err(BankError::account_not_found(id.to_string()));
        }

        self.storage.audit().log(&AuditEntry::closed(id, &account))?;
        info!(account = %id, "account deleted");

        Ok(account)
    }

    /// Email a statement for the account
    ///
    /// Returns the account and where the message was written, if anywhere.
    pub fn send_statement(&self, id: AccountId) -> BankResult<(Account, Option<PathBuf>)> {
        let account = self.get(id)?;
        let message = compose_statement(&account, &self.settings.currency_symbol);
        let written = self.mailer.send(&message)?;
        info!(account = %id, transfers = account.transfers().len(), "statement sent");
        Ok((account, written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::BankPaths;
    use crate::email::{DisabledMailer, OutboxMailer};
    use crate::models::{PhoneNumber, ValidationIssue};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::new(paths, &settings).unwrap();
        (temp_dir, storage, settings)
    }

    fn ann() -> Account {
        Account::new(
            "Ann",
            "Lee",
            "1 Main St",
            PhoneNumber::new(412_345_678).unwrap(),
            "ann@gmail.com",
        )
    }

    #[test]
    fn test_create_assigns_sequential_numbers() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = AccountService::new(&storage, &settings, &DisabledMailer);

        let first = service.create(ann()).unwrap();
        let second = service.create(ann()).unwrap();

        assert_eq!(first.id(), Some(AccountId::new(10_000_001)));
        assert_eq!(second.id(), Some(AccountId::new(10_000_002)));
        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_create_persists_trimmed_fields() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = AccountService::new(&storage, &settings, &DisabledMailer);

        let mut account = ann();
        account.first_name = "  Ann  ".into();
        account.email = " ann@gmail.com".into();

        let created = service.create(account).unwrap();
        let loaded = service.get(created.id().unwrap()).unwrap();
        assert_eq!(loaded.first_name, "Ann");
        assert_eq!(loaded.email, "ann@gmail.com");
    }

    #[test]
    fn test_create_rejects_invalid_account() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = AccountService::new(&storage, &settings, &DisabledMailer);

        let mut account = ann();
        account.last_name = "   ".into();
        account.email = "ann@yahoo.com".into();

        let err = service.create(account).unwrap_err();
        let BankError::Validation(report) = err else {
            panic!("expected a validation error");
        };
        assert!(report.contains(ValidationIssue::FieldsEmpty));
        assert!(report.contains(ValidationIssue::InvalidDomain));
        assert!(!storage.accounts.exists(AccountId::FIRST).unwrap());
        assert_eq!(storage.audit().read_all().unwrap().len(), 0);
    }

    #[test]
    fn test_create_reuses_freed_number() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = AccountService::new(&storage, &settings, &DisabledMailer);

        let first = service.create(ann()).unwrap();
        service.create(ann()).unwrap();
        service.delete(first.id().unwrap()).unwrap();

        let third = service.create(ann()).unwrap();
        assert_eq!(third.id(), first.id());
    }

    #[test]
    fn test_create_sends_details_email() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let mailer = OutboxMailer::new(storage.paths().outbox_dir(), &settings.email);
        let service = AccountService::new(&storage, &settings, &mailer);

        service.create(ann()).unwrap();

        let sent: Vec<_> = std::fs::read_dir(mailer.dir()).unwrap().collect();
        assert_eq!(sent.len(), 1);
    }

    #[test]
    fn test_find_and_get_missing() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = AccountService::new(&storage, &settings, &DisabledMailer);

        assert!(service.find(AccountId::FIRST).unwrap().is_none());
        assert!(matches!(
            service.get(AccountId::FIRST),
            Err(BankError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = AccountService::new(&storage, &settings, &DisabledMailer);

        let id = service.create(ann()).unwrap().id().unwrap();
        let deleted = service.delete(id).unwrap();

        assert_eq!(deleted.first_name, "Ann");
        assert!(service.find(id).unwrap().is_none());
        assert!(matches!(service.delete(id), Err(BankError::NotFound { .. })));

        let entries = storage.audit().read_all().unwrap();
        let operations: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(operations, vec![Operation::Open, Operation::Close]);
    }

    #[test]
    fn test_send_statement() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let mailer = OutboxMailer::new(storage.paths().outbox_dir(), &settings.email);
        let service = AccountService::new(&storage, &settings, &mailer);

        let id = service.create(ann()).unwrap().id().unwrap();
        let (account, written) = service.send_statement(id).unwrap();

        assert_eq!(account.id(), Some(id));
        let contents = std::fs::read_to_string(written.unwrap()).unwrap();
        assert!(contents.contains("Subject: Your Account Statement"));
    }
}
