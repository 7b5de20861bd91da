//! Login check run before any command that touches accounts

use tracing::debug;

use crate::config::paths::BankPaths;
use crate::config::settings::Settings;
use crate::error::{BankError, BankResult};
use crate::storage::CredentialStore;

/// Verify `user` and `password` against the login file
pub fn require_login(
    paths: &BankPaths,
    settings: &Settings,
    user: Option<&str>,
    password: Option<&str>,
) -> BankResult<()> {
    let (Some(user), Some(password)) = (user, password) else {
        return Err(BankError::Config(
            "Login required: pass --user and --password, or set BANK_USER and BANK_PASSWORD"
                .into(),
        ));
    };

    let store = CredentialStore::load(paths.login_file(), settings.duplicate_logins)?;
    if !store.authenticate(user, password) {
        return Err(BankError::Login(user.to_string()));
    }

    debug!(user, "login accepted");
    Ok(())
}
