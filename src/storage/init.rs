//! Storage initialization
//!
//! Handles first-run setup: directories, default settings and a login file
//! template.

use std::fs;

use crate::config::paths::BankPaths;
use crate::config::settings::Settings;
use crate::error::BankError;

use super::file_io::write_lines_atomic;

/// Contents of a freshly created login file
const LOGIN_TEMPLATE: [&str; 3] = [
    "# One login per line: username|password",
    "# Lines starting with '#' and blank lines are ignored.",
    "",
];

/// Initialize storage for a fresh installation
///
/// Existing settings and login files are left untouched.
pub fn initialize_storage(paths: &BankPaths, settings: &Settings) -> Result<(), BankError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    if !paths.login_file().exists() {
        write_lines_atomic(paths.login_file(), &LOGIN_TEMPLATE)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BankPaths) -> bool {
    !paths.settings_file().exists() || !paths.login_file().exists()
}

/// Remove the audit log and every account record. Used by tests and `init --reset`.
pub fn reset_storage(paths: &BankPaths) -> Result<(), BankError> {
    for dir in [paths.accounts_dir(), paths.outbox_dir()] {
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|e| {
                BankError::Storage(format!("Failed to clear {}: {}", dir.display(), e))
            })?;
        }
    }
    if paths.audit_log().exists() {
        fs::remove_file(paths.audit_log())?;
    }
    paths.ensure_directories()
}
