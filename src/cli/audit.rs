//! Audit log CLI command

use crate::error::BankResult;
use crate::models::AccountId;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first, optionally for one account
pub fn handle_log_command(
    storage: &Storage,
    limit: usize,
    account: Option<AccountId>,
) -> BankResult<()> {
    let entries = storage.audit().read_recent(limit, account)?;
    if entries.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
