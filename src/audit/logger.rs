//! Append-only JSONL audit log

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{BankError, BankResult};
use crate::models::AccountId;
use crate::storage::read_lines;

use super::entry::AuditEntry;

/// Appends [`AuditEntry`] lines to a log file and reads them back
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and sync it to disk
    pub fn log(&self, entry: &AuditEntry) -> BankResult<()> {
        let line = serde_json::to_string(entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                BankError::Io(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}", line)
            .and_then(|_| file.sync_data())
            .map_err(|e| BankError::Io(format!("Failed to append to audit log: {}", e)))
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> BankResult<Vec<AuditEntry>> {
        let Some(lines) = read_lines(&self.log_path)? else {
            return Ok(Vec::new());
        };

        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|e| {
                    BankError::Json(format!("Audit log line {} is unreadable: {}", i + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, optionally only those for one account
    pub fn read_recent(
        &self,
        count: usize,
        account: Option<AccountId>,
    ) -> BankResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        if let Some(id) = account {
            entries.retain(|entry| entry.account == id);
        }
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }
}
