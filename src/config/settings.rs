//! User settings for simple-bank
//!
//! Manages currency and date formatting, record file naming, login file
//! policy and email delivery preferences.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::paths::BankPaths;
use crate::error::BankError;
use crate::models::AccountId;
use crate::storage::file_io::write_json_atomic;

/// How repeated usernames in the login file are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateLoginPolicy {
    /// A repeated username is a configuration error (default)
    #[default]
    Reject,
    /// The first entry is used and later ones are ignored
    FirstWins,
}

/// Email delivery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSettings {
    /// Whether account emails are written to the outbox
    #[serde(default = "default_email_enabled")]
    pub enabled: bool,

    /// Address emails are sent from
    #[serde(default = "default_sender_address")]
    pub sender_address: String,

    /// Display name emails are sent from
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
}

fn default_email_enabled() -> bool {
    true
}

fn default_sender_address() -> String {
    "noreply@simple-bank.local".to_string()
}

fn default_sender_name() -> String {
    "Simple Bank".to_string()
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            enabled: default_email_enabled(),
            sender_address: default_sender_address(),
            sender_name: default_sender_name(),
        }
    }
}

/// User settings for simple-bank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for transfer timestamps
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// File extension of account records
    #[serde(default = "default_record_extension")]
    pub record_extension: String,

    /// Where account number allocation starts scanning
    #[serde(default = "default_first_account_number")]
    pub first_account_number: AccountId,

    /// Treatment of repeated usernames in the login file
    #[serde(default)]
    pub duplicate_logins: DuplicateLoginPolicy,

    /// Email delivery
    #[serde(default)]
    pub email: EmailSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    // e.g. "Sunday, 14 August 2022 13:23:30"
    "%A, %-d %B %Y %H:%M:%S".to_string()
}

fn default_record_extension() -> String {
    "txt".to_string()
}

fn default_first_account_number() -> AccountId {
    AccountId::FIRST
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            record_extension: default_record_extension(),
            first_account_number: default_first_account_number(),
            duplicate_logins: DuplicateLoginPolicy::default(),
            email: EmailSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BankPaths) -> Result<Self, BankError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BankError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BankError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.check()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BankPaths) -> Result<(), BankError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Reject values that would produce unusable record files
    fn check(&self) -> Result<(), BankError> {
        if self.record_extension.is_empty()
            || self
                .record_extension
                .contains(|c: char| c == '.' || c == '/' || c == '\\')
        {
            return Err(BankError::Config(format!(
                "Invalid record extension '{}'",
                self.record_extension
            )));
        }
        if self.first_account_number < AccountId::FIRST
            || self.first_account_number > AccountId::LAST
        {
            return Err(BankError::Config(format!(
                "First account number {} is outside the 8-digit range",
                self.first_account_number
            )));
        }
        render_date(&self.date_format, Local::now()).map(|_| ())
    }

    /// Current local time in the configured transfer timestamp format
    pub fn timestamp_now(&self) -> Result<String, BankError> {
        render_date(&self.date_format, Local::now())
    }
}

/// Format `when` for a transfer line
///
/// Transfer dates are stored inside `|`-delimited record lines, so neither
/// the format nor its output may contain a delimiter or a line break.
fn render_date(format: &str, when: DateTime<Local>) -> Result<String, BankError> {
    let invalid = |reason: &str| {
        BankError::Config(format!("Invalid date format '{}': {}", format, reason))
    };

    if format.trim().is_empty() {
        return Err(invalid("must not be empty"));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid("unknown strftime specifier"));
    }

    let mut stamp = String::new();
    write!(stamp, "{}", when.format(format)).map_err(|_| invalid("cannot be rendered"))?;

    if stamp.contains(|c: char| c == '|' || c == '\n' || c == '\r') {
        return Err(invalid("produces '|' or a line break"));
    }
    Ok(stamp)
}
