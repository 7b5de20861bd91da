//! Login credential store
//!
//! Credentials are kept in a plain `username|password` file, one pair per
//! line. Blank lines and lines starting with `#` are skipped.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::config::settings::DuplicateLoginPolicy;
use crate::error::{BankError, BankResult};
use crate::models::RECORD_DELIMITER;

use super::file_io::read_lines;

/// Marks a comment line in the login file
pub const COMMENT_MARKER: char = '#';

/// Username to password lookup loaded from the login file
#[derive(Debug, Default)]
pub struct CredentialStore {
    entries: HashMap<String, String>,
}

impl CredentialStore {
    /// Load credentials from `path`
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, a line is not `username|password`, or a
    /// username repeats under [`DuplicateLoginPolicy::Reject`].
    pub fn load<P: AsRef<Path>>(path: P, policy: DuplicateLoginPolicy) -> BankResult<Self> {
        let path = path.as_ref();
        let lines = read_lines(path)?.ok_or_else(|| {
            BankError::Config(format!("Unable to open login file {}", path.display()))
        })?;
        Self::parse(&lines, policy)
    }

    /// Build a store from login file lines
    pub fn parse<S: AsRef<str>>(lines: &[S], policy: DuplicateLoginPolicy) -> BankResult<Self> {
        let mut entries = HashMap::new();

        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            let parts: Vec<&str> = line.split(RECORD_DELIMITER).collect();
            let [username, password] = parts.as_slice() else {
                return Err(BankError::Config(format!(
                    "Login file line {} is not in the form username|password",
                    i + 1
                )));
            };

            if entries.contains_key(*username) {
                match policy {
                    DuplicateLoginPolicy::Reject => {
                        return Err(BankError::Config(format!(
                            "Duplicate username '{}' in login file line {}",
                            username,
                            i + 1
                        )));
                    }
                    DuplicateLoginPolicy::FirstWins => {
                        warn!(username = %username, line = i + 1, "ignoring duplicate login entry");
                        continue;
                    }
                }
            }

            entries.insert(username.to_string(), password.to_string());
        }

        Ok(Self { entries })
    }

    /// Check a username and password pair
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.entries
            .get(username)
            .is_some_and(|expected| expected == password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
