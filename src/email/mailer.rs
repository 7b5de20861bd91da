//! Email delivery
//!
//! Delivery is synchronous. The outbox mailer writes each message as an HTML
//! file that an external relay (or a person) can pick up.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::config::paths::BankPaths;
use crate::config::settings::{EmailSettings, Settings};
use crate::error::{BankError, BankResult};
use crate::storage::write_lines_atomic;

use super::message::EmailMessage;

/// Something that can deliver an [`EmailMessage`]
pub trait Mailer {
    /// Deliver `message`, returning where it was written if it was written anywhere
    fn send(&self, message: &EmailMessage) -> BankResult<Option<PathBuf>>;
}

/// Writes every message into an outbox directory
pub struct OutboxMailer {
    dir: PathBuf,
    sender: String,
}

impl OutboxMailer {
    pub fn new(dir: PathBuf, email: &EmailSettings) -> Self {
        Self {
            dir,
            sender: format!("{} <{}>", email.sender_name, email.sender_address),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// First unused outbox path for a message to `recipient`
    fn next_path(&self, recipient: &str) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let slug: String = recipient
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        let mut path = self.dir.join(format!("{}-{}.html", stamp, slug));
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("{}-{}-{}.html", stamp, slug, n));
            n += 1;
        }
        path
    }
}

impl Mailer for OutboxMailer {
    fn send(&self, message: &EmailMessage) -> BankResult<Option<PathBuf>> {
        if message.to.trim().is_empty() {
            return Err(BankError::Email("message has no recipient".into()));
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            BankError::Email(format!("Failed to create outbox {}: {}", self.dir.display(), e))
        })?;

        let path = self.next_path(&message.to);
        let lines = [
            "<!--".to_string(),
            format!("From: {}", self.sender),
            format!("To: {}", message.to),
            format!("Subject: {}", message.subject),
            "-->".to_string(),
            message.html_body.trim_end().to_string(),
        ];
        write_lines_atomic(&path, &lines)?;

        info!(to = %message.to, subject = %message.subject, path = %path.display(), "email written to outbox");
        Ok(Some(path))
    }
}

/// Drops every message, logging what would have been sent
pub struct DisabledMailer;

impl Mailer for DisabledMailer {
    fn send(&self, message: &EmailMessage) -> BankResult<Option<PathBuf>> {
        info!(to = %message.to, subject = %message.subject, "email disabled, message not sent");
        Ok(None)
    }
}

/// Pick the mailer configured in `settings`
pub fn mailer_for(paths: &BankPaths, settings: &Settings) -> Box<dyn Mailer> {
    if settings.email.enabled {
        Box::new(OutboxMailer::new(paths.outbox_dir(), &settings.email))
    } else {
        Box::new(DisabledMailer)
    }
}
