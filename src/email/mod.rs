//! Account emails
//!
//! Composes the details and statement emails and hands them to a [`Mailer`].

pub mod mailer;
pub mod message;

pub use mailer::{mailer_for, DisabledMailer, Mailer, OutboxMailer};
pub use message::{compose_details, compose_statement, EmailMessage};
