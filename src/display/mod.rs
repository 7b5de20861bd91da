//! Display formatting for terminal output
//!
//! Plain-text renderings of accounts, statements and user-facing messages.

pub mod account;
pub mod messages;

pub use account::{format_account_details, format_currency, format_statement};
pub use messages::{transfer_message, validation_messages};
