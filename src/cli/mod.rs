//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod audit;
pub mod login;
pub mod transfer;

pub use account::{handle_account_command, AccountCommands};
pub use audit::handle_log_command;
pub use login::require_login;
pub use transfer::{handle_transfer_command, TransferArgs};
