//! simple-bank - a small command-line bank account manager
//!
//! Accounts are stored as flat `|`-delimited text records, one file per
//! account, with a ledger of every deposit and withdrawal.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Accounts, transfers and field validation
//! - `storage`: Record codec, account repository and login file
//! - `services`: Account and transfer logic, account number allocation
//! - `audit`: Audit logging system
//! - `email`: Account emails and the outbox mailer
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `bank` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use simple_bank::config::{paths::BankPaths, settings::Settings};
//! use simple_bank::storage::Storage;
//!
//! let paths = BankPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BankError, BankResult};
