//! Account CLI commands
//!
//! Implements CLI commands for opening, viewing and closing accounts.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_account_details, format_statement, validation_messages};
use crate::email::Mailer;
use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountId, PhoneNumber};
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account
    Create {
        first_name: String,
        last_name: String,
        address: String,
        /// Up to 10 digits
        phone: PhoneNumber,
        email: String,
    },
    /// Show account details
    Show {
        /// Account number
        account: AccountId,
    },
    /// Delete an account
    Delete {
        /// Account number
        account: AccountId,
    },
    /// Show the transfer history and email it to the account holder
    Statement {
        /// Account number
        account: AccountId,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    mailer: &dyn Mailer,
    cmd: AccountCommands,
) -> BankResult<()> {
    let service = AccountService::new(storage, settings, mailer);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create {
            first_name,
            last_name,
            address,
            phone,
            email,
        } => {
            let account = Account::new(first_name, last_name, address, phone, email);
            let account = match service.create(account) {
                Ok(account) => account,
                Err(BankError::Validation(report)) => {
                    for message in validation_messages(&report) {
                        eprintln!("{}", message);
                    }
                    return Err(BankError::Validation(report));
                }
                Err(e) => return Err(e),
            };

            println!("Account created! Details will be emailed to {}.", account.email);
            print!("{}", format_account_details(&account, currency));
        }

        AccountCommands::Show { account } => match service.find(account)? {
            Some(found) => {
                println!("Account found!");
                warn_if_inconsistent(&found);
                print!("{}", format_account_details(&found, currency));
            }
            None => {
                return Err(BankError::account_not_found(account.to_string()));
            }
        },

        AccountCommands::Delete { account } => {
            let deleted = service.delete(account)?;
            print!("{}", format_account_details(&deleted, currency));
            println!("{} Account was Deleted!", deleted.possessive_name());
        }

        AccountCommands::Statement { account } => {
            let (found, written) = service.send_statement(account)?;
            warn_if_inconsistent(&found);
            print!("{}", format_statement(&found, currency));
            match written {
                Some(path) => println!("\nStatement emailed to {} ({}).", found.email, path.display()),
                None => println!("\nEmail is disabled; statement not sent."),
            }
        }
    }

    Ok(())
}

fn warn_if_inconsistent(account: &Account) {
    if !account.ledger_is_consistent() {
        eprintln!(
            "Warning: {} balance does not match the transfer history.",
            account.possessive_name()
        );
    }
}
