//! Deposit and withdraw CLI commands

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_currency, transfer_message};
use crate::error::BankResult;
use crate::models::{AccountId, TransferType};
use crate::services::TransferService;
use crate::storage::Storage;

/// Arguments shared by `deposit` and `withdraw`
#[derive(Args)]
pub struct TransferArgs {
    /// Account number
    pub account: AccountId,
    /// Whole currency units
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Handle a deposit or withdrawal
pub fn handle_transfer_command(
    storage: &Storage,
    settings: &Settings,
    kind: TransferType,
    args: TransferArgs,
) -> BankResult<()> {
    let service = TransferService::new(storage, settings);
    let receipt = match kind {
        TransferType::Deposit => service.deposit(args.account, args.amount)?,
        TransferType::Withdraw => service.withdraw(args.account, args.amount)?,
    };

    let currency = settings.currency_symbol.as_str();
    println!(
        "{}",
        transfer_message(&receipt.account, receipt.kind, &receipt.outcome, currency)
    );
    println!(
        "Balance: {}",
        format_currency(receipt.account.balance(), currency)
    );

    Ok(())
}
