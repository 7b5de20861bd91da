use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use simple_bank::cli::{
    handle_account_command, handle_log_command, handle_transfer_command, require_login,
    AccountCommands, TransferArgs,
};
use simple_bank::config::{paths::BankPaths, settings::Settings};
use simple_bank::email::mailer_for;
use simple_bank::models::{AccountId, TransferType};
use simple_bank::storage::init::{initialize_storage, needs_initialization, reset_storage};
use simple_bank::storage::Storage;

#[derive(Parser)]
#[command(
    name = "bank",
    version,
    about = "Simple bank account manager",
    long_about = "A small bank account manager. Accounts are kept as plain text \
                  records, one file per account, and every deposit and withdrawal \
                  is written to the account's ledger."
)]
struct Cli {
    /// Username from the login file
    #[arg(long, global = true, env = "BANK_USER")]
    user: Option<String>,

    /// Password for --user
    #[arg(long, global = true, env = "BANK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, default settings and a login file
    Init {
        /// Delete every account record and the audit log
        #[arg(long)]
        reset: bool,
    },

    /// Show current configuration and paths
    Config,

    #[command(flatten)]
    Bank(BankCommands),
}

/// Commands that require a login
#[derive(Subcommand)]
enum BankCommands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Deposit into an account
    Deposit(TransferArgs),

    /// Withdraw from an account
    Withdraw(TransferArgs),

    /// Show recent account activity
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Only show entries for this account number
        #[arg(short, long)]
        account: Option<AccountId>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("simple_bank=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = BankPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Init { reset } => {
            if reset {
                require_login(&paths, &settings, cli.user.as_deref(), cli.password.as_deref())?;
                reset_storage(&paths)?;
                println!("All account records and the audit log were removed.");
            }
            initialize_storage(&paths, &settings)?;
            println!("Initialized simple-bank at: {}", paths.base_dir().display());
            println!("Add logins to {} as username|password.", paths.login_file().display());
        }

        Commands::Config => {
            println!("simple-bank Configuration");
            println!("=========================");
            println!("Base directory:     {}", paths.base_dir().display());
            println!("Accounts directory: {}", paths.accounts_dir().display());
            println!("Outbox directory:   {}", paths.outbox_dir().display());
            println!("Login file:         {}", paths.login_file().display());
            println!("Audit log:          {}", paths.audit_log().display());
            if needs_initialization(&paths) {
                println!("\nNot initialized yet. Run 'bank init'.");
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Record extension:     {}", settings.record_extension);
            println!("  First account number: {}", settings.first_account_number);
            println!("  Duplicate logins:     {:?}", settings.duplicate_logins);
            println!("  Email enabled:        {}", settings.email.enabled);
        }

        Commands::Bank(command) => {
            require_login(&paths, &settings, cli.user.as_deref(), cli.password.as_deref())?;

            let storage = Storage::new(paths.clone(), &settings)?;
            let mailer = mailer_for(&paths, &settings);

            match command {
                BankCommands::Account(cmd) => {
                    handle_account_command(&storage, &settings, mailer.as_ref(), cmd)?
                }
                BankCommands::Deposit(args) => {
                    handle_transfer_command(&storage, &settings, TransferType::Deposit, args)?
                }
                BankCommands::Withdraw(args) => {
                    handle_transfer_command(&storage, &settings, TransferType::Withdraw, args)?
                }
                BankCommands::Log { limit, account } => {
                    handle_log_command(&storage, limit, account)?
                }
            }
        }
    }

    Ok(())
}
