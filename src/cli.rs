use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::{CURRENT_MONTH, DEFAULT_API_URL, DEFAULT_BUDGET};

#[derive(Debug, Parser)]
#[command(name = "ynab-summary", version)]
#[command(about = "Net worth and monthly spending summary for a YNAB budget", long_about = None)]
pub struct Cli {
    /// YNAB personal access token.
    #[arg(long, env = "YNAB_PAT", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Month to report on: `current` or `YYYY-MM-01`.
    #[arg(long, env = "YNAB_MONTH", default_value = CURRENT_MONTH, global = true)]
    pub month: String,

    /// Budget id, or `last-used`.
    #[arg(long, default_value = DEFAULT_BUDGET, global = true)]
    pub budget: String,

    #[arg(long, env = "YNAB_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Read the accounts response from a saved JSON file instead of the API.
    #[arg(long, global = true)]
    pub accounts_file: Option<PathBuf>,

    /// Read the month response from a saved JSON file instead of the API.
    #[arg(long, global = true)]
    pub month_file: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List open accounts with their type and balance.
    Accounts,
    /// Ready to assign, assigned, underfunded, income and expenses for the month.
    Month,
    /// Asset and liability totals by account type.
    NetWorth,
    /// Narrative report combining accounts and the month.
    Summary(SummaryArgs),
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Value of a property held outside the budget (e.g. a home), in dollars.
    #[arg(long)]
    pub home_value: Option<Decimal>,

    /// Replace the month's reported income with a forecast, in dollars.
    #[arg(long)]
    pub forecast_income: Option<Decimal>,

    /// Account names whose balances are listed separately (e.g. HSA, 401k).
    #[arg(long = "track")]
    pub tracked: Vec<String>,
}
