mod accounts;
mod api;
mod cli;
mod config;
mod error;
mod money;
mod month;
mod report;
mod summary;

use anyhow::{Context, Result};
use clap::Parser;
use chrono::Utc;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

use crate::accounts::{Account, AccountIndex, NetWorth};
use crate::api::{Client, decode_accounts, decode_month, read_file};
use crate::cli::{Cli, Command};
use crate::config::BudgetConfig;
use crate::money::Balance;
use crate::month::{Category, MonthSummary, MonthTotals};
use crate::report::SummaryOptions;
use crate::summary::Summary;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ynab_summary={level}")));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cfg = BudgetConfig::new(cli.token.clone(), &cli.month, &cli.api_url, &cli.budget)?;
    let mut source = Source::new(&cfg, cli.accounts_file.as_deref(), cli.month_file.as_deref());

    // Everything is fetched before anything is printed.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Accounts => {
            let (accounts, _) = source.accounts()?;
            report::write_accounts(&mut out, &accounts)?;
        }
        Command::Month => {
            let (categories, totals) = source.month()?;
            let month = MonthSummary::aggregate(&categories, &totals);
            let label = if totals.month.is_empty() {
                cfg.month_label(Utc::now())
            } else {
                totals.month.clone()
            };
            writeln!(out, "Month: {label}")?;
            report::write_month(&mut out, &month)?;
        }
        Command::NetWorth => {
            let (accounts, _) = source.accounts()?;
            let nw = NetWorth::from_accounts(&accounts);
            let skipped = warn_unclassified(&accounts);
            report::write_net_worth(&mut out, &nw, skipped)?;
        }
        Command::Summary(args) => {
            let (accounts, index) = source.accounts()?;
            let (categories, totals) = source.month()?;
            warn_unclassified(&accounts);

            let mut summary = Summary::new(
                NetWorth::from_accounts(&accounts),
                MonthSummary::aggregate(&categories, &totals),
            );
            if let Some(income) = args.forecast_income {
                summary = summary.with_forecast_income(Balance::from_decimal(income));
            }

            let opts = SummaryOptions {
                home_value: args.home_value.map(Balance::from_decimal),
                tracked: args.tracked,
            };
            report::write_summary(&mut out, &summary, &index, &opts)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn warn_unclassified(accounts: &[Account]) -> usize {
    let skipped = crate::accounts::unclassified(accounts);
    for account in &skipped {
        tracing::warn!(
            name = %account.name,
            kind = %account.kind,
            "account type not recognized; left out of net worth"
        );
    }
    skipped.len()
}

/// Reads responses from saved files when given, otherwise from the API.
struct Source<'a> {
    cfg: &'a BudgetConfig,
    accounts_file: Option<&'a Path>,
    month_file: Option<&'a Path>,
    client: Option<Client>,
}

impl<'a> Source<'a> {
    fn new(
        cfg: &'a BudgetConfig,
        accounts_file: Option<&'a Path>,
        month_file: Option<&'a Path>,
    ) -> Self {
        Self {
            cfg,
            accounts_file,
            month_file,
            client: None,
        }
    }

    fn accounts(&mut self) -> Result<(Vec<Account>, AccountIndex)> {
        let bytes = match self.accounts_file {
            Some(path) => read_file(path)?,
            None => {
                let url = self.cfg.accounts_url();
                self.client()?
                    .fetch(&url)
                    .context("Error getting account data")?
            }
        };
        Ok(decode_accounts(&bytes)?)
    }

    fn month(&mut self) -> Result<(Vec<Category>, MonthTotals)> {
        let bytes = match self.month_file {
            Some(path) => read_file(path)?,
            None => {
                let url = self.cfg.month_url();
                self.client()?
                    .fetch(&url)
                    .context("Error getting month data")?
            }
        };
        Ok(decode_month(&bytes)?)
    }

    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let token = self.cfg.token()?;
            self.client = Some(Client::new(token)?);
        }
        self.client
            .as_ref()
            .context("HTTP client was not initialized")
    }
}
