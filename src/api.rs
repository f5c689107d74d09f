//! Fetching and decoding YNAB API responses.
//!
//! Wire structs only name the fields the reports use; everything else in the
//! payload is ignored by serde.

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::accounts::{Account, AccountIndex, AccountKind};
use crate::error::ApiError;
use crate::money::Balance;
use crate::month::{Category, MonthTotals};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct AccountsData {
    accounts: Vec<WireAccount>,
}

#[derive(Debug, Deserialize)]
struct WireAccount {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    closed: bool,
    balance: i64,
}

#[derive(Debug, Deserialize)]
struct MonthData {
    month: WireMonth,
}

#[derive(Debug, Deserialize)]
struct WireMonth {
    month: String,
    income: i64,
    budgeted: i64,
    activity: i64,
    to_be_budgeted: i64,
    #[serde(default)]
    categories: Vec<WireCategory>,
}

#[derive(Debug, Deserialize)]
struct WireCategory {
    name: String,
    category_group_name: String,
    budgeted: i64,
    activity: i64,
    balance: i64,
    goal_under_funded: Option<i64>,
    #[serde(default)]
    deleted: bool,
}

/// Decodes an accounts response, dropping closed accounts and indexing the
/// rest by name.
pub fn decode_accounts(bytes: &[u8]) -> Result<(Vec<Account>, AccountIndex), ApiError> {
    let envelope: Envelope<AccountsData> =
        serde_json::from_slice(bytes).map_err(|source| ApiError::Decode {
            what: "accounts",
            source,
        })?;

    let mut accounts = Vec::with_capacity(envelope.data.accounts.len());
    let mut index = AccountIndex::default();
    for wire in envelope.data.accounts {
        if wire.closed {
            continue;
        }
        let account = Account {
            id: wire.id,
            name: wire.name,
            kind: AccountKind::from_tag(&wire.kind),
            balance: Balance::from_milliunits(wire.balance),
            closed: false,
        };
        index.insert(account.clone());
        accounts.push(account);
    }

    tracing::info!(open = accounts.len(), indexed = index.len(), "decoded accounts");
    Ok((accounts, index))
}

/// Decodes a month response, dropping deleted categories.
pub fn decode_month(bytes: &[u8]) -> Result<(Vec<Category>, MonthTotals), ApiError> {
    let envelope: Envelope<MonthData> =
        serde_json::from_slice(bytes).map_err(|source| ApiError::Decode {
            what: "month",
            source,
        })?;
    let month = envelope.data.month;

    let categories: Vec<Category> = month
        .categories
        .into_iter()
        .filter(|c| !c.deleted)
        .map(|c| Category {
            group_name: c.category_group_name,
            name: c.name,
            budgeted: c.budgeted,
            activity: c.activity,
            balance: c.balance,
            goal_under_funded: c.goal_under_funded,
        })
        .collect();

    let totals = MonthTotals {
        month: month.month,
        to_be_budgeted: month.to_be_budgeted,
        budgeted: month.budgeted,
        income: month.income,
        activity: month.activity,
    };

    tracing::info!(month = %totals.month, categories = categories.len(), "decoded month");
    Ok((categories, totals))
}

/// Reads a saved API response from disk.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ApiError> {
    tracing::debug!(path = %path.display(), "reading saved response");
    fs::read(path).map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Bearer-token HTTP client for the YNAB API.
pub struct Client {
    http: blocking::Client,
    token: String,
}

impl Client {
    pub fn new(token: &str) -> Result<Self, ApiError> {
        let http = blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|source| ApiError::Network {
                url: String::from("<client>"),
                source,
            })?;
        Ok(Self {
            http,
            token: token.to_string(),
        })
    }

    /// GETs `url` and returns the body. Any status of 300 or above is an error
    /// carrying the response body.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        pb.set_message(format!("Fetching {url}"));

        let result = self.get(url);
        pb.finish_and_clear();
        result
    }

    fn get(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(%url, "GET");
        let network = |source: reqwest::Error| ApiError::Network {
            url: url.to_string(),
            source,
        };

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(USER_AGENT, concat!("ynab-summary/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(network)?;

        let status = resp.status();
        let body = resp.bytes().map_err(network)?;
        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "response");

        if status.as_u16() > 299 {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body.to_vec())
    }
}
