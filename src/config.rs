use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.ynab.com/v1";
pub const DEFAULT_BUDGET: &str = "last-used";
pub const CURRENT_MONTH: &str = "current";

/// Where to read the budget from and which month to report on.
#[derive(Debug, Clone)]
pub struct BudgetConfig {
    token: Option<String>,
    pub month: String,
    pub api_url: String,
    pub budget: String,
}

impl BudgetConfig {
    pub fn new(
        token: Option<String>,
        month: &str,
        api_url: &str,
        budget: &str,
    ) -> Result<Self, ConfigError> {
        if let Some(t) = &token {
            if t.trim().is_empty() {
                return Err(ConfigError::EmptyToken);
            }
        }

        Ok(Self {
            token,
            month: validate_month(month)?,
            api_url: api_url.trim_end_matches('/').to_string(),
            budget: budget.to_string(),
        })
    }

    /// The bearer token. Only needed when something is fetched from the API.
    pub fn token(&self) -> Result<&str, ConfigError> {
        self.token.as_deref().ok_or(ConfigError::MissingToken)
    }

    pub fn accounts_url(&self) -> String {
        format!("{}/budgets/{}/accounts", self.api_url, self.budget)
    }

    pub fn month_url(&self) -> String {
        format!("{}/budgets/{}/months/{}", self.api_url, self.budget, self.month)
    }

    /// `YYYY-MM-01` for the configured month, resolving `current` against `now`.
    pub fn month_label(&self, now: DateTime<Utc>) -> String {
        if self.month == CURRENT_MONTH {
            format!("{:04}-{:02}-01", now.year(), now.month())
        } else {
            self.month.clone()
        }
    }
}

static MONTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-01$|^current$").expect("month pattern is valid")
});

/// Accepts `current` or a first-of-month date shaped like `YYYY-MM-01`.
pub fn validate_month(raw: &str) -> Result<String, ConfigError> {
    if !MONTH_PATTERN.is_match(raw) {
        return Err(ConfigError::InvalidMonth(raw.to_string()));
    }
    Ok(raw.to_string())
}
