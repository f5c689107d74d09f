use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "API token is required. Set the `YNAB_PAT` environment variable or pass --token"
    )]
    MissingToken,

    #[error("token cannot be empty")]
    EmptyToken,

    #[error("month must be `current` or match the `YYYY-MM-01` format (got `{0}`)")]
    InvalidMonth(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response failed with status code: {status} and\nbody: {body}")]
    Status { status: u16, body: String },

    #[error("malformed {what} payload")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
