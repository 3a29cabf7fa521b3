use thiserror::Error;

/// Failure of a feed fetch. Both kinds are surfaced to the user and logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The transport failed or the server answered with a non-success status.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not valid JSON or did not hold records.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
