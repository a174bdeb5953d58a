//! Error types for fetching headlines and loading configuration.

use thiserror::Error;

/// A single source failed to produce headlines.
///
/// Carries the configured source name so the aggregator can report which
/// site failed without the caller tracking it separately.
#[derive(Debug, Error)]
#[error("{cause}")]
pub struct FetchError {
    /// Display name of the failing source (e.g. `"Reuters"`).
    pub source_name: String,
    /// What went wrong.
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(source_name: impl Into<String>, cause: FetchCause) -> Self {
        Self {
            source_name: source_name.into(),
            cause,
        }
    }
}

/// Underlying reason a fetch failed.
#[derive(Debug, Error)]
pub enum FetchCause {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The tag/class selection rule could not be turned into a selector.
    #[error("invalid selection rule: {0}")]
    InvalidRule(String),
}

/// Start-up configuration problems. These are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("source `{name}` has an invalid url `{url}`: {source}")]
    InvalidUrl {
        name: String,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid source definition: {0}")]
    InvalidSource(String),

    #[error("keyword set `{0}` is empty")]
    EmptyKeywords(&'static str),

    #[error("cutoffs must be finite with negative <= positive (got positive {positive}, negative {negative})")]
    InvalidThresholds { positive: f64, negative: f64 },
}
