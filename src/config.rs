//! Run configuration: news sources, topic keywords, and sentiment cutoffs.
//!
//! Everything has a built-in default matching the stock set of finance sites,
//! so the binary runs without a config file. A YAML file may override any
//! subset of fields:
//!
//! ```yaml
//! request_timeout_secs: 10
//! sources:
//!   - name: Reuters
//!     url: https://www.reuters.com/finance
//!     tag: h3
//!     class_filter: story-title
//! thresholds:
//!   positive_cutoff: 0.1
//!   negative_cutoff: -0.1
//! ```

use crate::error::ConfigError;
use crate::scrapers::html::is_element_name;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};
use url::Url;

/// Top-level configuration for a run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-request network timeout.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Sources in fetch order.
    pub sources: Vec<SourceConfig>,
    pub stock_keywords: Vec<String>,
    pub crypto_keywords: Vec<String>,
    pub thresholds: Thresholds,
}

/// One news site and the rule for pulling headlines out of its page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub url: String,
    /// Bare HTML element name (e.g. `h3`) whose text counts as a headline.
    /// CSS selectors are rejected; use `class_filter` to narrow by class.
    pub tag: String,
    /// Only keep elements carrying this class, when set.
    #[serde(default)]
    pub class_filter: Option<String>,
}

impl SourceConfig {
    pub fn new(name: &str, url: &str, tag: &str, class_filter: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            tag: tag.to_string(),
            class_filter: class_filter.map(str::to_string),
        }
    }
}

/// Compound-score cutoffs. Values equal to a cutoff count as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub positive_cutoff: f64,
    pub negative_cutoff: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive_cutoff: 0.05,
            negative_cutoff: -0.05,
        }
    }
}

/// Lowercased keyword sets handed to the topic classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSets {
    pub stocks: Vec<String>,
    pub crypto: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_secs: 20,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            sources: default_sources(),
            stock_keywords: to_strings(&["stock", "shares", "market", "equity"]),
            crypto_keywords: to_strings(&["crypto", "bitcoin", "ethereum", "blockchain", "coin"]),
            thresholds: Thresholds::default(),
        }
    }
}

fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::new("Yahoo Finance", "https://finance.yahoo.com", "h3", None),
        SourceConfig::new(
            "Reuters",
            "https://www.reuters.com/finance",
            "h3",
            Some("story-title"),
        ),
        SourceConfig::new("Bloomberg", "https://www.bloomberg.com/markets", "h3", None),
        SourceConfig::new("DailyFX", "https://www.dailyfx.com/", "h3", None),
        SourceConfig::new("CoinDesk", "https://www.coindesk.com/", "h3", None),
        SourceConfig::new("WSJ", "https://www.wsj.com/", "h3", None),
    ]
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Config {
    /// Load from `path` if given, otherwise use the built-in defaults.
    #[instrument(level = "info")]
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(Path::new(p)).map_err(|source| {
                    ConfigError::Read {
                        path: p.to_string(),
                        source,
                    }
                })?;
                info!(path = p, "Loaded configuration file");
                Self::from_yaml(&raw)?
            }
            None => {
                debug!("No config file given; using defaults");
                let config = Self::default();
                config.validate()?;
                config
            }
        };
        info!(
            sources = config.sources.len(),
            timeout_secs = config.request_timeout_secs,
            "Configuration ready"
        );
        Ok(config)
    }

    /// Parse and validate a YAML document. Missing fields take defaults.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml::from_str(raw)?;
        config.stock_keywords = normalize_keywords(config.stock_keywords);
        config.crypto_keywords = normalize_keywords(config.crypto_keywords);
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that could never produce a meaningful run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(ConfigError::InvalidSource(format!(
                    "source with url `{}` has an empty name",
                    source.url
                )));
            }
            Url::parse(&source.url).map_err(|e| ConfigError::InvalidUrl {
                name: source.name.clone(),
                url: source.url.clone(),
                source: e,
            })?;
            if source.tag.trim().is_empty() {
                return Err(ConfigError::InvalidSource(format!(
                    "source `{}` has an empty tag",
                    source.name
                )));
            }
            if !is_element_name(&source.tag) {
                return Err(ConfigError::InvalidSource(format!(
                    "source `{}` tag `{}` is not a bare element name",
                    source.name, source.tag
                )));
            }
        }
        if self.stock_keywords.is_empty() {
            return Err(ConfigError::EmptyKeywords("stock_keywords"));
        }
        if self.crypto_keywords.is_empty() {
            return Err(ConfigError::EmptyKeywords("crypto_keywords"));
        }
        let t = self.thresholds;
        if !t.positive_cutoff.is_finite()
            || !t.negative_cutoff.is_finite()
            || t.negative_cutoff > t.positive_cutoff
        {
            return Err(ConfigError::InvalidThresholds {
                positive: t.positive_cutoff,
                negative: t.negative_cutoff,
            });
        }
        Ok(())
    }

    pub fn keyword_sets(&self) -> KeywordSets {
        KeywordSets {
            stocks: self.stock_keywords.clone(),
            crypto: self.crypto_keywords.clone(),
        }
    }
}

/// Lowercase, trim, and drop blanks so matching against lowercased headlines works.
fn normalize_keywords(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
