//! Keyword-based topic classification.
//!
//! A headline belongs to a topic when its lowercased text contains any of
//! that topic's keywords as a plain substring (so `coin` also matches
//! `Coinbase`). Topics are not exclusive.

use crate::config::KeywordSets;
use crate::models::Topic;
use itertools::Itertools;
use tracing::{debug, instrument};

/// Headlines sorted into topic buckets, each preserving input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicBuckets {
    pub stocks: Vec<String>,
    pub crypto: Vec<String>,
}

impl TopicBuckets {
    pub fn get(&self, topic: Topic) -> &[String] {
        match topic {
            Topic::Stocks => &self.stocks,
            Topic::Crypto => &self.crypto,
        }
    }
}

/// True if `lowered` contains any keyword. Keywords must already be lowercase.
fn matches_any(lowered: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| lowered.contains(k.as_str()))
}

/// Split headlines into stock and crypto buckets.
#[instrument(level = "debug", skip_all, fields(headlines = headlines.len()))]
pub fn classify_headlines(headlines: &[String], keywords: &KeywordSets) -> TopicBuckets {
    debug!(
        stock_keywords = %keywords.stocks.iter().join(", "),
        crypto_keywords = %keywords.crypto.iter().join(", "),
        "Classifying headlines"
    );

    let mut buckets = TopicBuckets::default();
    for headline in headlines {
        let lowered = headline.to_lowercase();
        if matches_any(&lowered, &keywords.stocks) {
            buckets.stocks.push(headline.clone());
        }
        if matches_any(&lowered, &keywords.crypto) {
            buckets.crypto.push(headline.clone());
        }
    }

    debug!(
        stocks = buckets.stocks.len(),
        crypto = buckets.crypto.len(),
        "Classified headlines"
    );
    buckets
}
