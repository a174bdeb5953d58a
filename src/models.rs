//! Data models shared across the pipeline.
//!
//! - [`PolarityScore`]: per-headline output of the sentiment model
//! - [`SentimentBreakdown`]: share of positive/neutral/negative headlines
//! - [`MarketVerdict`]: the final Bullish/Bearish/Neutral call
//! - [`TopicReport`] / [`MoodReport`]: everything a run produces, per topic

use serde::Serialize;
use std::fmt;

/// Topic bucket a headline can be sorted into. Buckets are not exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Stocks,
    Crypto,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Stocks, Topic::Crypto];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Stocks => "stocks",
            Topic::Crypto => "crypto",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// VADER polarity for one headline.
///
/// Only `compound` (normalized to [-1, 1]) drives aggregation; the other
/// three proportions are kept as the model returned them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScore {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

impl PolarityScore {
    /// Score with only a compound value.
    #[cfg(test)]
    pub fn from_compound(compound: f64) -> Self {
        Self {
            negative: 0.0,
            neutral: 0.0,
            positive: 0.0,
            compound,
        }
    }
}

/// Percentages of positive, neutral, and negative headlines in one bucket.
///
/// Sums to 100 for a non-empty bucket; all zero for an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentBreakdown {
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketLabel {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for MarketLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MarketLabel::Bullish => "Bullish",
            MarketLabel::Bearish => "Bearish",
            MarketLabel::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

/// Market label plus the percentage that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketVerdict {
    pub label: MarketLabel,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicReport {
    pub topic: Topic,
    /// Number of headlines that matched this topic's keywords.
    pub headline_count: usize,
    pub breakdown: SentimentBreakdown,
    pub verdict: MarketVerdict,
}

/// Result of analyzing one set of headlines. Topics are ordered stocks, crypto.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodReport {
    pub headline_count: usize,
    pub topics: Vec<TopicReport>,
}
