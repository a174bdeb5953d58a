//! End-to-end run: fetch, classify, score, aggregate, and classify the market.
//!
//! [`analyze`] is the pure half of the pipeline. Given the same headlines and
//! configuration it always returns the same [`MoodReport`].

use crate::classify::classify_headlines;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::{MoodReport, Topic, TopicReport};
use crate::scrapers::html::HtmlSource;
use crate::scrapers::{HeadlineSource, fetch_all};
use crate::sentiment::{SentimentScorer, aggregate, classify_market};
use tracing::{info, instrument};

/// Report plus the sources that failed along the way.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: MoodReport,
    pub failures: Vec<FetchError>,
}

/// Classify headlines by topic and compute a verdict for each topic.
#[instrument(level = "info", skip_all, fields(headlines = headlines.len()))]
pub fn analyze(headlines: &[String], config: &Config, scorer: &SentimentScorer) -> MoodReport {
    let buckets = classify_headlines(headlines, &config.keyword_sets());

    let topics = Topic::ALL
        .iter()
        .map(|&topic| {
            let bucket = buckets.get(topic);
            let scores = scorer.score_all(bucket);
            let breakdown = aggregate(&scores, &config.thresholds);
            let verdict = classify_market(&breakdown);
            info!(
                %topic,
                headlines = bucket.len(),
                positive_pct = breakdown.positive_pct,
                neutral_pct = breakdown.neutral_pct,
                negative_pct = breakdown.negative_pct,
                label = %verdict.label,
                "Topic sentiment computed"
            );
            TopicReport {
                topic,
                headline_count: bucket.len(),
                breakdown,
                verdict,
            }
        })
        .collect();

    MoodReport {
        headline_count: headlines.len(),
        topics,
    }
}

/// Fetch from the given sources, then analyze whatever came back.
pub async fn run_with_sources<S: HeadlineSource>(
    sources: &[S],
    config: &Config,
    scorer: &SentimentScorer,
) -> RunOutcome {
    let fetched = fetch_all(sources).await;
    let report = analyze(&fetched.headlines, config, scorer);
    RunOutcome {
        report,
        failures: fetched.failures,
    }
}

/// Full run against the configured sites.
///
/// Only fails if the HTTP client cannot be built; per-source failures are
/// reported in [`RunOutcome::failures`].
pub async fn run(config: &Config, scorer: &SentimentScorer) -> reqwest::Result<RunOutcome> {
    let sources = HtmlSource::from_config(config)?;
    Ok(run_with_sources(&sources, config, scorer).await)
}
