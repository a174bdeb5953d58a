//! Headline sources and the aggregator that runs them.
//!
//! Each source follows the same contract: fetch one page and return the text
//! of every element matching its selection rule, in document order. The
//! aggregator ([`fetch_all`]) runs sources one at a time and never lets a
//! single failure abort the run.
//!
//! # Default Sources
//!
//! | Source | Page | Rule |
//! |--------|------|------|
//! | Yahoo Finance | `finance.yahoo.com` | `h3` |
//! | Reuters | `reuters.com/finance` | `h3.story-title` |
//! | Bloomberg | `bloomberg.com/markets` | `h3` |
//! | DailyFX | `dailyfx.com` | `h3` |
//! | CoinDesk | `coindesk.com` | `h3` |
//! | WSJ | `wsj.com` | `h3` |
//!
//! Selectors are best-effort; a redesigned page simply yields no headlines.

pub mod html;

#[cfg(test)]
pub(crate) mod testing;

use crate::error::FetchError;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};

/// Something that can produce a list of headlines.
pub trait HeadlineSource {
    /// Display name used in logs and error reports.
    fn name(&self) -> &str;

    /// Fetch and extract headlines. Errors are returned, not swallowed.
    async fn fetch(&self) -> Result<Vec<String>, FetchError>;
}

/// Everything gathered from one pass over all sources.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Successful headlines, in source order then document order.
    pub headlines: Vec<String>,
    /// One entry per source that failed.
    pub failures: Vec<FetchError>,
}

/// Fetch from every source sequentially and fold the results.
///
/// Failed sources are logged and recorded in [`FetchOutcome::failures`];
/// they contribute no headlines. If every source fails the headline list is
/// simply empty.
#[instrument(level = "info", skip_all, fields(sources = sources.len()))]
pub async fn fetch_all<S: HeadlineSource>(sources: &[S]) -> FetchOutcome {
    let results: Vec<(&str, Result<Vec<String>, FetchError>)> = stream::iter(sources)
        .then(|source| async move { (source.name(), source.fetch().await) })
        .collect()
        .await;

    let mut outcome = FetchOutcome::default();
    for (name, result) in results {
        match result {
            Ok(mut headlines) => {
                info!(source = name, count = headlines.len(), "Fetched headlines");
                outcome.headlines.append(&mut headlines);
            }
            Err(e) => {
                warn!(source = name, error = %e, "Source failed; skipping");
                outcome.failures.push(e);
            }
        }
    }

    info!(
        headlines = outcome.headlines.len(),
        failed = outcome.failures.len(),
        "Finished fetching all sources"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchCause;

    struct FakeSource {
        name: &'static str,
        result: Result<Vec<&'static str>, u16>,
    }

    impl HeadlineSource for FakeSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn fetch(&self) -> Result<Vec<String>, FetchError> {
            match &self.result {
                Ok(headlines) => Ok(headlines.iter().map(|h| h.to_string()).collect()),
                Err(status) => Err(FetchError::new(self.name, FetchCause::Status(*status))),
            }
        }
    }

    fn ok(name: &'static str, headlines: Vec<&'static str>) -> FakeSource {
        FakeSource {
            name,
            result: Ok(headlines),
        }
    }

    fn failing(name: &'static str) -> FakeSource {
        FakeSource {
            name,
            result: Err(502),
        }
    }

    #[tokio::test]
    async fn test_concatenates_in_source_order() {
        let sources = vec![ok("A", vec!["a1", "a2"]), ok("B", vec!["b1"])];
        let outcome = fetch_all(&sources).await;
        assert_eq!(outcome.headlines, vec!["a1", "a2", "b1"]);
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn test_middle_failure_is_skipped() {
        let sources = vec![
            ok("First", vec!["one", "two"]),
            failing("Second"),
            ok("Third", vec!["three"]),
        ];
        let outcome = fetch_all(&sources).await;
        assert_eq!(outcome.headlines, vec!["one", "two", "three"]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].source_name, "Second");
    }

    #[tokio::test]
    async fn test_all_failing_is_empty_not_error() {
        let sources = vec![failing("X"), failing("Y")];
        let outcome = fetch_all(&sources).await;
        assert!(outcome.headlines.is_empty());
        assert_eq!(outcome.failures.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let sources = vec![ok("A", vec!["same"]), ok("B", vec!["same"])];
        let outcome = fetch_all(&sources).await;
        assert_eq!(outcome.headlines, vec!["same", "same"]);
    }

    #[tokio::test]
    async fn test_no_sources() {
        let sources: Vec<FakeSource> = Vec::new();
        let outcome = fetch_all(&sources).await;
        assert!(outcome.headlines.is_empty());
        assert!(outcome.failures.is_empty());
    }
}
