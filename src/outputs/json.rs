//! JSON output for the whole run.
//!
//! ```json
//! {
//!   "generated_at": "2025-05-06T09:30:00+02:00",
//!   "headline_count": 42,
//!   "failed_sources": [{ "source": "Reuters", "error": "unexpected HTTP status 401" }],
//!   "topics": [{ "topic": "stocks", "headline_count": 12, "breakdown": { ... }, "verdict": { "label": "Bullish", "pct": 58.33 } }]
//! }
//! ```

use crate::models::TopicReport;
use crate::pipeline::RunOutcome;
use chrono::Local;
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    headline_count: usize,
    failed_sources: Vec<FailedSource>,
    topics: &'a [TopicReport],
}

#[derive(Debug, Serialize)]
struct FailedSource {
    source: String,
    error: String,
}

/// Serialize a run to pretty-printed JSON, stamped with the local time.
#[instrument(level = "info", skip_all)]
pub fn render_report(outcome: &RunOutcome) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        generated_at: Local::now().to_rfc3339(),
        headline_count: outcome.report.headline_count,
        failed_sources: outcome
            .failures
            .iter()
            .map(|e| FailedSource {
                source: e.source_name.clone(),
                error: e.to_string(),
            })
            .collect(),
        topics: &outcome.report.topics,
    };
    let json = serde_json::to_string_pretty(&report)?;
    info!(bytes = json.len(), "Rendered JSON report");
    Ok(json)
}
