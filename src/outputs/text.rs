//! Plain-text verdict lines.

use crate::error::FetchError;
use crate::models::{MoodReport, TopicReport};

/// `The market sentiment for <topic> is: <Label> (<pct>%)`, pct to two decimals.
pub fn verdict_line(topic: &TopicReport) -> String {
    format!(
        "The market sentiment for {} is: {} ({:.2}%)",
        topic.topic, topic.verdict.label, topic.verdict.pct
    )
}

/// One verdict line per topic, stocks first.
pub fn render_lines(report: &MoodReport) -> Vec<String> {
    report.topics.iter().map(verdict_line).collect()
}

/// Diagnostic for a source that could not be fetched.
pub fn failure_line(error: &FetchError) -> String {
    format!("Error fetching {} headlines: {}", error.source_name, error)
}
