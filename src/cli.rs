//! Command-line interface definitions for Market Mood.
//!
//! All options are optional; with no arguments the built-in source list is
//! scraped and the two verdict lines are printed.

use clap::Parser;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Default sources, plain-text verdicts
/// market_mood
///
/// # Custom sources and keywords
/// market_mood --config ./market_mood.yaml
///
/// # Machine-readable output
/// market_mood --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a YAML config file (sources, keywords, thresholds)
    #[arg(short, long, env = "MARKET_MOOD_CONFIG")]
    pub config: Option<String>,

    /// Print the full run report as JSON instead of the verdict lines
    #[arg(long)]
    pub json: bool,

    /// Wait for Enter before exiting (handy when launched from a desktop shortcut)
    #[arg(long)]
    pub pause: bool,
}
