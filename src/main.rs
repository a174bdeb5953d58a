//! # Market Mood
//!
//! Scrapes financial news headlines from a handful of public sites, sorts
//! them into stock and crypto topics by keyword, scores each headline with
//! VADER, and reports whether each topic reads Bullish, Bearish, or Neutral.
//!
//! ## Usage
//!
//! ```sh
//! market_mood
//! market_mood --config ./market_mood.yaml --json
//! ```
//!
//! ## Architecture
//!
//! The run is a one-way pipeline:
//! 1. **Fetching**: GET each configured page in turn and extract headline text
//!    (a failing source is reported and skipped)
//! 2. **Classification**: bucket headlines into `stocks` / `crypto`
//! 3. **Scoring**: VADER polarity per headline
//! 4. **Aggregation**: positive/neutral/negative shares and a market verdict
//! 5. **Output**: two verdict lines on stdout (or a JSON report)

use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod classify;
mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod sentiment;
mod utils;

use cli::Cli;
use config::Config;
use outputs::{json, text};
use sentiment::SentimentScorer;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr; stdout is reserved for results) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("market_mood starting up");

    let args = Cli::parse();
    debug!(?args.config, args.json, args.pause, "Parsed CLI arguments");

    let config = Config::load(args.config.as_deref()).map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e
    })?;

    // The lexicon must be usable before anything is fetched.
    let scorer = SentimentScorer::load();

    let outcome = pipeline::run(&config, &scorer).await.map_err(|e| {
        error!(error = %e, "Failed to build HTTP client");
        e
    })?;

    for failure in &outcome.failures {
        eprintln!("{}", text::failure_line(failure));
    }

    let mut stdout = io::stdout().lock();
    if args.json {
        writeln!(stdout, "{}", json::render_report(&outcome)?)?;
    } else {
        for line in text::render_lines(&outcome.report) {
            writeln!(stdout, "{line}")?;
        }
    }
    stdout.flush()?;
    drop(stdout);

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        headlines = outcome.report.headline_count,
        failed_sources = outcome.failures.len(),
        "Execution complete"
    );

    if args.pause {
        eprint!("Press Enter to exit");
        io::stderr().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}
