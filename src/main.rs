//! # Adachi News Reader
//!
//! A terminal client for browsing locally-collected Adachi ward news. A
//! separate collection job scrapes Google News for a fixed roster of ward
//! keywords and publishes one static JSON file per collection day plus a
//! `latest.json`; this binary is the read side.
//!
//! ## Features
//!
//! - Fetches the latest-news feed and per-date feeds over HTTP
//! - Aggregates a 7-day collection history with per-date failure isolation
//! - Pure keyword filtering and relative-recency formatting
//! - Degrades to built-in sample data whenever a feed is unavailable
//! - Optional raw JSON output for piping
//!
//! ## Usage
//!
//! ```sh
//! adachi_news_reader latest --keyword kitasenju
//! adachi_news_reader history --date 2026-01-14
//! ```
//!
//! ## Architecture
//!
//! Each run is a one-shot request/render cycle:
//! 1. **Load**: Fetch the requested feed(s) through [`client::NewsClient`]
//! 2. **Degrade**: Collapse any fetch failure into the sample-data fallback
//! 3. **Filter**: Apply the pure keyword filter to the loaded items
//! 4. **Render**: Print the text view (or pretty JSON) to stdout

use chrono::{Local, Utc};
use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod client;
mod config;
mod filter;
mod loaders;
mod models;
mod outputs;
mod sample;
mod utils;

use cli::{Cli, Command};
use client::NewsClient;
use filter::{filter_by_keyword, keyword_counts, ALL_KEYWORDS};
use loaders::{feed, history};
use outputs::{json, text};
use utils::{date_key, format_long_date};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let log_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(log_filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("adachi_news_reader starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.base_url, ?args.config, "Parsed CLI arguments");

    let config = config::load_config(args.config.as_deref())?;
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.base_url.clone());
    let client = NewsClient::new(&base_url, Duration::from_secs(config.request_timeout_secs))?;
    info!(%base_url, "News client ready");

    // One clock read per run; every view formats against the same instant.
    let now = Utc::now();
    let today = Local::now().date_naive();

    let output = match args.command {
        Command::Latest {
            keyword,
            json: as_json,
        } => {
            warn_unknown_keyword(&keyword, &config.keywords);
            let outcome = feed::fetch_latest_news(&client).await;
            let is_sample = outcome.is_sample();
            let items = outcome.into_data();
            if as_json {
                json::render(&items)?
            } else {
                let filtered = filter_by_keyword(&items, &keyword);
                text::news_list(
                    "Today's Adachi ward news",
                    &filtered,
                    &keyword,
                    &keyword_counts(&items),
                    is_sample,
                    now,
                )
            }
        }

        Command::Day {
            date,
            keyword,
            json: as_json,
        } => {
            warn_unknown_keyword(&keyword, &config.keywords);
            let outcome = feed::fetch_news_by_date(&client, date).await;
            let is_sample = outcome.is_sample();
            let items = outcome.into_data();
            if as_json {
                json::render(&items)?
            } else {
                let filtered = filter_by_keyword(&items, &keyword);
                let heading = format!("News collected on {}", format_long_date(&date_key(date)));
                text::news_list(
                    &heading,
                    &filtered,
                    &keyword,
                    &keyword_counts(&items),
                    is_sample,
                    now,
                )
            }
        }

        Command::History {
            date,
            json: as_json,
        } => {
            let outcome = history::fetch_collection_history(&client, today).await;
            let entries = outcome.data();
            match date {
                Some(date) => {
                    let key = date_key(date);
                    match entries.iter().find(|entry| entry.date == key) {
                        Some(entry) if as_json => json::render(entry)?,
                        Some(entry) => text::history_day(entry, now),
                        None => {
                            info!(date = %key, "Requested date not in the aggregated window");
                            format!("No collection recorded for {key}.\n")
                        }
                    }
                }
                None if as_json => json::render(entries)?,
                None => text::history_overview(entries, today, outcome.is_sample()),
            }
        }
    };

    print!("{output}");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Keyword filters outside the configured roster are allowed (the filter is
/// an exact match over whatever the data carries) but usually a typo.
fn warn_unknown_keyword(keyword: &str, roster: &[String]) {
    if keyword != ALL_KEYWORDS && !roster.iter().any(|k| k == keyword) {
        warn!(keyword, "Keyword is not in the configured roster");
    }
}
