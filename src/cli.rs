//! Command-line interface definitions for the Adachi news reader.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The data host can be provided via flag or environment variable; everything
//! else is per-subcommand.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::filter::ALL_KEYWORDS;
use crate::utils::is_valid_date_key;

/// Command-line arguments for the Adachi news reader.
///
/// # Examples
///
/// ```sh
/// # Latest news, filtered to one keyword
/// adachi_news_reader latest --keyword kitasenju
///
/// # One collection day, raw JSON
/// adachi_news_reader day 2026-01-15 --json
///
/// # The 7-day history, then one day's detail
/// adachi_news_reader history
/// adachi_news_reader history --date 2026-01-14
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the feed directory (overrides the config file)
    #[arg(short, long, env = "NEWS_BASE_URL")]
    pub base_url: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// The three read paths of the reader.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the latest collected news
    Latest {
        /// Keyword filter; "all" shows everything
        #[arg(short, long, default_value = ALL_KEYWORDS)]
        keyword: String,

        /// Print the loaded data as pretty JSON instead of the text view
        #[arg(long)]
        json: bool,
    },

    /// Show the news collected on one date
    Day {
        /// Collection date, zero-padded YYYY-MM-DD
        #[arg(value_parser = parse_date_key)]
        date: NaiveDate,

        /// Keyword filter; "all" shows everything
        #[arg(short, long, default_value = ALL_KEYWORDS)]
        keyword: String,

        /// Print the loaded data as pretty JSON instead of the text view
        #[arg(long)]
        json: bool,
    },

    /// Show the collection history for the last 7 days
    History {
        /// Show one day's detail instead of the overview
        #[arg(short, long, value_parser = parse_date_key)]
        date: Option<NaiveDate>,

        /// Print the loaded data as pretty JSON instead of the text view
        #[arg(long)]
        json: bool,
    },
}

fn parse_date_key(s: &str) -> Result<NaiveDate, String> {
    if !is_valid_date_key(s) {
        return Err(format!("expected a zero-padded YYYY-MM-DD date, got `{s}`"));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_defaults() {
        let cli = Cli::parse_from(["adachi_news_reader", "latest"]);
        assert!(cli.base_url.is_none());
        match cli.command {
            Command::Latest { keyword, json } => {
                assert_eq!(keyword, ALL_KEYWORDS);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_latest_with_keyword_and_json() {
        let cli = Cli::parse_from(["adachi_news_reader", "latest", "-k", "kitasenju", "--json"]);
        match cli.command {
            Command::Latest { keyword, json } => {
                assert_eq!(keyword, "kitasenju");
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_day_parses_date() {
        let cli = Cli::parse_from(["adachi_news_reader", "day", "2026-01-15"]);
        match cli.command {
            Command::Day { date, .. } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_day_rejects_unpadded_date() {
        assert!(Cli::try_parse_from(["adachi_news_reader", "day", "2026-1-15"]).is_err());
        assert!(Cli::try_parse_from(["adachi_news_reader", "day", "latest"]).is_err());
    }

    #[test]
    fn test_history_date_optional() {
        let cli = Cli::parse_from(["adachi_news_reader", "history"]);
        match cli.command {
            Command::History { date, .. } => assert!(date.is_none()),
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::parse_from(["adachi_news_reader", "history", "--date", "2026-01-14"]);
        match cli.command {
            Command::History { date, .. } => assert!(date.is_some()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_base_url_flag() {
        let cli = Cli::parse_from([
            "adachi_news_reader",
            "--base-url",
            "http://news.example.com/data",
            "latest",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://news.example.com/data"));
    }
}
