//! Utility functions for date handling and display formatting.
//!
//! This module provides helper functions used throughout the application:
//! - Relative and absolute date formatting for the rendered views
//! - Date-key validation for feed resource names
//! - String truncation for logging
//!
//! Every function that depends on the current time takes it as a parameter.
//! `main` reads the clock exactly once per run and passes it down, so all
//! formatting is deterministic in tests.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical zero-padded `YYYY-MM-DD` shape. Dated feed files are named with
/// this exact form, so `2026-1-5` must be rejected even though it parses as
/// a date.
static DATE_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Format a publication timestamp as a relative recency label.
///
/// Display rules, measured against the supplied `now`:
/// - under 1 hour: the fixed label `"under 1 hour ago"`
/// - under 24 hours: `"{hours} hours ago"` (integer hours)
/// - otherwise: `"{days} days ago"` (floor of hours / 24)
///
/// # Arguments
///
/// * `pub_date` - ISO-8601 timestamp string from a feed item
/// * `now` - The instant to measure from
///
/// # Returns
///
/// The relative label, or `pub_date` verbatim if it does not parse.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(time_ago("2026-01-15T06:30:00Z", now), "under 1 hour ago");
/// ```
pub fn time_ago(pub_date: &str, now: DateTime<Utc>) -> String {
    let Ok(published) = DateTime::parse_from_rfc3339(pub_date) else {
        return pub_date.to_string();
    };

    let hours = (now - published.with_timezone(&Utc)).num_hours();
    if hours < 1 {
        "under 1 hour ago".to_string()
    } else if hours < 24 {
        let unit = if hours == 1 { "hour" } else { "hours" };
        format!("{hours} {unit} ago")
    } else {
        let days = hours / 24;
        let unit = if days == 1 { "day" } else { "days" };
        format!("{days} {unit} ago")
    }
}

/// Format a `YYYY-MM-DD` date key as a long calendar date with weekday.
///
/// # Arguments
///
/// * `date` - Date key in `YYYY-MM-DD` format
///
/// # Returns
///
/// A string like `"Thursday, January 15, 2026"`, or `date` verbatim if it
/// does not parse.
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Render a calendar date as the `YYYY-MM-DD` key used in feed file names.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whether a date key names the supplied `today`.
pub fn is_today(date: &str, today: NaiveDate) -> bool {
    date == date_key(today)
}

/// Validate a date key before it becomes part of a feed resource path.
///
/// The key must have the canonical zero-padded `YYYY-MM-DD` shape and name a
/// real calendar date.
pub fn is_valid_date_key(s: &str) -> bool {
    DATE_KEY_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of characters to keep
///
/// # Returns
///
/// The original string if shorter than `max`, otherwise a truncated version
/// with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", &s[..max], s.len() - max)
    }
}
