//! Human-readable text views.
//!
//! Three views exist, matching the three subcommands: a filterable news list,
//! a history overview of the 7-day window, and a single day's detail. All of
//! them are plain strings built line by line; nothing here touches the
//! terminal directly.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Write;

use crate::filter::ALL_KEYWORDS;
use crate::models::{CollectionHistory, KeywordFilter, NewsItem};
use crate::utils::{format_long_date, is_today, time_ago};

/// Render the news list view.
///
/// # Arguments
///
/// * `heading` - View title, e.g. `"Today's Adachi ward news"`
/// * `items` - The items to show, already filtered
/// * `selected` - The active keyword filter (may be the `"all"` sentinel)
/// * `counts` - Per-keyword counts over the unfiltered set
/// * `is_sample` - Whether the data is the sample fallback
/// * `now` - Render-time instant for recency labels
pub fn news_list(
    heading: &str,
    items: &[&NewsItem],
    selected: &str,
    counts: &[KeywordFilter],
    is_sample: bool,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    writeln!(out, "{heading}").unwrap();
    writeln!(out, "{}", "=".repeat(heading.chars().count())).unwrap();
    if is_sample {
        writeln!(out, "(feed unavailable; showing sample data)").unwrap();
    }
    writeln!(out).unwrap();

    if !counts.is_empty() {
        let chips = counts
            .iter()
            .map(|c| format!("{} ({})", c.keyword, c.count))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "keywords: {chips}").unwrap();
    }
    if selected != ALL_KEYWORDS {
        writeln!(out, "filter: {selected}").unwrap();
    }
    writeln!(out).unwrap();

    if items.is_empty() {
        writeln!(out, "No items matched.").unwrap();
        return out;
    }

    for item in items {
        write_item(&mut out, item, now);
    }
    out
}

/// Render the 7-day history overview.
///
/// Entries arrive most-recent-first from the aggregator and are rendered in
/// that order; today's entry is badged.
pub fn history_overview(
    entries: &[CollectionHistory],
    today: NaiveDate,
    is_sample: bool,
) -> String {
    let mut out = String::new();
    writeln!(out, "Collection history").unwrap();
    writeln!(out, "==================").unwrap();
    if is_sample {
        writeln!(out, "(feed unavailable; showing sample data)").unwrap();
    }
    writeln!(out).unwrap();

    for entry in entries {
        let badge = if is_today(&entry.date, today) { "  [today]" } else { "" };
        writeln!(out, "{}{badge}", format_long_date(&entry.date)).unwrap();
        writeln!(
            out,
            "  {} items, keywords: {}",
            entry.total_count,
            entry.keywords.join(", ")
        )
        .unwrap();
        writeln!(out).unwrap();
    }
    out
}

/// Render one day's detail out of the history window.
pub fn history_day(entry: &CollectionHistory, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let heading = format_long_date(&entry.date);
    writeln!(out, "{heading}").unwrap();
    writeln!(out, "{}", "=".repeat(heading.chars().count())).unwrap();
    writeln!(out, "{} items collected", entry.total_count).unwrap();
    writeln!(out).unwrap();

    for item in &entry.news_items {
        write_item(&mut out, item, now);
    }
    out
}

fn write_item(out: &mut String, item: &NewsItem, now: DateTime<Utc>) {
    writeln!(out, "* {}", item.title).unwrap();
    writeln!(
        out,
        "  {} | {} | #{}",
        item.source,
        time_ago(&item.pub_date, now),
        item.keyword
    )
    .unwrap();
    if let Some(description) = &item.description {
        writeln!(out, "  {description}").unwrap();
    }
    match item.link_host() {
        Some(host) => writeln!(out, "  {} ({host})", item.link).unwrap(),
        None => writeln!(out, "  {}", item.link).unwrap(),
    }
    writeln!(out).unwrap();
}
