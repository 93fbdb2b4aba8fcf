//! Fixed sample data used when the feed files are unreachable.
//!
//! The collection job publishes its feeds out-of-band, so a fresh checkout
//! (or a broken data host) has nothing to read. Every loader degrades to the
//! data in this module instead of surfacing an error: a fixed four-item set
//! for the list views, and a synthesized 7-day window for the history view.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use rand::Rng;

use crate::models::{CollectionHistory, NewsItem};
use crate::utils::date_key;

/// Keywords drawn on when synthesizing history entries.
const SAMPLE_KEYWORDS: [&str; 4] = ["adachi", "kitasenju", "nishiarai", "takenotsuka"];

static SAMPLE_NEWS: Lazy<Vec<NewsItem>> = Lazy::new(|| {
    vec![
        NewsItem {
            id: "1".to_string(),
            title: "New childcare support center opens in Adachi ward".to_string(),
            description: Some(
                "The ward opened a new childcare support center on the 14th, offering \
                 drop-in daycare and parenting consultations aimed at dual-income \
                 households."
                    .to_string(),
            ),
            link: "https://example.com/news/1".to_string(),
            source: "NHK News Web".to_string(),
            pub_date: "2026-01-15T07:00:00Z".to_string(),
            keyword: "adachi".to_string(),
            collected_at: "2026-01-15T09:00:00Z".to_string(),
        },
        NewsItem {
            id: "2".to_string(),
            title: "Kitasenju station west exit redevelopment moves ahead, completion targeted for 2027"
                .to_string(),
            description: Some(
                "The ward announced a concrete plan for the redevelopment of the west \
                 exit area, with a mixed commercial and residential tower expected to \
                 improve access around the station."
                    .to_string(),
            ),
            link: "https://example.com/news/2".to_string(),
            source: "Tokyo Shimbun".to_string(),
            pub_date: "2026-01-15T05:00:00Z".to_string(),
            keyword: "kitasenju".to_string(),
            collected_at: "2026-01-15T09:00:00Z".to_string(),
        },
        NewsItem {
            id: "3".to_string(),
            title: "Nishiarai Daishi draws 200,000 New Year visitors, busier than usual".to_string(),
            description: Some(
                "About 200,000 people visited Nishiarai Daishi over the first three \
                 days of the year, with the grounds crowded all day with visitors \
                 praying for protection from misfortune."
                    .to_string(),
            ),
            link: "https://example.com/news/3".to_string(),
            source: "Asahi Shimbun".to_string(),
            pub_date: "2026-01-15T04:00:00Z".to_string(),
            keyword: "nishiarai".to_string(),
            collected_at: "2026-01-15T09:00:00Z".to_string(),
        },
        NewsItem {
            id: "4".to_string(),
            title: "Takenotsuka railway crossings replaced by grade separation, easing congestion"
                .to_string(),
            description: Some(
                "The long-standing crossing problem around Takenotsuka station is set \
                 to be resolved with the completion of the grade separation project."
                    .to_string(),
            ),
            link: "https://example.com/news/4".to_string(),
            source: "Yomiuri Shimbun".to_string(),
            pub_date: "2026-01-15T03:00:00Z".to_string(),
            keyword: "takenotsuka".to_string(),
            collected_at: "2026-01-15T09:00:00Z".to_string(),
        },
    ]
});

/// The fixed sample item set served when a feed fetch fails.
pub fn sample_news() -> Vec<NewsItem> {
    SAMPLE_NEWS.clone()
}

/// Synthesize a full 7-day history window ending at `today`.
///
/// Used only when every dated feed in the window is unavailable. The counts
/// and keyword subsets are randomized placeholders and the full sample item
/// set is attached to every entry, so `total_count` deliberately does not
/// match `news_items.len()` here.
///
/// # Arguments
///
/// * `today` - The most recent date in the window
/// * `rng` - Randomness source; tests pass a seeded generator
pub fn generate_sample_history(today: NaiveDate, rng: &mut impl Rng) -> Vec<CollectionHistory> {
    (0..7)
        .map(|offset| {
            let date = today - Days::new(offset);
            let keyword_count = rng.random_range(2..=4);
            CollectionHistory {
                date: date_key(date),
                total_count: rng.random_range(10..=24),
                keywords: SAMPLE_KEYWORDS[..keyword_count]
                    .iter()
                    .map(|k| k.to_string())
                    .collect(),
                news_items: sample_news(),
            }
        })
        .collect()
}
