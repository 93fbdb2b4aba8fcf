//! Pure keyword filtering over loaded news items.
//!
//! Filtering is presentation-level: loaders always return the full item set
//! and the views narrow it down per render. Matching is exact and
//! case-sensitive, with a single sentinel value that selects everything.

use itertools::Itertools;

use crate::models::{KeywordFilter, NewsItem};

/// Sentinel keyword that selects every item.
pub const ALL_KEYWORDS: &str = "all";

/// Return the items matching the selected keyword, preserving order.
///
/// The sentinel [`ALL_KEYWORDS`] returns the input unchanged. Any other token
/// selects the subsequence whose `keyword` field equals it exactly; there is
/// no normalization.
pub fn filter_by_keyword<'a>(items: &'a [NewsItem], keyword: &str) -> Vec<&'a NewsItem> {
    if keyword == ALL_KEYWORDS {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.keyword == keyword).collect()
}

/// Count items per keyword, in first-seen order.
pub fn keyword_counts(items: &[NewsItem]) -> Vec<KeywordFilter> {
    items
        .iter()
        .map(|item| item.keyword.as_str())
        .unique()
        .map(|keyword| KeywordFilter {
            keyword: keyword.to_string(),
            count: items.iter().filter(|item| item.keyword == keyword).count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, keyword: &str) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: format!("Article {id}"),
            description: None,
            link: format!("https://example.com/news/{id}"),
            source: "Test Wire".to_string(),
            pub_date: "2026-01-15T07:00:00Z".to_string(),
            keyword: keyword.to_string(),
            collected_at: "2026-01-15T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_filter_all_sentinel_returns_everything() {
        let items = vec![item("1", "adachi"), item("2", "kitasenju")];
        let filtered = filter_by_keyword(&items, ALL_KEYWORDS);
        assert_eq!(filtered.len(), items.len());
        assert_eq!(filtered[0].id, "1");
        assert_eq!(filtered[1].id, "2");
    }

    #[test]
    fn test_filter_exact_match_preserves_order() {
        let items = vec![
            item("1", "adachi"),
            item("2", "kitasenju"),
            item("3", "adachi"),
            item("4", "ayase"),
            item("5", "adachi"),
        ];
        let filtered = filter_by_keyword(&items, "adachi");
        let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
        assert!(filtered.iter().all(|i| i.keyword == "adachi"));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let items = vec![item("1", "adachi")];
        assert!(filter_by_keyword(&items, "Adachi").is_empty());
        assert!(filter_by_keyword(&items, "ADACHI").is_empty());
    }

    #[test]
    fn test_filter_unknown_keyword_is_empty() {
        let items = vec![item("1", "adachi")];
        assert!(filter_by_keyword(&items, "senju").is_empty());
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_by_keyword(&[], "adachi").is_empty());
        assert!(filter_by_keyword(&[], ALL_KEYWORDS).is_empty());
    }

    #[test]
    fn test_keyword_counts_first_seen_order() {
        let items = vec![
            item("1", "kitasenju"),
            item("2", "adachi"),
            item("3", "kitasenju"),
            item("4", "kitasenju"),
        ];
        let counts = keyword_counts(&items);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].keyword, "kitasenju");
        assert_eq!(counts[0].count, 3);
        assert_eq!(counts[1].keyword, "adachi");
        assert_eq!(counts[1].count, 1);
    }
}
