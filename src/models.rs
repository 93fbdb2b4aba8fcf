//! Data models for collected news items and daily collection summaries.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsItem`]: One collected article record as published by the collection job
//! - [`CollectionHistory`]: One calendar day's aggregated collection result
//! - [`KeywordFilter`]: A keyword paired with how many loaded items carry it
//!
//! The collection job writes camelCase field names (`pubDate`, `collectedAt`),
//! so the serde representation renames accordingly while field access stays
//! snake_case.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One collected news article, as found in `latest.json` or a dated feed file.
///
/// Items are constructed fresh from fetched JSON on every load and are never
/// mutated afterwards. Identity is the `id` field, assigned by the collection
/// job from a hash of title and link.
///
/// # Wire Shape
///
/// ```json
/// {
///   "id": "b1946ac92492",
///   "title": "New childcare support center opens in Adachi",
///   "description": "The ward opened a new childcare support center...",
///   "link": "https://example.com/news/1",
///   "source": "NHK News Web",
///   "pubDate": "2026-01-15T07:00:00Z",
///   "keyword": "adachi",
///   "collectedAt": "2026-01-15T09:00:00Z"
/// }
/// ```
///
/// `description` may be absent; every other field is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Unique item id assigned by the collection job.
    pub id: String,
    /// The article headline.
    pub title: String,
    /// Optional article summary; absent when the upstream feed had none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link to the full article.
    pub link: String,
    /// Name of the publishing outlet.
    pub source: String,
    /// Publication timestamp, ISO-8601.
    pub pub_date: String,
    /// The search keyword that matched this article during collection.
    pub keyword: String,
    /// When the collection job picked this article up, ISO-8601.
    pub collected_at: String,
}

impl NewsItem {
    /// Extract the host of the article link for display, e.g.
    /// `"https://www3.nhk.or.jp/news/..."` -> `"www3.nhk.or.jp"`.
    pub fn link_host(&self) -> Option<String> {
        url::Url::parse(&self.link)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_string))
    }
}

/// One calendar day's aggregated collection result.
///
/// Constructed only through [`CollectionHistory::from_items`], which keeps two
/// invariants:
/// - `total_count` equals `news_items.len()`
/// - `keywords` is the distinct projection of `news_items[*].keyword`,
///   preserving first occurrence order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionHistory {
    /// Collection date in `YYYY-MM-DD` format.
    pub date: String,
    /// Number of items collected on this date.
    pub total_count: usize,
    /// Distinct keywords seen on this date, in first-seen order.
    pub keywords: Vec<String>,
    /// The items collected on this date.
    pub news_items: Vec<NewsItem>,
}

impl CollectionHistory {
    /// Build a day summary from that day's items.
    pub fn from_items(date: String, news_items: Vec<NewsItem>) -> Self {
        let keywords = news_items
            .iter()
            .map(|item| item.keyword.clone())
            .unique()
            .collect::<Vec<String>>();

        Self {
            date,
            total_count: news_items.len(),
            keywords,
            news_items,
        }
    }
}

/// A keyword paired with how many of the loaded items carry it.
///
/// Rendered in the list view header so the reader can see which filters
/// would match anything before narrowing down.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeywordFilter {
    /// The keyword token.
    pub keyword: String,
    /// How many items in the loaded set carry this keyword.
    pub count: usize,
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
    fn test_news_item_deserializes_camel_case() {
        let json = r#"{
            "id": "abc123",
            "title": "Grade separation completed near Takenotsuka station",
            "description": "The long-planned elevation of the crossing is done.",
            "link": "https://example.com/news/4",
            "source": "Yomiuri Shimbun",
            "pubDate": "2026-01-15T03:00:00Z",
            "keyword": "takenotsuka",
            "collectedAt": "2026-01-15T09:00:00Z"
        }"#;

        let parsed: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "abc123");
        assert_eq!(parsed.pub_date, "2026-01-15T03:00:00Z");
        assert_eq!(parsed.collected_at, "2026-01-15T09:00:00Z");
        assert_eq!(parsed.keyword, "takenotsuka");
    }

    #[test]
    fn test_news_item_description_optional() {
        let json = r#"{
            "id": "abc124",
            "title": "No summary available",
            "link": "https://example.com/news/5",
            "source": "Asahi Shimbun",
            "pubDate": "2026-01-15T03:00:00Z",
            "keyword": "ayase",
            "collectedAt": "2026-01-15T09:00:00Z"
        }"#;

        let parsed: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.description, None);

        // And the field is omitted again on the way out.
        let out = serde_json::to_string(&parsed).unwrap();
        assert!(!out.contains("description"));
        assert!(out.contains("pubDate"));
    }

    #[test]
    fn test_link_host() {
        let mut it = item("1", "adachi");
        it.link = "https://www3.nhk.or.jp/news/html/20260115/k1.html".to_string();
        assert_eq!(it.link_host(), Some("www3.nhk.or.jp".to_string()));
    }

    #[test]
    fn test_link_host_invalid_url() {
        let mut it = item("1", "adachi");
        it.link = "not a url".to_string();
        assert_eq!(it.link_host(), None);
    }

    #[test]
    fn test_from_items_counts_match() {
        let items = vec![item("1", "adachi"), item("2", "kitasenju")];
        let history = CollectionHistory::from_items("2026-01-15".to_string(), items);
        assert_eq!(history.total_count, 2);
        assert_eq!(history.total_count, history.news_items.len());
    }

    #[test]
    fn test_from_items_keywords_first_seen_order() {
        let items = vec![
            item("1", "kitasenju"),
            item("2", "adachi"),
            item("3", "kitasenju"),
            item("4", "ayase"),
            item("5", "adachi"),
        ];
        let history = CollectionHistory::from_items("2026-01-15".to_string(), items);
        assert_eq!(history.keywords, vec!["kitasenju", "adachi", "ayase"]);
    }

    #[test]
    fn test_from_items_empty() {
        let history = CollectionHistory::from_items("2026-01-15".to_string(), vec![]);
        assert_eq!(history.total_count, 0);
        assert!(history.keywords.is_empty());
    }

    #[test]
    fn test_collection_history_serializes_camel_case() {
        let history =
            CollectionHistory::from_items("2026-01-15".to_string(), vec![item("1", "adachi")]);
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"totalCount\":1"));
        assert!(json.contains("\"newsItems\""));
    }
}
