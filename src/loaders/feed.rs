//! Single-feed loaders: the latest-news feed and the per-date feeds.
//!
//! Both loaders share one behavior: request a JSON resource, trust its shape
//! on success, and serve the fixed sample set on any failure. The failure
//! cause is logged, never returned.

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::client::NewsClient;
use crate::loaders::LoadOutcome;
use crate::models::NewsItem;
use crate::sample::sample_news;
use crate::utils::date_key;

/// Load the latest-news feed (`latest.json`).
///
/// Never fails: transport errors, non-success statuses, and malformed bodies
/// all degrade to [`LoadOutcome::Sample`] with the fixed sample set.
#[instrument(level = "info", skip_all)]
pub async fn fetch_latest_news(client: &NewsClient) -> LoadOutcome<Vec<NewsItem>> {
    load_feed(client, "latest").await
}

/// Load the feed for one collection date (`{YYYY-MM-DD}.json`).
///
/// Same contract as [`fetch_latest_news`], parameterized by date.
#[instrument(level = "info", skip_all, fields(date = %date))]
pub async fn fetch_news_by_date(client: &NewsClient, date: NaiveDate) -> LoadOutcome<Vec<NewsItem>> {
    load_feed(client, &date_key(date)).await
}

async fn load_feed(client: &NewsClient, resource: &str) -> LoadOutcome<Vec<NewsItem>> {
    match client.fetch_items(resource).await {
        Ok(items) => {
            info!(resource, count = items.len(), "Loaded feed");
            LoadOutcome::Fetched(items)
        }
        Err(e) => {
            warn!(resource, error = %e, "Feed unavailable; serving sample data");
            LoadOutcome::Sample(sample_news())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unreachable_client() -> NewsClient {
        // Port 1 on loopback refuses connections immediately.
        NewsClient::new("http://127.0.0.1:1/data", Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_latest_falls_back_to_sample_on_failure() {
        let outcome = fetch_latest_news(&unreachable_client()).await;
        assert!(outcome.is_sample());
        assert_eq!(outcome.data(), &sample_news());
    }

    #[tokio::test]
    async fn test_by_date_falls_back_to_sample_on_failure() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let outcome = fetch_news_by_date(&unreachable_client(), date).await;
        assert!(outcome.is_sample());
        assert_eq!(outcome.into_data(), sample_news());
    }
}
