//! HTTP access to the collection job's feed files.
//!
//! All loaders go through [`NewsClient::fetch_items`], the single
//! fetch-and-parse primitive. It classifies failures into [`FetchError`] so
//! callers can log the cause, but the loaders collapse every cause into the
//! sample-data fallback; no failure distinction reaches the rendered output.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::models::NewsItem;
use crate::utils::truncate_for_log;

/// Why a feed fetch failed.
///
/// One variant per failure class: the request never completed, the server
/// answered with a non-success status, or the body was not a `NewsItem`
/// array.
#[derive(Debug)]
pub enum FetchError {
    /// Network or protocol failure before a response body was read.
    Transport(reqwest::Error),
    /// The server responded with a non-success status.
    Status(StatusCode),
    /// The response body did not parse as a `NewsItem` array.
    Parse(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "transport failure: {e}"),
            FetchError::Status(status) => write!(f, "unexpected status: {status}"),
            FetchError::Parse(e) => write!(f, "malformed feed JSON: {e}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            FetchError::Status(_) => None,
            FetchError::Parse(e) => Some(e),
        }
    }
}

/// Client for the static JSON feeds published by the collection job.
///
/// Holds a configured `reqwest` client and the base URL that feed resource
/// names resolve against (e.g. base `http://localhost:5173/data` and resource
/// `latest` yield `http://localhost:5173/data/latest.json`).
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base: String,
}

impl NewsClient {
    /// Build a client for the given data host.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the feed directory
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a URL that can carry resource
    /// paths, or if the underlying HTTP client fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(format!("base URL cannot carry resource paths: {base_url}").into());
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("adachi_news_reader/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The absolute URL of a named feed resource.
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}.json", self.base, resource)
    }

    /// Fetch one feed resource and parse it as a `NewsItem` array.
    ///
    /// # Arguments
    ///
    /// * `resource` - Resource name without extension: `latest` or a
    ///   `YYYY-MM-DD` date key
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] classifying the failure; the body shape is
    /// otherwise trusted as-is.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch_items(&self, resource: &str) -> Result<Vec<NewsItem>, FetchError> {
        let url = self.resource_url(resource);
        debug!(%url, "Fetching feed");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        match serde_json::from_str::<Vec<NewsItem>>(&body) {
            Ok(items) => {
                info!(count = items.len(), %url, "Fetched feed");
                Ok(items)
            }
            Err(e) => {
                warn!(
                    %url,
                    error = %e,
                    body_preview = %truncate_for_log(&body, 300),
                    "Feed returned non-conforming JSON"
                );
                Err(FetchError::Parse(e))
            }
        }
    }
}
