//! Collection-history aggregation over the last seven days.
//!
//! One dated feed exists per collection day. The aggregator requests each
//! date in the window and summarizes the days that answered; days whose feed
//! is missing or broken are skipped entirely rather than zero-filled. The
//! per-date requests are independent, so they run through a small
//! order-preserving buffered pipeline; the output stays most-recent-first
//! with gaps where a date failed.

use chrono::{Days, NaiveDate};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};

use crate::client::NewsClient;
use crate::loaders::LoadOutcome;
use crate::models::CollectionHistory;
use crate::sample::generate_sample_history;
use crate::utils::date_key;

/// Length of the history window in days.
pub const HISTORY_DAYS: u64 = 7;

/// How many per-date requests may be in flight at once.
const FETCH_CONCURRENCY: usize = 4;

/// The dates in the history window, most recent first.
pub fn history_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..HISTORY_DAYS).map(|offset| today - Days::new(offset)).collect()
}

/// Aggregate up to seven [`CollectionHistory`] entries ending at `today`.
///
/// Dates whose feed fails to load are skipped; successful dates are
/// summarized via [`CollectionHistory::from_items`]. If every date in the
/// window fails, the result is [`LoadOutcome::Sample`] with a synthesized
/// 7-entry history instead of an empty list.
#[instrument(level = "info", skip_all, fields(today = %today))]
pub async fn fetch_collection_history(
    client: &NewsClient,
    today: NaiveDate,
) -> LoadOutcome<Vec<CollectionHistory>> {
    let per_date: Vec<Option<CollectionHistory>> = stream::iter(history_dates(today))
        .map(|date| async move {
            let key = date_key(date);
            match client.fetch_items(&key).await {
                Ok(items) => {
                    debug!(date = %key, count = items.len(), "Collected day summary");
                    Some(CollectionHistory::from_items(key, items))
                }
                Err(e) => {
                    debug!(date = %key, error = %e, "No collection data for date; skipping");
                    None
                }
            }
        })
        .buffered(FETCH_CONCURRENCY)
        .collect()
        .await;

    let history = assemble(per_date);
    if history.is_empty() {
        warn!("No collection data anywhere in the window; serving sample history");
        return LoadOutcome::Sample(generate_sample_history(today, &mut rand::rng()));
    }

    info!(days = history.len(), "Aggregated collection history");
    LoadOutcome::Fetched(history)
}

/// Drop the failed dates, keeping the successes in their window order.
fn assemble(per_date: Vec<Option<CollectionHistory>>) -> Vec<CollectionHistory> {
    per_date.into_iter().flatten().collect()
}
