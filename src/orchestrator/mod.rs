//! Strictly sequential per-keyword fetch loop.
//!
//! Each per-item fetch triggers an expensive search-result lookup on the
//! server, so items run one at a time in input order. The first failure stops
//! the loop; later items are never attempted.

use std::future::Future;

use thiserror::Error;

use crate::errors::SyncError;

/// Outcome of a bulk run that completed every item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkReport {
    /// Keyword ids fetched, in the order they ran
    pub processed: Vec<i64>,
    /// Size of the rank data collection after the aggregate refresh
    pub refreshed: usize,
}

/// A bulk run that stopped at its first failing item.
///
/// Displays as the underlying error so callers can show the server's detail.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct BulkFetchError {
    /// Keyword ids fetched before the failure, in order
    pub processed: Vec<i64>,
    /// The keyword whose fetch failed; `None` when every item succeeded and
    /// the aggregate refresh failed
    pub failed_keyword: Option<i64>,
    pub source: SyncError,
}

impl BulkFetchError {
    /// Every item ran but the aggregate refresh did not.
    pub fn refresh_failed(processed: Vec<i64>, source: SyncError) -> Self {
        Self {
            processed,
            failed_keyword: None,
            source,
        }
    }

    /// The failing item's error, unchanged.
    pub fn into_source(self) -> SyncError {
        self.source
    }
}

/// Run `fetch_one` for each keyword id, awaiting each before starting the next.
///
/// Returns the processed ids on success, or the processed prefix together with
/// the failing item and its error.
pub async fn run_in_order<F, Fut>(
    keyword_ids: &[i64],
    mut fetch_one: F,
) -> Result<Vec<i64>, BulkFetchError>
where
    F: FnMut(i64) -> Fut,
    Fut: Future<Output = Result<(), SyncError>>,
{
    let total = keyword_ids.len();
    let mut processed = Vec::with_capacity(total);

    for (index, &keyword_id) in keyword_ids.iter().enumerate() {
        tracing::info!(
            "Fetching SERP data for keyword {} ({}/{})",
            keyword_id,
            index + 1,
            total
        );

        if let Err(source) = fetch_one(keyword_id).await {
            tracing::error!(
                "SERP fetch for keyword {} failed, skipping {} remaining: {}",
                keyword_id,
                total - index - 1,
                source
            );
            return Err(BulkFetchError {
                processed,
                failed_keyword: Some(keyword_id),
                source,
            });
        }

        processed.push(keyword_id);
    }

    Ok(processed)
}
