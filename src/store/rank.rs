//! Rank data actions: collection refresh, SERP fetch triggers and the
//! sequential bulk refresh.

use serde_json::Value;

use super::{log_error, SyncStore};
use crate::errors::SyncResult;
use crate::models::{
    Ack, HistoryPoint, RankEntry, SerpFetchFilter, SerpFetchResult, ShareOfVoiceRequest,
};
use crate::normalize::Normalize;
use crate::orchestrator::{run_in_order, BulkFetchError, BulkReport};
use crate::reconcile::EntityKind;

impl SyncStore {
    /// Replace the cached rank data with the server's full collection.
    pub async fn fetch_rank_data(&self) -> SyncResult<Vec<RankEntry>> {
        let entries = self
            .api
            .list_rank_data()
            .await
            .inspect_err(log_error("fetching rank data"))?
            .normalize();

        self.state.write().await.cache.rank_data.replace(entries.clone());
        Ok(entries)
    }

    /// Trigger a server-side fetch for a project, then re-sync rank data.
    pub async fn fetch_serp_data(&self, project_id: i64, tag_id: Option<i64>) -> SyncResult<Ack> {
        let ack = self
            .api
            .fetch_project_serp(project_id, &SerpFetchFilter { tag_id })
            .await
            .inspect_err(log_error("fetching SERP data"))?;

        self.fetch_rank_data().await?;
        Ok(ack)
    }

    /// Trigger a server-side fetch for every keyword with a tag, then re-sync.
    pub async fn fetch_serp_data_by_tag(&self, tag_id: i64) -> SyncResult<Ack> {
        let ack = self
            .api
            .fetch_tag_serp(tag_id)
            .await
            .inspect_err(log_error("fetching SERP data by tag"))?;

        self.fetch_rank_data().await?;
        Ok(ack)
    }

    /// Trigger a fetch for one keyword. A returned entry is inserted.
    pub async fn fetch_single_serp_data(&self, keyword_id: i64) -> SyncResult<SerpFetchResult> {
        let result = self
            .api
            .fetch_keyword_serp(keyword_id)
            .await
            .inspect_err(log_error("fetching single SERP data"))?
            .normalize();

        if let SerpFetchResult::Entry(entry) = &result {
            self.state.write().await.cache.rank_data.insert(entry.clone());
        }
        Ok(result)
    }

    /// Fetch keywords one at a time in order, then re-sync rank data once.
    ///
    /// Stops at the first failing keyword: later keywords are not attempted,
    /// the re-sync does not run, and entries reconciled before the failure stay
    /// cached.
    pub async fn fetch_serp_data_for_keywords(
        &self,
        keyword_ids: &[i64],
    ) -> Result<BulkReport, BulkFetchError> {
        let processed = run_in_order(keyword_ids, move |keyword_id| async move {
            self.fetch_single_serp_data(keyword_id).await.map(|_| ())
        })
        .await?;

        match self.fetch_rank_data().await {
            Ok(entries) => {
                tracing::info!(
                    "Bulk SERP fetch finished: {} keywords, {} rank entries",
                    processed.len(),
                    entries.len()
                );
                Ok(BulkReport {
                    processed,
                    refreshed: entries.len(),
                })
            }
            Err(e) => Err(BulkFetchError::refresh_failed(processed, e)),
        }
    }

    /// Read one entry's full payload. Returned, not cached.
    pub async fn fetch_full_serp_data(&self, id: i64) -> SyncResult<RankEntry> {
        Ok(self
            .api
            .get_serp_data(id)
            .await
            .inspect_err(log_error("fetching full SERP data"))?
            .normalize())
    }

    /// Read every entry recorded for one keyword. Returned, not cached.
    pub async fn fetch_keyword_serp_data(&self, keyword_id: i64) -> SyncResult<Vec<RankEntry>> {
        Ok(self
            .api
            .list_keyword_serp_data(keyword_id)
            .await
            .inspect_err(log_error("fetching keyword SERP data"))?
            .normalize())
    }

    pub async fn delete_rank_data(&self, id: i64) -> SyncResult<()> {
        self.api
            .delete_serp_data(id)
            .await
            .inspect_err(log_error("deleting rank data"))?;

        self.state.write().await.cache.delete(EntityKind::RankEntry, id);
        Ok(())
    }

    pub async fn keyword_history(&self, keyword_id: i64) -> SyncResult<Vec<HistoryPoint>> {
        Ok(self
            .api
            .keyword_history(keyword_id)
            .await
            .inspect_err(log_error("fetching keyword history"))?
            .normalize())
    }

    pub async fn share_of_voice(
        &self,
        project_id: i64,
        request: ShareOfVoiceRequest,
    ) -> SyncResult<Value> {
        self.api
            .share_of_voice(project_id, &request)
            .await
            .inspect_err(log_error("computing share of voice"))
    }
}
