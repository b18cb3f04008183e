//! Rank data and SERP fetch endpoints.

use super::{ApiClient, NoBody};
use crate::errors::SyncResult;
use crate::models::{Ack, RankEntry, SerpFetchFilter, SerpFetchResult};

impl ApiClient {
    /// GET /rankData
    pub async fn list_rank_data(&self) -> SyncResult<Vec<RankEntry>> {
        self.get("/rankData").await
    }

    /// POST /fetch-serp-data/{projectId}
    pub async fn fetch_project_serp(&self, project_id: i64, filter: &SerpFetchFilter) -> SyncResult<Ack> {
        self.post(&format!("/fetch-serp-data/{project_id}"), Some(filter))
            .await
    }

    /// POST /fetch-serp-data-by-tag/{tagId}
    pub async fn fetch_tag_serp(&self, tag_id: i64) -> SyncResult<Ack> {
        self.post::<NoBody, _>(&format!("/fetch-serp-data-by-tag/{tag_id}"), None)
            .await
    }

    /// POST /fetch-serp-data-single/{keywordId}
    pub async fn fetch_keyword_serp(&self, keyword_id: i64) -> SyncResult<SerpFetchResult> {
        self.post::<NoBody, _>(&format!("/fetch-serp-data-single/{keyword_id}"), None)
            .await
    }

    /// GET /serp-data/{id}
    pub async fn get_serp_data(&self, id: i64) -> SyncResult<RankEntry> {
        self.get(&format!("/serp-data/{id}")).await
    }

    /// GET /serp-data/keyword/{id}
    pub async fn list_keyword_serp_data(&self, keyword_id: i64) -> SyncResult<Vec<RankEntry>> {
        self.get(&format!("/serp-data/keyword/{keyword_id}")).await
    }

    /// DELETE /serp_data/{id}
    pub async fn delete_serp_data(&self, id: i64) -> SyncResult<()> {
        self.delete(&format!("/serp_data/{id}")).await
    }
}
