//! History, share-of-voice and volume-provider endpoints.

use serde_json::Value;

use super::ApiClient;
use crate::errors::SyncResult;
use crate::models::{HistoryPoint, SearchVolumeSource, ShareOfVoiceRequest};

impl ApiClient {
    /// GET /keyword-history/{keywordId}
    pub async fn keyword_history(&self, keyword_id: i64) -> SyncResult<Vec<HistoryPoint>> {
        self.get(&format!("/keyword-history/{keyword_id}")).await
    }

    /// POST /share-of-voice/{projectId}
    ///
    /// The aggregate's shape is defined by the server.
    pub async fn share_of_voice(
        &self,
        project_id: i64,
        request: &ShareOfVoiceRequest,
    ) -> SyncResult<Value> {
        self.post(&format!("/share-of-voice/{project_id}"), Some(request))
            .await
    }

    /// GET /search-volume-api-source
    pub async fn search_volume_source(&self) -> SyncResult<SearchVolumeSource> {
        self.get("/search-volume-api-source").await
    }

    /// POST /search-volume-api-source
    pub async fn set_search_volume_source(
        &self,
        source: &SearchVolumeSource,
    ) -> SyncResult<SearchVolumeSource> {
        self.post("/search-volume-api-source", Some(source)).await
    }
}
