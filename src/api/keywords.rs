//! Keyword endpoints.

use super::ApiClient;
use crate::errors::SyncResult;
use crate::models::{Keyword, NewKeyword, NewKeywords};

impl ApiClient {
    /// GET /projects/{id}/keywords
    pub async fn list_project_keywords(&self, project_id: i64) -> SyncResult<Vec<Keyword>> {
        self.get(&format!("/projects/{project_id}/keywords")).await
    }

    /// POST /projects/{id}/keywords
    pub async fn create_keyword(&self, project_id: i64, keyword: &NewKeyword) -> SyncResult<Keyword> {
        self.post(&format!("/projects/{project_id}/keywords"), Some(keyword))
            .await
    }

    /// DELETE /projects/{id}/keywords
    pub async fn delete_project_keywords(&self, project_id: i64) -> SyncResult<()> {
        self.delete(&format!("/projects/{project_id}/keywords")).await
    }

    /// GET /keywords
    pub async fn list_keywords(&self) -> SyncResult<Vec<Keyword>> {
        self.get("/keywords").await
    }

    /// POST /keywords
    pub async fn create_keywords(&self, keywords: &NewKeywords) -> SyncResult<Vec<Keyword>> {
        self.post("/keywords", Some(keywords)).await
    }

    /// DELETE /keywords/{id}
    pub async fn delete_keyword(&self, id: i64) -> SyncResult<()> {
        self.delete(&format!("/keywords/{id}")).await
    }

    /// PUT /keywords/{id}/activate
    pub async fn activate_keyword(&self, id: i64) -> SyncResult<()> {
        self.put_empty(&format!("/keywords/{id}/activate")).await
    }

    /// PUT /keywords/{id}/deactivate
    pub async fn deactivate_keyword(&self, id: i64) -> SyncResult<()> {
        self.put_empty(&format!("/keywords/{id}/deactivate")).await
    }
}
