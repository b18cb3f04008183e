//! Tag endpoints.

use super::{ApiClient, NoBody};
use crate::errors::SyncResult;
use crate::models::{BulkTagRequest, NewTag, Tag};

impl ApiClient {
    /// GET /tags
    pub async fn list_tags(&self) -> SyncResult<Vec<Tag>> {
        self.get("/tags").await
    }

    /// POST /tags
    pub async fn create_tag(&self, tag: &NewTag) -> SyncResult<Tag> {
        self.post("/tags", Some(tag)).await
    }

    /// DELETE /tags/{id}
    pub async fn delete_tag(&self, id: i64) -> SyncResult<()> {
        self.delete(&format!("/tags/{id}")).await
    }

    /// POST /keywords/{id}/tags/{tagId}
    pub async fn add_keyword_tag(&self, keyword_id: i64, tag_id: i64) -> SyncResult<()> {
        self.post_empty::<NoBody>(&format!("/keywords/{keyword_id}/tags/{tag_id}"), None)
            .await
    }

    /// DELETE /keywords/{id}/tags/{tagId}
    pub async fn remove_keyword_tag(&self, keyword_id: i64, tag_id: i64) -> SyncResult<()> {
        self.delete(&format!("/keywords/{keyword_id}/tags/{tag_id}"))
            .await
    }

    /// POST /keywords/bulk-tag
    pub async fn bulk_tag(&self, request: &BulkTagRequest) -> SyncResult<()> {
        self.post_empty("/keywords/bulk-tag", Some(request)).await
    }
}
