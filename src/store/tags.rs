//! Tag actions and keyword tag assignment.

use super::{log_error, note_miss, require_ids, require_text, SyncStore};
use crate::errors::SyncResult;
use crate::models::{BulkTagRequest, Keyword, NewTag, Tag};
use crate::normalize::Normalize;
use crate::reconcile::EntityKind;

impl SyncStore {
    pub async fn fetch_tags(&self) -> SyncResult<Vec<Tag>> {
        let tags = self
            .api
            .list_tags()
            .await
            .inspect_err(log_error("fetching tags"))?
            .normalize();

        self.state.write().await.cache.tags.replace(tags.clone());
        Ok(tags)
    }

    pub async fn add_tag(&self, name: &str) -> SyncResult<Tag> {
        require_text(name, "Tag name")?;

        let request = NewTag {
            name: name.to_string(),
        };
        let created = self
            .api
            .create_tag(&request)
            .await
            .inspect_err(log_error("adding tag"))?
            .normalize();

        self.state.write().await.cache.tags.insert(created.clone());
        Ok(created)
    }

    /// Delete a tag. Keywords keep existing; only the relation goes.
    pub async fn delete_tag(&self, id: i64) -> SyncResult<()> {
        self.api
            .delete_tag(id)
            .await
            .inspect_err(log_error("deleting tag"))?;

        self.state.write().await.cache.delete(EntityKind::Tag, id);
        Ok(())
    }

    pub async fn add_tag_to_keyword(&self, keyword_id: i64, tag_id: i64) -> SyncResult<()> {
        self.api
            .add_keyword_tag(keyword_id, tag_id)
            .await
            .inspect_err(log_error("adding tag to keyword"))?;

        let found = self
            .state
            .write()
            .await
            .cache
            .keywords
            .modify(keyword_id, |k| k.attach_tag(tag_id));
        note_miss::<Keyword>(found, keyword_id);
        Ok(())
    }

    pub async fn remove_tag_from_keyword(&self, keyword_id: i64, tag_id: i64) -> SyncResult<()> {
        self.api
            .remove_keyword_tag(keyword_id, tag_id)
            .await
            .inspect_err(log_error("removing tag from keyword"))?;

        let found = self
            .state
            .write()
            .await
            .cache
            .keywords
            .modify(keyword_id, |k| k.detach_tag(tag_id));
        note_miss::<Keyword>(found, keyword_id);
        Ok(())
    }

    /// Assign one tag to many keywords in a single request.
    pub async fn bulk_tag_keywords(&self, keyword_ids: &[i64], tag_id: i64) -> SyncResult<()> {
        require_ids(keyword_ids, "At least one keyword")?;

        let request = BulkTagRequest {
            keyword_ids: keyword_ids.to_vec(),
            tag_id,
        };
        self.api
            .bulk_tag(&request)
            .await
            .inspect_err(log_error("bulk tagging keywords"))?;

        let mut state = self.state.write().await;
        for &keyword_id in keyword_ids {
            let found = state
                .cache
                .keywords
                .modify(keyword_id, |k| k.attach_tag(tag_id));
            note_miss::<Keyword>(found, keyword_id);
        }
        Ok(())
    }
}
