//! Keyword actions, including the active/inactive lifecycle.

use super::{log_error, note_miss, require_text, SyncStore};
use crate::errors::{SyncError, SyncResult};
use crate::models::{Keyword, NewKeyword, NewKeywords};
use crate::normalize::Normalize;
use crate::reconcile::EntityKind;

impl SyncStore {
    /// Replace the cached keywords with one project's list.
    pub async fn fetch_keywords(&self, project_id: i64) -> SyncResult<Vec<Keyword>> {
        let keywords = self
            .api
            .list_project_keywords(project_id)
            .await
            .inspect_err(log_error("fetching keywords"))?
            .normalize();

        self.state.write().await.cache.keywords.replace(keywords.clone());
        Ok(keywords)
    }

    /// Replace the cached keywords with every keyword the server tracks.
    pub async fn fetch_all_keywords(&self) -> SyncResult<Vec<Keyword>> {
        let keywords = self
            .api
            .list_keywords()
            .await
            .inspect_err(log_error("fetching keywords"))?
            .normalize();

        self.state.write().await.cache.keywords.replace(keywords.clone());
        Ok(keywords)
    }

    pub async fn add_keyword(&self, project_id: i64, text: &str) -> SyncResult<Keyword> {
        require_text(text, "Keyword")?;

        let request = NewKeyword {
            keyword: text.to_string(),
        };
        let created = self
            .api
            .create_keyword(project_id, &request)
            .await
            .inspect_err(log_error("adding keyword"))?
            .normalize();

        self.state.write().await.cache.keywords.insert(created.clone());
        Ok(created)
    }

    /// Add many keywords in one request. Blank entries are dropped.
    pub async fn add_keywords(&self, project_id: i64, texts: &[String]) -> SyncResult<Vec<Keyword>> {
        let keywords: Vec<String> = texts
            .iter()
            .filter(|t| !t.trim().is_empty())
            .cloned()
            .collect();
        if keywords.is_empty() {
            return Err(SyncError::MissingArgument("At least one keyword"));
        }

        let request = NewKeywords {
            project_id,
            keywords,
        };
        let created = self
            .api
            .create_keywords(&request)
            .await
            .inspect_err(log_error("adding keywords"))?
            .normalize();

        self.state.write().await.cache.keywords.extend(created.clone());
        tracing::info!("Added {} keywords to project {}", created.len(), project_id);
        Ok(created)
    }

    /// Delete a keyword and its cached rank entries.
    pub async fn delete_keyword(&self, id: i64) -> SyncResult<()> {
        self.api
            .delete_keyword(id)
            .await
            .inspect_err(log_error("deleting keyword"))?;

        self.state.write().await.cache.delete(EntityKind::Keyword, id);
        Ok(())
    }

    /// Delete every keyword of a project.
    pub async fn delete_all_keywords(&self, project_id: i64) -> SyncResult<()> {
        self.api
            .delete_project_keywords(project_id)
            .await
            .inspect_err(log_error("deleting all keywords"))?;

        let mut state = self.state.write().await;
        let doomed: Vec<i64> = state
            .cache
            .keywords
            .items()
            .iter()
            .filter(|k| k.project_id == project_id)
            .map(|k| k.id)
            .collect();
        for id in &doomed {
            state.cache.delete(EntityKind::Keyword, *id);
        }
        tracing::info!("Deleted {} keywords of project {}", doomed.len(), project_id);
        Ok(())
    }

    pub async fn activate_keyword(&self, id: i64) -> SyncResult<()> {
        self.api
            .activate_keyword(id)
            .await
            .inspect_err(log_error("activating keyword"))?;

        self.set_keyword_active(id, true).await;
        Ok(())
    }

    pub async fn deactivate_keyword(&self, id: i64) -> SyncResult<()> {
        self.api
            .deactivate_keyword(id)
            .await
            .inspect_err(log_error("deactivating keyword"))?;

        self.set_keyword_active(id, false).await;
        Ok(())
    }

    async fn set_keyword_active(&self, id: i64, active: bool) {
        let found = self
            .state
            .write()
            .await
            .cache
            .keywords
            .modify(id, |k| k.active = active);
        note_miss::<Keyword>(found, id);
    }
}
