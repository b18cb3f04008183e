//! Search-console domain binding and volume-provider settings.

use super::{log_error, require_text, SyncStore};
use crate::errors::SyncResult;
use crate::models::{
    NewSearchConsoleDomain, SearchConsoleDomain, SearchConsoleDomainUpdate, SearchVolumeSource,
};
use crate::normalize::Normalize;

impl SyncStore {
    pub async fn fetch_gsc_domains(&self) -> SyncResult<Vec<SearchConsoleDomain>> {
        let domains = self
            .api
            .list_gsc_domains()
            .await
            .inspect_err(log_error("fetching GSC domains"))?
            .normalize();

        self.state.write().await.cache.gsc_domains.replace(domains.clone());
        Ok(domains)
    }

    /// Register a domain for a project and make it the current binding.
    ///
    /// Returns the server-assigned domain id.
    pub async fn add_gsc_domain(&self, domain: &str, project_id: i64) -> SyncResult<i64> {
        require_text(domain, "Domain")?;

        let request = NewSearchConsoleDomain {
            domain: domain.to_string(),
            project_id,
        };
        let created = self
            .api
            .create_gsc_domain(&request)
            .await
            .inspect_err(log_error("adding GSC domain"))?;

        let mut state = self.state.write().await;
        state.cache.gsc_domains.insert(SearchConsoleDomain {
            id: created.domain_id,
            domain: request.domain,
            project_id: Some(project_id),
            user_id: None,
        });
        state.current_gsc_domain = Some(created.domain_id);
        tracing::info!("Bound GSC domain {} to project {}", created.domain_id, project_id);
        Ok(created.domain_id)
    }

    /// Rebind a domain to a project and make it the current binding.
    pub async fn update_gsc_domain(&self, id: i64, project_id: i64) -> SyncResult<SearchConsoleDomain> {
        let updated = self
            .api
            .update_gsc_domain(id, &SearchConsoleDomainUpdate { project_id })
            .await
            .inspect_err(log_error("updating GSC domain"))?
            .normalize();

        let mut state = self.state.write().await;
        state.cache.gsc_domains.upsert(updated.clone());
        state.current_gsc_domain = Some(updated.id);
        Ok(updated)
    }

    pub async fn search_volume_source(&self) -> SyncResult<String> {
        let source = self
            .api
            .search_volume_source()
            .await
            .inspect_err(log_error("fetching search volume source"))?;

        self.state.write().await.search_volume_source = Some(source.source.clone());
        Ok(source.source)
    }

    pub async fn set_search_volume_source(&self, source: &str) -> SyncResult<String> {
        require_text(source, "Search volume source")?;

        let request = SearchVolumeSource {
            source: source.to_string(),
        };
        let stored = self
            .api
            .set_search_volume_source(&request)
            .await
            .inspect_err(log_error("updating search volume source"))?;

        self.state.write().await.search_volume_source = Some(stored.source.clone());
        Ok(stored.source)
    }
}
