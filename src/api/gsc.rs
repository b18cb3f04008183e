//! Search-console domain endpoints.

use super::ApiClient;
use crate::errors::SyncResult;
use crate::models::{
    NewSearchConsoleDomain, SearchConsoleDomain, SearchConsoleDomainCreated,
    SearchConsoleDomainUpdate,
};

impl ApiClient {
    /// GET /gsc/domains
    pub async fn list_gsc_domains(&self) -> SyncResult<Vec<SearchConsoleDomain>> {
        self.get("/gsc/domains").await
    }

    /// POST /gsc/domains
    pub async fn create_gsc_domain(
        &self,
        domain: &NewSearchConsoleDomain,
    ) -> SyncResult<SearchConsoleDomainCreated> {
        self.post("/gsc/domains", Some(domain)).await
    }

    /// PUT /gsc/domains/{id}
    pub async fn update_gsc_domain(
        &self,
        id: i64,
        update: &SearchConsoleDomainUpdate,
    ) -> SyncResult<SearchConsoleDomain> {
        self.put(&format!("/gsc/domains/{id}"), Some(update)).await
    }
}
