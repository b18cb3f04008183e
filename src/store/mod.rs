//! The process-wide cache of tracker entities and the actions the UI calls.
//!
//! Every action has the same shape: check argument presence, call the API
//! once, and only on success normalize the result and reconcile it into the
//! cache. A failed call leaves the cache exactly as it was. The write lock is
//! taken after the remote call resolves, so entities are always located by id
//! against the current state, never a pre-call snapshot.

mod gsc;
mod keywords;
mod projects;
mod rank;
mod schedules;
mod tags;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::{SyncError, SyncResult};
use crate::models::{Keyword, Project, RankEntry, Schedule, SearchConsoleDomain, Tag};
use crate::reconcile::{Cache, Entity};

/// Cached collections plus the client-side bindings.
#[derive(Debug, Default)]
struct State {
    cache: Cache,
    /// The search-console domain currently bound, by id
    current_gsc_domain: Option<i64>,
    search_volume_source: Option<String>,
}

/// Single owner of every cached collection.
///
/// Cloning is cheap and clones share the same cache.
#[derive(Clone)]
pub struct SyncStore {
    api: ApiClient,
    state: Arc<RwLock<State>>,
}

impl SyncStore {
    /// Create a store talking to the configured API.
    pub fn new(config: &Config) -> SyncResult<Self> {
        Ok(Self::with_client(ApiClient::new(config)?))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(State::default())),
        }
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.state.read().await.cache.projects.items().to_vec()
    }

    pub async fn project(&self, id: i64) -> Option<Project> {
        self.state.read().await.cache.projects.get(id).cloned()
    }

    pub async fn keywords(&self) -> Vec<Keyword> {
        self.state.read().await.cache.keywords.items().to_vec()
    }

    pub async fn keyword(&self, id: i64) -> Option<Keyword> {
        self.state.read().await.cache.keywords.get(id).cloned()
    }

    /// Cached keywords belonging to one project, in cache order.
    pub async fn keywords_for_project(&self, project_id: i64) -> Vec<Keyword> {
        self.state
            .read()
            .await
            .cache
            .keywords
            .items()
            .iter()
            .filter(|k| k.project_id == project_id)
            .cloned()
            .collect()
    }

    pub async fn rank_data(&self) -> Vec<RankEntry> {
        self.state.read().await.cache.rank_data.items().to_vec()
    }

    pub async fn tags(&self) -> Vec<Tag> {
        self.state.read().await.cache.tags.items().to_vec()
    }

    pub async fn schedules(&self) -> Vec<Schedule> {
        self.state.read().await.cache.schedules.items().to_vec()
    }

    pub async fn gsc_domains(&self) -> Vec<SearchConsoleDomain> {
        self.state.read().await.cache.gsc_domains.items().to_vec()
    }

    /// Id of the search-console domain currently bound, if any.
    pub async fn current_gsc_domain(&self) -> Option<i64> {
        self.state.read().await.current_gsc_domain
    }

    /// Last known search-volume provider.
    pub async fn cached_search_volume_source(&self) -> Option<String> {
        self.state.read().await.search_volume_source.clone()
    }
}

/// Log a failed action before it propagates.
fn log_error(action: &'static str) -> impl Fn(&SyncError) {
    move |err| tracing::error!("Error {}: {}", action, err)
}

/// Argument-presence check for free text.
fn require_text(value: &str, what: &'static str) -> SyncResult<()> {
    if value.trim().is_empty() {
        return Err(SyncError::MissingArgument(what));
    }
    Ok(())
}

/// Argument-presence check for id lists.
fn require_ids(ids: &[i64], what: &'static str) -> SyncResult<()> {
    if ids.is_empty() {
        return Err(SyncError::MissingArgument(what));
    }
    Ok(())
}

/// Log when an in-place change found nothing to touch.
fn note_miss<T: Entity>(found: bool, id: i64) {
    if !found {
        tracing::debug!("{:?} {} is not cached, nothing to update", T::KIND, id);
    }
}
