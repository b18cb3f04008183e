//! Rank Sync
//!
//! Client-side synchronization layer between the keyword rank tracker API and
//! an in-memory cache read by the UI.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod reconcile;
pub mod store;

pub use api::ApiClient;
pub use config::Config;
pub use errors::{SyncError, SyncResult};
pub use orchestrator::{BulkFetchError, BulkReport};
pub use store::SyncStore;
