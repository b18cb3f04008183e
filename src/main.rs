//! Rank Sync
//!
//! Pulls every tracker collection into a store once and, when configured,
//! refreshes one project's active keywords.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rank_sync::{Config, SyncStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting rank sync");
    tracing::info!("API base: {}", config.api_url);

    if config.api_key.is_none() {
        tracing::warn!("No API key configured (RANK_API_KEY). Requests are unauthenticated");
    }

    let store = SyncStore::new(&config)?;

    let projects = store.fetch_projects().await?;
    let keywords = store.fetch_all_keywords().await?;
    let rank_data = store.fetch_rank_data().await?;
    let tags = store.fetch_tags().await?;
    let schedules = store.fetch_schedules().await?;

    tracing::info!(
        "Synced {} projects, {} keywords, {} rank entries, {} tags, {} schedules",
        projects.len(),
        keywords.len(),
        rank_data.len(),
        tags.len(),
        schedules.len()
    );

    if let Some(project_id) = config.refresh_project {
        let active: Vec<i64> = store
            .keywords_for_project(project_id)
            .await
            .into_iter()
            .filter(|k| k.active)
            .map(|k| k.id)
            .collect();

        tracing::info!(
            "Refreshing {} active keywords of project {}",
            active.len(),
            project_id
        );

        match store.fetch_serp_data_for_keywords(&active).await {
            Ok(report) => tracing::info!(
                "Refreshed {} keywords, {} rank entries cached",
                report.processed.len(),
                report.refreshed
            ),
            Err(e) => {
                tracing::error!(
                    "Refresh stopped after {} keywords (failed at {:?})",
                    e.processed.len(),
                    e.failed_keyword
                );
                return Err(e.into());
            }
        }
    }

    Ok(())
}
