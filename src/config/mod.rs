//! Configuration module for the rank sync client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the rank tracker API, including the `/api` prefix
    pub api_url: String,
    /// Optional API key sent as `x-api-key`
    pub api_key: Option<String>,
    /// Transport-level timeout for a single request
    pub request_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Project whose active keywords the binary refreshes
    pub refresh_project: Option<i64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("RANK_API_URL")
            .unwrap_or_else(|_| "http://localhost:5001/api".to_string())
            .trim_end_matches('/')
            .to_string();

        let api_key = env::var("RANK_API_KEY").ok().filter(|k| !k.is_empty());

        let request_timeout = env::var("RANK_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let log_level = env::var("RANK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("RANK_LOG_JSON")
            .map(|v| matches!(v.as_str(), "1" | "true"))
            .unwrap_or(false);

        let refresh_project = env::var("RANK_REFRESH_PROJECT")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            api_url,
            api_key,
            request_timeout,
            log_level,
            log_json,
            refresh_project,
        }
    }

    /// Configuration pointing at a specific API base, with defaults elsewhere.
    pub fn for_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: "info".to_string(),
            log_json: false,
            refresh_project: None,
        }
    }
}
