//! Error handling module for the rank sync layer.
//!
//! Every failure that leaves this crate is a [`SyncError`]. Field-level parse
//! failures never reach this type; the normalizer recovers them locally.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const MISSING_ARGUMENT: &str = "MISSING_ARGUMENT";
    pub const CLIENT_ERROR: &str = "CLIENT_ERROR";
}

/// Sync layer error type.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No response was received from the server
    #[error("{0}")]
    Network(String),
    /// Non-2xx response
    #[error("{message}")]
    Server {
        status: u16,
        detail: Option<String>,
        message: String,
    },
    /// A 2xx body that did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),
    /// A required argument was empty
    #[error("{0} is required")]
    MissingArgument(&'static str),
    /// The HTTP client could not be set up from configuration
    #[error("invalid client configuration: {0}")]
    Client(String),
}

impl SyncError {
    /// Build a server error from a status and the raw response body.
    ///
    /// The server's `detail` becomes the primary message when present.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let detail = extract_detail(body);
        let message = detail
            .clone()
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

        SyncError::Server {
            status: status.as_u16(),
            detail,
            message,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            SyncError::Network(_) => codes::NETWORK_ERROR,
            SyncError::Server { .. } if self.is_validation() => codes::VALIDATION_ERROR,
            SyncError::Server { .. } => codes::SERVER_ERROR,
            SyncError::Decode(_) => codes::DECODE_ERROR,
            SyncError::MissingArgument(_) => codes::MISSING_ARGUMENT,
            SyncError::Client(_) => codes::CLIENT_ERROR,
        }
    }

    /// HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            SyncError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied detail message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SyncError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// A server-side rejection of the request's input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SyncError::Server {
                status: 400 | 422,
                detail: Some(_),
                ..
            }
        )
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else {
            SyncError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Decode(err.to_string())
    }
}

/// Result alias used by every action.
pub type SyncResult<T> = Result<T, SyncError>;

/// Pull the `detail` message out of an error body.
///
/// FastAPI-style bodies carry either a string or a list of `{ "msg": ... }`
/// objects.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_becomes_message() {
        let err = SyncError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "Project with this domain already exists"}"#,
        );

        assert_eq!(err.to_string(), "Project with this domain already exists");
        assert_eq!(err.status(), Some(400));
        assert!(err.is_validation());
        assert_eq!(err.error_code(), codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_generic_message_without_detail() {
        let err = SyncError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "boom");

        assert_eq!(err.to_string(), "Request failed with status code 500");
        assert_eq!(err.detail(), None);
        assert_eq!(err.error_code(), codes::SERVER_ERROR);
    }

    #[test]
    fn test_list_detail_is_joined() {
        let body = r#"{"detail": [{"loc": ["body", "name"], "msg": "field required"},
                                  {"loc": ["body", "domain"], "msg": "field required"}]}"#;
        let err = SyncError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);

        assert_eq!(err.detail(), Some("field required; field required"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_is_not_validation() {
        let err = SyncError::from_response(StatusCode::NOT_FOUND, r#"{"detail": "Keyword not found"}"#);

        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Keyword not found");
    }

    #[test]
    fn test_missing_argument_message() {
        let err = SyncError::MissingArgument("Project name");
        assert_eq!(err.to_string(), "Project name is required");
        assert_eq!(err.error_code(), codes::MISSING_ARGUMENT);
    }

    #[test]
    fn test_client_error_names_the_setup_failure() {
        let err = SyncError::Client("failed to build HTTP client: no TLS backend".to_string());
        assert_eq!(
            err.to_string(),
            "invalid client configuration: failed to build HTTP client: no TLS backend"
        );
        assert_eq!(err.error_code(), codes::CLIENT_ERROR);
        assert_eq!(err.status(), None);
    }
}
