//! REST client for the rank tracker API.
//!
//! One method per (verb, path). Each call makes exactly one attempt; non-2xx
//! responses become [`SyncError::Server`] carrying the server's `detail`, and
//! requests that never get a response become [`SyncError::Network`].

mod analytics;
mod gsc;
mod keywords;
mod projects;
mod schedules;
mod serp;
mod tags;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::{SyncError, SyncResult};

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP boundary to the tracker API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> SyncResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| SyncError::Client(format!("API key is not a valid header value: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SyncError::Client(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        self.http.request(method, self.url(path))
    }

    /// Send once and translate transport and status failures.
    async fn send(&self, request: RequestBuilder) -> SyncResult<Response> {
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(SyncError::from_response(status, &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> SyncResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: Option<&B>) -> SyncResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.request(Method::POST, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: Option<&B>) -> SyncResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.request(Method::PUT, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// PUT whose response body is ignored.
    pub(crate) async fn put_empty(&self, path: &str) -> SyncResult<()> {
        self.send(self.request(Method::PUT, path)).await?;
        Ok(())
    }

    /// POST whose response body is ignored.
    pub(crate) async fn post_empty<B>(&self, path: &str, body: Option<&B>) -> SyncResult<()>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.request(Method::POST, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await?;
        Ok(())
    }

    /// DELETE endpoints return no body.
    pub(crate) async fn delete(&self, path: &str) -> SyncResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

/// Body type for calls that send none.
pub(crate) type NoBody = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::codes;

    #[test]
    fn test_unusable_api_key_is_a_client_error() {
        let mut config = Config::for_url("http://localhost:5001/api");
        config.api_key = Some("bad\nkey".to_string());

        let err = ApiClient::new(&config).err().expect("header value should be rejected");

        assert!(matches!(err, SyncError::Client(_)));
        assert_eq!(err.error_code(), codes::CLIENT_ERROR);
        assert!(err.to_string().contains("API key is not a valid header value"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new(&Config::for_url("http://localhost:5001/api/")).unwrap();
        assert_eq!(client.url("/projects"), "http://localhost:5001/api/projects");
    }
}
