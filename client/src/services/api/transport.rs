//! # HTTP Transport
//!
//! The seam between [`super::client::ApiClient`] and the network. The facade
//! builds an [`ApiRequest`], the transport turns it into an [`ApiResponse`].
//!
//! - [`ReqwestTransport`]: real HTTP via `reqwest`
//! - [`crate::mock::MockBackend`]: in-memory fixture server
//! - [`crate::mock::OfflineTransport`]: always fails, for degraded-mode tests

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::core::error::{ClientError, Result};

/// HTTP verbs the facade exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Outgoing request, path relative to the backend base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path plus optional query string, e.g. `/social/feed?page=1`
    pub path: String,
    /// Access token for `Authorization: Bearer`
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    /// Path without the query string
    pub fn route(&self) -> &str {
        self.path.split('?').next().unwrap_or_default()
    }

    /// Value of query parameter `name`, if present
    pub fn query_param(&self, name: &str) -> Option<&str> {
        let (_, query) = self.path.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

/// Raw response: status code and body bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// JSON response with status 200
    pub fn json(value: &impl serde::Serialize) -> Result<Self> {
        Self::json_with_status(200, value)
    }

    pub fn json_with_status(status: u16, value: &impl serde::Serialize) -> Result<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(Self::new(status, body))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase of the status code ("Not Found", ...)
    pub fn status_text(&self) -> String {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string()
    }
}

/// Sends [`ApiRequest`]s somewhere and returns what came back.
///
/// Non-2xx statuses are *responses*, not errors: the facade decides what a
/// status means. Implementations return `Err` only when no response exists.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Real HTTP transport backed by a pooled `reqwest::Client`
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Create a transport for `base_url`.
    ///
    /// Without a timeout a hung backend blocks the caller indefinitely, which
    /// is the default.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .header("Content-Type", "application/json");

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Network error");
            ClientError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(format!("failed to read response body: {e}")))?;

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_is_canonical_reason() {
        assert_eq!(ApiResponse::new(404, Vec::new()).status_text(), "Not Found");
        assert_eq!(ApiResponse::new(500, Vec::new()).status_text(), "Internal Server Error");
        assert_eq!(ApiResponse::new(599, Vec::new()).status_text(), "Unknown Status");
    }

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(200, Vec::new()).is_success());
        assert!(ApiResponse::new(204, Vec::new()).is_success());
        assert!(!ApiResponse::new(302, Vec::new()).is_success());
        assert!(!ApiResponse::new(401, Vec::new()).is_success());
    }

    #[test]
    fn test_route_and_query_param() {
        let request = ApiRequest::new(HttpMethod::Get, "/social/feed?page=2&page_size=10");
        assert_eq!(request.route(), "/social/feed");
        assert_eq!(request.query_param("page"), Some("2"));
        assert_eq!(request.query_param("page_size"), Some("10"));
        assert_eq!(request.query_param("missing"), None);
    }

    #[tokio::test]
    async fn test_reqwest_transport_connection_refused_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let transport = ReqwestTransport::new("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
        let err = transport
            .send(ApiRequest::new(HttpMethod::Get, "/tokens/balance"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }
}
