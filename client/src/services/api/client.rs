//! # API Client
//!
//! Typed HTTP facade over an [`HttpTransport`].
//!
//! Every request carries `Content-Type: application/json` and, while the
//! session holds an access token, `Authorization: Bearer <token>`. A 2xx body
//! is decoded into the caller's type unchanged; anything else becomes
//! [`ClientError::Request`] carrying the status text. No retries.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::transport::{ApiRequest, HttpMethod, HttpTransport, ReqwestTransport};
use crate::config::ClientConfig;
use crate::core::error::{ClientError, Result};
use crate::fallback::FallbackPolicy;
use crate::session::Credentials;

/// HTTP client for communicating with the backend API.
///
/// Cheap to clone; clones share the transport and the session credentials.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
    policy: FallbackPolicy,
}

impl ApiClient {
    /// Client over any transport, reading bearer tokens from `credentials`.
    pub fn new(transport: Arc<dyn HttpTransport>, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            policy: FallbackPolicy::default(),
        }
    }

    /// Real network client built from configuration.
    pub fn from_config(config: &ClientConfig, credentials: Credentials) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.api_base_url, config.request_timeout)?;
        Ok(Self::new(Arc::new(transport), credentials).with_fallback_policy(config.fallback_policy))
    }

    pub fn with_fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.policy
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(HttpMethod::Get, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.execute(HttpMethod::Post, path, Some(body)).await
    }

    /// POST without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(HttpMethod::Post, path, None).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.execute(HttpMethod::Put, path, Some(body)).await
    }

    /// PUT without a body
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(HttpMethod::Put, path, None).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(HttpMethod::Delete, path, None).await
    }

    #[tracing::instrument(name = "api_request", skip_all, fields(method = %method, path = %path))]
    async fn execute<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let start = std::time::Instant::now();

        let request = ApiRequest {
            method,
            path: path.to_string(),
            bearer: self.credentials.access_token(),
            body,
        };

        let response = self.transport.send(request).await?;
        let duration_ms = start.elapsed().as_millis() as u64;

        if !response.is_success() {
            let status_text = response.status_text();
            tracing::warn!(status = response.status, %status_text, duration_ms, "Request failed");
            return Err(ClientError::Request {
                status: response.status,
                status_text,
            });
        }

        tracing::debug!(status = response.status, duration_ms, "Request succeeded");

        // An empty success body decodes as JSON null so `()` and `Option<T>` work.
        let bytes: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &response.body
        };

        serde_json::from_slice(bytes).map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            ClientError::Decode(e.to_string())
        })
    }
}
