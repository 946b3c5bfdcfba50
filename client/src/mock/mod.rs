//! # Mock Transports
//!
//! - [`MockBackend`]: fixture-backed backend with mutable state
//! - [`OfflineTransport`]: a backend that is never reachable
//! - [`fixtures`]: seed data and fallback placeholders

pub mod backend;
pub mod fixtures;

use async_trait::async_trait;

use crate::core::error::{ClientError, Result};
use crate::services::api::transport::{ApiRequest, ApiResponse, HttpTransport};

pub use backend::MockBackend;

/// Fails every request with [`ClientError::Network`]
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineTransport;

#[async_trait]
impl HttpTransport for OfflineTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        Err(ClientError::Network(format!(
            "backend unreachable: {} {}",
            request.method, request.path
        )))
    }
}
