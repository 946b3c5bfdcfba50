//! # Common Error Types
//!
//! Consolidated error handling for the client SDK.
//!
//! This module provides a centralized error type [`ClientError`] that covers every
//! failure a service call can surface to its caller.
//!
//! ## Error Categories
//!
//! - **Request**: the backend answered with a non-2xx status
//! - **Network**: the request never produced a response (connection refused, DNS)
//! - **Decode**: a 2xx body did not match the expected type
//! - **Validation**: input rejected before any request was sent
//! - **NotAuthenticated**: an operation needed credentials the session does not hold
//! - **Wallet**: the external wallet failed to sign
//! - **Storage**: the persisted token store could not be read or written
//! - **Config**: environment configuration could not be parsed
//!
//! ## Usage Pattern
//!
//! ```rust
//! use besha_client::core::error::{ClientError, Result};
//!
//! fn validate_amount(amount: &str) -> Result<&str> {
//!     if amount.trim().is_empty() {
//!         return Err(ClientError::Validation("Amount cannot be empty".to_string()));
//!     }
//!     Ok(amount)
//! }
//! ```
//!
//! Whether a failed read degrades to placeholder data is decided by
//! [`crate::fallback::FallbackPolicy`], never by this type.

use thiserror::Error;

/// Client-wide error type.
///
/// The `#[error]` attribute from `thiserror` provides `Display` and `Error`.
///
/// # Example
///
/// ```rust
/// use besha_client::core::error::ClientError;
///
/// let err = ClientError::Request { status: 503, status_text: "Service Unavailable".to_string() };
/// assert_eq!(err.to_string(), "API Error: Service Unavailable");
/// assert_eq!(err.status(), Some(503));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Non-2xx response from the backend.
    ///
    /// `status_text` is the canonical reason phrase of `status`.
    #[error("API Error: {status_text}")]
    Request { status: u16, status_text: String },

    /// Transport-level failure: no response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// A success response whose body could not be decoded into the expected type.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Input validation failure, raised before any request is sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The session holds no credentials for an operation that needs them.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// External wallet failure (signing refused, wallet gone).
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Persisted session storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Environment configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// HTTP status of a [`ClientError::Request`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Request or network failures; the class of errors a fallback may replace.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Request { .. } | ClientError::Network(_) | ClientError::Decode(_)
        )
    }
}

impl From<lib_utils::envs::Error> for ClientError {
    fn from(err: lib_utils::envs::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_message_carries_status_text() {
        let err = ClientError::Request {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "API Error: Internal Server Error");
        assert!(err.is_transport());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = ClientError::Request {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(ClientError::NotAuthenticated.status(), None);
    }

    #[test]
    fn test_validation_is_not_transport() {
        assert!(!ClientError::Validation("x".to_string()).is_transport());
        assert!(!ClientError::NotAuthenticated.is_transport());
    }

    #[test]
    fn test_env_error_maps_to_config() {
        let err: ClientError = lib_utils::envs::Error::WrongFormat("BESHA_FALLBACK_POLICY").into();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
