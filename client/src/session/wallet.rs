//! # Wallet Connectors
//!
//! The external wallet is out of this crate's hands; it only needs an address
//! and a way to sign a message. The implementations here produce placeholder
//! signatures. Nothing verifies them cryptographically.

use async_trait::async_trait;
use lib_utils::b64u_encode;

use crate::core::error::{ClientError, Result};
use crate::core::service::WalletConnector;

/// No wallet connected
#[derive(Debug, Default, Clone, Copy)]
pub struct DisconnectedWallet;

#[async_trait]
impl WalletConnector for DisconnectedWallet {
    fn address(&self) -> Option<String> {
        None
    }

    async fn sign_message(&self, _message: &str) -> Result<String> {
        Err(ClientError::Wallet("wallet not connected".to_string()))
    }
}

/// Wallet connected at a fixed address.
///
/// The "signature" is the base64url of `address:message`, so the backend
/// mock (and tests) can recover what was signed.
#[derive(Debug, Clone)]
pub struct LocalWallet {
    address: String,
    refuse_signing: bool,
}

impl LocalWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            refuse_signing: false,
        }
    }

    /// Wallet that is connected but rejects every signature request, as when
    /// the user dismisses the signing prompt.
    pub fn refusing(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            refuse_signing: true,
        }
    }
}

#[async_trait]
impl WalletConnector for LocalWallet {
    fn address(&self) -> Option<String> {
        Some(self.address.clone())
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        if self.refuse_signing {
            return Err(ClientError::Wallet("user rejected the signature request".to_string()));
        }
        Ok(b64u_encode(format!("{}:{}", self.address, message)))
    }
}
