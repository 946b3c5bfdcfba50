//! # Service Traits
//!
//! Collaborators injected into [`crate::session::Session`] and the service
//! modules. Every trait is object-safe and `Send + Sync`, so hosts hold them
//! as `Arc<dyn Trait>` and tests swap in recording or failing doubles.

use async_trait::async_trait;
use shared::StoredTokens;

use super::error::Result;

/// Persisted home of the session token pair.
///
/// Implementations: [`crate::session::MemoryTokenStore`],
/// [`crate::session::FileTokenStore`].
pub trait TokenStore: Send + Sync {
    /// Read the persisted pair; `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<StoredTokens>>;

    fn save(&self, tokens: &StoredTokens) -> Result<()>;

    /// Remove the persisted pair. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;
}

/// External wallet / identity provider.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Connected address, `None` while disconnected.
    fn address(&self) -> Option<String>;

    /// Sign an arbitrary message with the connected wallet.
    async fn sign_message(&self, message: &str) -> Result<String>;
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    /// Failure the user must see ("destructive" toast).
    Error,
}

/// Transient user-facing message (a toast in a GUI host).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, description)
    }

    fn new(level: NotificationLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level,
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Source of ids for locally created entities.
pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> String;
}
