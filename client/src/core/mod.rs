//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Client error type (`ClientError`, `Result<T>`)
//! - **[`service`]**: Collaborator traits (`TokenStore`, `WalletConnector`, `Notifier`, `IdProvider`)
//!
//! ## Dependency Injection
//!
//! ```rust
//! use std::sync::Arc;
//! use besha_client::core::service::{Notifier, TokenStore, WalletConnector};
//! use besha_client::session::{DisconnectedWallet, MemoryTokenStore, RecordingNotifier, Session};
//!
//! let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::default());
//! let wallet: Arc<dyn WalletConnector> = Arc::new(DisconnectedWallet);
//! let notifier: Arc<dyn Notifier> = Arc::new(RecordingNotifier::default());
//! let session = Session::new(store, wallet, notifier);
//! assert!(!session.is_authenticated());
//! ```

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::{IdProvider, Notification, NotificationLevel, Notifier, TokenStore, WalletConnector};
