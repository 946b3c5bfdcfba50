//! # Besha Client - Library Root
//!
//! Typed client SDK for the Besha social trading backend: feed and
//! trading-signal posts, token staking, messaging, gamification, communities.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 besha-client (this crate)                │
//! ├──────────────────────────────────────────────────────────┤
//! │  session   - Credentials, login/logout, token persistence│
//! │  services  - ApiClient facade + one API struct per area  │
//! │  fallback  - Strict / Degrade policy, Sourced<T>         │
//! │  mock      - In-memory backend and fixtures              │
//! │  config    - ClientConfig from env / .env                │
//! │  logging   - tracing-subscriber setup                    │
//! └──────────────────────────────────────────────────────────┘
//!          │ HttpTransport
//!          ▼
//!   reqwest (HTTP/JSON)  |  MockBackend  |  OfflineTransport
//! ```
//!
//! Control flows one way: caller → service → `ApiClient` → transport, and
//! back as a typed value, a tagged fallback, or a [`ClientError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use besha_client::config::ClientConfig;
//! use besha_client::mock::MockBackend;
//! use besha_client::session::{LocalWallet, MemoryTokenStore};
//! use besha_client::Client;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> besha_client::Result<()> {
//! let client = Client::builder(ClientConfig::default())
//!     .transport(Arc::new(MockBackend::new()))
//!     .token_store(Arc::new(MemoryTokenStore::default()))
//!     .wallet(Arc::new(LocalWallet::new("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb")))
//!     .build()?;
//!
//! client.session().login().await;
//! let balance = client.api().tokens().get_balance().await?;
//! assert!(balance.is_live());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod fallback;
pub mod ids;
pub mod logging;
pub mod mock;
pub mod services;
pub mod session;

pub use builder::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use crate::core::{ClientError, Result};
pub use fallback::{FallbackPolicy, Sourced};
pub use services::api::ApiClient;
pub use session::{Credentials, LoginOutcome, Session};
