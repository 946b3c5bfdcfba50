//! # Services Module
//!
//! Integrations with the outside world. Today that is the REST backend.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Host app                     │
//! │   Session ──credentials──▶ ApiClient         │
//! │                 │                            │
//! │   AuthApi  TokenApi  SocialApi  ...          │
//! └─────────────────┼────────────────────────────┘
//!                   │ HttpTransport
//!         ┌─────────┴──────────┬────────────────┐
//!         ▼                    ▼                ▼
//!   ReqwestTransport      MockBackend     OfflineTransport
//!   (HTTP/JSON)           (fixtures)      (always fails)
//! ```

pub mod api;

pub use api::ApiClient;
