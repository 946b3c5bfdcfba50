//! # Backend API Client Module
//!
//! Typed HTTP client for the Besha REST backend, one service struct per
//! resource family.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── transport.rs     - HttpTransport seam, ReqwestTransport
//! ├── client.rs        - ApiClient facade (bearer injection, status mapping)
//! ├── auth.rs          - Register, login, current user, logout
//! ├── tokens.rs        - Balance, transfer, staking, rewards
//! ├── gamification.rs  - Profile, achievements, quests, leaderboards
//! ├── social.rs        - Posts, likes, comments, friends
//! ├── messaging.rs     - Direct messages, conversations
//! ├── wallet.rs        - Wallet linking challenges
//! └── community.rs     - Communities and membership
//! ```
//!
//! Services borrow the client: `client.tokens().get_balance()`.

pub mod auth;
pub mod client;
pub mod community;
pub mod gamification;
pub mod messaging;
pub mod social;
pub mod tokens;
pub mod transport;
pub mod wallet;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use community::CommunityApi;
pub use gamification::{GamificationApi, LeaderboardKind};
pub use messaging::MessagingApi;
pub use social::SocialApi;
pub use tokens::TokenApi;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, ReqwestTransport};
pub use wallet::WalletApi;
