//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the client SDK and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Users, credentials, token pairs
//!   - **[`dto::social`]**: Posts, comments, friendships
//!   - **[`dto::messaging`]**: Direct messages and conversations
//!   - **[`dto::tokens`]**: Balances, stakes, staking pools
//!   - **[`dto::wallet`]**: Linked wallets and ownership challenges
//!   - **[`dto::gamification`]**: Profiles, achievements, quests, leaderboards
//!   - **[`dto::community`]**: Communities
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! Most DTOs serialize with default `serde` behavior (snake_case field names).
//! The token and gamification records served under `/tokens/staking/*` and
//! `/gamification/*` use camelCase on the wire and carry
//! `#[serde(rename_all = "camelCase")]`. Optional fields are omitted from JSON
//! when `None`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::tokens::TokenBalance;
//!
//! let balance: TokenBalance = serde_json::from_str(
//!     r#"{"available":"1.00","staked":"0","locked":"0","pending_rewards":"0"}"#,
//! ).unwrap();
//! assert_eq!(balance.available, "1.00");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
