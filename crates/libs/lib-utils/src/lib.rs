//! # Utilities Library
//!
//! Shared utility functions for base64 encoding, environment variables, time, and validation.

pub mod b64;
pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64u_decode_to_string, b64u_encode};
pub use envs::{get_env, get_env_flag, get_env_opt, get_env_or, get_env_parse_opt};
pub use time::{format_time, now_millis, now_utc, offset_days_rfc3339};
pub use validation::{validate_email, validate_not_empty};
