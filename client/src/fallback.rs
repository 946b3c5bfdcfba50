//! # Fallback Policy
//!
//! Some read endpoints have a documented placeholder value (balance, stakes,
//! gamification profile, ...). Whether a failed request degrades to that
//! placeholder is a [`FallbackPolicy`] decision, and the caller always learns
//! which one it got through [`Sourced`].
//!
//! ```rust
//! use besha_client::core::ClientError;
//! use besha_client::fallback::{FallbackPolicy, Sourced};
//!
//! let failed: Result<u32, ClientError> = Err(ClientError::Network("down".into()));
//! let value = FallbackPolicy::Degrade.resolve("demo", failed, || 7).unwrap();
//! assert!(value.is_fallback());
//! assert_eq!(value.into_inner(), 7);
//! ```

use std::str::FromStr;

use crate::core::error::{ClientError, Result};

/// What a fallback-capable read does when its request fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Propagate the error.
    Strict,
    /// Return the fixed placeholder, tagged [`Sourced::Fallback`].
    #[default]
    Degrade,
}

impl FromStr for FallbackPolicy {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(FallbackPolicy::Strict),
            "degrade" | "fallback" => Ok(FallbackPolicy::Degrade),
            other => Err(ClientError::Config(format!(
                "unknown fallback policy '{other}' (expected 'strict' or 'degrade')"
            ))),
        }
    }
}

impl FallbackPolicy {
    /// Apply the policy to the outcome of `operation`.
    ///
    /// Only transport-class errors ([`ClientError::is_transport`]) are
    /// replaced; validation and auth errors always propagate.
    pub fn resolve<T>(
        self,
        operation: &'static str,
        result: Result<T>,
        fallback: impl FnOnce() -> T,
    ) -> Result<Sourced<T>> {
        match result {
            Ok(value) => Ok(Sourced::Live(value)),
            Err(err) if self == FallbackPolicy::Degrade && err.is_transport() => {
                tracing::warn!(operation, error = %err, "Request failed, serving fallback data");
                Ok(Sourced::Fallback {
                    value: fallback(),
                    cause: err.to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }
}

/// A value tagged with where it came from
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    Live(T),
    Fallback { value: T, cause: String },
}

impl<T> Sourced<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Sourced::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        !self.is_live()
    }

    pub fn value(&self) -> &T {
        match self {
            Sourced::Live(value) | Sourced::Fallback { value, .. } => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Sourced::Live(value) | Sourced::Fallback { value, .. } => value,
        }
    }

    /// Error message that caused the fallback.
    pub fn cause(&self) -> Option<&str> {
        match self {
            Sourced::Live(_) => None,
            Sourced::Fallback { cause, .. } => Some(cause),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        match self {
            Sourced::Live(value) => Sourced::Live(f(value)),
            Sourced::Fallback { value, cause } => Sourced::Fallback { value: f(value), cause },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_error() -> ClientError {
        ClientError::Request {
            status: 502,
            status_text: "Bad Gateway".to_string(),
        }
    }

    #[test]
    fn test_live_value_passes_through() {
        let sourced = FallbackPolicy::Degrade.resolve("t", Ok(1), || 2).unwrap();
        assert_eq!(sourced, Sourced::Live(1));
        assert!(sourced.cause().is_none());
    }

    #[test]
    fn test_degrade_replaces_transport_errors() {
        let sourced = FallbackPolicy::Degrade
            .resolve("t", Err::<i32, _>(request_error()), || 2)
            .unwrap();
        assert!(sourced.is_fallback());
        assert_eq!(*sourced.value(), 2);
        assert_eq!(sourced.cause(), Some("API Error: Bad Gateway"));
    }

    #[test]
    fn test_strict_propagates() {
        let err = FallbackPolicy::Strict
            .resolve("t", Err::<i32, _>(request_error()), || 2)
            .unwrap_err();
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_degrade_keeps_non_transport_errors() {
        let err = FallbackPolicy::Degrade
            .resolve("t", Err::<i32, _>(ClientError::NotAuthenticated), || 2)
            .unwrap_err();
        assert_eq!(err, ClientError::NotAuthenticated);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("STRICT".parse::<FallbackPolicy>().unwrap(), FallbackPolicy::Strict);
        assert_eq!("degrade".parse::<FallbackPolicy>().unwrap(), FallbackPolicy::Degrade);
        assert!("sometimes".parse::<FallbackPolicy>().is_err());
    }

    #[test]
    fn test_map_keeps_tag() {
        let sourced = Sourced::Fallback {
            value: 2,
            cause: "down".to_string(),
        }
        .map(|v| v * 10);
        assert_eq!(*sourced.value(), 20);
        assert!(sourced.is_fallback());
    }
}
