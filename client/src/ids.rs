//! # Id Providers
//!
//! Implementations of [`IdProvider`] for entities created client-side or by
//! the in-memory [`crate::mock::MockBackend`].

use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::service::IdProvider;

/// Random UUID v4 ids; the default everywhere outside tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic ids `<prefix><n>`, counting up from `start`.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id-", 1)
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new("post-", 100);
        assert_eq!(ids.next_id(), "post-100");
        assert_eq!(ids.next_id(), "post-101");
    }

    #[test]
    fn test_uuid_ids_are_unique_v4() {
        let ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(uuid::Uuid::parse_str(&a).unwrap().get_version_num(), 4);
    }
}
