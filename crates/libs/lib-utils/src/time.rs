//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use chrono::{DateTime, Duration, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current time as Unix milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// RFC3339 timestamp `days` away from now (negative for the past).
pub fn offset_days_rfc3339(days: i64) -> String {
    format_time(now_utc() + Duration::days(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_days_ordering() {
        let past = DateTime::parse_from_rfc3339(&offset_days_rfc3339(-30)).unwrap();
        let future = DateTime::parse_from_rfc3339(&offset_days_rfc3339(60)).unwrap();
        assert_eq!((future - past).num_days(), 90);
    }

    #[test]
    fn test_now_millis_matches_now_utc() {
        let millis = now_millis();
        let utc = now_utc().timestamp_millis();
        assert!(utc - millis < 1_000);
    }
}
