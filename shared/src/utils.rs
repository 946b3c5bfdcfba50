//! # Shared Utility Functions
//!
//! Display helpers for wallet addresses and user identifiers.
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! assert_eq!(truncate_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb"), "0x742d...0bEb");
//! ```

/// Keep the first `prefix_len` and last `suffix_len` characters of `address`,
/// joined by `...`.
///
/// Addresses too short to shorten meaningfully are returned unchanged. Slicing
/// is done on characters, so non-ASCII identifiers (an email used as a
/// transfer recipient, say) never split a code point.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x89205A3A3b2A69De6Dbf7f01ED13B2108B2c43e7";
/// assert_eq!(format_address(addr, 6, 4), "0x8920...43e7");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len + 3 {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten an EVM-style address to `0x1234...abcd`.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
