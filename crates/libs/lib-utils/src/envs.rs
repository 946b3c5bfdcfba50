//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! Unset and empty variables are treated the same way.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(Error::MissingEnv(name)),
    }
}

/// Get an environment variable, `None` when unset or blank.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    get_env(name).ok()
}

/// Get an environment variable or fall back to `default`.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

/// Parse an optional environment variable. Unset is `Ok(None)`, unparsable is an error.
pub fn get_env_parse_opt<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_opt(name) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::WrongFormat(name)),
        None => Ok(None),
    }
}

/// `"1"`/`"true"`/`"yes"` as true, anything else set as false, unset as `default`.
pub fn get_env_flag(name: &'static str, default: bool) -> bool {
    get_env_opt(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "missing environment variable {name}"),
            Error::WrongFormat(name) => write!(fmt, "environment variable {name} has the wrong format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared.

    #[test]
    fn test_get_env_or_default_when_unset() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET_A", "fallback"), "fallback");
    }

    #[test]
    fn test_get_env_parse_opt() {
        env::set_var("LIB_UTILS_TEST_PARSE_B", "42");
        assert_eq!(get_env_parse_opt::<u64>("LIB_UTILS_TEST_PARSE_B"), Ok(Some(42)));

        env::set_var("LIB_UTILS_TEST_PARSE_C", "forty-two");
        assert_eq!(
            get_env_parse_opt::<u64>("LIB_UTILS_TEST_PARSE_C"),
            Err(Error::WrongFormat("LIB_UTILS_TEST_PARSE_C"))
        );

        assert_eq!(get_env_parse_opt::<u64>("LIB_UTILS_TEST_UNSET_D"), Ok(None));
    }

    #[test]
    fn test_blank_is_missing() {
        env::set_var("LIB_UTILS_TEST_BLANK_E", "   ");
        assert_eq!(get_env("LIB_UTILS_TEST_BLANK_E"), Err(Error::MissingEnv("LIB_UTILS_TEST_BLANK_E")));
    }

    #[test]
    fn test_get_env_flag() {
        env::set_var("LIB_UTILS_TEST_FLAG_F", "TRUE");
        assert!(get_env_flag("LIB_UTILS_TEST_FLAG_F", false));
        env::set_var("LIB_UTILS_TEST_FLAG_G", "0");
        assert!(!get_env_flag("LIB_UTILS_TEST_FLAG_G", true));
        assert!(get_env_flag("LIB_UTILS_TEST_UNSET_H", true));
    }
}
