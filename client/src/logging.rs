//! # Logging initialization
//!
//! Installs a global `tracing` subscriber for hosts embedding the client:
//! - `EnvFilter` from `RUST_LOG`, falling back to [`LogConfig::log_level`]
//! - a human-readable fmt layer on stderr
//! - an optional daily-rotating file layer (non-blocking) when `BESHA_LOG_DIR` is set
//!
//! The library itself only emits events; calling [`init`] is the host's choice.

use std::path::PathBuf;

use lib_utils::envs::{get_env_flag, get_env_opt, get_env_or};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::error::{ClientError, Result};

const DEFAULT_FILTER: &str = "besha_client=info,warn";

/// Logging configuration from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive (e.g. "besha_client=debug,info")
    pub log_level: String,
    /// Directory for the rotating log file; `None` disables file output
    pub log_dir: Option<PathBuf>,
    /// Include file/line in console output
    pub with_source: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_FILTER.to_string(),
            log_dir: None,
            with_source: false,
        }
    }
}

impl LogConfig {
    /// `RUST_LOG`, `BESHA_LOG_DIR`, `BESHA_LOG_SOURCE`
    pub fn from_env() -> Self {
        Self {
            log_level: get_env_or("RUST_LOG", DEFAULT_FILTER),
            log_dir: get_env_opt("BESHA_LOG_DIR").map(PathBuf::from),
            with_source: get_env_flag("BESHA_LOG_SOURCE", false),
        }
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

/// Install the global subscriber.
///
/// Returns the file appender guard when file output is enabled; keep it alive
/// for the lifetime of the program or buffered lines are lost. Fails if a
/// global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(config.with_source)
        .with_line_number(config.with_source);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let guard = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .map_err(|e| ClientError::Config(format!("cannot create log dir {}: {e}", dir.display())))?;

            let file_appender = tracing_appender::rolling::daily(dir, "besha-client.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(false);

            registry
                .with(file_layer)
                .try_init()
                .map_err(|e| ClientError::Config(format!("logging already initialized: {e}")))?;
            Some(guard)
        }
        None => {
            registry
                .try_init()
                .map_err(|e| ClientError::Config(format!("logging already initialized: {e}")))?;
            None
        }
    };

    tracing::info!(
        log_level = %config.log_level,
        log_dir = ?config.log_dir,
        "Logging initialized"
    );

    Ok(guard)
}
