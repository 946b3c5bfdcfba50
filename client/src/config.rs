//! # Client Configuration
//!
//! Configuration loaded from environment variables (and a `.env` file when
//! present, via `dotenvy`). Values are treated as opaque strings; only numeric
//! and enum-valued variables are parsed.
//!
//! | Variable | Default |
//! |---|---|
//! | `BESHA_API_BASE_URL` | `https://api.yourdomain.com` |
//! | `BESHA_THIRDWEB_CLIENT_ID` | empty |
//! | `BESHA_TOKEN_ADDRESS` | empty |
//! | `BESHA_STAKING_CONTRACT_ADDRESS` | empty |
//! | `BESHA_SOCIAL_GRAPH_ADDRESS` | empty |
//! | `BESHA_ACTIVE_CHAIN` | `polygon` |
//! | `BESHA_FALLBACK_POLICY` | `degrade` |
//! | `BESHA_REQUEST_TIMEOUT_SECS` | unset (no timeout) |
//! | `BESHA_TOKEN_STORE` | `data/session.json` |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use lib_utils::envs::{get_env_opt, get_env_or, get_env_parse_opt};

use crate::core::error::{ClientError, Result};
use crate::fallback::FallbackPolicy;

pub const DEFAULT_API_BASE_URL: &str = "https://api.yourdomain.com";
pub const DEFAULT_TOKEN_STORE_PATH: &str = "data/session.json";

/// EVM chains the wallet integration supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chain {
    #[default]
    Polygon,
    Base,
}

impl Chain {
    pub const SUPPORTED: [Chain; 2] = [Chain::Polygon, Chain::Base];

    pub fn chain_id(self) -> u64 {
        match self {
            Chain::Polygon => 137,
            Chain::Base => 8453,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Chain::Polygon => "polygon",
            Chain::Base => "base",
        }
    }
}

impl FromStr for Chain {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Chain::SUPPORTED
            .into_iter()
            .find(|chain| chain.name() == wanted || chain.chain_id().to_string() == wanted)
            .ok_or_else(|| ClientError::Config(format!("unsupported chain '{s}'")))
    }
}

/// Deployed contract addresses. Opaque, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractAddresses {
    pub besha_token: String,
    pub staking: String,
    pub social_graph: String,
}

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL, joined with endpoint paths verbatim
    pub api_base_url: String,
    /// thirdweb client id for the wallet SDK
    pub thirdweb_client_id: String,
    pub contracts: ContractAddresses,
    pub active_chain: Chain,
    pub fallback_policy: FallbackPolicy,
    /// `None` means requests may wait indefinitely.
    pub request_timeout: Option<Duration>,
    /// Location of the [`crate::session::FileTokenStore`] file
    pub token_store_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            thirdweb_client_id: String::new(),
            contracts: ContractAddresses::default(),
            active_chain: Chain::default(),
            fallback_policy: FallbackPolicy::default(),
            request_timeout: None,
            token_store_path: PathBuf::from(DEFAULT_TOKEN_STORE_PATH),
        }
    }
}

impl ClientConfig {
    /// Load `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to load .env file");
            }
        }
        Self::from_process_env()
    }

    /// Read the process environment only.
    pub fn from_process_env() -> Result<Self> {
        let api_base_url = get_env_or("BESHA_API_BASE_URL", DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let contracts = ContractAddresses {
            besha_token: get_env_or("BESHA_TOKEN_ADDRESS", ""),
            staking: get_env_or("BESHA_STAKING_CONTRACT_ADDRESS", ""),
            social_graph: get_env_or("BESHA_SOCIAL_GRAPH_ADDRESS", ""),
        };

        let active_chain = match get_env_opt("BESHA_ACTIVE_CHAIN") {
            Some(raw) => raw.parse()?,
            None => Chain::default(),
        };

        let fallback_policy = match get_env_opt("BESHA_FALLBACK_POLICY") {
            Some(raw) => raw.parse()?,
            None => FallbackPolicy::default(),
        };

        let request_timeout =
            get_env_parse_opt::<u64>("BESHA_REQUEST_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Self {
            api_base_url,
            thirdweb_client_id: get_env_or("BESHA_THIRDWEB_CLIENT_ID", ""),
            contracts,
            active_chain,
            fallback_policy,
            request_timeout,
            token_store_path: PathBuf::from(get_env_or("BESHA_TOKEN_STORE", DEFAULT_TOKEN_STORE_PATH)),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.fallback_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_offline_safe() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.active_chain, Chain::Polygon);
        assert_eq!(config.fallback_policy, FallbackPolicy::Degrade);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_chain_parsing() {
        assert_eq!("Base".parse::<Chain>().unwrap(), Chain::Base);
        assert_eq!("137".parse::<Chain>().unwrap(), Chain::Polygon);
        assert!("ethereum".parse::<Chain>().is_err());
        assert_eq!(Chain::Base.chain_id(), 8453);
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:3001/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:3001");
    }

    // Single test touching BESHA_* variables; the process environment is shared.
    #[test]
    fn test_from_process_env() {
        std::env::set_var("BESHA_API_BASE_URL", "http://localhost:8080/");
        std::env::set_var("BESHA_ACTIVE_CHAIN", "base");
        std::env::set_var("BESHA_FALLBACK_POLICY", "strict");
        std::env::set_var("BESHA_REQUEST_TIMEOUT_SECS", "15");
        std::env::set_var("BESHA_STAKING_CONTRACT_ADDRESS", "0xstaking");

        let config = ClientConfig::from_process_env().unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.active_chain, Chain::Base);
        assert_eq!(config.fallback_policy, FallbackPolicy::Strict);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.contracts.staking, "0xstaking");
        assert_eq!(config.contracts.besha_token, "");

        std::env::set_var("BESHA_REQUEST_TIMEOUT_SECS", "soon");
        assert!(matches!(
            ClientConfig::from_process_env(),
            Err(ClientError::Config(_))
        ));

        for name in [
            "BESHA_API_BASE_URL",
            "BESHA_ACTIVE_CHAIN",
            "BESHA_FALLBACK_POLICY",
            "BESHA_REQUEST_TIMEOUT_SECS",
            "BESHA_STAKING_CONTRACT_ADDRESS",
        ] {
            std::env::remove_var(name);
        }
    }
}
