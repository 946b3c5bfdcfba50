//! # Client Builder
//!
//! Wires configuration, session collaborators and a transport into a ready
//! [`Client`]. Anything not supplied falls back to the production choice:
//! a `ReqwestTransport` on `api_base_url`, a `FileTokenStore` at
//! `token_store_path`, no wallet, notifications to the log.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::{Notifier, TokenStore, WalletConnector};
use crate::services::api::transport::{HttpTransport, ReqwestTransport};
use crate::services::api::ApiClient;
use crate::session::{DisconnectedWallet, FileTokenStore, Session, TracingNotifier};

/// A session and the API client that reads its credentials
pub struct Client {
    session: Session,
    api: ApiClient,
    config: ClientConfig,
}

impl Client {
    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    store: Option<Arc<dyn TokenStore>>,
    wallet: Option<Arc<dyn WalletConnector>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
            store: None,
            wallet: None,
            notifier: None,
        }
    }

    /// Builder over [`ClientConfig::from_env`]
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn wallet(mut self, wallet: Arc<dyn WalletConnector>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> Result<Client> {
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(
                &self.config.api_base_url,
                self.config.request_timeout,
            )?),
        };
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(FileTokenStore::new(&self.config.token_store_path)));
        let wallet = self.wallet.unwrap_or_else(|| Arc::new(DisconnectedWallet));
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(TracingNotifier));

        let session = Session::new(store, wallet, notifier);
        let api = ApiClient::new(transport, session.credentials())
            .with_fallback_policy(self.config.fallback_policy);

        tracing::debug!(
            base_url = %self.config.api_base_url,
            chain = self.config.active_chain.name(),
            policy = ?self.config.fallback_policy,
            "Client built"
        );

        Ok(Client {
            session,
            api,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::FallbackPolicy;
    use crate::mock::MockBackend;
    use crate::session::{LocalWallet, MemoryTokenStore, RecordingNotifier};

    #[tokio::test]
    async fn test_login_is_visible_to_api_requests() {
        let backend = Arc::new(MockBackend::new());
        let client = Client::builder(ClientConfig::default())
            .transport(backend.clone())
            .token_store(Arc::new(MemoryTokenStore::default()))
            .wallet(Arc::new(LocalWallet::new("0xabc")))
            .notifier(Arc::new(RecordingNotifier::default()))
            .build()
            .unwrap();

        client.api().communities().get_communities().await.unwrap();
        assert!(client.session().login().await.is_authenticated());
        client.api().communities().get_communities().await.unwrap();

        let bearers: Vec<_> = backend.requests().into_iter().map(|r| r.bearer).collect();
        assert_eq!(bearers, [None, Some("mock_access_0xabc".to_string())]);
    }

    #[test]
    fn test_policy_and_file_store_come_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ClientConfig::default().with_fallback_policy(FallbackPolicy::Strict);
        config.token_store_path = dir.path().join("session.json");

        let client = Client::builder(config).build().unwrap();
        assert_eq!(client.api().fallback_policy(), FallbackPolicy::Strict);
        assert!(client.session().tokens().is_none());
        assert!(!client.session().is_authenticated());
    }
}
