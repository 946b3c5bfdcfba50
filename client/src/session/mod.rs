//! # Session
//!
//! Explicit holder of the current identity: token pair, current user, and the
//! collaborators that persist, sign and notify.
//!
//! ## Module Structure
//!
//! ```text
//! session/
//! ├── mod.rs     - Credentials handle, Session, LoginOutcome
//! ├── store.rs   - TokenStore implementations (memory, JSON file)
//! ├── wallet.rs  - WalletConnector implementations
//! └── notify.rs  - Notifier implementations
//! ```
//!
//! The session and every [`ApiClient`](crate::services::api::ApiClient) built
//! from [`Session::credentials`] share one [`Credentials`] handle, so a login
//! or logout is visible to the next request without any global state.

pub mod notify;
pub mod store;
pub mod wallet;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::{truncate_address, StoredTokens, User, WalletProof};

use crate::core::error::{ClientError, Result};
use crate::core::service::{Notification, Notifier, TokenStore, WalletConnector};
use crate::services::api::auth::AuthApi;

pub use notify::{RecordingNotifier, TracingNotifier};
pub use store::{FileTokenStore, MemoryTokenStore, TOKEN_STORAGE_KEY};
pub use wallet::{DisconnectedWallet, LocalWallet};

/// Shared, thread-safe token pair. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    inner: Arc<RwLock<Option<StoredTokens>>>,
}

impl Credentials {
    pub fn set(&self, tokens: Option<StoredTokens>) {
        *self.inner.write() = tokens;
    }

    pub fn get(&self) -> Option<StoredTokens> {
        self.inner.read().clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|t| t.access_token.clone())
    }

    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    pub fn is_present(&self) -> bool {
        self.inner.read().is_some()
    }
}

/// Result of a login attempt. Failures are reported here and through the
/// notifier rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(StoredTokens),
    WalletNotConnected,
    Failed(String),
}

impl LoginOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated(_))
    }
}

/// Message a wallet signs to prove control of `address`
pub fn auth_message(address: &str, timestamp_ms: i64) -> String {
    format!(
        "Sign this message to authenticate with your wallet: {}\nTimestamp: {}",
        address, timestamp_ms
    )
}

/// Counts a login attempt as in flight until it ends, however it ends.
struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn start(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self(in_flight)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct Session {
    credentials: Credentials,
    store: Arc<dyn TokenStore>,
    wallet: Arc<dyn WalletConnector>,
    notifier: Arc<dyn Notifier>,
    current_user: RwLock<Option<User>>,
    logins_in_flight: AtomicUsize,
}

impl Session {
    /// Build a session, restoring any token pair persisted by an earlier run.
    pub fn new(
        store: Arc<dyn TokenStore>,
        wallet: Arc<dyn WalletConnector>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let credentials = Credentials::default();
        match store.load() {
            Ok(Some(tokens)) => {
                tracing::debug!("Restored persisted session tokens");
                credentials.set(Some(tokens));
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable persisted tokens"),
        }

        Self {
            credentials,
            store,
            wallet,
            notifier,
            current_user: RwLock::new(None),
            logins_in_flight: AtomicUsize::new(0),
        }
    }

    /// Handle to pass to [`crate::services::api::ApiClient::new`]
    pub fn credentials(&self) -> Credentials {
        self.credentials.clone()
    }

    /// Wallet login with a locally minted placeholder token pair.
    ///
    /// No backend is contacted; see [`Session::login_with_backend`] for the
    /// exchanging variant.
    #[tracing::instrument(name = "session_login", skip_all)]
    pub async fn login(&self) -> LoginOutcome {
        let _loading = LoadingGuard::start(&self.logins_in_flight);

        let Some(address) = self.connected_address() else {
            return LoginOutcome::WalletNotConnected;
        };

        let message = auth_message(&address, lib_utils::now_millis());
        if let Err(e) = self.wallet.sign_message(&message).await {
            return self.login_failed(e);
        }

        let tokens = StoredTokens {
            access_token: format!("mock_access_{}", address),
            refresh_token: format!("mock_refresh_{}", address),
        };
        self.establish(&address, tokens)
    }

    /// Wallet login that exchanges the signed message at `POST /auth/login`.
    ///
    /// On success the current user is fetched too; a failure there is logged
    /// and leaves the session authenticated.
    #[tracing::instrument(name = "session_login_backend", skip_all)]
    pub async fn login_with_backend(&self, auth: &AuthApi<'_>) -> LoginOutcome {
        let _loading = LoadingGuard::start(&self.logins_in_flight);

        let Some(address) = self.connected_address() else {
            return LoginOutcome::WalletNotConnected;
        };

        let message = auth_message(&address, lib_utils::now_millis());
        let signature = match self.wallet.sign_message(&message).await {
            Ok(signature) => signature,
            Err(e) => return self.login_failed(e),
        };

        let proof = WalletProof {
            address: address.clone(),
            signature,
            message,
        };
        let tokens = match auth.wallet_login(proof).await {
            Ok(tokens) => StoredTokens::from(tokens),
            Err(e) => return self.login_failed(e),
        };

        let outcome = self.establish(&address, tokens);

        match auth.current_user().await {
            Ok(user) => self.set_current_user(Some(user)),
            Err(e) => tracing::warn!(error = %e, "Logged in but could not load current user"),
        }

        outcome
    }

    /// Forget tokens, the current user and the persisted pair.
    ///
    /// Always succeeds and is safe to repeat; a store that cannot be cleared
    /// is logged.
    #[tracing::instrument(name = "session_logout", skip_all)]
    pub fn logout(&self) {
        self.credentials.clear();
        *self.current_user.write() = None;

        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to clear persisted tokens");
        }

        tracing::info!("Logged out");
        self.notifier.notify(Notification::success(
            "Logged out",
            "You have been logged out successfully",
        ));
    }

    /// Tokens present and a wallet connected
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_present() && self.wallet.address().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.logins_in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn tokens(&self) -> Option<StoredTokens> {
        self.credentials.get()
    }

    /// Current token pair, or [`ClientError::NotAuthenticated`]
    pub fn require_tokens(&self) -> Result<StoredTokens> {
        self.credentials.get().ok_or(ClientError::NotAuthenticated)
    }

    pub fn wallet_address(&self) -> Option<String> {
        self.wallet.address()
    }

    pub fn set_current_user(&self, user: Option<User>) {
        *self.current_user.write() = user;
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user.read().clone()
    }

    fn connected_address(&self) -> Option<String> {
        let address = self.wallet.address();
        if address.is_none() {
            tracing::warn!("Login attempted without a connected wallet");
            self.notifier.notify(Notification::error(
                "Wallet not connected",
                "Please connect your wallet first",
            ));
        }
        address
    }

    fn establish(&self, address: &str, tokens: StoredTokens) -> LoginOutcome {
        self.credentials.set(Some(tokens.clone()));
        if let Err(e) = self.store.save(&tokens) {
            tracing::error!(error = %e, "Failed to persist session tokens");
        }

        tracing::info!(wallet = %truncate_address(address), "Authenticated");
        self.notifier.notify(Notification::success(
            "Authentication successful",
            "You are now logged in",
        ));
        LoginOutcome::Authenticated(tokens)
    }

    fn login_failed(&self, error: ClientError) -> LoginOutcome {
        tracing::error!(error = %error, "Authentication failed");
        self.notifier.notify(Notification::error(
            "Authentication failed",
            "Failed to sign message or authenticate",
        ));
        LoginOutcome::Failed(error.to_string())
    }
}
