//! # Authentication Endpoints
//!
//! Registration, password and wallet login, current user, logout.

use shared::{AuthTokens, LoginRequest, RegisterRequest, User, WalletProof};

use super::client::ApiClient;
use crate::core::error::{ClientError, Result};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an account. An alias account names its primary in
    /// `parent_account_email`.
    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> Result<User> {
        lib_utils::validate_not_empty(&request.username, "Username").map_err(ClientError::Validation)?;
        lib_utils::validate_email(&request.email).map_err(ClientError::Validation)?;
        lib_utils::validate_not_empty(&request.password, "Password").map_err(ClientError::Validation)?;
        if let Some(parent) = &request.parent_account_email {
            lib_utils::validate_email(parent).map_err(ClientError::Validation)?;
        }

        let user: User = self.client.post("/auth/register", &request).await?;
        tracing::info!(user_id = %user.user_id, "Registered");
        Ok(user)
    }

    /// Password login. `username` carries the account email.
    #[tracing::instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: shared::Credentials) -> Result<AuthTokens> {
        lib_utils::validate_not_empty(&credentials.username, "Username").map_err(ClientError::Validation)?;
        lib_utils::validate_not_empty(&credentials.password, "Password").map_err(ClientError::Validation)?;

        let tokens = self
            .client
            .post("/auth/login", &LoginRequest::Credentials(credentials))
            .await?;
        tracing::info!("Login successful");
        Ok(tokens)
    }

    /// Exchange a signed wallet message for a token pair.
    #[tracing::instrument(skip(self, proof), fields(wallet = %shared::truncate_address(&proof.address)))]
    pub async fn wallet_login(&self, proof: WalletProof) -> Result<AuthTokens> {
        let tokens = self.client.post("/auth/login", &LoginRequest::Wallet(proof)).await?;
        tracing::info!("Wallet login successful");
        Ok(tokens)
    }

    /// Profile of the logged-in user
    pub async fn current_user(&self) -> Result<User> {
        if !self.client.credentials().is_present() {
            return Err(ClientError::NotAuthenticated);
        }
        self.client.get("/auth/me").await
    }

    /// Server-side logout. Local tokens are the session's business.
    pub async fn logout(&self) -> Result<()> {
        self.client.post_empty("/auth/logout").await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ids::SequentialIds;
    use crate::mock::MockBackend;
    use crate::session::Credentials;
    use shared::{AccountType, KycStatus, StoredTokens};

    fn backend() -> Arc<MockBackend> {
        Arc::new(MockBackend::with_ids(Arc::new(SequentialIds::new("u-", 100))))
    }

    fn logged_in() -> Credentials {
        let credentials = Credentials::default();
        credentials.set(Some(StoredTokens {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        }));
        credentials
    }

    fn register_request(parent: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            username: "neo".to_string(),
            email: "neo@example.com".to_string(),
            password: "hunter22".to_string(),
            parent_account_email: parent.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_register_primary_and_alias_accounts() {
        let backend = backend();
        let client = ApiClient::new(backend.clone(), Credentials::default());

        let user = client.auth().register(register_request(None)).await.unwrap();
        assert_eq!(user.user_id, "u-100");
        assert_eq!(user.account_type, Some(AccountType::Primary));
        assert_eq!(user.kyc_status, Some(KycStatus::NotVerified));
        assert_eq!(user.followers_count, Some(0));

        let alias = client
            .auth()
            .register(register_request(Some("michael@example.com")))
            .await
            .unwrap();
        assert_eq!(alias.account_type, Some(AccountType::Alias));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input_before_request() {
        let backend = backend();
        let client = ApiClient::new(backend.clone(), Credentials::default());

        let mut request = register_request(None);
        request.email = "not-an-email".to_string();
        let err = client.auth().register(request).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));

        let mut request = register_request(None);
        request.password = "   ".to_string();
        assert!(matches!(
            client.auth().register(request).await,
            Err(ClientError::Validation(_))
        ));

        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_password_and_wallet_login_return_tokens() {
        let client = ApiClient::new(backend(), Credentials::default());

        let tokens = client
            .auth()
            .login(shared::Credentials {
                username: "michael@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(tokens.token_type, "bearer");

        let tokens = client
            .auth()
            .wallet_login(WalletProof {
                address: "0xabc".to_string(),
                signature: "sig".to_string(),
                message: "hello".to_string(),
            })
            .await
            .unwrap();
        assert!(tokens.access_token.contains("0xabc"));
    }

    #[tokio::test]
    async fn test_current_user_requires_credentials() {
        let backend = backend();
        let client = ApiClient::new(backend.clone(), Credentials::default());
        assert_eq!(client.auth().current_user().await, Err(ClientError::NotAuthenticated));
        assert!(backend.requests().is_empty());

        let client = ApiClient::new(backend, logged_in());
        let user = client.auth().current_user().await.unwrap();
        assert_eq!(user.username, "Michael Bruno");
    }

    #[tokio::test]
    async fn test_server_logout_forgets_current_user() {
        let client = ApiClient::new(backend(), logged_in());
        client.auth().logout().await.unwrap();

        let err = client.auth().current_user().await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }
}
