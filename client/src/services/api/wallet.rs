//! # Wallet Linking Endpoints
//!
//! Proving ownership of an address: request a challenge, sign its message
//! with the wallet, submit the signature.

use shared::{ChallengeRequest, MessageResponse, Wallet, WalletChallenge, WalletList, WalletVerifyRequest};

use super::client::ApiClient;
use crate::core::error::Result;

pub struct WalletApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn wallets(&self) -> WalletApi<'_> {
        WalletApi::new(self)
    }
}

impl<'a> WalletApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip(self), fields(wallet = %shared::truncate_address(wallet_address)))]
    pub async fn create_challenge(&self, wallet_address: &str) -> Result<WalletChallenge> {
        let body = ChallengeRequest {
            wallet_address: wallet_address.to_string(),
        };
        self.client.post("/wallets/challenge", &body).await
    }

    #[tracing::instrument(skip(self, request), fields(challenge = %request.challenge_code))]
    pub async fn verify_wallet(&self, request: WalletVerifyRequest) -> Result<MessageResponse> {
        self.client.post("/wallets/verify", &request).await
    }

    pub async fn get_wallets(&self) -> Result<Vec<Wallet>> {
        let list: WalletList = self.client.get("/wallets").await?;
        Ok(list.wallets)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::service::WalletConnector;
    use crate::ids::SequentialIds;
    use crate::mock::MockBackend;
    use crate::session::{Credentials, LocalWallet};

    const ADDRESS: &str = "0x89205A3A3b2A69De6Dbf7f01ED13B2108B2c43e7";

    #[tokio::test]
    async fn test_challenge_sign_verify_links_wallet() {
        let backend = Arc::new(MockBackend::with_ids(Arc::new(SequentialIds::new("c-", 1))));
        let client = ApiClient::new(backend, Credentials::default());

        let challenge = client.wallets().create_challenge(ADDRESS).await.unwrap();
        assert_eq!(challenge.challenge_code, "c-1");
        assert!(challenge.message_to_sign.contains("Challenge: c-1"));

        let signature = LocalWallet::new(ADDRESS)
            .sign_message(&challenge.message_to_sign)
            .await
            .unwrap();
        let verified = client
            .wallets()
            .verify_wallet(WalletVerifyRequest {
                challenge_code: challenge.challenge_code,
                signature,
            })
            .await
            .unwrap();
        assert_eq!(verified.message, "Wallet verified and linked successfully.");

        let wallets = client.wallets().get_wallets().await.unwrap();
        assert_eq!(wallets.len(), 2);
        assert!(wallets[0].is_primary);
        assert_eq!(wallets[1].wallet_address, ADDRESS);
        assert!(!wallets[1].is_primary);
    }

    #[tokio::test]
    async fn test_unknown_challenge_is_rejected() {
        let client = ApiClient::new(Arc::new(MockBackend::new()), Credentials::default());
        let err = client
            .wallets()
            .verify_wallet(WalletVerifyRequest {
                challenge_code: "nope".to_string(),
                signature: "sig".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
    }
}
