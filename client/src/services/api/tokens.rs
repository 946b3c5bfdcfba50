//! # Token Endpoints
//!
//! Balances, transfers, staking and rewards.
//!
//! Reads with a placeholder (`get_balance`, `get_user_stakes`,
//! `get_pending_rewards`, `get_staking_pools`) go through the client's
//! [`FallbackPolicy`](crate::fallback::FallbackPolicy) and return
//! [`Sourced`]. Mutations always propagate errors.

use shared::{
    ClaimRewardsResponse, PendingRewards, StakeRequest, StakeResponse, StakingPool, SuccessResponse,
    TokenBalance, TransferRequest, UnstakeRequest, UserStake, UserStakes,
};

use super::client::ApiClient;
use crate::core::error::{ClientError, Result};
use crate::fallback::Sourced;
use crate::mock::fixtures;

pub struct TokenApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn tokens(&self) -> TokenApi<'_> {
        TokenApi::new(self)
    }
}

impl<'a> TokenApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_balance(&self) -> Result<Sourced<TokenBalance>> {
        let result = self.client.get("/tokens/balance").await;
        self.client
            .fallback_policy()
            .resolve("get_balance", result, fixtures::placeholder_balance)
    }

    /// Send `amount` (decimal string) to `to_address`.
    #[tracing::instrument(skip(self), fields(to = %shared::truncate_address(to_address)))]
    pub async fn transfer(&self, to_address: &str, amount: &str) -> Result<SuccessResponse> {
        lib_utils::validate_not_empty(to_address, "Recipient").map_err(ClientError::Validation)?;
        lib_utils::validate_not_empty(amount, "Amount").map_err(ClientError::Validation)?;

        let body = TransferRequest {
            to_address: to_address.to_string(),
            amount: amount.to_string(),
        };
        self.client.post("/tokens/transfer", &body).await.inspect_err(|e| {
            tracing::error!(error = %e, "Transfer failed");
        })
    }

    /// Lock `amount` for `lock_period` days.
    #[tracing::instrument(skip(self))]
    pub async fn stake(&self, amount: &str, lock_period: u32) -> Result<StakeResponse> {
        lib_utils::validate_not_empty(amount, "Amount").map_err(ClientError::Validation)?;

        let body = StakeRequest {
            amount: amount.to_string(),
            lock_period,
        };
        self.client.post("/tokens/stake", &body).await.inspect_err(|e| {
            tracing::error!(error = %e, "Stake failed");
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn unstake(&self, stake_id: &str) -> Result<SuccessResponse> {
        let body = UnstakeRequest {
            stake_id: stake_id.to_string(),
        };
        self.client.post("/tokens/unstake", &body).await.inspect_err(|e| {
            tracing::error!(error = %e, "Unstake failed");
        })
    }

    pub async fn get_user_stakes(&self) -> Result<Sourced<Vec<UserStake>>> {
        let result = self
            .client
            .get::<UserStakes>("/tokens/staking/user-stakes")
            .await
            .map(|envelope| envelope.stakes);
        self.client
            .fallback_policy()
            .resolve("get_user_stakes", result, fixtures::placeholder_user_stakes)
    }

    pub async fn claim_rewards(&self) -> Result<ClaimRewardsResponse> {
        self.client.post_empty("/tokens/claim-rewards").await.inspect_err(|e| {
            tracing::error!(error = %e, "Claim rewards failed");
        })
    }

    pub async fn get_pending_rewards(&self) -> Result<Sourced<PendingRewards>> {
        let result = self.client.get("/tokens/staking/pending-rewards").await;
        self.client
            .fallback_policy()
            .resolve("get_pending_rewards", result, fixtures::placeholder_pending_rewards)
    }

    pub async fn get_staking_pools(&self) -> Result<Sourced<Vec<StakingPool>>> {
        let result = self.client.get("/tokens/staking/pools").await;
        self.client
            .fallback_policy()
            .resolve("get_staking_pools", result, fixtures::staking_pools)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::fallback::FallbackPolicy;
    use crate::mock::{MockBackend, OfflineTransport};
    use crate::session::Credentials;

    fn offline(policy: FallbackPolicy) -> ApiClient {
        ApiClient::new(Arc::new(OfflineTransport), Credentials::default()).with_fallback_policy(policy)
    }

    #[tokio::test]
    async fn test_balance_fallback_values_when_offline() {
        let balance = offline(FallbackPolicy::Degrade).tokens().get_balance().await.unwrap();
        assert!(balance.is_fallback());
        assert_eq!(
            balance.into_inner(),
            TokenBalance {
                available: "10000.50".to_string(),
                staked: "5000.00".to_string(),
                locked: "1000.00".to_string(),
                pending_rewards: "123.45".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_strict_policy_propagates_errors() {
        let client = offline(FallbackPolicy::Strict);
        assert!(matches!(client.tokens().get_balance().await, Err(ClientError::Network(_))));
        assert!(client.tokens().get_user_stakes().await.is_err());
        assert!(client.tokens().get_pending_rewards().await.is_err());
    }

    #[tokio::test]
    async fn test_other_read_fallbacks() {
        let client = offline(FallbackPolicy::Degrade);

        let stakes = client.tokens().get_user_stakes().await.unwrap();
        assert!(stakes.is_fallback());
        let stakes = stakes.into_inner();
        assert_eq!(stakes.len(), 1);
        assert_eq!(stakes[0].id, "1");
        assert_eq!(stakes[0].amount, "5000");
        assert_eq!(stakes[0].apy, 15.0);
        assert!(!stakes[0].can_unstake);
        assert!(stakes[0].staked_at < stakes[0].unlock_at);

        let rewards = client.tokens().get_pending_rewards().await.unwrap();
        assert_eq!(rewards.value().rewards, "123.45");

        let pools = client.tokens().get_staking_pools().await.unwrap().into_inner();
        let names: Vec<_> = pools.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Standard Pool", "Premium Pool", "Elite Pool"]);
    }

    #[tokio::test]
    async fn test_live_balance_is_not_fallback() {
        let client = ApiClient::new(Arc::new(MockBackend::new()), Credentials::default());
        let balance = client.tokens().get_balance().await.unwrap();
        assert!(balance.is_live());
        assert!(balance.cause().is_none());
        assert_eq!(balance.value().available, "1250.50");
    }

    #[tokio::test]
    async fn test_transfer_debits_available() {
        let backend = Arc::new(MockBackend::new());
        let client = ApiClient::new(backend.clone(), Credentials::default());
        let before = backend.balance().available;

        let response = client.tokens().transfer("alice@example.com", "50").await.unwrap();
        assert!(response.success);
        assert_ne!(backend.balance().available, before);
        assert_eq!(backend.balance().available, "1200.50");
    }

    #[tokio::test]
    async fn test_transfer_rejections() {
        let backend = Arc::new(MockBackend::new());
        let client = ApiClient::new(backend.clone(), Credentials::default());
        let before = backend.balance();

        let err = client.tokens().transfer("alice@example.com", "lots").await.unwrap_err();
        assert_eq!(err.status(), Some(400));

        let err = client
            .tokens()
            .transfer("alice@example.com", "99999999")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));

        let err = client.tokens().transfer("", "5").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));

        assert_eq!(backend.balance(), before);
    }

    #[tokio::test]
    async fn test_stake_unstake_and_claim() {
        let backend = Arc::new(MockBackend::new());
        let client = ApiClient::new(backend.clone(), Credentials::default());

        let stake = client.tokens().stake("1000", 90).await.unwrap();
        assert_eq!(stake.amount, "1000");
        assert_eq!(stake.lock_period, 90);
        assert_eq!(backend.balance().available, "250.50");
        assert_eq!(backend.balance().staked, "6000.00");

        let stakes = client.tokens().get_user_stakes().await.unwrap().into_inner();
        assert!(stakes.iter().any(|s| s.id == stake.stake_id));

        let err = client.tokens().unstake(&stake.stake_id).await.unwrap_err();
        assert_eq!(err.status(), Some(400));

        let flexible = client.tokens().stake("100", 0).await.unwrap();
        assert_eq!(backend.balance().available, "150.50");
        assert!(client.tokens().unstake(&flexible.stake_id).await.unwrap().success);
        assert_eq!(backend.balance().available, "250.50");

        let claimed = client.tokens().claim_rewards().await.unwrap();
        assert_eq!(claimed.amount, "125.75");
        assert_eq!(backend.balance().available, "376.25");
        assert_eq!(backend.balance().pending_rewards, "0.00");
        let pending = client.tokens().get_pending_rewards().await.unwrap();
        assert_eq!(pending.value().rewards, "0.00");
    }
}
