//! # Token Data Transfer Objects
//!
//! Balances are decimal strings on the wire; no arithmetic precision policy is
//! implied by these types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenBalance {
    pub available: String,
    pub staked: String,
    pub locked: String,
    pub pending_rewards: String,
}

/// Body of `POST /tokens/transfer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferRequest {
    pub to_address: String,
    pub amount: String,
}

/// Body of `POST /tokens/stake`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StakeRequest {
    pub amount: String,
    /// Lock period in days
    pub lock_period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StakeResponse {
    pub stake_id: String,
    pub amount: String,
    /// Unix milliseconds
    pub timestamp: i64,
    pub lock_period: u32,
}

/// Body of `POST /tokens/unstake`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnstakeRequest {
    pub stake_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStake {
    pub id: String,
    pub amount: String,
    pub staked_at: String,
    pub unlock_at: String,
    pub apy: f64,
    pub can_unstake: bool,
}

/// Envelope of `GET /tokens/staking/user-stakes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserStakes {
    pub stakes: Vec<UserStake>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimRewardsResponse {
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingRewards {
    pub rewards: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StakingPool {
    pub pool_id: String,
    pub name: String,
    pub apy: f64,
    pub min_stake: u64,
    pub total_staked: u64,
    pub participants: u32,
}
