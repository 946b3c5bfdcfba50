use serde::{Deserialize, Serialize};

/// Wallet linked to the account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub wallet_id: String,
    pub wallet_address: String,
    pub is_primary: bool,
}

/// Envelope of `GET /wallets`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletList {
    pub wallets: Vec<Wallet>,
}

/// Body of `POST /wallets/challenge`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeRequest {
    pub wallet_address: String,
}

/// Ownership challenge the wallet must sign
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletChallenge {
    pub challenge_code: String,
    pub message_to_sign: String,
}

/// Body of `POST /wallets/verify`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletVerifyRequest {
    pub challenge_code: String,
    pub signature: String,
}
