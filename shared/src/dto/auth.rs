use serde::{Deserialize, Serialize};

/// Role tag carried on a user. Not enforced anywhere client-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    Moderator,
    User,
    Verifier,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Primary,
    Alias,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserType {
    Social,
    Trading,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    NotVerified,
    Pending,
    Verified,
}

/// User profile as returned by `/auth/register` and `/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AppRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<KycStatus>,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Present when registering an alias of an existing primary account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_account_email: Option<String>,
}

/// Username (actually email) and password login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signed wallet challenge exchanged for a token pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletProof {
    pub address: String,
    pub signature: String,
    pub message: String,
}

/// Body of `POST /auth/login`.
///
/// Both login flows share one endpoint; the body shape tells them apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LoginRequest {
    Wallet(WalletProof),
    Credentials(Credentials),
}

/// Token set issued by the backend on login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub csrf_token: String,
    pub offline_access_token: String,
    pub offline_access_expires_at: String,
}

/// The access/refresh pair persisted between runs.
///
/// Serialized as `{"accessToken": ..., "refreshToken": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<AuthTokens> for StoredTokens {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_tokens_wire_names() {
        let tokens = StoredTokens {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        };
        let json = serde_json::to_value(&tokens).unwrap();
        assert_eq!(json, serde_json::json!({"accessToken": "a", "refreshToken": "r"}));
    }

    #[test]
    fn test_login_request_untagged_shapes() {
        let wallet: LoginRequest = serde_json::from_value(serde_json::json!({
            "address": "0xabc",
            "signature": "sig",
            "message": "hello"
        }))
        .unwrap();
        assert!(matches!(wallet, LoginRequest::Wallet(_)));

        let creds: LoginRequest = serde_json::from_value(serde_json::json!({
            "username": "michael@example.com",
            "password": "pw"
        }))
        .unwrap();
        assert!(matches!(creds, LoginRequest::Credentials(_)));
    }

    #[test]
    fn test_user_optional_fields_omitted() {
        let user = User {
            user_id: "9".to_string(),
            username: "neo".to_string(),
            email: "neo@example.com".to_string(),
            avatar_url: None,
            bio: None,
            location: None,
            followers_count: Some(0),
            following_count: None,
            posts_count: None,
            role: Some(AppRole::Verifier),
            wallet_address: None,
            account_type: Some(AccountType::Alias),
            user_type: Some(UserType::Social),
            kyc_status: Some(KycStatus::NotVerified),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("bio").is_none());
        assert_eq!(json["role"], "verifier");
        assert_eq!(json["account_type"], "alias");
        assert_eq!(json["user_type"], "Social");
        assert_eq!(json["kyc_status"], "not_verified");
    }
}
