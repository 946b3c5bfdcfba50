//! # Mock Backend
//!
//! In-memory [`HttpTransport`] serving every endpoint from fixture data.
//!
//! State lives behind one `parking_lot::Mutex`, taken only for the
//! synchronous handling of a single request. Balances are kept as
//! `rust_decimal::Decimal` and rendered back to strings with their scale.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use shared::{
    Achievement, AuthTokens, ChallengeRequest, ClaimRewardsResponse, Comment, Community, Conversation,
    ErrorResponse, FriendRequest, FriendRequestBody, FriendRequestStatus, Friendship, GamificationProfile,
    LikeState, LoginRequest, Message, MessageResponse, NewComment, NewPost, PendingRewards, Post, Quest, QuestClaim,
    RegisterRequest, SendMessageRequest, StakeRequest, StakeResponse, SuccessResponse, TokenBalance,
    TransferRequest, UnstakeRequest, User, UserStake, UserStakes, Wallet, WalletChallenge, WalletList,
    WalletVerifyRequest,
};
use shared::{AccountType, KycStatus, UserType};

use super::fixtures;
use crate::core::error::{ClientError, Result};
use crate::core::service::IdProvider;
use crate::ids::UuidIds;
use crate::services::api::transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport};

/// Default page size of `/social/feed` when the query omits it
const FEED_PAGE_SIZE: usize = 20;

/// Balances as decimals; converted to [`TokenBalance`] strings on the way out.
#[derive(Debug, Clone)]
struct Ledger {
    available: Decimal,
    staked: Decimal,
    locked: Decimal,
    pending_rewards: Decimal,
}

impl Ledger {
    fn seeded() -> Self {
        Self {
            available: Decimal::new(125_050, 2),
            staked: Decimal::new(500_000, 2),
            locked: Decimal::new(50_000, 2),
            pending_rewards: Decimal::new(12_575, 2),
        }
    }

    fn to_balance(&self) -> TokenBalance {
        TokenBalance {
            available: self.available.to_string(),
            staked: self.staked.to_string(),
            locked: self.locked.to_string(),
            pending_rewards: self.pending_rewards.to_string(),
        }
    }
}

struct MockState {
    users: Vec<User>,
    current_user: Option<User>,
    posts: Vec<Post>,
    /// (post id, comment)
    comments: Vec<(String, Comment)>,
    communities: Vec<Community>,
    friend_requests: Vec<FriendRequest>,
    friends: Vec<Friendship>,
    messages: Vec<Message>,
    ledger: Ledger,
    stakes: Vec<UserStake>,
    wallets: Vec<Wallet>,
    /// challenge code → wallet address
    challenges: HashMap<String, String>,
    profile: GamificationProfile,
    achievements: Vec<Achievement>,
    quests: Vec<Quest>,
}

impl MockState {
    fn seeded() -> Self {
        let users = fixtures::users();
        let current_user = users.first().cloned();
        let mut stakes = fixtures::placeholder_user_stakes();
        for stake in &mut stakes {
            stake.apy = 18.0;
        }

        Self {
            users,
            current_user,
            posts: fixtures::posts(),
            comments: fixtures::comments(),
            communities: fixtures::communities(),
            friend_requests: fixtures::friend_requests(),
            friends: fixtures::friends(),
            messages: fixtures::messages(),
            ledger: Ledger::seeded(),
            stakes,
            wallets: fixtures::wallets(),
            challenges: HashMap::new(),
            profile: fixtures::profile(),
            achievements: fixtures::achievements(),
            quests: fixtures::quests(),
        }
    }

    fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }
}

/// Fixture-backed stand-in for the REST backend.
///
/// ```rust
/// use std::sync::Arc;
/// use besha_client::mock::MockBackend;
/// use besha_client::services::api::ApiClient;
/// use besha_client::session::Credentials;
///
/// let backend = Arc::new(MockBackend::new());
/// let client = ApiClient::new(backend.clone(), Credentials::default());
/// assert_eq!(backend.balance().available, "1250.50");
/// assert_eq!(client.fallback_policy(), besha_client::fallback::FallbackPolicy::Degrade);
/// ```
pub struct MockBackend {
    state: Mutex<MockState>,
    ids: Arc<dyn IdProvider>,
    offline: AtomicBool,
    failures: Mutex<HashMap<String, u16>>,
    latency: Duration,
    log: Mutex<Vec<ApiRequest>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Seeded backend issuing UUID v4 ids
    pub fn new() -> Self {
        Self::with_ids(Arc::new(UuidIds))
    }

    pub fn with_ids(ids: Arc<dyn IdProvider>) -> Self {
        Self {
            state: Mutex::new(MockState::seeded()),
            ids,
            offline: AtomicBool::new(false),
            failures: Mutex::new(HashMap::new()),
            latency: Duration::ZERO,
            log: Mutex::new(Vec::new()),
        }
    }

    /// Delay every response; `Duration::from_millis(300)` feels like a
    /// real backend.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// While offline every request fails with [`ClientError::Network`] and
    /// no state changes.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Answer every request to `path` (query ignored) with `status`.
    pub fn fail_path(&self, path: impl Into<String>, status: u16) {
        self.failures.lock().insert(path.into(), status);
    }

    pub fn clear_failures(&self) {
        self.failures.lock().clear();
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().clone()
    }

    pub fn balance(&self) -> TokenBalance {
        self.state.lock().ledger.to_balance()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().messages.clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.state.lock().posts.clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.lock().current_user.clone()
    }

    fn handle(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let route = request.route();
        let segments: Vec<&str> = route.trim_matches('/').split('/').collect();
        let mut state = self.state.lock();

        match (request.method, segments.as_slice()) {
            // auth
            (HttpMethod::Post, ["auth", "register"]) => self.register(&mut state, request),
            (HttpMethod::Post, ["auth", "login"]) => self.login(request),
            (HttpMethod::Get, ["auth", "me"]) => match &state.current_user {
                Some(user) => ApiResponse::json(user),
                None => error(401, "Not authenticated"),
            },
            (HttpMethod::Post, ["auth", "logout"]) => {
                state.current_user = None;
                Ok(ApiResponse::new(204, Vec::new()))
            }

            // tokens
            (HttpMethod::Get, ["tokens", "balance"]) => ApiResponse::json(&state.ledger.to_balance()),
            (HttpMethod::Post, ["tokens", "transfer"]) => transfer(&mut state, request),
            (HttpMethod::Post, ["tokens", "stake"]) => self.stake(&mut state, request),
            (HttpMethod::Post, ["tokens", "unstake"]) => unstake(&mut state, request),
            (HttpMethod::Get, ["tokens", "staking", "user-stakes"]) => {
                let stakes = state
                    .stakes
                    .iter()
                    .map(|stake| UserStake {
                        can_unstake: is_unlocked(stake),
                        ..stake.clone()
                    })
                    .collect();
                ApiResponse::json(&UserStakes { stakes })
            }
            (HttpMethod::Post, ["tokens", "claim-rewards"]) => {
                let ledger = &mut state.ledger;
                let amount = ledger.pending_rewards;
                ledger.available += amount;
                ledger.pending_rewards = Decimal::new(0, amount.scale());
                ApiResponse::json(&ClaimRewardsResponse {
                    amount: amount.to_string(),
                })
            }
            (HttpMethod::Get, ["tokens", "staking", "pending-rewards"]) => ApiResponse::json(&PendingRewards {
                rewards: state.ledger.pending_rewards.to_string(),
            }),
            (HttpMethod::Get, ["tokens", "staking", "pools"]) => ApiResponse::json(&fixtures::staking_pools()),

            // gamification
            (HttpMethod::Get, ["gamification", "profile"]) => ApiResponse::json(&state.profile),
            (HttpMethod::Get, ["gamification", "achievements"]) => ApiResponse::json(&state.achievements),
            (HttpMethod::Get, ["gamification", "active-quests"]) => ApiResponse::json(&state.quests),
            (HttpMethod::Post, ["gamification", "quests", quest_id, "claim"]) => {
                match state.quests.iter_mut().find(|q| q.id == *quest_id) {
                    Some(quest) => {
                        quest.completed = true;
                        quest.progress = quest.total;
                        ApiResponse::json(&QuestClaim {
                            success: true,
                            reward: quest.reward,
                        })
                    }
                    None => error(404, "Quest not found"),
                }
            }
            (HttpMethod::Get, ["gamification", "leaderboard", _kind]) => ApiResponse::json(&fixtures::leaderboard()),

            // social
            (HttpMethod::Post, ["social", "posts"]) => self.create_post(&mut state, request),
            (HttpMethod::Get, ["social", "feed"]) => {
                let page = query_usize(request, "page").unwrap_or(1).max(1);
                let page_size = query_usize(request, "page_size").unwrap_or(FEED_PAGE_SIZE);
                let items: Vec<&Post> = state
                    .posts
                    .iter()
                    .skip((page - 1).saturating_mul(page_size))
                    .take(page_size)
                    .collect();
                ApiResponse::json(&items)
            }
            (HttpMethod::Post, ["social", "posts", post_id, "like"]) => set_liked(&mut state, post_id, true),
            (HttpMethod::Delete, ["social", "posts", post_id, "like"]) => set_liked(&mut state, post_id, false),
            (HttpMethod::Get, ["social", "posts", post_id, "comments"]) => {
                if !state.posts.iter().any(|p| p.post_id == *post_id) {
                    return error(404, "Post not found");
                }
                let comments: Vec<&Comment> = state
                    .comments
                    .iter()
                    .filter(|(id, _)| id == post_id)
                    .map(|(_, c)| c)
                    .collect();
                ApiResponse::json(&comments)
            }
            (HttpMethod::Post, ["social", "posts", post_id, "comments"]) => self.comment(&mut state, post_id, request),

            // friends
            (HttpMethod::Get, ["friends"]) => ApiResponse::json(&state.friends),
            (HttpMethod::Get, ["friends", "requests"]) => {
                let me = state.current_user.as_ref().map(|u| u.user_id.clone());
                let incoming: Vec<&FriendRequest> = state
                    .friend_requests
                    .iter()
                    .filter(|r| Some(&r.addressee_id) == me.as_ref() && r.status == FriendRequestStatus::Pending)
                    .collect();
                ApiResponse::json(&incoming)
            }
            (HttpMethod::Post, ["friends", "requests"]) => self.send_friend_request(&mut state, request),
            (HttpMethod::Post, ["friends", "requests", requester_id, "accept"]) => {
                answer_friend_request(&mut state, requester_id, FriendRequestStatus::Accepted)
            }
            (HttpMethod::Post, ["friends", "requests", requester_id, "reject"]) => {
                answer_friend_request(&mut state, requester_id, FriendRequestStatus::Rejected)
            }

            // messages
            (HttpMethod::Post, ["messages"]) => self.send_message(&mut state, request),
            (HttpMethod::Get, ["messages", "conversations"]) => ApiResponse::json(&conversations(&state)),
            (HttpMethod::Get, ["messages", other_user_id]) => {
                let thread: Vec<&Message> = state.messages.iter().filter(|m| m.involves(other_user_id)).collect();
                ApiResponse::json(&thread)
            }

            // wallets
            (HttpMethod::Post, ["wallets", "challenge"]) => self.create_challenge(&mut state, request),
            (HttpMethod::Post, ["wallets", "verify"]) => self.verify_wallet(&mut state, request),
            (HttpMethod::Get, ["wallets"]) => ApiResponse::json(&WalletList {
                wallets: state.wallets.clone(),
            }),

            // communities
            (HttpMethod::Get, ["communities"]) => ApiResponse::json(&state.communities),
            (HttpMethod::Get, ["communities", community_id]) => {
                match state.communities.iter().find(|c| c.community_id == *community_id) {
                    Some(community) => ApiResponse::json(community),
                    None => error(404, "Community not found"),
                }
            }
            (HttpMethod::Post, ["communities", community_id, "join"]) => set_membership(&mut state, community_id, true),
            (HttpMethod::Post, ["communities", community_id, "leave"]) => set_membership(&mut state, community_id, false),

            _ => error(404, "Route not found"),
        }
    }

    fn register(&self, state: &mut MockState, request: &ApiRequest) -> Result<ApiResponse> {
        let body: RegisterRequest = match parse_body(request) {
            Ok(body) => body,
            Err(response) => return Ok(response),
        };
        let account_type = if body.parent_account_email.is_some() {
            AccountType::Alias
        } else {
            AccountType::Primary
        };
        let user = User {
            user_id: self.ids.next_id(),
            username: body.username,
            email: body.email,
            avatar_url: None,
            bio: None,
            location: None,
            followers_count: Some(0),
            following_count: Some(0),
            posts_count: Some(0),
            role: None,
            wallet_address: None,
            account_type: Some(account_type),
            user_type: Some(UserType::Social),
            kyc_status: Some(KycStatus::NotVerified),
        };
        state.users.push(user.clone());
        state.current_user = Some(user.clone());
        ApiResponse::json(&user)
    }

    fn login(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let subject = match parse_body::<LoginRequest>(request) {
            Ok(LoginRequest::Wallet(proof)) => proof.address,
            Ok(LoginRequest::Credentials(_)) => format!("token_{}", lib_utils::now_millis()),
            Err(response) => return Ok(response),
        };
        ApiResponse::json(&AuthTokens {
            access_token: format!("mock_access_{}", subject),
            refresh_token: format!("mock_refresh_{}", subject),
            token_type: "bearer".to_string(),
            csrf_token: format!("mock_csrf_{}", self.ids.next_id()),
            offline_access_token: format!("mock_offline_{}", self.ids.next_id()),
            offline_access_expires_at: lib_utils::offset_days_rfc3339(30),
        })
    }

    fn stake(&self, state: &mut MockState, request: &ApiRequest) -> Result<ApiResponse> {
        let body: StakeRequest = match parse_body(request) {
            Ok(body) => body,
            Err(response) => return Ok(response),
        };
        let amount = match positive_amount(&body.amount) {
            Ok(amount) => amount,
            Err(response) => return Ok(response),
        };
        if amount > state.ledger.available {
            return error(400, "Insufficient balance");
        }

        // Best pool the amount qualifies for.
        let apy = fixtures::staking_pools()
            .into_iter()
            .filter(|pool| Decimal::from(pool.min_stake) <= amount)
            .map(|pool| pool.apy)
            .fold(0.0, f64::max);

        state.ledger.available -= amount;
        state.ledger.staked += amount;

        let stake_id = self.ids.next_id();
        state.stakes.push(UserStake {
            id: stake_id.clone(),
            amount: amount.to_string(),
            staked_at: lib_utils::offset_days_rfc3339(0),
            unlock_at: lib_utils::offset_days_rfc3339(i64::from(body.lock_period)),
            apy,
            can_unstake: body.lock_period == 0,
        });

        ApiResponse::json(&StakeResponse {
            stake_id,
            amount: amount.to_string(),
            timestamp: lib_utils::now_millis(),
            lock_period: body.lock_period,
        })
    }

    fn create_post(&self, state: &mut MockState, request: &ApiRequest) -> Result<ApiResponse> {
        let body: NewPost = match parse_body(request) {
            Ok(body) => body,
            Err(response) => return Ok(response),
        };
        let Some(author) = state.current_user.clone() else {
            return error(401, "Not authenticated");
        };
        let post = Post {
            post_id: self.ids.next_id(),
            user_id: author.user_id,
            username: author.username,
            user_avatar: author.avatar_url,
            content_text: body.content_text,
            media_urls: body.media_urls,
            post_type: Some(body.post_type),
            trade: body.trade,
            likes_count: 0,
            comments_count: 0,
            shares_count: 0,
            views_count: None,
            created_at: "just now".to_string(),
            is_liked: None,
            visibility: None,
            community_id: body.community_id,
        };
        state.posts.insert(0, post.clone());
        ApiResponse::json(&post)
    }

    fn comment(&self, state: &mut MockState, post_id: &str, request: &ApiRequest) -> Result<ApiResponse> {
        let body: NewComment = match parse_body(request) {
            Ok(body) => body,
            Err(response) => return Ok(response),
        };
        let Some(author) = state.current_user.clone() else {
            return error(401, "Not authenticated");
        };
        let Some(post) = state.posts.iter_mut().find(|p| p.post_id == post_id) else {
            return error(404, "Post not found");
        };
        post.comments_count += 1;

        let comment = Comment {
            comment_id: self.ids.next_id(),
            user_id: author.user_id,
            username: author.username,
            user_avatar: author.avatar_url,
            comment_text: body.comment_text,
            created_at: "just now".to_string(),
            likes_count: 0,
        };
        state.comments.push((post_id.to_string(), comment.clone()));
        ApiResponse::json(&comment)
    }

    fn send_friend_request(&self, state: &mut MockState, request: &ApiRequest) -> Result<ApiResponse> {
        let body: FriendRequestBody = match parse_body(request) {
            Ok(body) => body,
            Err(response) => return Ok(response),
        };
        let Some(me) = state.current_user.clone() else {
            return error(401, "Not authenticated");
        };
        state.friend_requests.push(FriendRequest {
            request_id: self.ids.next_id(),
            requester_id: me.user_id,
            requester_username: me.username,
            requester_avatar: me.avatar_url,
            addressee_id: body.addressee_id,
            status: FriendRequestStatus::Pending,
            created_at: "just now".to_string(),
        });
        ApiResponse::json(&MessageResponse::new("Friend request sent."))
    }

    fn send_message(&self, state: &mut MockState, request: &ApiRequest) -> Result<ApiResponse> {
        let body: SendMessageRequest = match parse_body(request) {
            Ok(body) => body,
            Err(response) => return Ok(response),
        };
        let Some(me) = state.current_user.clone() else {
            return error(401, "Not authenticated");
        };
        let message = Message {
            message_id: self.ids.next_id(),
            sender_id: me.user_id,
            recipient_id: body.recipient_id,
            subject: body.subject,
            body: body.body,
            created_at: lib_utils::format_time(lib_utils::now_utc()),
            read: false,
            sender_username: Some(me.username),
            sender_avatar: me.avatar_url,
        };
        state.messages.push(message.clone());
        ApiResponse::json(&message)
    }

    fn create_challenge(&self, state: &mut MockState, request: &ApiRequest) -> Result<ApiResponse> {
        let body: ChallengeRequest = match parse_body(request) {
            Ok(body) => body,
            Err(response) => return Ok(response),
        };
        let challenge_code = self.ids.next_id();
        let message_to_sign = format!(
            "Please sign this message to verify your wallet ownership:\n\nChallenge: {}\nTimestamp: {}",
            challenge_code,
            lib_utils::now_millis()
        );
        state.challenges.insert(challenge_code.clone(), body.wallet_address);
        ApiResponse::json(&WalletChallenge {
            challenge_code,
            message_to_sign,
        })
    }

    fn verify_wallet(&self, state: &mut MockState, request: &ApiRequest) -> Result<ApiResponse> {
        let body: WalletVerifyRequest = match parse_body(request) {
            Ok(body) => body,
            Err(response) => return Ok(response),
        };
        if body.signature.trim().is_empty() {
            return error(400, "Missing signature");
        }
        let Some(address) = state.challenges.remove(&body.challenge_code) else {
            return error(400, "Unknown or expired challenge");
        };
        if !state.wallets.iter().any(|w| w.wallet_address == address) {
            state.wallets.push(Wallet {
                wallet_id: self.ids.next_id(),
                wallet_address: address,
                is_primary: false,
            });
        }
        ApiResponse::json(&MessageResponse::new("Wallet verified and linked successfully."))
    }
}

#[async_trait]
impl HttpTransport for MockBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.log.lock().push(request.clone());

        if self.offline.load(Ordering::SeqCst) {
            return Err(ClientError::Network("mock backend is offline".to_string()));
        }

        let injected = self.failures.lock().get(request.route()).copied();
        if let Some(status) = injected {
            tracing::debug!(path = %request.route(), status, "Injected failure");
            return error(status, "Injected failure");
        }

        self.handle(&request)
    }
}

fn error(status: u16, message: &str) -> Result<ApiResponse> {
    ApiResponse::json_with_status(
        status,
        &ErrorResponse {
            error: message.to_string(),
        },
    )
}

/// Decode the JSON body, or the 400 response to send back
fn parse_body<T: DeserializeOwned>(request: &ApiRequest) -> std::result::Result<T, ApiResponse> {
    let bad_request = |message: String| {
        let body = serde_json::to_vec(&ErrorResponse { error: message }).unwrap_or_default();
        ApiResponse::new(400, body)
    };
    let value = request
        .body
        .clone()
        .ok_or_else(|| bad_request("Missing request body".to_string()))?;
    serde_json::from_value(value).map_err(|e| bad_request(format!("Invalid request body: {e}")))
}

/// Parse a strictly positive decimal amount, or the 400 response
fn positive_amount(raw: &str) -> std::result::Result<Decimal, ApiResponse> {
    let reject = |message: &str| {
        let body = serde_json::to_vec(&ErrorResponse {
            error: message.to_string(),
        })
        .unwrap_or_default();
        ApiResponse::new(400, body)
    };
    let amount = Decimal::from_str(raw.trim()).map_err(|_| reject("Invalid amount"))?;
    if amount <= Decimal::ZERO {
        return Err(reject("Amount must be positive"));
    }
    Ok(amount)
}

fn query_usize(request: &ApiRequest, name: &str) -> Option<usize> {
    request.query_param(name).and_then(|v| v.parse().ok())
}

fn transfer(state: &mut MockState, request: &ApiRequest) -> Result<ApiResponse> {
    let body: TransferRequest = match parse_body(request) {
        Ok(body) => body,
        Err(response) => return Ok(response),
    };
    let amount = match positive_amount(&body.amount) {
        Ok(amount) => amount,
        Err(response) => return Ok(response),
    };
    if amount > state.ledger.available {
        return error(400, "Insufficient balance");
    }
    state.ledger.available -= amount;
    tracing::debug!(to = %body.to_address, %amount, "Mock transfer");
    ApiResponse::json(&SuccessResponse { success: true })
}

fn unstake(state: &mut MockState, request: &ApiRequest) -> Result<ApiResponse> {
    let body: UnstakeRequest = match parse_body(request) {
        Ok(body) => body,
        Err(response) => return Ok(response),
    };
    let Some(index) = state.stakes.iter().position(|s| s.id == body.stake_id) else {
        return error(404, "Stake not found");
    };
    if !is_unlocked(&state.stakes[index]) {
        return error(400, "Stake is still locked");
    }
    let stake = state.stakes.remove(index);
    let amount = Decimal::from_str(&stake.amount).unwrap_or_default();
    state.ledger.staked -= amount;
    state.ledger.available += amount;
    ApiResponse::json(&SuccessResponse { success: true })
}

/// A stake can be withdrawn once its unlock date has passed.
fn is_unlocked(stake: &UserStake) -> bool {
    chrono::DateTime::parse_from_rfc3339(&stake.unlock_at)
        .map(|unlock| unlock <= lib_utils::now_utc())
        .unwrap_or(false)
}

fn set_liked(state: &mut MockState, post_id: &str, liked: bool) -> Result<ApiResponse> {
    let Some(post) = state.posts.iter_mut().find(|p| p.post_id == post_id) else {
        return error(404, "Post not found");
    };
    let was_liked = post.is_liked.unwrap_or(false);
    if liked && !was_liked {
        post.likes_count += 1;
    } else if !liked && was_liked {
        post.likes_count = post.likes_count.saturating_sub(1);
    }
    post.is_liked = Some(liked);
    ApiResponse::json(&LikeState { liked })
}

fn answer_friend_request(state: &mut MockState, requester_id: &str, answer: FriendRequestStatus) -> Result<ApiResponse> {
    let Some(request) = state
        .friend_requests
        .iter_mut()
        .find(|r| r.requester_id == requester_id && r.status == FriendRequestStatus::Pending)
    else {
        return error(404, "Friend request not found");
    };
    request.status = answer;

    if answer == FriendRequestStatus::Accepted {
        let friend = Friendship {
            friend_id: requester_id.to_string(),
            username: request.requester_username.clone(),
            avatar_url: request.requester_avatar.clone(),
            mutual_friends: None,
        };
        state.friends.push(friend);
        return ApiResponse::json(&MessageResponse::new("Friend request accepted."));
    }
    ApiResponse::json(&MessageResponse::new("Friend request rejected."))
}

fn set_membership(state: &mut MockState, community_id: &str, member: bool) -> Result<ApiResponse> {
    let Some(community) = state.communities.iter_mut().find(|c| c.community_id == community_id) else {
        return error(404, "Community not found");
    };
    let was_member = community.is_member.unwrap_or(false);
    if member && !was_member {
        community.member_count += 1;
    } else if !member && was_member {
        community.member_count = community.member_count.saturating_sub(1);
    }
    community.is_member = Some(member);

    let message = if member {
        "Successfully joined community"
    } else {
        "Successfully left community"
    };
    ApiResponse::json(&MessageResponse::new(message))
}

/// One summary per counterpart of the current user, newest first
fn conversations(state: &MockState) -> Vec<Conversation> {
    let Some(me) = state.current_user.as_ref().map(|u| u.user_id.as_str()) else {
        return Vec::new();
    };

    let mut by_other: Vec<(String, Vec<&Message>)> = Vec::new();
    for message in state.messages.iter().filter(|m| m.involves(me)) {
        let other = if message.sender_id == me {
            &message.recipient_id
        } else {
            &message.sender_id
        };
        match by_other.iter_mut().find(|(id, _)| id == other) {
            Some((_, thread)) => thread.push(message),
            None => by_other.push((other.clone(), vec![message])),
        }
    }

    let mut summaries: Vec<Conversation> = by_other
        .into_iter()
        .filter_map(|(other, thread)| {
            let last = thread.iter().max_by(|a, b| a.created_at.cmp(&b.created_at))?;
            let unread = thread.iter().filter(|m| m.recipient_id == me && !m.read).count();
            let user = state.user(&other);
            Some(Conversation {
                other_user_username: user.map(|u| u.username.clone()).unwrap_or_else(|| other.clone()),
                other_user_avatar: user.and_then(|u| u.avatar_url.clone()),
                other_user_id: other,
                last_message: last.body.clone(),
                last_message_at: last.created_at.clone(),
                unread_count: u32::try_from(unread).unwrap_or(u32::MAX),
            })
        })
        .collect();
    summaries.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    fn get(path: &str) -> ApiRequest {
        ApiRequest::new(HttpMethod::Get, path)
    }

    fn post(path: &str, body: serde_json::Value) -> ApiRequest {
        ApiRequest {
            body: Some(body),
            ..ApiRequest::new(HttpMethod::Post, path)
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let backend = MockBackend::new();
        let response = backend.send(get("/nowhere")).await.unwrap();
        assert_eq!(response.status, 404);

        let response = backend
            .send(ApiRequest::new(HttpMethod::Put, "/tokens/balance"))
            .await
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_offline_fails_without_touching_state() {
        let backend = MockBackend::new();
        backend.set_offline(true);

        let err = backend
            .send(post(
                "/tokens/transfer",
                serde_json::json!({"to_address": "alice@example.com", "amount": "50"}),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        assert_eq!(backend.balance().available, "1250.50");

        backend.set_offline(false);
        assert_eq!(backend.send(get("/tokens/balance")).await.unwrap().status, 200);
    }

    #[tokio::test]
    async fn test_fail_path_ignores_query() {
        let backend = MockBackend::new();
        backend.fail_path("/social/feed", 503);

        let response = backend.send(get("/social/feed?page=1&page_size=5")).await.unwrap();
        assert_eq!(response.status, 503);
        assert_eq!(response.status_text(), "Service Unavailable");

        backend.clear_failures();
        assert!(backend.send(get("/social/feed")).await.unwrap().is_success());
    }

    #[tokio::test]
    async fn test_missing_or_malformed_body_is_400() {
        let backend = MockBackend::new();
        let response = backend
            .send(ApiRequest::new(HttpMethod::Post, "/tokens/transfer"))
            .await
            .unwrap();
        assert_eq!(response.status, 400);

        let response = backend
            .send(post("/tokens/stake", serde_json::json!({"amount": "5"})))
            .await
            .unwrap();
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn test_locked_stake_cannot_be_unstaked() {
        let backend = MockBackend::with_ids(Arc::new(SequentialIds::new("s-", 1)));
        let response = backend
            .send(post("/tokens/stake", serde_json::json!({"amount": "100", "lock_period": 30})))
            .await
            .unwrap();
        let stake: StakeResponse = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(stake.stake_id, "s-1");

        let response = backend
            .send(post("/tokens/unstake", serde_json::json!({"stake_id": "s-1"})))
            .await
            .unwrap();
        assert_eq!(response.status, 400);

        let response = backend
            .send(post("/tokens/unstake", serde_json::json!({"stake_id": "nope"})))
            .await
            .unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(backend.balance().staked, "5100.00");
    }

    #[tokio::test]
    async fn test_stake_unlocks_once_unlock_date_passes() {
        let backend = MockBackend::new();
        {
            let mut state = backend.state.lock();
            let stake = &mut state.stakes[0];
            stake.unlock_at = lib_utils::offset_days_rfc3339(-1);
            stake.can_unstake = false;
        }

        let response = backend.send(get("/tokens/staking/user-stakes")).await.unwrap();
        let listed: UserStakes = serde_json::from_slice(&response.body).unwrap();
        assert!(listed.stakes[0].can_unstake);

        let stake_id = listed.stakes[0].id.clone();
        let response = backend
            .send(post("/tokens/unstake", serde_json::json!({ "stake_id": stake_id })))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(backend.balance().staked, "0.00");
    }

    #[tokio::test]
    async fn test_feed_page_far_past_the_end_is_empty() {
        let backend = MockBackend::new();
        let response = backend
            .send(get("/social/feed?page=1000000000000000000&page_size=100"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        let posts: Vec<Post> = serde_json::from_slice(&response.body).unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_conversations_newest_first_with_unread_counts() {
        let backend = MockBackend::new();
        let response = backend.send(get("/messages/conversations")).await.unwrap();
        let conversations: Vec<Conversation> = serde_json::from_slice(&response.body).unwrap();

        let summary: Vec<_> = conversations
            .iter()
            .map(|c| (c.other_user_username.as_str(), c.unread_count))
            .collect();
        assert_eq!(summary, [("Emma Stone", 1), ("David Bruno", 0)]);
    }

    #[tokio::test]
    async fn test_logout_then_authored_routes_are_401() {
        let backend = MockBackend::new();
        backend
            .send(ApiRequest::new(HttpMethod::Post, "/auth/logout"))
            .await
            .unwrap();
        assert!(backend.current_user().is_none());

        let response = backend
            .send(post("/social/posts", serde_json::json!({"content_text": "gm"})))
            .await
            .unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(backend.posts().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_delays_response() {
        let backend = MockBackend::new().with_latency(Duration::from_millis(300));
        let start = tokio::time::Instant::now();
        backend.send(get("/communities")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
