//! # Fixture Data
//!
//! Seed data for [`super::MockBackend`] and the placeholder values that
//! fallback-capable reads serve when their request fails.

use chrono::Duration;
use shared::{
    Achievement, AppRole, Comment, Community, ConfidenceLevel, FriendRequest, FriendRequestStatus, Friendship,
    GamificationProfile, LeaderboardEntry, Message, PendingRewards, Post, PostType, Quest, SignalType,
    StakingPool, TokenBalance, TradeDetails, User, UserStake, Visibility, Wallet,
};

const MICHAEL_AVATAR: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400";
const EMMA_AVATAR: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400";
const DAVID_AVATAR: &str = "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400";
const SARAH_AVATAR: &str = "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400";

pub const MICHAEL_WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb";
pub const DAVID_WALLET: &str = "0x89205A3A3b2A69De6Dbf7f01ED13B2108B2c43e7";

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn hours_ago(hours: i64) -> String {
    lib_utils::format_time(lib_utils::now_utc() - Duration::hours(hours))
}

// ---------------------------------------------------------------------------
// Placeholders
// ---------------------------------------------------------------------------

pub fn placeholder_balance() -> TokenBalance {
    TokenBalance {
        available: "10000.50".to_string(),
        staked: "5000.00".to_string(),
        locked: "1000.00".to_string(),
        pending_rewards: "123.45".to_string(),
    }
}

/// One locked stake, staked 30 days ago, unlocking in 60.
pub fn placeholder_user_stakes() -> Vec<UserStake> {
    vec![UserStake {
        id: "1".to_string(),
        amount: "5000".to_string(),
        staked_at: lib_utils::offset_days_rfc3339(-30),
        unlock_at: lib_utils::offset_days_rfc3339(60),
        apy: 15.0,
        can_unstake: false,
    }]
}

pub fn placeholder_pending_rewards() -> PendingRewards {
    PendingRewards {
        rewards: "123.45".to_string(),
    }
}

pub fn placeholder_profile() -> GamificationProfile {
    GamificationProfile {
        points: 1250,
        level: 5,
        next_level_points: 1500,
        current_level_points: 1000,
        streak: 7,
        rank: 42,
    }
}

pub fn placeholder_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "1".to_string(),
            name: "First Post".to_string(),
            description: "Create your first post".to_string(),
            icon: "Trophy".to_string(),
            points: 50,
            unlocked: true,
            progress: None,
            total: None,
        },
        Achievement {
            id: "2".to_string(),
            name: "Social Butterfly".to_string(),
            description: "Connect with 10 friends".to_string(),
            icon: "Award".to_string(),
            points: 100,
            unlocked: false,
            progress: Some(7),
            total: Some(10),
        },
    ]
}

pub fn placeholder_quests() -> Vec<Quest> {
    vec![Quest {
        id: "1".to_string(),
        title: "Daily Engagement".to_string(),
        description: "Make 5 posts today".to_string(),
        reward: 50,
        progress: 3,
        total: 5,
        completed: false,
        expires_at: None,
    }]
}

/// Standard, Premium and Elite pools. Served live by the mock and as the
/// placeholder when the request fails.
pub fn staking_pools() -> Vec<StakingPool> {
    let pool = |id: &str, name: &str, apy: f64, min_stake: u64, total_staked: u64, participants: u32| StakingPool {
        pool_id: id.to_string(),
        name: name.to_string(),
        apy,
        min_stake,
        total_staked,
        participants,
    };
    vec![
        pool("1", "Standard Pool", 12.5, 100, 1_500_000, 2340),
        pool("2", "Premium Pool", 18.0, 1000, 5_000_000, 892),
        pool("3", "Elite Pool", 25.0, 10_000, 15_000_000, 234),
    ]
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub fn users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, avatar: &str, bio: &str, location: &str| User {
        user_id: id.to_string(),
        username: name.to_string(),
        email: email.to_string(),
        avatar_url: s(avatar),
        bio: s(bio),
        location: s(location),
        followers_count: None,
        following_count: None,
        posts_count: None,
        role: None,
        wallet_address: None,
        account_type: None,
        user_type: None,
        kyc_status: None,
    };

    vec![
        User {
            followers_count: Some(1_500_000),
            following_count: Some(71),
            posts_count: Some(109),
            role: Some(AppRole::User),
            wallet_address: s(MICHAEL_WALLET),
            ..user(
                "1",
                "Michael Bruno",
                "michael@example.com",
                MICHAEL_AVATAR,
                "Crypto enthusiast and technical analyst",
                "San Francisco, CA",
            )
        },
        User {
            followers_count: Some(850_000),
            following_count: Some(123),
            posts_count: Some(234),
            role: Some(AppRole::Moderator),
            ..user("2", "Emma Stone", "emma@example.com", EMMA_AVATAR, "Photographer", "Los Angeles, CA")
        },
        User {
            followers_count: Some(1_500_000),
            following_count: Some(71),
            posts_count: Some(109),
            role: Some(AppRole::Verifier),
            wallet_address: s(DAVID_WALLET),
            ..user(
                "3",
                "David Bruno",
                "david@example.com",
                DAVID_AVATAR,
                "Web3 trader | DeFi enthusiast",
                "New York, NY",
            )
        },
        User {
            followers_count: Some(523_000),
            following_count: Some(89),
            posts_count: Some(78),
            role: Some(AppRole::User),
            ..user(
                "4",
                "Sarah Jhaveri",
                "sarah@example.com",
                SARAH_AVATAR,
                "Trading signals expert",
                "Miami, FL",
            )
        },
    ]
}

/// Feed in display order: chart analysis, standard, trade signal
pub fn posts() -> Vec<Post> {
    vec![
        Post {
            post_id: "1".to_string(),
            user_id: "1".to_string(),
            username: "Michael Bruno".to_string(),
            user_avatar: s(MICHAEL_AVATAR),
            content_text: "BTC showing strong support at $68K. Volume analysis indicates accumulation phase. \
                           Expecting breakout to $75K within next week."
                .to_string(),
            media_urls: Some(vec![
                "https://images.unsplash.com/photo-1621416894569-0f39ed31d247?w=800".to_string(),
            ]),
            post_type: Some(PostType::ChartAnalysis),
            trade: TradeDetails {
                symbol: s("BTCUSD"),
                timeframe: s("D1"),
                analysis_type: s("technical"),
                prediction: s("bullish"),
                target_price: Some(75_000.0),
                stop_loss: Some(65_000.0),
                confidence_level: Some(ConfidenceLevel::High),
                ..TradeDetails::default()
            },
            likes_count: 247,
            comments_count: 57,
            shares_count: 33,
            views_count: Some(1834),
            created_at: "30 min".to_string(),
            is_liked: Some(false),
            visibility: Some(Visibility::Public),
            community_id: None,
        },
        Post {
            post_id: "2".to_string(),
            user_id: "2".to_string(),
            username: "Emma Stone".to_string(),
            user_avatar: s(EMMA_AVATAR),
            content_text: "What! Just amazing. I love your profile contents, look forward to see more.".to_string(),
            media_urls: None,
            post_type: Some(PostType::Standard),
            trade: TradeDetails::default(),
            likes_count: 128,
            comments_count: 23,
            shares_count: 12,
            views_count: Some(892),
            created_at: "2h ago".to_string(),
            is_liked: None,
            visibility: Some(Visibility::Public),
            community_id: None,
        },
        Post {
            post_id: "3".to_string(),
            user_id: "4".to_string(),
            username: "Sarah Jhaveri".to_string(),
            user_avatar: s(SARAH_AVATAR),
            content_text: "Entering SHORT position on ETH. RSI overbought, bearish divergence forming.".to_string(),
            media_urls: None,
            post_type: Some(PostType::TradeSignal),
            trade: TradeDetails {
                symbol: s("ETHUSD"),
                prediction: s("bearish"),
                signal_type: Some(SignalType::Sell),
                entry_price: Some(3500.0),
                target_price: Some(3200.0),
                stop_loss: Some(3650.0),
                risk_reward_ratio: Some(2.0),
                ..TradeDetails::default()
            },
            likes_count: 342,
            comments_count: 89,
            shares_count: 45,
            views_count: Some(2156),
            created_at: "5h ago".to_string(),
            is_liked: None,
            visibility: Some(Visibility::Public),
            community_id: None,
        },
    ]
}

/// Comments, all on post `1`
pub fn comments() -> Vec<(String, Comment)> {
    vec![
        (
            "1".to_string(),
            Comment {
                comment_id: "1".to_string(),
                user_id: "2".to_string(),
                username: "Emma Stone".to_string(),
                user_avatar: s(EMMA_AVATAR),
                comment_text: "What! Just amazing. I love your profile contents, look forward to see more.".to_string(),
                created_at: "30 min".to_string(),
                likes_count: 12,
            },
        ),
        (
            "1".to_string(),
            Comment {
                comment_id: "2".to_string(),
                user_id: "4".to_string(),
                username: "Sarah Jhaveri".to_string(),
                user_avatar: s(SARAH_AVATAR),
                comment_text: "Praesent ipsum non tempus. Praesent mi rhoncus ipsum non tempus lorem tem praesent."
                    .to_string(),
                created_at: "45 min".to_string(),
                likes_count: 8,
            },
        ),
    ]
}

pub fn communities() -> Vec<Community> {
    vec![
        Community {
            community_id: "1".to_string(),
            name: "Bitcoin Traders".to_string(),
            description: "Professional Bitcoin trading strategies and analysis".to_string(),
            is_private: false,
            creator_id: "1".to_string(),
            member_count: 15_234,
            post_count: 3421,
            avatar_url: s("https://images.unsplash.com/photo-1621416894569-0f39ed31d247?w=400"),
            created_at: "2023-01-15".to_string(),
            is_member: Some(true),
        },
        Community {
            community_id: "2".to_string(),
            name: "DeFi Enthusiasts".to_string(),
            description: "Decentralized Finance discussions and opportunities".to_string(),
            is_private: false,
            creator_id: "3".to_string(),
            member_count: 8932,
            post_count: 1876,
            avatar_url: s("https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=400"),
            created_at: "2023-03-20".to_string(),
            is_member: Some(false),
        },
        Community {
            community_id: "3".to_string(),
            name: "Elite Traders VIP".to_string(),
            description: "Exclusive group for verified professional traders".to_string(),
            is_private: true,
            creator_id: "1".to_string(),
            member_count: 234,
            post_count: 892,
            avatar_url: None,
            created_at: "2023-06-10".to_string(),
            is_member: Some(false),
        },
    ]
}

/// Incoming requests for user `1`
pub fn friend_requests() -> Vec<FriendRequest> {
    vec![
        FriendRequest {
            request_id: "1".to_string(),
            requester_id: "2".to_string(),
            requester_username: "Emma Stone".to_string(),
            requester_avatar: s(EMMA_AVATAR),
            addressee_id: "1".to_string(),
            status: FriendRequestStatus::Pending,
            created_at: "2h ago".to_string(),
        },
        FriendRequest {
            request_id: "2".to_string(),
            requester_id: "3".to_string(),
            requester_username: "David Bruno".to_string(),
            requester_avatar: s(DAVID_AVATAR),
            addressee_id: "1".to_string(),
            status: FriendRequestStatus::Pending,
            created_at: "1d ago".to_string(),
        },
    ]
}

pub fn friends() -> Vec<Friendship> {
    vec![Friendship {
        friend_id: "4".to_string(),
        username: "Sarah Jhaveri".to_string(),
        avatar_url: s(SARAH_AVATAR),
        mutual_friends: Some(12),
    }]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            message_id: "1".to_string(),
            sender_id: "2".to_string(),
            recipient_id: "1".to_string(),
            subject: s("Great analysis!"),
            body: "Hey, I really liked your BTC analysis. Can we discuss?".to_string(),
            created_at: hours_ago(1),
            read: false,
            sender_username: s("Emma Stone"),
            sender_avatar: s(EMMA_AVATAR),
        },
        Message {
            message_id: "2".to_string(),
            sender_id: "3".to_string(),
            recipient_id: "1".to_string(),
            subject: None,
            body: "Check out my latest trade signal!".to_string(),
            created_at: hours_ago(2),
            read: true,
            sender_username: s("David Bruno"),
            sender_avatar: s(DAVID_AVATAR),
        },
    ]
}

pub fn wallets() -> Vec<Wallet> {
    vec![Wallet {
        wallet_id: "1".to_string(),
        wallet_address: MICHAEL_WALLET.to_string(),
        is_primary: true,
    }]
}

/// Live profile, distinct from [`placeholder_profile`]
pub fn profile() -> GamificationProfile {
    GamificationProfile {
        points: 1850,
        level: 12,
        next_level_points: 2000,
        current_level_points: 1800,
        streak: 7,
        rank: 234,
    }
}

pub fn achievements() -> Vec<Achievement> {
    let achievement = |id: &str, name: &str, description: &str, icon: &str, points: u32, unlocked: bool| Achievement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        points,
        unlocked,
        progress: None,
        total: None,
    };
    vec![
        achievement("1", "First Post", "Create your first post", "🎉", 10, true),
        Achievement {
            progress: Some(71),
            total: Some(50),
            ..achievement("2", "Social Butterfly", "Follow 50 users", "🦋", 25, true)
        },
        Achievement {
            progress: Some(45),
            total: Some(100),
            ..achievement("3", "Trading Master", "Post 100 trade signals", "📈", 100, false)
        },
        Achievement {
            progress: Some(0),
            total: Some(1),
            ..achievement("4", "Community Leader", "Create a community", "👑", 50, false)
        },
    ]
}

pub fn quests() -> Vec<Quest> {
    let mut quests = placeholder_quests();
    quests.push(Quest {
        id: "2".to_string(),
        title: "Signal Caller".to_string(),
        description: "Publish a trade signal".to_string(),
        reward: 100,
        progress: 1,
        total: 1,
        completed: true,
        expires_at: Some(lib_utils::offset_days_rfc3339(1)),
    });
    quests
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    let entry = |rank: u32, user_id: &str, username: &str, avatar: &str, score: u64| LeaderboardEntry {
        rank,
        user_id: user_id.to_string(),
        username: username.to_string(),
        avatar: s(avatar),
        score,
    };
    vec![
        entry(1, "3", "David Bruno", DAVID_AVATAR, 15_890),
        entry(2, "4", "Sarah Jhaveri", SARAH_AVATAR, 14_250),
        entry(3, "1", "Michael Bruno", MICHAEL_AVATAR, 13_420),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_relations_resolve() {
        let users = users();
        let known = |id: &str| users.iter().any(|u| u.user_id == id);

        assert!(posts().iter().all(|p| known(&p.user_id)));
        assert!(comments().iter().all(|(_, c)| known(&c.user_id)));
        assert!(messages().iter().all(|m| known(&m.sender_id) && known(&m.recipient_id)));
        assert!(friend_requests().iter().all(|r| known(&r.requester_id)));
    }

    #[test]
    fn test_placeholder_stake_window() {
        let stake = &placeholder_user_stakes()[0];
        let staked = chrono::DateTime::parse_from_rfc3339(&stake.staked_at).unwrap();
        let unlock = chrono::DateTime::parse_from_rfc3339(&stake.unlock_at).unwrap();
        assert_eq!((unlock - staked).num_days(), 90);
    }
}
