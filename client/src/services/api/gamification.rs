//! # Gamification Endpoints
//!
//! Profile, achievements, quests and leaderboards. Every read has a
//! placeholder; claiming a quest reward does not.

use std::fmt;

use shared::{Achievement, GamificationProfile, LeaderboardEntry, Quest, QuestClaim};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::fallback::Sourced;
use crate::mock::fixtures;

/// Leaderboard category, the last path segment of
/// `/gamification/leaderboard/{kind}`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeaderboardKind {
    #[default]
    TopEarners,
    Other(String),
}

impl LeaderboardKind {
    pub fn as_str(&self) -> &str {
        match self {
            LeaderboardKind::TopEarners => "top_earners",
            LeaderboardKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for LeaderboardKind {
    fn from(kind: &str) -> Self {
        match kind {
            "top_earners" => LeaderboardKind::TopEarners,
            other => LeaderboardKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct GamificationApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn gamification(&self) -> GamificationApi<'_> {
        GamificationApi::new(self)
    }
}

impl<'a> GamificationApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_profile(&self) -> Result<Sourced<GamificationProfile>> {
        let result = self.client.get("/gamification/profile").await;
        self.client
            .fallback_policy()
            .resolve("get_profile", result, fixtures::placeholder_profile)
    }

    pub async fn get_achievements(&self) -> Result<Sourced<Vec<Achievement>>> {
        let result = self.client.get("/gamification/achievements").await;
        self.client
            .fallback_policy()
            .resolve("get_achievements", result, fixtures::placeholder_achievements)
    }

    pub async fn get_active_quests(&self) -> Result<Sourced<Vec<Quest>>> {
        let result = self.client.get("/gamification/active-quests").await;
        self.client
            .fallback_policy()
            .resolve("get_active_quests", result, fixtures::placeholder_quests)
    }

    #[tracing::instrument(skip(self))]
    pub async fn claim_quest_reward(&self, quest_id: &str) -> Result<QuestClaim> {
        self.client
            .post_empty(&format!("/gamification/quests/{}/claim", quest_id))
            .await
    }

    pub async fn get_leaderboard(&self, kind: &LeaderboardKind) -> Result<Sourced<Vec<LeaderboardEntry>>> {
        let result = self
            .client
            .get(&format!("/gamification/leaderboard/{}", kind))
            .await;
        self.client
            .fallback_policy()
            .resolve("get_leaderboard", result, Vec::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::mock::{MockBackend, OfflineTransport};
    use crate::session::Credentials;

    fn offline() -> ApiClient {
        ApiClient::new(Arc::new(OfflineTransport), Credentials::default())
    }

    #[tokio::test]
    async fn test_profile_fallback_exact() {
        let profile = offline().gamification().get_profile().await.unwrap();
        assert!(profile.is_fallback());
        assert_eq!(
            profile.into_inner(),
            GamificationProfile {
                points: 1250,
                level: 5,
                next_level_points: 1500,
                current_level_points: 1000,
                streak: 7,
                rank: 42,
            }
        );
    }

    #[tokio::test]
    async fn test_achievement_and_quest_fallbacks() {
        let client = offline();

        let achievements = client.gamification().get_achievements().await.unwrap().into_inner();
        assert_eq!(achievements.len(), 2);
        assert_eq!(achievements[0].name, "First Post");
        assert_eq!(achievements[0].points, 50);
        assert!(achievements[0].unlocked);
        assert_eq!(achievements[1].name, "Social Butterfly");
        assert_eq!((achievements[1].progress, achievements[1].total), (Some(7), Some(10)));

        let quests = client.gamification().get_active_quests().await.unwrap().into_inner();
        assert_eq!(quests.len(), 1);
        assert_eq!(quests[0].title, "Daily Engagement");
        assert_eq!((quests[0].reward, quests[0].progress, quests[0].total), (50, 3, 5));
        assert!(!quests[0].completed);

        let board = client
            .gamification()
            .get_leaderboard(&LeaderboardKind::default())
            .await
            .unwrap();
        assert!(board.is_fallback());
        assert!(board.value().is_empty());
    }

    #[tokio::test]
    async fn test_claim_quest_reward_propagates_errors() {
        let err = offline().gamification().claim_quest_reward("1").await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_live_leaderboard_and_claim() {
        let backend = Arc::new(MockBackend::new());
        let client = ApiClient::new(backend.clone(), Credentials::default());

        let board = client
            .gamification()
            .get_leaderboard(&"weekly".into())
            .await
            .unwrap();
        assert!(board.is_live());
        assert_eq!(board.value().len(), 3);
        assert_eq!(board.value()[0].username, "David Bruno");

        let claim = client.gamification().claim_quest_reward("1").await.unwrap();
        assert!(claim.success);
        assert_eq!(claim.reward, 50);

        let paths: Vec<_> = backend.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            ["/gamification/leaderboard/weekly", "/gamification/quests/1/claim"]
        );
    }

    #[test]
    fn test_leaderboard_kind_strings() {
        assert_eq!(LeaderboardKind::default().as_str(), "top_earners");
        assert_eq!(LeaderboardKind::from("top_earners"), LeaderboardKind::TopEarners);
        assert_eq!(LeaderboardKind::from("streaks").to_string(), "streaks");
    }
}
