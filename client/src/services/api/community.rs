//! # Community Endpoints

use shared::{Community, MessageResponse};

use super::client::ApiClient;
use crate::core::error::Result;

pub struct CommunityApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn communities(&self) -> CommunityApi<'_> {
        CommunityApi::new(self)
    }
}

impl<'a> CommunityApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_communities(&self) -> Result<Vec<Community>> {
        self.client.get("/communities").await
    }

    /// A missing community is a 404 [`crate::core::ClientError::Request`];
    /// check with `is_not_found()`.
    pub async fn get_community(&self, community_id: &str) -> Result<Community> {
        self.client.get(&format!("/communities/{}", community_id)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn join_community(&self, community_id: &str) -> Result<MessageResponse> {
        self.client
            .post_empty(&format!("/communities/{}/join", community_id))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn leave_community(&self, community_id: &str) -> Result<MessageResponse> {
        self.client
            .post_empty(&format!("/communities/{}/leave", community_id))
            .await
    }
}
