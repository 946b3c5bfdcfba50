//! # Social Endpoints
//!
//! Posts, likes, comments and the friend graph.
//!
//! Trading fields on a post (symbol, targets, confidence, ...) are sent as
//! given; only the text content is checked.

use shared::{
    Comment, FriendRequest, FriendRequestBody, Friendship, LikeState, MessageResponse, NewComment, NewPost,
    Post,
};

use super::client::ApiClient;
use crate::core::error::{ClientError, Result};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub struct SocialApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn social(&self) -> SocialApi<'_> {
        SocialApi::new(self)
    }
}

impl<'a> SocialApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip(self, post), fields(post_type = ?post.post_type))]
    pub async fn create_post(&self, post: NewPost) -> Result<Post> {
        lib_utils::validate_not_empty(&post.content_text, "Post content").map_err(ClientError::Validation)?;

        let created: Post = self.client.post("/social/posts", &post).await?;
        tracing::info!(post_id = %created.post_id, "Post created");
        Ok(created)
    }

    /// One page of the feed. Pages start at 1.
    pub async fn get_feed(&self, page: u32, page_size: u32) -> Result<Vec<Post>> {
        self.client
            .get(&format!("/social/feed?page={}&page_size={}", page, page_size))
            .await
    }

    pub async fn like_post(&self, post_id: &str) -> Result<LikeState> {
        self.client
            .post_empty(&format!("/social/posts/{}/like", post_id))
            .await
    }

    pub async fn unlike_post(&self, post_id: &str) -> Result<LikeState> {
        self.client.delete(&format!("/social/posts/{}/like", post_id)).await
    }

    #[tracing::instrument(skip(self, comment_text))]
    pub async fn comment_on_post(&self, post_id: &str, comment_text: &str) -> Result<Comment> {
        lib_utils::validate_not_empty(comment_text, "Comment").map_err(ClientError::Validation)?;

        let body = NewComment {
            comment_text: comment_text.to_string(),
        };
        self.client
            .post(&format!("/social/posts/{}/comments", post_id), &body)
            .await
    }

    pub async fn get_comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.client
            .get(&format!("/social/posts/{}/comments", post_id))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn send_friend_request(&self, addressee_id: &str) -> Result<MessageResponse> {
        let body = FriendRequestBody {
            addressee_id: addressee_id.to_string(),
        };
        self.client.post("/friends/requests", &body).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn accept_friend_request(&self, requester_id: &str) -> Result<MessageResponse> {
        self.client
            .post_empty(&format!("/friends/requests/{}/accept", requester_id))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn reject_friend_request(&self, requester_id: &str) -> Result<MessageResponse> {
        self.client
            .post_empty(&format!("/friends/requests/{}/reject", requester_id))
            .await
    }

    pub async fn get_friends(&self) -> Result<Vec<Friendship>> {
        self.client.get("/friends").await
    }

    pub async fn get_friend_requests(&self) -> Result<Vec<FriendRequest>> {
        self.client.get("/friends/requests").await
    }
}
