//! # Messaging Endpoints
//!
//! Direct messages between users and the conversation list.

use shared::{Conversation, Message, SendMessageRequest};

use super::client::ApiClient;
use crate::core::error::{ClientError, Result};

pub struct MessagingApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn messaging(&self) -> MessagingApi<'_> {
        MessagingApi::new(self)
    }
}

impl<'a> MessagingApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip(self, subject, body))]
    pub async fn send_message(&self, recipient_id: &str, subject: Option<&str>, body: &str) -> Result<Message> {
        lib_utils::validate_not_empty(recipient_id, "Recipient").map_err(ClientError::Validation)?;
        lib_utils::validate_not_empty(body, "Message").map_err(ClientError::Validation)?;

        let request = SendMessageRequest {
            recipient_id: recipient_id.to_string(),
            subject: subject.map(str::to_string),
            body: body.to_string(),
        };
        self.client.post("/messages", &request).await
    }

    pub async fn get_conversations(&self) -> Result<Vec<Conversation>> {
        self.client.get("/messages/conversations").await
    }

    /// Messages exchanged with `other_user_id`. Pages start at 1.
    pub async fn get_messages(&self, other_user_id: &str, page: u32) -> Result<Vec<Message>> {
        self.client
            .get(&format!("/messages/{}?page={}", other_user_id, page))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ids::SequentialIds;
    use crate::mock::MockBackend;
    use crate::session::Credentials;

    #[tokio::test]
    async fn test_send_then_read_conversation() {
        let backend = Arc::new(MockBackend::with_ids(Arc::new(SequentialIds::new("m-", 10))));
        let client = ApiClient::new(backend.clone(), Credentials::default());

        let sent = client
            .messaging()
            .send_message("2", Some("Re: BTC"), "Sure, let's talk")
            .await
            .unwrap();
        assert_eq!(sent.message_id, "m-10");
        assert_eq!(sent.sender_id, "1");
        assert!(!sent.read);

        let thread = client.messaging().get_messages("2", 1).await.unwrap();
        assert_eq!(thread.len(), 2);
        assert!(thread.iter().all(|m| m.involves("2")));
        assert_eq!(backend.messages().len(), 3);
    }

    #[tokio::test]
    async fn test_conversations_and_empty_body() {
        let backend = Arc::new(MockBackend::new());
        let client = ApiClient::new(backend.clone(), Credentials::default());

        let conversations = client.messaging().get_conversations().await.unwrap();
        assert_eq!(conversations.len(), 2);
        assert_eq!(conversations[0].other_user_username, "Emma Stone");
        assert_eq!(conversations[0].unread_count, 1);

        let err = client.messaging().send_message("2", None, "  ").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(backend.requests().len(), 1);
    }
}
