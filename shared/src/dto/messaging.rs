//! # Messaging Data Transfer Objects
//!
//! Defines request and response structures for direct messaging endpoints.

use serde::{Deserialize, Serialize};

/// Direct message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message_id: String,
    pub sender_id: String,
    pub recipient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
    pub created_at: String,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_avatar: Option<String>,
}

impl Message {
    /// Whether this message belongs to the conversation with `other_user_id`
    pub fn involves(&self, other_user_id: &str) -> bool {
        self.sender_id == other_user_id || self.recipient_id == other_user_id
    }
}

/// Body of `POST /messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub recipient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
}

/// Conversation summary for the inbox list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    pub other_user_id: String,
    pub other_user_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_user_avatar: Option<String>,
    pub last_message: String,
    pub last_message_at: String,
    pub unread_count: u32,
}
