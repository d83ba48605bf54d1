//! Wire DTOs for the chat REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads field-for-field so serde
//! decoding stays lossless. Optional or late-added fields carry
//! `#[serde(default)]` so older backends still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server-assigned conversation identifier.
pub type ConversationId = i64;

/// Server-assigned message identifier.
pub type MessageId = i64;

/// A conversation summary as listed by `GET conversations/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    #[serde(default)]
    pub title: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

impl Role {
    /// Upper-case label shown above a message body.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Ai => "AI",
        }
    }
}

/// A server-confirmed chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub conversation: ConversationId,
    pub role: Role,
    pub text: String,
    pub created_at: String,
    /// Per-conversation ordering key, strictly increasing.
    pub sequence: u64,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

/// Helpfulness feedback attached to an AI message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub conversation: ConversationId,
    pub message: MessageId,
    pub is_helpful: bool,
    #[serde(default)]
    pub comment: String,
    pub created_at: String,
}

/// Response of `GET conversations/?limit=N`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConversationPage {
    pub results: Vec<Conversation>,
    #[serde(default)]
    pub count: u64,
}

/// Response of `GET conversations/{id}/messages/?since=N`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessagePage {
    pub results: Vec<Message>,
    #[serde(rename = "lastSeq")]
    pub last_seq: u64,
}

/// Response of `POST conversations/{id}/messages/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SentMessages {
    pub user_message: Message,
    pub ai_message: Message,
}

/// Aggregate feedback statistics from `GET insights/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Insights {
    pub total_feedback: u64,
    pub helpful_count: u64,
    pub not_helpful_count: u64,
    pub helpful_rate: f64,
    #[serde(default)]
    pub per_conversation: Vec<ConversationInsight>,
    #[serde(default)]
    pub recent_feedback: Vec<RecentFeedback>,
}

/// Feedback rollup for a single conversation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConversationInsight {
    pub conversation_id: ConversationId,
    #[serde(default)]
    pub title: Option<String>,
    pub feedback_count: u64,
    pub helpful_count: u64,
    pub not_helpful_count: u64,
    pub helpful_rate: f64,
    pub last_feedback_at: String,
}

/// One entry of the recent-feedback list, with a preview of the rated reply.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecentFeedback {
    pub id: i64,
    pub conversation_id: ConversationId,
    pub message_id: MessageId,
    #[serde(default)]
    pub title: Option<String>,
    pub is_helpful: bool,
    #[serde(default)]
    pub comment: String,
    pub created_at: String,
    #[serde(default)]
    pub message_preview: String,
}

/// Body of `POST conversations/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateConversation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Body of `POST conversations/{id}/messages/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendMessage {
    pub text: String,
}

/// Body of `POST conversations/{id}/messages/{id}/feedback/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmitFeedback {
    pub is_helpful: bool,
    pub comment: String,
}
