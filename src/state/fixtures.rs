//! Builders shared by the state tests.

use crate::net::types::{
    Conversation, ConversationId, Feedback, Insights, Message, MessageId, MessagePage, Role, SentMessages,
};

pub fn conversation(id: ConversationId, title: Option<&str>) -> Conversation {
    Conversation {
        id,
        title: title.map(str::to_owned),
        created_at: "2025-03-01T10:00:00Z".to_owned(),
        updated_at: "2025-03-01T10:05:00Z".to_owned(),
    }
}

pub fn message(id: MessageId, conversation: ConversationId, role: Role, sequence: u64) -> Message {
    Message {
        id,
        conversation,
        role,
        text: format!("message {id}"),
        created_at: "2025-03-01T10:06:00Z".to_owned(),
        sequence,
        feedback: None,
    }
}

pub fn page(messages: Vec<Message>) -> MessagePage {
    let last_seq = messages.iter().map(|m| m.sequence).max().unwrap_or(0);
    MessagePage { results: messages, last_seq }
}

pub fn sent(conversation: ConversationId, user_id: MessageId, user_seq: u64) -> SentMessages {
    SentMessages {
        user_message: message(user_id, conversation, Role::User, user_seq),
        ai_message: message(user_id + 1, conversation, Role::Ai, user_seq + 1),
    }
}

pub fn feedback(conversation: ConversationId, message: MessageId, is_helpful: bool, comment: &str) -> Feedback {
    Feedback {
        id: 100 + message,
        conversation,
        message,
        is_helpful,
        comment: comment.to_owned(),
        created_at: "2025-03-01T10:07:00Z".to_owned(),
    }
}

pub fn insights(total: u64, helpful: u64) -> Insights {
    #[allow(clippy::cast_precision_loss)]
    let helpful_rate = if total == 0 { 0.0 } else { helpful as f64 / total as f64 };
    Insights {
        total_feedback: total,
        helpful_count: helpful,
        not_helpful_count: total - helpful,
        helpful_rate,
        per_conversation: Vec::new(),
        recent_feedback: Vec::new(),
    }
}
