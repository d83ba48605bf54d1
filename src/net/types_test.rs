use super::*;
use serde_json::json;

// =============================================================
// Decoding
// =============================================================

#[test]
fn conversation_with_null_title_decodes() {
    let conv: Conversation = serde_json::from_value(json!({
        "id": 7,
        "title": null,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(conv.id, 7);
    assert_eq!(conv.title, None);
}

#[test]
fn message_page_reads_camel_case_last_seq() {
    let page: MessagePage = serde_json::from_value(json!({
        "results": [{
            "id": 1,
            "conversation": 3,
            "role": "ai",
            "text": "hello",
            "created_at": "2025-01-01T00:00:00Z",
            "sequence": 2,
            "feedback": null
        }],
        "lastSeq": 2
    }))
    .unwrap();
    assert_eq!(page.last_seq, 2);
    assert_eq!(page.results[0].role, Role::Ai);
    assert!(page.results[0].feedback.is_none());
}

#[test]
fn message_without_feedback_field_decodes() {
    let msg: Message = serde_json::from_value(json!({
        "id": 1,
        "conversation": 3,
        "role": "user",
        "text": "hi",
        "created_at": "2025-01-01T00:00:00Z",
        "sequence": 1
    }))
    .unwrap();
    assert_eq!(msg.role, Role::User);
    assert!(msg.feedback.is_none());
}

#[test]
fn unknown_role_is_rejected() {
    let result: Result<Message, _> = serde_json::from_value(json!({
        "id": 1,
        "conversation": 3,
        "role": "system",
        "text": "hi",
        "created_at": "2025-01-01T00:00:00Z",
        "sequence": 1
    }));
    assert!(result.is_err());
}

#[test]
fn insights_missing_lists_default_to_empty() {
    let insights: Insights = serde_json::from_value(json!({
        "total_feedback": 0,
        "helpful_count": 0,
        "not_helpful_count": 0,
        "helpful_rate": 0.0
    }))
    .unwrap();
    assert!(insights.per_conversation.is_empty());
    assert!(insights.recent_feedback.is_empty());
}

// =============================================================
// Encoding
// =============================================================

#[test]
fn create_conversation_omits_missing_title() {
    let body = serde_json::to_value(CreateConversation::default()).unwrap();
    assert_eq!(body, json!({}));
}

#[test]
fn submit_feedback_encodes_fields() {
    let body = serde_json::to_value(SubmitFeedback { is_helpful: false, comment: "meh".to_owned() }).unwrap();
    assert_eq!(body, json!({ "is_helpful": false, "comment": "meh" }));
}

#[test]
fn role_labels_are_upper_case() {
    assert_eq!(Role::User.label(), "USER");
    assert_eq!(Role::Ai.label(), "AI");
}
