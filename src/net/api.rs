//! REST client for the chat backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, sent with a JSON
//! content type and same-origin credentials.
//! Native builds (tests): every call resolves to [`ApiError::Unavailable`]
//! since the endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status, transport, and decode failures are folded into [`ApiError`] so
//! callers can roll back optimistic state and surface one message. A
//! successful response with an empty body decodes to `None` instead of
//! failing; endpoints that need a payload turn that into
//! [`ApiError::EmptyBody`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Conversation, ConversationId, ConversationPage, CreateConversation, Feedback, Insights, MessageId, MessagePage,
    SendMessage, SentMessages, SubmitFeedback,
};

/// Failure modes of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The body was non-empty but not valid JSON for the expected type.
    #[error("Failed to parse JSON response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),
    /// A payload was required but the body was empty.
    #[error("empty response body from {0}")]
    EmptyBody(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// HTTP verbs used by the backend routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Path of the aggregate insights endpoint.
pub const INSIGHTS_PATH: &str = "insights/";

fn conversations_path(limit: u32) -> String {
    format!("conversations/?limit={limit}")
}

fn conversation_path(id: ConversationId) -> String {
    format!("conversations/{id}/")
}

fn messages_path(id: ConversationId) -> String {
    format!("conversations/{id}/messages/")
}

fn messages_since_path(id: ConversationId, since: u64) -> String {
    format!("conversations/{id}/messages/?since={since}")
}

fn feedback_path(conversation: ConversationId, message: MessageId) -> String {
    format!("conversations/{conversation}/messages/{message}/feedback/")
}

/// Normalize a base path so relative endpoint paths can be appended directly.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.is_empty() {
        return "/".to_owned();
    }
    if trimmed.ends_with('/') { trimmed.to_owned() } else { format!("{trimmed}/") }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Interpret a finished HTTP exchange.
///
/// `status_text` is only used when a failed response carries no body.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn decode_response<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<Option<T>, ApiError> {
    if !ok {
        let message = if body.is_empty() { status_text.to_owned() } else { body.to_owned() };
        return Err(ApiError::Status { status, message });
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body).map(Some).map_err(|e| ApiError::Decode(e.to_string()))
}

fn required<T>(value: Option<T>, path: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::EmptyBody(path.to_owned()))
}

/// Handle to the backend rooted at a fixed base path (default `/api/`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: Arc<str>,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self { base: normalize_base(base).into() }
    }

    /// Absolute URL for a relative endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Fetch up to `limit` most recently updated conversations.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is missing.
    pub async fn list_conversations(&self, limit: u32) -> Result<ConversationPage, ApiError> {
        let path = conversations_path(limit);
        let page = self.request(Method::Get, &path, None).await?;
        required(page, &path)
    }

    /// Create a conversation, optionally titled.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is missing.
    pub async fn create_conversation(&self, title: Option<String>) -> Result<Conversation, ApiError> {
        let body = encode_body(&CreateConversation { title })?;
        let conversation = self.request(Method::Post, "conversations/", Some(body)).await?;
        required(conversation, "conversations/")
    }

    /// Delete a conversation. The backend answers with an empty body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn delete_conversation(&self, id: ConversationId) -> Result<(), ApiError> {
        let _: Option<serde_json::Value> = self.request(Method::Delete, &conversation_path(id), None).await?;
        Ok(())
    }

    /// Fetch messages of a conversation with sequence greater than `since`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is missing.
    pub async fn list_messages(&self, id: ConversationId, since: u64) -> Result<MessagePage, ApiError> {
        let path = messages_since_path(id, since);
        let page = self.request(Method::Get, &path, None).await?;
        required(page, &path)
    }

    /// Post a user message and receive it back together with the AI reply.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is missing.
    pub async fn send_message(&self, id: ConversationId, text: String) -> Result<SentMessages, ApiError> {
        let path = messages_path(id);
        let body = encode_body(&SendMessage { text })?;
        let sent = self.request(Method::Post, &path, Some(body)).await?;
        required(sent, &path)
    }

    /// Create or update the feedback on an AI message.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is missing.
    pub async fn submit_feedback(
        &self,
        conversation: ConversationId,
        message: MessageId,
        feedback: SubmitFeedback,
    ) -> Result<Feedback, ApiError> {
        let path = feedback_path(conversation, message);
        let body = encode_body(&feedback)?;
        let saved = self.request(Method::Post, &path, Some(body)).await?;
        required(saved, &path)
    }

    /// Fetch aggregate feedback insights.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is missing.
    pub async fn insights(&self) -> Result<Insights, ApiError> {
        let insights = self.request(Method::Get, INSIGHTS_PATH, None).await?;
        required(insights, INSIGHTS_PATH)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Option<T>, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            log::debug!("{method:?} {url}");
            let builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Delete => Request::delete(&url),
            }
            .header("Content-Type", "application/json")
            .credentials(web_sys::RequestCredentials::SameOrigin);
            let request = match body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(resp.ok(), resp.status(), &resp.status_text(), &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_API_BASE)
    }
}
