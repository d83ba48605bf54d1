//! Async actions over the shared chat state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatStore` is the single handle components receive through context. It
//! bundles the state signal with the API client, config, and poll loop, and
//! each action follows the same shape: mutate state before the request
//! (optimistic entry, in-flight flag), await the backend, then apply or roll
//! back.
//!
//! ERROR HANDLING
//! ==============
//! Failures of user-initiated writes are logged and surfaced with a blocking
//! alert after rollback. Background fetches (polls, initial load) only log.
//! Insights failures are stored and rendered inline.

use leptos::prelude::*;

use super::chat::ChatState;
use super::compose::{ComposeError, validate_message};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{ConversationId, MessageId};
use crate::poll::PollLoop;
use crate::util::dialog;
use crate::util::format::delete_prompt;

#[derive(Clone, Copy)]
pub struct ChatStore {
    pub state: RwSignal<ChatState>,
    api: StoredValue<ApiClient>,
    config: StoredValue<ClientConfig>,
    poller: StoredValue<PollLoop>,
}

impl ChatStore {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            state: RwSignal::new(ChatState::default()),
            api: StoredValue::new(ApiClient::new(&config.api_base)),
            config: StoredValue::new(config),
            poller: StoredValue::new(PollLoop::default()),
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Boot sequence: conversations, then messages of the selection, then polling.
    pub async fn init(self) {
        self.load_conversations().await;
        self.load_messages().await;
        self.start_polling();
    }

    pub async fn load_conversations(self) {
        let limit = self.config.with_value(|c| c.conversation_limit);
        match self.api().list_conversations(limit).await {
            Ok(page) => {
                log::debug!("loaded {} of {} conversations", page.results.len(), page.count);
                self.state.update(|s| {
                    if let Some(first) = s.set_conversations(page.results) {
                        s.select_conversation(first);
                    }
                });
            }
            Err(e) => log::warn!("loading conversations failed: {e}"),
        }
    }

    pub async fn create_conversation(self, title: Option<String>) {
        match self.api().create_conversation(title).await {
            Ok(conversation) => {
                log::info!("created conversation {}", conversation.id);
                self.state.update(|s| s.add_conversation(conversation));
                self.load_messages().await;
            }
            Err(e) => {
                log::warn!("creating conversation failed: {e}");
                dialog::alert("Failed to create conversation. Please try again.");
            }
        }
    }

    pub async fn delete_conversation(self, id: ConversationId) {
        let title = self
            .state
            .with_untracked(|s| s.conversations.get(id).and_then(|c| c.title.clone()));
        if !dialog::confirm(&delete_prompt(title.as_deref())) {
            return;
        }

        let result = self.api().delete_conversation(id).await;
        match self.state.try_update(|s| s.finish_delete(id, result)) {
            Some(Ok(outcome)) => {
                log::info!("deleted conversation {id}");
                if let Some(next) = outcome.next {
                    self.select_conversation(next).await;
                }
                if outcome.reload_insights {
                    self.load_insights().await;
                }
            }
            Some(Err(e)) => {
                log::warn!("deleting conversation {id} failed: {e}");
                dialog::alert("Failed to delete conversation. Please try again.");
            }
            None => {}
        }
    }

    pub async fn select_conversation(self, id: ConversationId) {
        self.state.update(|s| s.select_conversation(id));
        self.load_messages().await;
    }

    /// Fetch messages newer than the cursor for the selected conversation.
    pub async fn load_messages(self) {
        let Some(fetch) = self.state.with_untracked(ChatState::message_fetch) else {
            return;
        };
        match self.api().list_messages(fetch.conversation, fetch.since).await {
            Ok(page) if page.results.is_empty() => {}
            Ok(page) => {
                let added = self.state.try_update(|s| s.apply_messages(fetch, page)).unwrap_or(0);
                log::debug!("conversation {}: {added} new messages", fetch.conversation);
            }
            Err(e) => log::warn!("fetching messages for conversation {} failed: {e}", fetch.conversation),
        }
    }

    /// Validate composer input. Blank input is ignored silently; overlong
    /// input alerts.
    pub fn accept_draft(&self, raw: &str) -> Option<String> {
        let max = self.config.with_value(|c| c.max_message_chars);
        match validate_message(raw, max) {
            Ok(text) => Some(text),
            Err(ComposeError::Empty) => None,
            Err(e @ ComposeError::TooLong { .. }) => {
                dialog::alert(&e.to_string());
                None
            }
        }
    }

    /// Send already validated text with an optimistic entry.
    pub async fn send_message(self, text: String) {
        let Some(pending) = self.state.try_update(|s| s.begin_send(text)).flatten() else {
            return;
        };
        match self.api().send_message(pending.conversation, pending.text).await {
            Ok(sent) => self.state.update(|s| s.confirm_send(pending.temp_id, sent)),
            Err(e) => {
                log::warn!("sending message to conversation {} failed: {e}", pending.conversation);
                self.state.update(|s| s.fail_send(pending.temp_id));
                dialog::alert("Failed to send message. Please try again.");
            }
        }
    }

    pub fn set_feedback_draft(&self, message: MessageId, text: String) {
        self.state.update(|s| s.feedback.set_draft(message, text));
    }

    pub async fn submit_feedback(self, message: MessageId, is_helpful: bool) {
        let Some(pending) = self.state.try_update(|s| s.begin_feedback(message, is_helpful)).flatten() else {
            return;
        };
        let result = self.api().submit_feedback(pending.conversation, pending.message, pending.body).await;
        match self.state.try_update(|s| s.finish_feedback(message, result)) {
            Some(Ok(true)) => self.load_insights().await,
            Some(Ok(false)) | None => {}
            Some(Err(e)) => {
                log::warn!("submitting feedback for message {message} failed: {e}");
                dialog::alert("Failed to submit feedback. Please try again.");
            }
        }
    }

    pub async fn load_insights(self) {
        self.state.update(|s| s.insights.begin_load());
        let result = self.api().insights().await.map_err(|e| e.to_string());
        if let Err(e) = &result {
            log::warn!("loading insights failed: {e}");
        }
        self.state.update(|s| s.insights.finish_load(result));
    }

    pub async fn toggle_insights(self) {
        let visible = self.state.try_update(ChatState::toggle_insights).unwrap_or(false);
        if visible {
            self.load_insights().await;
        }
    }

    /// (Re)start the message poll loop; any previous loop exits at its next tick.
    pub fn start_polling(self) {
        let token = self.poller.with_value(PollLoop::restart);
        #[cfg(feature = "csr")]
        {
            let interval = self.config.with_value(|c| c.poll_interval);
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(interval).await;
                    if !token.is_current() {
                        break;
                    }
                    self.load_messages().await;
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    pub fn stop_polling(&self) {
        self.poller.with_value(PollLoop::stop);
    }
}
