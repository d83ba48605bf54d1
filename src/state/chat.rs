//! Aggregate chat state and its synchronous mutators.
//!
//! DESIGN
//! ======
//! `ChatState` is a plain value held in one `RwSignal` and handed to
//! components through context. Every transition an action performs is a
//! method here, so the store logic is testable without a browser. Async
//! actions (`store`) split each operation into a `begin_*` step that runs
//! before the request and an `apply_*`/`fail_*` step that runs after it.
//!
//! Message fetches are tagged with the conversation active at dispatch;
//! responses for a conversation that is no longer selected are dropped.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use uuid::Uuid;

use super::conversations::ConversationsState;
use super::feedback::FeedbackState;
use super::insights::InsightsState;
use super::thread::ThreadState;
use crate::net::api::ApiError;
use crate::net::types::{
    Conversation, ConversationId, Feedback, MessageId, MessagePage, Role, SentMessages, SubmitFeedback,
};

/// Parameters of a message fetch, captured at dispatch time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageFetch {
    pub conversation: ConversationId,
    pub since: u64,
}

/// An optimistic send awaiting the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub conversation: ConversationId,
    pub temp_id: Uuid,
    pub text: String,
}

/// A feedback submission awaiting the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFeedback {
    pub conversation: ConversationId,
    pub message: MessageId,
    pub body: SubmitFeedback,
}

/// Follow-up work after a conversation was deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Conversation to select because the deleted one was selected.
    pub next: Option<ConversationId>,
    pub reload_insights: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub conversations: ConversationsState,
    pub thread: ThreadState,
    pub feedback: FeedbackState,
    pub insights: InsightsState,
}

impl ChatState {
    #[must_use]
    pub fn current(&self) -> Option<&Conversation> {
        self.conversations.current()
    }

    /// Store a freshly loaded conversation page. Returns the conversation to
    /// select when nothing was selected before.
    pub fn set_conversations(&mut self, items: Vec<Conversation>) -> Option<ConversationId> {
        self.conversations.replace(items)
    }

    /// Prepend a created conversation and select it.
    pub fn add_conversation(&mut self, conversation: Conversation) {
        let id = conversation.id;
        self.conversations.prepend(conversation);
        self.select_conversation(id);
    }

    /// Switch the thread to `id`: clears messages, cursor, drafts, and
    /// submission flags, and leaves the insights view.
    pub fn select_conversation(&mut self, id: ConversationId) {
        let selected = self.conversations.get(id).map(|c| c.id);
        self.conversations.selected = selected;
        self.thread.reset(selected);
        self.feedback.clear();
        self.insights.visible = false;
    }

    /// Drop a deleted conversation. When it was selected, clears the thread
    /// and returns the conversation that should be selected next.
    pub fn remove_conversation(&mut self, id: ConversationId) -> Option<ConversationId> {
        self.conversations.remove(id);
        if !self.conversations.is_selected(id) {
            return None;
        }
        self.conversations.selected = None;
        self.thread.reset(None);
        self.feedback.clear();
        self.conversations.items.first().map(|c| c.id)
    }

    /// Apply the backend's answer to a delete request.
    ///
    /// # Errors
    ///
    /// Hands back the request error with the state left untouched.
    pub fn finish_delete(
        &mut self,
        id: ConversationId,
        result: Result<(), ApiError>,
    ) -> Result<DeleteOutcome, ApiError> {
        result?;
        let next = self.remove_conversation(id);
        Ok(DeleteOutcome { next, reload_insights: self.insights.visible })
    }

    /// Cursor for the next incremental fetch, if a conversation is selected.
    #[must_use]
    pub fn message_fetch(&self) -> Option<MessageFetch> {
        let conversation = self.conversations.selected?;
        Some(MessageFetch { conversation, since: self.thread.last_seq })
    }

    /// Merge a fetched page. Pages for a conversation that is no longer
    /// selected are discarded. Returns how many messages were new.
    pub fn apply_messages(&mut self, fetch: MessageFetch, page: MessagePage) -> usize {
        if self.thread.conversation != Some(fetch.conversation) {
            log::debug!("dropping stale message page for conversation {}", fetch.conversation);
            return 0;
        }
        let added = self.thread.apply_page(page);
        if added > 0 {
            self.seed_drafts();
        }
        added
    }

    /// Append an optimistic user message for already validated text.
    pub fn begin_send(&mut self, text: String) -> Option<PendingSend> {
        let conversation = self.conversations.selected?;
        let temp_id = self.thread.push_pending(conversation, text.clone());
        Some(PendingSend { conversation, temp_id, text })
    }

    /// Swap the optimistic entry for the confirmed pair.
    pub fn confirm_send(&mut self, temp_id: Uuid, sent: SentMessages) {
        if self.thread.confirm_send(temp_id, sent) {
            self.seed_drafts();
        }
    }

    /// Roll back an optimistic entry after a failed send.
    pub fn fail_send(&mut self, temp_id: Uuid) {
        self.thread.remove_pending(temp_id);
    }

    /// Flag `message` as submitting and build the request body from the
    /// trimmed draft. Returns `None` when nothing is selected or a submission
    /// for the message is already in flight.
    pub fn begin_feedback(&mut self, message: MessageId, is_helpful: bool) -> Option<PendingFeedback> {
        let conversation = self.conversations.selected?;
        if !self.feedback.begin(message) {
            return None;
        }
        let comment = self.feedback.draft(message).trim().to_owned();
        Some(PendingFeedback { conversation, message, body: SubmitFeedback { is_helpful, comment } })
    }

    /// Attach saved feedback and reset the draft to the stored comment.
    /// Feedback for a conversation that is no longer shown is ignored.
    pub fn apply_feedback(&mut self, feedback: Feedback) {
        if self.thread.conversation != Some(feedback.conversation) {
            return;
        }
        self.feedback.set_draft(feedback.message, feedback.comment.clone());
        if let Some(msg) = self.thread.message_mut(feedback.message) {
            msg.feedback = Some(feedback);
        }
    }

    /// Settle a feedback submission. The in-flight flag is cleared whatever
    /// the outcome; on success returns whether insights need a reload.
    ///
    /// # Errors
    ///
    /// Hands back the request error after clearing the flag.
    pub fn finish_feedback(
        &mut self,
        message: MessageId,
        result: Result<Feedback, ApiError>,
    ) -> Result<bool, ApiError> {
        self.feedback.finish(message);
        self.apply_feedback(result?);
        Ok(self.insights.visible)
    }

    /// Flip between chat and insights views. Returns the new visibility.
    pub fn toggle_insights(&mut self) -> bool {
        self.insights.visible = !self.insights.visible;
        self.insights.visible
    }

    fn seed_drafts(&mut self) {
        for msg in self.thread.messages().filter(|m| m.role == Role::Ai) {
            let comment = msg.feedback.as_ref().map_or("", |f| f.comment.as_str());
            self.feedback.seed_draft(msg.id, comment);
        }
    }
}
