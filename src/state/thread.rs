//! Message timeline for the selected conversation.
//!
//! DESIGN
//! ======
//! Optimistic sends are modeled as [`ChatEntry::Pending`] keyed by a client
//! UUID, never by a fake server id. Confirmed messages stay sorted by
//! sequence and are deduplicated by id, so a poll racing a send cannot
//! produce duplicates or reorderings. Pending entries always trail the
//! confirmed ones.

#[cfg(test)]
#[path = "thread_test.rs"]
mod thread_test;

use uuid::Uuid;

use crate::net::types::{ConversationId, Message, MessageId, MessagePage, Role, SentMessages};

/// A user message shown before the backend has confirmed it.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingMessage {
    pub temp_id: Uuid,
    pub conversation: ConversationId,
    pub text: String,
}

/// One row of the timeline.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatEntry {
    Pending(PendingMessage),
    Confirmed(Message),
}

impl ChatEntry {
    pub fn role(&self) -> Role {
        match self {
            ChatEntry::Pending(_) => Role::User,
            ChatEntry::Confirmed(msg) => msg.role,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ChatEntry::Pending(p) => &p.text,
            ChatEntry::Confirmed(msg) => &msg.text,
        }
    }

    pub fn as_confirmed(&self) -> Option<&Message> {
        match self {
            ChatEntry::Confirmed(msg) => Some(msg),
            ChatEntry::Pending(_) => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ChatEntry::Pending(_))
    }
}

/// Timeline plus the incremental-poll cursor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThreadState {
    /// Conversation the entries belong to.
    pub conversation: Option<ConversationId>,
    pub entries: Vec<ChatEntry>,
    /// Highest sequence seen so far. Never decreases until [`ThreadState::reset`].
    pub last_seq: u64,
}

impl ThreadState {
    /// Clear the timeline and rebind it to `conversation`.
    pub fn reset(&mut self, conversation: Option<ConversationId>) {
        self.conversation = conversation;
        self.entries.clear();
        self.last_seq = 0;
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(ChatEntry::as_confirmed)
    }

    #[must_use]
    pub fn contains_message(&self, id: MessageId) -> bool {
        self.messages().any(|m| m.id == id)
    }

    pub fn message_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        self.entries.iter_mut().find_map(|entry| match entry {
            ChatEntry::Confirmed(msg) if msg.id == id => Some(msg),
            _ => None,
        })
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_pending()).count()
    }

    /// Insert a confirmed message at its sequence position. Returns `false`
    /// if the message was already present.
    pub fn insert_confirmed(&mut self, msg: Message) -> bool {
        if self.contains_message(msg.id) {
            return false;
        }
        let at = self
            .entries
            .iter()
            .position(|entry| match entry {
                ChatEntry::Pending(_) => true,
                ChatEntry::Confirmed(other) => other.sequence > msg.sequence,
            })
            .unwrap_or(self.entries.len());
        self.entries.insert(at, ChatEntry::Confirmed(msg));
        true
    }

    /// Append an optimistic entry and return its temporary id.
    pub fn push_pending(&mut self, conversation: ConversationId, text: String) -> Uuid {
        let temp_id = Uuid::new_v4();
        self.entries.push(ChatEntry::Pending(PendingMessage { temp_id, conversation, text }));
        temp_id
    }

    /// Drop an optimistic entry. Returns `true` if it was present.
    pub fn remove_pending(&mut self, temp_id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !matches!(entry, ChatEntry::Pending(p) if p.temp_id == temp_id));
        self.entries.len() != before
    }

    /// Merge a poll result. Returns how many messages were new; the cursor
    /// only advances when that count is non-zero.
    pub fn apply_page(&mut self, page: MessagePage) -> usize {
        let mut added = 0;
        let mut highest = 0;
        for msg in page.results {
            let seq = msg.sequence;
            if self.insert_confirmed(msg) {
                added += 1;
                highest = highest.max(seq);
            }
        }
        if added > 0 {
            self.advance(highest.max(page.last_seq));
        }
        added
    }

    /// Replace an optimistic entry with the confirmed pair.
    ///
    /// Returns `false` and leaves the timeline untouched when the pending
    /// entry is gone and the reply belongs to another conversation.
    pub fn confirm_send(&mut self, temp_id: Uuid, sent: SentMessages) -> bool {
        if !self.remove_pending(temp_id) && self.conversation != Some(sent.user_message.conversation) {
            return false;
        }
        let ai_seq = sent.ai_message.sequence;
        self.insert_confirmed(sent.user_message);
        self.insert_confirmed(sent.ai_message);
        self.advance(ai_seq);
        true
    }

    fn advance(&mut self, seq: u64) {
        self.last_seq = self.last_seq.max(seq);
    }
}
