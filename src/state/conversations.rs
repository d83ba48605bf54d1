//! Conversation list and current selection.

#[cfg(test)]
#[path = "conversations_test.rs"]
mod conversations_test;

use crate::net::types::{Conversation, ConversationId};

/// Sidebar inventory, most recent first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationsState {
    pub items: Vec<Conversation>,
    pub selected: Option<ConversationId>,
}

impl ConversationsState {
    /// The selected conversation, if it is still listed.
    #[must_use]
    pub fn current(&self) -> Option<&Conversation> {
        let id = self.selected?;
        self.items.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn get(&self, id: ConversationId) -> Option<&Conversation> {
        self.items.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn is_selected(&self, id: ConversationId) -> bool {
        self.selected == Some(id)
    }

    /// Replace the list with a fresh page. Returns the id to auto-select when
    /// nothing was selected yet.
    pub fn replace(&mut self, items: Vec<Conversation>) -> Option<ConversationId> {
        self.items = items;
        if self.selected.is_some() {
            return None;
        }
        self.items.first().map(|c| c.id)
    }

    /// Put a newly created conversation at the top of the list.
    pub fn prepend(&mut self, conversation: Conversation) {
        self.items.retain(|c| c.id != conversation.id);
        self.items.insert(0, conversation);
    }

    /// Drop a conversation from the list. Returns `true` if something was removed.
    pub fn remove(&mut self, id: ConversationId) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        self.items.len() != before
    }
}
