//! Per-message feedback drafts and in-flight submission flags.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::collections::{HashMap, HashSet};

use crate::net::types::MessageId;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackState {
    /// Comment text being edited, keyed by AI message id.
    pub drafts: HashMap<MessageId, String>,
    /// Messages with a submission currently in flight.
    pub submitting: HashSet<MessageId>,
}

impl FeedbackState {
    pub fn clear(&mut self) {
        self.drafts.clear();
        self.submitting.clear();
    }

    #[must_use]
    pub fn draft(&self, id: MessageId) -> &str {
        self.drafts.get(&id).map_or("", String::as_str)
    }

    pub fn set_draft(&mut self, id: MessageId, text: String) {
        self.drafts.insert(id, text);
    }

    /// Seed a draft only if the user has not started one.
    pub fn seed_draft(&mut self, id: MessageId, text: &str) {
        self.drafts.entry(id).or_insert_with(|| text.to_owned());
    }

    #[must_use]
    pub fn is_submitting(&self, id: MessageId) -> bool {
        self.submitting.contains(&id)
    }

    /// Mark a submission as started. Returns `false` if one is already running.
    pub fn begin(&mut self, id: MessageId) -> bool {
        self.submitting.insert(id)
    }

    pub fn finish(&mut self, id: MessageId) {
        self.submitting.remove(&id);
    }
}
