//! Restartable polling loop.
//!
//! Each (re)start hands out a [`PollToken`] tied to a new generation. A
//! running loop checks its token after every sleep and exits once a newer
//! generation has started or the loop was stopped, so at most one loop
//! issues fetches at a time.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Debug, Default)]
pub struct PollLoop {
    generation: Arc<AtomicU64>,
}

/// Liveness handle held by one running loop.
#[derive(Clone, Debug)]
pub struct PollToken {
    generation: Arc<AtomicU64>,
    id: u64,
}

impl PollLoop {
    /// Invalidate any running loop and issue a token for a new one.
    pub fn restart(&self) -> PollToken {
        let id = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        PollToken { generation: Arc::clone(&self.generation), id }
    }

    /// Invalidate any running loop.
    pub fn stop(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}

impl PollToken {
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Relaxed) == self.id
    }
}
