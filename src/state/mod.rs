//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`conversations`, `thread`, `feedback`,
//! `insights`) and composed into `chat::ChatState`. `store` wraps that state
//! in a signal and runs the async actions that talk to the backend.

pub mod chat;
pub mod compose;
pub mod conversations;
pub mod feedback;
pub mod insights;
pub mod store;
pub mod thread;

#[cfg(test)]
pub(crate) mod fixtures;
