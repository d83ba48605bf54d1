//! UI components for the chat client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `ChatStore` from context and call its actions
//! from event handlers; none of them own domain state.

pub mod chat_view;
pub mod conversation_list;
pub mod insights_view;
pub mod main_header;
pub mod message_item;
