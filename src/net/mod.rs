//! Networking modules for the chat REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls and normalizes their failures, `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
