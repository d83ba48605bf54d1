//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component and
//! state logic to improve reuse and testability.

pub mod dialog;
pub mod format;
pub mod html;
pub mod time;
