//! Display formatting for labels and numbers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Feedback;

/// Render a ratio as a whole percentage; non-finite input renders `0%`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0%".to_owned();
    }
    format!("{}%", (value * 100.0).round() as i64)
}

/// Conversation title for lists and headers.
pub fn title_or_untitled(title: Option<&str>) -> &str {
    title.unwrap_or("Untitled")
}

/// Confirmation prompt shown before deleting a conversation.
pub fn delete_prompt(title: Option<&str>) -> String {
    let label = match title {
        Some(t) if !t.is_empty() => format!("\"{t}\""),
        _ => "this conversation".to_owned(),
    };
    format!("Delete {label}? This cannot be undone.")
}

/// Short verdict for a feedback entry.
pub fn verdict(is_helpful: bool) -> &'static str {
    if is_helpful { "helpful" } else { "not helpful" }
}

/// Status line under the feedback controls, e.g. `"Marked helpful • <date>"`.
pub fn feedback_status(feedback: &Feedback, when: &str) -> String {
    format!("Marked {} • {when}", verdict(feedback.is_helpful))
}
