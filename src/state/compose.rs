//! Composer input validation, applied before anything is sent.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("Message is empty")]
    Empty,
    #[error("Message too long")]
    TooLong { max: usize },
}

/// Trim composer input and enforce the length limit, counted in characters.
///
/// # Errors
///
/// Returns [`ComposeError::Empty`] for blank input and
/// [`ComposeError::TooLong`] when the trimmed text exceeds `max` characters.
pub fn validate_message(raw: &str, max: usize) -> Result<String, ComposeError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ComposeError::Empty);
    }
    if text.chars().count() > max {
        return Err(ComposeError::TooLong { max });
    }
    Ok(text.to_owned())
}

/// Counter label shown under the composer, e.g. `"12/1000"`.
pub fn char_counter(raw: &str, max: usize) -> String {
    format!("{}/{max}", raw.trim().chars().count())
}
