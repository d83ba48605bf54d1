use super::*;

#[test]
fn input_is_trimmed() {
    assert_eq!(validate_message("  hi there \n", 1000).unwrap(), "hi there");
}

#[test]
fn blank_input_is_empty() {
    assert_eq!(validate_message(" \t\n", 1000), Err(ComposeError::Empty));
}

#[test]
fn exactly_max_chars_is_accepted() {
    let text = "a".repeat(1000);
    assert_eq!(validate_message(&text, 1000).unwrap().len(), 1000);
}

#[test]
fn over_max_chars_is_rejected() {
    let text = "a".repeat(1001);
    let err = validate_message(&text, 1000).unwrap_err();
    assert_eq!(err, ComposeError::TooLong { max: 1000 });
    assert_eq!(err.to_string(), "Message too long");
}

#[test]
fn limit_counts_characters_not_bytes() {
    let text = "é".repeat(1000);
    assert!(validate_message(&text, 1000).is_ok());
}

#[test]
fn counter_reports_trimmed_length() {
    assert_eq!(char_counter("  abc ", 1000), "3/1000");
}
