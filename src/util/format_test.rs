use super::*;
use crate::state::fixtures::feedback;

#[test]
fn percent_rounds_to_whole_number() {
    assert_eq!(format_percent(0.4567), "46%");
    assert_eq!(format_percent(0.0), "0%");
    assert_eq!(format_percent(1.0), "100%");
}

#[test]
fn non_finite_percent_is_zero() {
    assert_eq!(format_percent(f64::NAN), "0%");
    assert_eq!(format_percent(f64::INFINITY), "0%");
    assert_eq!(format_percent(f64::NEG_INFINITY), "0%");
}

#[test]
fn missing_title_is_untitled() {
    assert_eq!(title_or_untitled(None), "Untitled");
    assert_eq!(title_or_untitled(Some("Trip")), "Trip");
}

#[test]
fn delete_prompt_quotes_title() {
    assert_eq!(delete_prompt(Some("Trip")), "Delete \"Trip\"? This cannot be undone.");
    assert_eq!(delete_prompt(None), "Delete this conversation? This cannot be undone.");
    assert_eq!(delete_prompt(Some("")), "Delete this conversation? This cannot be undone.");
}

#[test]
fn feedback_status_names_verdict() {
    let fb = feedback(1, 2, false, "");
    assert_eq!(feedback_status(&fb, "today"), "Marked not helpful • today");
    assert_eq!(verdict(true), "helpful");
}
