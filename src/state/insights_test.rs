use super::*;
use crate::state::fixtures::insights;

#[test]
fn default_shows_empty_placeholder() {
    let state = InsightsState::default();
    assert!(!state.visible);
    assert_eq!(state.display(), InsightsDisplay::Empty);
}

#[test]
fn loading_takes_priority() {
    let mut state = InsightsState { data: Some(insights(4, 3)), ..Default::default() };
    state.begin_load();
    assert_eq!(state.display(), InsightsDisplay::Loading);
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = InsightsState::default();
    state.finish_load(Err("boom".to_owned()));
    state.begin_load();
    assert!(state.error.is_none());
}

#[test]
fn failure_is_captured_and_loading_cleared() {
    let mut state = InsightsState::default();
    state.begin_load();
    state.finish_load(Err("Bad Gateway".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.display(), InsightsDisplay::Failed("Bad Gateway"));
}

#[test]
fn zero_total_is_empty_regardless_of_other_fields() {
    let mut data = insights(0, 0);
    data.helpful_count = 7;
    data.helpful_rate = 0.9;
    let mut state = InsightsState::default();
    state.begin_load();
    state.finish_load(Ok(data));
    assert_eq!(state.display(), InsightsDisplay::Empty);
}

#[test]
fn nonzero_total_is_ready() {
    let mut state = InsightsState::default();
    state.begin_load();
    state.finish_load(Ok(insights(4, 3)));
    assert!(!state.loading);
    assert!(matches!(state.display(), InsightsDisplay::Ready(i) if i.helpful_count == 3));
}
