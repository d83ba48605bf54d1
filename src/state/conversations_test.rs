use super::*;
use crate::state::fixtures::conversation;

#[test]
fn default_has_no_selection() {
    let state = ConversationsState::default();
    assert!(state.items.is_empty());
    assert!(state.current().is_none());
}

#[test]
fn replace_suggests_first_when_nothing_selected() {
    let mut state = ConversationsState::default();
    let next = state.replace(vec![conversation(9, Some("a")), conversation(4, None)]);
    assert_eq!(next, Some(9));
}

#[test]
fn replace_keeps_existing_selection() {
    let mut state = ConversationsState { selected: Some(4), ..Default::default() };
    let next = state.replace(vec![conversation(9, None), conversation(4, None)]);
    assert_eq!(next, None);
    assert_eq!(state.current().map(|c| c.id), Some(4));
}

#[test]
fn replace_with_empty_page_suggests_nothing() {
    let mut state = ConversationsState::default();
    assert_eq!(state.replace(Vec::new()), None);
}

#[test]
fn prepend_puts_conversation_first_without_duplicates() {
    let mut state = ConversationsState::default();
    state.replace(vec![conversation(1, None), conversation(2, None)]);
    state.prepend(conversation(2, Some("renamed")));
    let ids: Vec<_> = state.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(state.get(2).and_then(|c| c.title.as_deref()), Some("renamed"));
}

#[test]
fn remove_reports_whether_anything_changed() {
    let mut state = ConversationsState::default();
    state.replace(vec![conversation(1, None)]);
    assert!(!state.remove(7));
    assert!(state.remove(1));
    assert!(state.items.is_empty());
}

#[test]
fn current_is_none_when_selection_not_listed() {
    let state = ConversationsState { items: vec![conversation(1, None)], selected: Some(3) };
    assert!(state.current().is_none());
    assert!(state.is_selected(3));
}
