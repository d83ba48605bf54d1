use super::*;

#[test]
fn fresh_token_is_current() {
    let poll = PollLoop::default();
    assert!(poll.restart().is_current());
}

#[test]
fn restart_invalidates_previous_token() {
    let poll = PollLoop::default();
    let first = poll.restart();
    let second = poll.restart();
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn stop_invalidates_running_token() {
    let poll = PollLoop::default();
    let token = poll.restart();
    poll.stop();
    assert!(!token.is_current());
}

#[test]
fn clones_share_generation() {
    let poll = PollLoop::default();
    let token = poll.restart();
    poll.clone().restart();
    assert!(!token.is_current());
}
