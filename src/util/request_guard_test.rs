use super::*;

#[test]
fn latest_ticket_is_current() {
    let guard = RequestGuard::default();
    let ticket = guard.issue();
    assert!(guard.is_current(ticket));
}

#[test]
fn newer_ticket_supersedes_older() {
    let guard = RequestGuard::default();
    let a = guard.issue();
    let b = guard.issue();
    assert!(!guard.is_current(a));
    assert!(guard.is_current(b));
}

#[test]
fn close_rejects_in_flight_ticket() {
    let guard = RequestGuard::default();
    let ticket = guard.issue();
    guard.close();
    assert!(!guard.is_current(ticket));
    assert!(!guard.is_current(guard.issue()));
}

#[test]
fn clones_share_sequence() {
    let guard = RequestGuard::default();
    let a = guard.clone().issue();
    let b = guard.issue();
    assert_ne!(a, b);
    assert!(!guard.is_current(a));
}
