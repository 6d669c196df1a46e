#![cfg(not(feature = "hydrate"))]

use super::*;

// Each test drains the slot first: the thread-local backing is isolated per
// test thread, but a drained start keeps the assertions self-contained.

#[test]
fn take_on_empty_slot_is_none() {
    let _ = take();
    assert_eq!(take(), None);
}

#[test]
fn save_then_take_returns_token_and_clears() {
    let _ = take();
    save("ABC123");
    assert_eq!(take(), Some("ABC123".to_owned()));
    // Idempotent drain: the first take consumed the slot.
    assert_eq!(take(), None);
}

#[test]
fn second_save_supersedes_first() {
    let _ = take();
    save("FIRST");
    save("SECOND");
    assert_eq!(take(), Some("SECOND".to_owned()));
    assert_eq!(take(), None);
}

#[test]
fn saving_after_take_starts_a_fresh_pending_invite() {
    let _ = take();
    save("OLD");
    let _ = take();
    save("NEW");
    assert_eq!(take(), Some("NEW".to_owned()));
}
