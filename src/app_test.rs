#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::deferred_invite;

// =============================================================
// Deferred resolution outside the browser
// =============================================================

#[test]
fn deferred_resolution_drains_the_slot_and_completes_the_latch() {
    let _ = deferred_invite::take();
    deferred_invite::save("HELD");

    let session = RwSignal::new(SessionState::default());
    let gate = RwSignal::new(InviteGate::Processing);
    run_deferred_resolution(session, gate, |_: &str, _: NavigateOptions| {});

    assert_eq!(deferred_invite::take(), None, "completion must spend the slot");
    assert_eq!(gate.get_untracked(), InviteGate::Done);
}

#[test]
fn deferred_resolution_completes_with_an_empty_slot() {
    let _ = deferred_invite::take();

    let session = RwSignal::new(SessionState::default());
    let gate = RwSignal::new(InviteGate::Processing);
    run_deferred_resolution(session, gate, |_: &str, _: NavigateOptions| {});

    assert_eq!(gate.get_untracked(), InviteGate::Done);
}
