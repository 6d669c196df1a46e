//! Once-per-session latch for deferred invite processing.
//!
//! ARCHITECTURE
//! ============
//! The latch is real state with an explicit transition table, not a flag
//! inferred from render order:
//!
//! `Unprocessed -> Processing` when authentication settles true, at most
//! once per contiguous authenticated session. `Processing -> Done` when the
//! drain/resolve task finishes, token or not. Sign-out re-arms to
//! `Unprocessed` from any state; nothing moves `Done` back to `Processing`
//! while the session stays authenticated, which is the re-entrancy guard
//! against duplicate acceptance calls.
//!
//! `next_action` is pure; the session gate in `app.rs` applies it from one
//! effect and owns the spawned task.

#[cfg(test)]
#[path = "invite_gate_test.rs"]
mod invite_gate_test;

use crate::state::session::SessionState;

/// Latch over invite processing for the current authenticated session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InviteGate {
    /// No processing attempted for the session in progress (or no session).
    #[default]
    Unprocessed,
    /// The drain/resolve task is in flight.
    Processing,
    /// Processing finished for this session; re-renders must not re-enter.
    Done,
}

/// What the session gate must do on an evaluation cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    /// Re-arm the latch after a sign-out so the next login starts clean.
    Rearm,
    /// Move to `Processing` and start the drain/resolve task.
    Begin,
}

/// Pure transition decision for one evaluation of (latch, session).
///
/// Loading gates everything, exactly as it does for the navigation guard.
#[must_use]
pub fn next_action(gate: InviteGate, session: &SessionState) -> Option<GateAction> {
    if session.loading {
        return None;
    }

    if !session.is_authenticated() {
        return (gate != InviteGate::Unprocessed).then_some(GateAction::Rearm);
    }

    (gate == InviteGate::Unprocessed).then_some(GateAction::Begin)
}

/// Settle the latch when the drain/resolve task completes.
///
/// Only a latch still in `Processing` moves to `Done`: if a sign-out
/// re-armed it mid-flight, the late completion leaves the fresh state
/// untouched.
pub fn apply_completion(gate: &mut InviteGate) {
    if *gate == InviteGate::Processing {
        *gate = InviteGate::Done;
    }
}
