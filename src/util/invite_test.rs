#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::net::types::{KycStatus, User};
use crate::state::session::apply_login;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        phone: "+15550100".to_owned(),
        avatar_url: None,
        kyc_status: KycStatus::Verified,
        communities: Vec::new(),
    }
}

fn signed_in_signal() -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::default());
    session.update(|state| apply_login(state, make_user()));
    session
}

fn signed_out_signal() -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::default());
    session.update(|state| state.loading = false);
    session
}

type NavigationLog = Rc<RefCell<Vec<(String, bool)>>>;

/// Recording navigate closure: collects `(path, replace)` pairs into `sink`.
fn recording_navigate(sink: NavigationLog) -> impl Fn(&str, NavigateOptions) + 'static {
    move |path: &str, options: NavigateOptions| {
        sink.borrow_mut().push((path.to_owned(), options.replace));
    }
}

fn accepted() -> InviteOutcome {
    InviteOutcome::Accepted {
        community_name: "Harbor Pool".to_owned(),
    }
}

fn failed() -> InviteOutcome {
    InviteOutcome::Failed {
        message: "invite acceptance failed: 410".to_owned(),
    }
}

// =============================================================
// Outcome mapping + acknowledgments
// =============================================================

#[test]
fn outcome_of_maps_acceptance_and_error() {
    let ok = outcome_of(Ok(crate::net::types::InviteAcceptance {
        community_id: "c-1".to_owned(),
        community_name: "Harbor Pool".to_owned(),
    }));
    assert_eq!(ok, accepted());

    let err = outcome_of(Err("invite acceptance failed: 410".to_owned()));
    assert_eq!(err, failed());
}

#[test]
fn success_acknowledgment_names_the_community() {
    assert!(acknowledgment_message(&accepted()).contains("Harbor Pool"));
}

#[test]
fn failure_acknowledgment_is_generic() {
    // The wire-level detail stays in the log, not in the dialog.
    let message = acknowledgment_message(&failed());
    assert!(!message.contains("410"));
}

// =============================================================
// Settling
// =============================================================

#[test]
fn success_drains_slot_and_lands_on_communities() {
    let _ = deferred_invite::take();
    deferred_invite::save("ABC123");

    let session = signed_in_signal();
    let calls = NavigationLog::default();
    let navigate = recording_navigate(calls.clone());
    block_on(finish_invite(accepted(), session, navigate));

    assert_eq!(deferred_invite::take(), None, "pending slot must be drained");
    assert_eq!(calls.borrow().as_slice(), [("/communities".to_owned(), true)]);
}

#[test]
fn failure_still_drains_and_still_navigates() {
    let _ = deferred_invite::take();
    deferred_invite::save("XYZ");

    let session = signed_in_signal();
    let calls = NavigationLog::default();
    let navigate = recording_navigate(calls.clone());
    block_on(finish_invite(failed(), session, navigate));

    assert_eq!(deferred_invite::take(), None, "a failed attempt is still spent");
    assert_eq!(calls.borrow().as_slice(), [("/communities".to_owned(), true)]);
}

#[test]
fn sign_out_mid_flight_suppresses_navigation_but_not_the_drain() {
    let _ = deferred_invite::take();
    deferred_invite::save("LATE");

    let session = signed_out_signal();
    let calls = NavigationLog::default();
    let navigate = recording_navigate(calls.clone());
    block_on(finish_invite(accepted(), session, navigate));

    assert_eq!(deferred_invite::take(), None);
    assert!(calls.borrow().is_empty(), "stale completion must not navigate");
}

// =============================================================
// End to end against the stubbed endpoint
// =============================================================

#[test]
fn resolve_invite_never_panics_and_settles_via_the_failure_path() {
    // Outside the browser the acceptance endpoint reports an error; the
    // resolver must treat it as an ordinary failed attempt.
    let _ = deferred_invite::take();
    deferred_invite::save("ABC123");

    let session = signed_in_signal();
    let calls = NavigationLog::default();
    let navigate = recording_navigate(calls.clone());
    block_on(resolve_invite("ABC123", session, navigate));

    assert_eq!(deferred_invite::take(), None);
    assert_eq!(calls.borrow().as_slice(), [("/communities".to_owned(), true)]);
    assert!(session.get_untracked().is_authenticated(), "a failed invite does not end the session");
}
