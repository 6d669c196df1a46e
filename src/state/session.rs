//! Auth-session state and its mutation contract.
//!
//! ARCHITECTURE
//! ============
//! `SessionState` is owned by one `RwSignal` provided from the app root; the
//! functions here are the only writers. The navigation guard and the invite
//! gate read it as an explicit input and never mutate it, so every decision
//! path stays testable against a plain value.
//!
//! The `apply_*` helpers hold the full transition logic on `&mut
//! SessionState`; the async wrappers pair them with the REST calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{KycStatus, User};

/// Authentication state for the current app session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// The signed-in user, once the backend confirms a session.
    pub user: Option<User>,
    /// True while the startup session probe is in flight. No navigation
    /// decision may be made while this is set.
    pub loading: bool,
    /// One-time prompt flag: set at login completion when verification has
    /// not been started, cleared only by explicit acknowledgment.
    pub show_kyc_prompt: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // The probe is in flight from the first render, so the session
        // starts in the loading state rather than as "signed out".
        Self {
            user: None,
            loading: true,
            show_kyc_prompt: false,
        }
    }
}

impl SessionState {
    /// Whether a confirmed user session exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Apply a completed login or signup.
///
/// This is the only place the KYC prompt flag is derived: it fires once,
/// here, when the fresh profile reports verification as not started.
pub fn apply_login(state: &mut SessionState, user: User) {
    state.show_kyc_prompt = user.kyc_status == KycStatus::NotStarted;
    state.user = Some(user);
    state.loading = false;
}

/// Apply the startup session probe result.
///
/// The probe restores identity after a restart but never re-derives the
/// one-time prompt flag. It only lands while `loading` is still set: a
/// login can settle the session before a slow probe response arrives, and
/// the stale result must not overwrite it.
pub fn apply_probe(state: &mut SessionState, user: Option<User>) {
    if !state.loading {
        return;
    }
    state.user = user;
    state.loading = false;
}

/// Apply a profile refresh result.
///
/// A failed or unauthenticated refresh keeps the existing user; only an
/// explicit sign-out clears identity mid-session. The rule cuts both ways:
/// a refresh that completes after a sign-out is dropped, so an in-flight
/// response cannot bring a signed-out session back.
pub fn apply_refresh(state: &mut SessionState, user: Option<User>) {
    if !state.is_authenticated() {
        return;
    }
    if let Some(user) = user {
        state.user = Some(user);
    }
}

/// Apply a sign-out: the in-memory session resets to its signed-out shape.
pub fn apply_logout(state: &mut SessionState) {
    state.user = None;
    state.show_kyc_prompt = false;
}

/// Record a completed login on the shared session signal.
pub fn complete_login(session: RwSignal<SessionState>, user: User) {
    session.update(|state| apply_login(state, user));
}

/// Startup probe: resolve the current user and settle `loading`.
pub async fn bootstrap(session: RwSignal<SessionState>) {
    let user = api::fetch_current_user().await;
    session.update(|state| apply_probe(state, user));
}

/// Re-fetch the profile (user, communities, roles) after a membership change.
pub async fn refresh_profile(session: RwSignal<SessionState>) {
    let user = api::fetch_current_user().await;
    session.update(|state| apply_refresh(state, user));
}

/// Sign out on the backend, then reset the local session.
pub async fn sign_out(session: RwSignal<SessionState>) {
    api::logout().await;
    session.update(apply_logout);
}

/// Acknowledge the one-time KYC prompt.
///
/// The backend call is best-effort and idempotent; the local flag clears
/// regardless so the prompt cannot re-trigger this session.
pub async fn acknowledge_kyc_prompt(session: RwSignal<SessionState>) {
    api::acknowledge_kyc_prompt().await;
    session.update(|state| state.show_kyc_prompt = false);
}
