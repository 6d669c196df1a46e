//! Shared community-invite resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two entry points funnel here with identical semantics: the session gate
//! in `app.rs` (token recovered from durable storage after login) and the
//! join screen (token taken from the URL, user already signed in). Each
//! attempt is final: the pending slot is drained on success and failure
//! alike, so no retry loop can survive an app restart.
//!
//! ERROR HANDLING
//! ==============
//! Rejected tokens and transport failures are the same case at this layer:
//! acknowledge, drain, and move the user to the communities tab rather than
//! stranding them on a dead-end screen. Only a session that ended mid-flight
//! suppresses the navigation.

#[cfg(test)]
#[path = "invite_test.rs"]
mod invite_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api;
use crate::net::types::InviteAcceptance;
use crate::state::session::{self, SessionState};
use crate::util::deferred_invite;
use crate::util::guard::replace_navigation;
use crate::util::routes;

/// Result of one acceptance attempt against the invite endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InviteOutcome {
    /// Membership confirmed server-side.
    Accepted {
        /// Community display name for the acknowledgment.
        community_name: String,
    },
    /// Token rejected or the call failed; the attempt is spent either way.
    Failed {
        /// Internal detail for the log, not shown to the user.
        message: String,
    },
}

fn outcome_of(result: Result<InviteAcceptance, String>) -> InviteOutcome {
    match result {
        Ok(acceptance) => InviteOutcome::Accepted {
            community_name: acceptance.community_name,
        },
        Err(message) => InviteOutcome::Failed { message },
    }
}

fn acknowledgment_message(outcome: &InviteOutcome) -> String {
    match outcome {
        InviteOutcome::Accepted { community_name } => {
            format!("Welcome to {community_name}! The community is now in your communities tab.")
        }
        InviteOutcome::Failed { .. } => {
            "This invite could not be used. It may have expired; ask for a fresh link.".to_owned()
        }
    }
}

/// Resolve an invite token: call the acceptance endpoint, then settle.
pub async fn resolve_invite<F>(token: &str, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let outcome = outcome_of(api::accept_community_invite(token).await);
    finish_invite(outcome, session, navigate).await;
}

/// Settle an acceptance attempt: refresh on success, drain the pending
/// slot unconditionally, then acknowledge and land on the communities tab.
async fn finish_invite<F>(outcome: InviteOutcome, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    match &outcome {
        InviteOutcome::Accepted { community_name } => {
            log::info!("community invite accepted: {community_name}");
            session::refresh_profile(session).await;
        }
        InviteOutcome::Failed { message } => {
            log::warn!("community invite rejected: {message}");
        }
    }

    // Drains on every path, including a stored duplicate of a URL token:
    // an attempt is spent the moment it completes.
    let _ = deferred_invite::take();

    // The awaits above are yield points; a sign-out may have interleaved.
    // A stale navigation would land on a screen the guard just vacated.
    if !session.get_untracked().is_authenticated() {
        log::info!("invite resolution discarded: session ended mid-flight");
        return;
    }

    notify(&acknowledgment_message(&outcome));
    navigate(routes::COMMUNITIES, replace_navigation());
}

/// Generic acknowledgment dialog; logs instead outside the browser.
fn notify(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::info!("{message}");
    }
}
