//! Session-gated navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `required_route` is the whole decision: a pure function from (route
//! group, session state) to at most one redirect target, first matching
//! rule wins. `install_route_guard` is the only reactive wrapper around it.
//!
//! The effect tracks the session signal but reads the pathname untracked:
//! the guard re-evaluates on auth changes, never on in-app navigation, so
//! browsing inside the tab area cannot feed back into redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::util::routes::{self, RouteGroup};

/// The redirect required by the current (route group, session) pair, if any.
///
/// Rules, in order: loading gates everything; signed-out users are only
/// forced off protected screens; signed-in users are left alone on every
/// classified screen group (deep-link screens included, so following a
/// share or invite link never yanks the user away), and are routed off
/// unclassified screens to the KYC prompt or the tab area.
#[must_use]
pub fn required_route(group: RouteGroup, session: &SessionState) -> Option<&'static str> {
    if session.loading {
        return None;
    }

    if !session.is_authenticated() {
        return match group {
            RouteGroup::Protected => Some(routes::LOGIN),
            _ => None,
        };
    }

    match group {
        RouteGroup::Protected | RouteGroup::Kyc | RouteGroup::RideShare | RouteGroup::CommunityJoin => None,
        RouteGroup::Other => {
            if session.show_kyc_prompt {
                Some(routes::KYC_PROMPT)
            } else {
                Some(routes::PROTECTED_ROOT)
            }
        }
    }
}

/// History-replacing navigation options shared by every guard redirect, so
/// back-navigation cannot land on a screen the guard just vacated.
#[must_use]
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Install the redirecting effect for the guard.
///
/// Re-runs whenever the session signal changes; the pathname is sampled
/// untracked at that moment and classified fresh.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = session.get();
        let group = routes::route_group(&pathname.get_untracked());
        if let Some(target) = required_route(group, &state) {
            navigate(target, replace_navigation());
        }
    });
}
