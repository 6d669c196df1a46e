//! Invite-link entry screen: `/community/join/{token}`.
//!
//! ARCHITECTURE
//! ============
//! This is the direct resolution path. The token arrives in the URL while the
//! session may still be loading, signed out, or signed in, and the three cases
//! diverge:
//!   - loading: wait; acting early could misroute a signed-in user to login.
//!   - signed out: stash the token in the deferred slot and replace to login;
//!     the root controller replays it after authentication succeeds.
//!   - signed in: hand the token to the shared resolver, once.
//!
//! The route guard deliberately exempts this group, so the login redirect for
//! the signed-out case is issued here and nowhere else.
//!
//! DESIGN
//! ======
//! `join_step` holds the whole decision as a pure function; the effect only
//! carries it out. A page-local `processed` flag (read untracked) makes the
//! step single-shot per mount: the resolver's own profile refresh re-runs the
//! effect, and a second resolution of the same token must not start.

#[cfg(test)]
#[path = "community_join_test.rs"]
mod community_join_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::session::SessionState;
use crate::util::{deferred_invite, guard, routes};

/// What the join screen should do for the current session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum JoinStep {
    /// Session still settling, or this mount already acted.
    Wait,
    /// Signed out: defer the token and send the user to login.
    Defer,
    /// Signed in: resolve the token now.
    Resolve,
}

fn join_step(session: &SessionState, already_acted: bool) -> JoinStep {
    if session.loading || already_acted {
        return JoinStep::Wait;
    }
    if session.is_authenticated() {
        JoinStep::Resolve
    } else {
        JoinStep::Defer
    }
}

#[cfg(feature = "hydrate")]
fn spawn_resolution<F>(token: String, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    leptos::task::spawn_local(async move {
        crate::util::invite::resolve_invite(&token, session, navigate).await;
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_resolution<F>(token: String, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    // Resolution only runs in the browser; SSR renders the waiting state.
    let _ = (token, session, navigate);
}

#[component]
pub fn CommunityJoinPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let processed = RwSignal::new(false);

    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        match join_step(&state, processed.get_untracked()) {
            JoinStep::Wait => {}
            JoinStep::Defer => {
                let Some(token) = params.get_untracked().get("token") else {
                    return;
                };
                processed.set(true);
                deferred_invite::save(&token);
                navigate(routes::LOGIN, guard::replace_navigation());
            }
            JoinStep::Resolve => {
                let Some(token) = params.get_untracked().get("token") else {
                    return;
                };
                processed.set(true);
                spawn_resolution(token, session, navigate.clone());
            }
        }
    });

    let token_missing = move || params.read().get("token").is_none();

    view! {
        <div class="join-page">
            <div class="join-card">
                <h1>"Community Invite"</h1>
                <Show
                    when=token_missing
                    fallback=move || {
                        view! {
                            <p class="join-card__status">
                                {move || {
                                    if session.get().is_authenticated() {
                                        "Joining community..."
                                    } else {
                                        "Checking your session..."
                                    }
                                }}
                            </p>
                        }
                    }
                >
                    <p class="join-card__status">"This invite link is incomplete."</p>
                </Show>
            </div>
        </div>
    }
}
