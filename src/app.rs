//! Root application component with routing, contexts, and the session gate.
//!
//! ARCHITECTURE
//! ============
//! `App` provides the session and invite-gate signals and mounts the router;
//! `SessionGate` sits inside the router so it can use the location and the
//! navigator. The gate is the only place auth redirects and deferred-invite
//! replays are wired; pages never install their own.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::pages::{
    communities::CommunitiesPage, community_join::CommunityJoinPage, home::HomePage,
    kyc::KycPromptPage, login::LoginPage, profile::ProfilePage, ride_share::RideSharePage,
    rides::RidesPage,
};
use crate::state::invite_gate::{self, GateAction, InviteGate};
use crate::state::session::SessionState;
use crate::util::guard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, starts the session probe, and sets up
/// client-side routing behind the session gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let gate = RwSignal::new(InviteGate::default());

    provide_context(session);
    provide_context(gate);

    // Settle `loading` exactly once per page load.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::session::bootstrap(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/waypool.css"/>
        <Title text="Waypool"/>

        <Router>
            <SessionGate/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("rides") view=RidesPage/>
                <Route path=StaticSegment("communities") view=CommunitiesPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("kyc") view=KycPromptPage/>
                <Route path=(StaticSegment("ride-share"), ParamSegment("id")) view=RideSharePage/>
                <Route
                    path=(StaticSegment("community"), StaticSegment("join"), ParamSegment("token"))
                    view=CommunityJoinPage
                />
            </Routes>
        </Router>
    }
}

/// Headless controller: installs the route guard and steps the invite gate.
///
/// Lives inside `Router` (it needs the location and the navigator) but
/// renders nothing.
#[component]
fn SessionGate() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gate = expect_context::<RwSignal<InviteGate>>();
    let location = use_location();

    let navigate = use_navigate();
    guard::install_route_guard(session, location.pathname, navigate);

    // Latch stepping: re-arm on sign-out, fire the replay at most once per
    // authenticated session. The gate itself is read untracked so only
    // session changes drive this.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        match invite_gate::next_action(gate.get_untracked(), &state) {
            None => {}
            Some(GateAction::Rearm) => gate.set(InviteGate::Unprocessed),
            Some(GateAction::Begin) => {
                gate.set(InviteGate::Processing);
                run_deferred_resolution(session, gate, navigate.clone());
            }
        }
    });
}

/// Drain the deferred slot and resolve whatever token it held, then complete
/// the latch. Completion happens with or without a token: an empty slot is a
/// valid steady state and the latch still has to reach `Done`.
#[cfg(feature = "hydrate")]
fn run_deferred_resolution<F>(session: RwSignal<SessionState>, gate: RwSignal<InviteGate>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    leptos::task::spawn_local(async move {
        if let Some(token) = crate::util::deferred_invite::take() {
            crate::util::invite::resolve_invite(&token, session, navigate).await;
        }
        gate.update(invite_gate::apply_completion);
    });
}

#[cfg(not(feature = "hydrate"))]
fn run_deferred_resolution<F>(session: RwSignal<SessionState>, gate: RwSignal<InviteGate>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    // There is no task executor in this build to resolve a held token.
    // The slot still drains before the latch completes; `Done` implies an
    // empty slot in every build.
    let _ = crate::util::deferred_invite::take();
    let _ = (session, navigate);
    gate.update(invite_gate::apply_completion);
}
