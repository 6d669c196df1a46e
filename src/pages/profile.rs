//! Profile tab: account details and sign-out.
//!
//! Sign-out only mutates the session; the route guard notices the cleared
//! user and replaces to the login screen, and the invite gate re-arms.

use leptos::prelude::*;

use crate::components::tab_nav::TabNav;
use crate::net::types::KycStatus;
use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let identity = move || {
        session
            .get()
            .user
            .map(|user| (user.name, user.phone))
            .unwrap_or_default()
    };
    let kyc_label = move || {
        session
            .get()
            .user
            .map_or("unknown", |user| kyc_status_label(user.kyc_status))
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::session::sign_out(session));
    };

    view! {
        <div class="tab-page">
            <header class="tab-page__header">
                <h1>"Profile"</h1>
            </header>
            <section class="tab-page__body">
                <p class="profile__name">{move || identity().0}</p>
                <p class="profile__phone">{move || identity().1}</p>
                <p class="profile__kyc">"Verification: " {kyc_label}</p>
                <button class="btn profile__sign-out" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </section>
            <TabNav />
        </div>
    }
}

fn kyc_status_label(status: KycStatus) -> &'static str {
    match status {
        KycStatus::NotStarted => "not started",
        KycStatus::Pending => "pending",
        KycStatus::Verified => "verified",
    }
}
