//! Communities tab: the user's memberships.
//!
//! This is also where both invite-resolution paths land, so the list reads
//! straight from the session profile and picks up a refresh immediately.

use leptos::prelude::*;

use crate::components::tab_nav::TabNav;
use crate::state::session::SessionState;

#[component]
pub fn CommunitiesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let memberships = move || {
        session
            .get()
            .user
            .map(|user| user.communities)
            .unwrap_or_default()
    };

    view! {
        <div class="tab-page">
            <header class="tab-page__header">
                <h1>"Communities"</h1>
            </header>
            <section class="tab-page__body">
                <Show
                    when=move || !memberships().is_empty()
                    fallback=move || {
                        view! { <p>"No communities yet. Join one through an invite link."</p> }
                    }
                >
                    <ul class="community-list">
                        {move || {
                            memberships()
                                .into_iter()
                                .map(|membership| {
                                    view! {
                                        <li class="community-list__item">
                                            <span class="community-list__name">{membership.name}</span>
                                            <span class="community-list__role">{membership.role}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </section>
            <TabNav />
        </div>
    }
}
