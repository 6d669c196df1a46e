//! Home tab: the authenticated landing screen.

use leptos::prelude::*;

use crate::components::tab_nav::TabNav;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome, {}", user.name))
    };

    view! {
        <div class="tab-page">
            <header class="tab-page__header">
                <h1>{greeting}</h1>
            </header>
            <section class="tab-page__body">
                <p>"Find a pool or offer seats in your communities."</p>
            </section>
            <TabNav />
        </div>
    }
}
