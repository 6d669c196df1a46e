//! Rides tab: upcoming and past rides.

use leptos::prelude::*;

use crate::components::tab_nav::TabNav;

#[component]
pub fn RidesPage() -> impl IntoView {
    view! {
        <div class="tab-page">
            <header class="tab-page__header">
                <h1>"My Rides"</h1>
            </header>
            <section class="tab-page__body">
                <p>"Your upcoming and past rides appear here."</p>
            </section>
            <TabNav />
        </div>
    }
}
