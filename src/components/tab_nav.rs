//! Bottom tab bar for the authenticated area.
//!
//! Tab switches are pure in-app navigation: the route guard tracks session
//! state only, so walking between tabs never re-runs it.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::routes;

const TABS: [(&str, &str); 4] = [
    (routes::PROTECTED_ROOT, "Home"),
    (routes::RIDES, "Rides"),
    (routes::COMMUNITIES, "Communities"),
    (routes::PROFILE, "Profile"),
];

/// Tab bar linking the four protected tabs.
#[component]
pub fn TabNav() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="tab-nav">
            {TABS
                .into_iter()
                .map(|(path, label)| {
                    view! {
                        <a
                            class="tab-nav__link"
                            class:tab-nav__link--active=move || pathname.get() == path
                            href=path
                        >
                            {label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
