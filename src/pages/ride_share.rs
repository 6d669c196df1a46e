//! Public shared-ride viewer reached from a share link.
//!
//! Free access: the route guard admits this group signed in or out, so the
//! page has to render sensibly for both.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::SharedRide;
use crate::util::routes;

#[component]
pub fn RideSharePage() -> impl IntoView {
    let params = use_params_map();
    let ride_id = move || params.read().get("id").unwrap_or_default();

    let ride = RwSignal::new(None::<SharedRide>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let id = ride_id();
        if id.is_empty() {
            loading.set(false);
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            ride.set(crate::net::api::fetch_shared_ride(&id).await);
            loading.set(false);
        });
    });

    view! {
        <div class="share-page">
            <div class="share-card">
                <h1>"Shared Ride"</h1>
                <Show
                    when=move || ride.get().is_some()
                    fallback=move || {
                        view! {
                            <p class="share-card__status">
                                {move || {
                                    if loading.get() {
                                        "Loading ride..."
                                    } else {
                                        "This ride link has expired or was removed."
                                    }
                                }}
                            </p>
                        }
                    }
                >
                    {move || {
                        ride.get()
                            .map(|ride| {
                                view! {
                                    <div class="share-card__details">
                                        <p class="share-card__route">
                                            {ride.origin} " to " {ride.destination}
                                        </p>
                                        <p class="share-card__departs">"Departs " {ride.departs_at}</p>
                                        <p class="share-card__driver">"Driver: " {ride.driver_name}</p>
                                        <p class="share-card__seats">{ride.seats_free} " seats free"</p>
                                    </div>
                                }
                            })
                    }}
                </Show>
                <a class="btn share-card__open" href=routes::PROTECTED_ROOT>
                    "Open Waypool"
                </a>
            </div>
        </div>
    }
}
