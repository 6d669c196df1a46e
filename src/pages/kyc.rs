//! Identity-verification prompt shown once after first login.
//!
//! DESIGN
//! ======
//! Both actions acknowledge the prompt (best-effort POST + local flag clear)
//! so it cannot re-trigger this session. The verification flow itself runs
//! outside this client; "Start verification" only hands off to it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::routes;

#[component]
pub fn KycPromptPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let started = RwSignal::new(false);
    let leave = RwSignal::new(false);

    // Handlers only flip signals; this effect owns the actual navigation so
    // the view closures stay `Copy`.
    let navigate = use_navigate();
    Effect::new(move || {
        if leave.get() {
            navigate(routes::PROTECTED_ROOT, NavigateOptions::default());
        }
    });

    let first_name = move || {
        session
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_else(|| "there".to_owned())
    };

    let acknowledge = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::session::acknowledge_kyc_prompt(session));
    };

    let on_start = move |_| {
        acknowledge();
        started.set(true);
    };

    let on_skip = move |_| {
        acknowledge();
        leave.set(true);
    };

    let on_done = move |_| leave.set(true);

    view! {
        <div class="kyc-page">
            <div class="kyc-card">
                <h1>"Verify your identity"</h1>
                <Show
                    when=move || started.get()
                    fallback=move || {
                        view! {
                            <p class="kyc-card__body">
                                "Hi " {first_name} ", Waypool communities require identity "
                                "verification before you can offer or book rides."
                            </p>
                        }
                    }
                >
                    <p class="kyc-card__body">
                        "Verification continues with our identity partner. Come back "
                        "here once it finishes."
                    </p>
                </Show>
                <div class="kyc-card__actions">
                    <Show
                        when=move || started.get()
                        fallback=move || {
                            view! {
                                <button class="btn btn--primary" on:click=on_start>
                                    "Start verification"
                                </button>
                                <button class="btn" on:click=on_skip>
                                    "Not now"
                                </button>
                            }
                        }
                    >
                        <button class="btn" on:click=on_done>
                            "Back to Waypool"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
