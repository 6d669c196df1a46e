//! Login page: phone number + SMS access-code sign-in.
//!
//! DESIGN
//! ======
//! The page never navigates. On a verified code it writes the returned user
//! into the shared session signal (`complete_login`); the route guard sees an
//! authenticated session on the login route and replaces to the tab area (or
//! the KYC prompt). Redirect policy lives in exactly one place.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let phone = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let phone_value = phone.get().trim().to_owned();
        if phone_value.is_empty() {
            info.set("Enter a phone number first.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Sending code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_login_code(&phone_value).await {
                Ok(()) => info.set("Code sent. Check your messages.".to_owned()),
                Err(e) => info.set(format!("Code request failed: {e}")),
            }
            busy.set(false);
        });
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let phone_value = phone.get().trim().to_owned();
        let code_value = code.get().trim().to_owned();
        if phone_value.is_empty() || code_value.is_empty() {
            info.set("Enter both phone number and code.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_login_code(&phone_value, &code_value).await {
                Ok(user) => crate::state::session::complete_login(session, user),
                Err(e) => {
                    info.set(format!("Verification failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Waypool"</h1>
                <p class="login-card__subtitle">"Sign in with your phone"</p>
                <form class="login-form" on:submit=on_request_code>
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="+1 555 0100"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send Code"
                    </button>
                </form>
                <form class="login-form" on:submit=on_verify_code>
                    <input
                        class="login-input login-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || session.get().is_authenticated()>
                    <p class="login-message">"Signed in. Redirecting..."</p>
                </Show>
            </div>
        </div>
    }
}
