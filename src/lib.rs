//! # waypool-client
//!
//! Leptos + WASM front end for the Waypool community ride-matching app.
//!
//! The interesting subsystem is session-gated navigation: a route guard keyed
//! off one shared session signal, a single-slot deferred store for community
//! invite links that arrive before login, and a once-per-session replay latch
//! that funnels both invite entry paths through one resolver.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
