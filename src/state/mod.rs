//! Shared client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the authenticated-user signal the whole app reads through
//! Leptos context; `invite_gate` owns the once-per-session latch that decides
//! when a deferred community invite may be replayed.

pub mod invite_gate;
pub mod session;
