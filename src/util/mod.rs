//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules keep browser storage and navigation concerns out of page
//! logic so the route guard, the deferred-invite store, and the invite
//! resolver stay testable off-browser.

pub mod deferred_invite;
pub mod guard;
pub mod invite;
pub mod routes;
