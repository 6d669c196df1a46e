//! Networking modules for the Waypool REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the ride-matching backend and `types`
//! defines the shared wire schema both sides agree on.

pub mod api;
pub mod types;
