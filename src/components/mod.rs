//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome while reading session state from Leptos
//! context providers.

pub mod tab_nav;
