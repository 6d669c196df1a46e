//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. None of them perform their own auth redirects; that is the
//! route guard's job (see `util::guard`).

pub mod communities;
pub mod community_join;
pub mod home;
pub mod kyc;
pub mod login;
pub mod profile;
pub mod ride_share;
pub mod rides;
