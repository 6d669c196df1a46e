//! Route paths and route-group classification.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard reasons about coarse route groups, not concrete
//! paths. Classification keys off the first path segment and is computed
//! fresh from the router's pathname on every evaluation; groups are never
//! cached across navigations.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Sign-in screen.
pub const LOGIN: &str = "/login";
/// One-time identity-verification prompt.
pub const KYC_PROMPT: &str = "/kyc";
/// Landing tab of the protected area.
pub const PROTECTED_ROOT: &str = "/";
/// Rides tab.
pub const RIDES: &str = "/rides";
/// Communities tab; also the landing target after invite resolution.
pub const COMMUNITIES: &str = "/communities";
/// Profile tab.
pub const PROFILE: &str = "/profile";

/// Build the public share-link path for a ride.
#[must_use]
pub fn ride_share_path(ride_id: &str) -> String {
    format!("/ride-share/{ride_id}")
}

/// Build the invite-link path for a community join token.
#[must_use]
pub fn community_join_path(token: &str) -> String {
    format!("/community/join/{token}")
}

/// Coarse classification of the current screen for guard decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGroup {
    /// The signed-in tab area (home, rides, communities, profile).
    Protected,
    /// Identity-verification screens.
    Kyc,
    /// Publicly viewable shared-ride screens.
    RideShare,
    /// Invite-link entry screens.
    CommunityJoin,
    /// Login and any unclassified path.
    Other,
}

/// Classify a pathname by its first segment.
#[must_use]
pub fn route_group(path: &str) -> RouteGroup {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
    match first {
        "" | "rides" | "communities" | "profile" => RouteGroup::Protected,
        "kyc" => RouteGroup::Kyc,
        "ride-share" => RouteGroup::RideShare,
        "community" => RouteGroup::CommunityJoin,
        _ => RouteGroup::Other,
    }
}
