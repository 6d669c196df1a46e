//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the Waypool API payloads so serde stays lossless across
//! the REST seam. Optional fields carry `#[serde(default)]` where older
//! backend versions omit them, so a partial payload degrades instead of
//! failing the whole deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity-verification progress for the current user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    /// Verification never started; the one-time prompt is still relevant.
    #[default]
    #[serde(rename = "none")]
    NotStarted,
    /// Documents submitted, review in progress.
    Pending,
    /// Verification complete.
    Verified,
}

/// A community the user belongs to, as reported by the profile endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityMembership {
    /// Unique community identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Membership role (e.g. `"member"`, `"driver"`, `"organizer"`).
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "member".to_owned()
}

/// The authenticated user as returned by `/api/auth/me` and the login flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Phone number in E.164 form, the login identifier.
    pub phone: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Identity-verification progress.
    #[serde(default)]
    pub kyc_status: KycStatus,
    /// Communities the user belongs to, including the role in each.
    #[serde(default)]
    pub communities: Vec<CommunityMembership>,
}

/// A ride exposed through a public share link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SharedRide {
    /// Unique ride identifier (UUID string).
    pub id: String,
    /// Human-readable origin label.
    pub origin: String,
    /// Human-readable destination label.
    pub destination: String,
    /// ISO 8601 departure timestamp.
    pub departs_at: String,
    /// Display name of the driver offering the ride.
    pub driver_name: String,
    /// Seats still available on the ride.
    #[serde(default)]
    pub seats_free: i32,
}

/// Successful invite acceptance as returned by the join endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteAcceptance {
    /// Community the user was just added to (UUID string).
    pub community_id: String,
    /// Display name used in the success acknowledgment.
    pub community_name: String,
}
