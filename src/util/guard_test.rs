use super::*;
use crate::net::types::{KycStatus, User};

// =============================================================
// Helpers
// =============================================================

fn signed_out() -> SessionState {
    SessionState {
        user: None,
        loading: false,
        show_kyc_prompt: false,
    }
}

fn signed_in(show_kyc_prompt: bool) -> SessionState {
    SessionState {
        user: Some(User {
            id: "u-1".to_owned(),
            name: "Alice".to_owned(),
            phone: "+15550100".to_owned(),
            avatar_url: None,
            kyc_status: KycStatus::Verified,
            communities: Vec::new(),
        }),
        loading: false,
        show_kyc_prompt,
    }
}

const ALL_GROUPS: [RouteGroup; 5] = [
    RouteGroup::Protected,
    RouteGroup::Kyc,
    RouteGroup::RideShare,
    RouteGroup::CommunityJoin,
    RouteGroup::Other,
];

// =============================================================
// Loading short-circuit
// =============================================================

#[test]
fn loading_yields_no_action_for_every_group() {
    for group in ALL_GROUPS {
        let mut state = signed_out();
        state.loading = true;
        assert_eq!(required_route(group, &state), None, "{group:?} while loading, signed out");

        let mut state = signed_in(true);
        state.loading = true;
        assert_eq!(required_route(group, &state), None, "{group:?} while loading, signed in");
    }
}

// =============================================================
// Signed out
// =============================================================

#[test]
fn signed_out_on_protected_redirects_to_login() {
    assert_eq!(required_route(RouteGroup::Protected, &signed_out()), Some(routes::LOGIN));
}

#[test]
fn signed_out_elsewhere_is_left_alone() {
    for group in [
        RouteGroup::Kyc,
        RouteGroup::RideShare,
        RouteGroup::CommunityJoin,
        RouteGroup::Other,
    ] {
        assert_eq!(required_route(group, &signed_out()), None, "{group:?} signed out");
    }
}

// =============================================================
// Signed in
// =============================================================

#[test]
fn signed_in_is_left_alone_in_every_allowed_area() {
    for group in [
        RouteGroup::Protected,
        RouteGroup::Kyc,
        RouteGroup::RideShare,
        RouteGroup::CommunityJoin,
    ] {
        assert_eq!(required_route(group, &signed_in(false)), None, "{group:?} signed in");
        assert_eq!(required_route(group, &signed_in(true)), None, "{group:?} signed in, prompt up");
    }
}

#[test]
fn signed_in_on_other_with_prompt_goes_to_kyc() {
    assert_eq!(required_route(RouteGroup::Other, &signed_in(true)), Some(routes::KYC_PROMPT));
}

#[test]
fn signed_in_on_other_without_prompt_goes_to_tab_area() {
    assert_eq!(
        required_route(RouteGroup::Other, &signed_in(false)),
        Some(routes::PROTECTED_ROOT)
    );
}

// =============================================================
// Redirect semantics
// =============================================================

#[test]
fn guard_redirects_replace_history() {
    assert!(replace_navigation().replace);
}
