use super::*;

// =============================================================
// Path builders
// =============================================================

#[test]
fn ride_share_path_formats_expected_path() {
    assert_eq!(ride_share_path("r-42"), "/ride-share/r-42");
}

#[test]
fn community_join_path_formats_expected_path() {
    assert_eq!(community_join_path("ABC123"), "/community/join/ABC123");
}

// =============================================================
// Route-group classification
// =============================================================

#[test]
fn tab_paths_classify_as_protected() {
    assert_eq!(route_group("/"), RouteGroup::Protected);
    assert_eq!(route_group("/rides"), RouteGroup::Protected);
    assert_eq!(route_group("/communities"), RouteGroup::Protected);
    assert_eq!(route_group("/profile"), RouteGroup::Protected);
}

#[test]
fn kyc_paths_classify_as_kyc() {
    assert_eq!(route_group("/kyc"), RouteGroup::Kyc);
    assert_eq!(route_group("/kyc/verify"), RouteGroup::Kyc);
}

#[test]
fn ride_share_paths_classify_as_ride_share() {
    assert_eq!(route_group("/ride-share/r-42"), RouteGroup::RideShare);
}

#[test]
fn community_join_paths_classify_as_community_join() {
    assert_eq!(route_group("/community/join/ABC123"), RouteGroup::CommunityJoin);
}

#[test]
fn login_and_unknown_paths_classify_as_other() {
    assert_eq!(route_group("/login"), RouteGroup::Other);
    assert_eq!(route_group("/totally/unknown"), RouteGroup::Other);
}

#[test]
fn classification_ignores_trailing_segments_and_slashes() {
    assert_eq!(route_group("/rides/upcoming"), RouteGroup::Protected);
    assert_eq!(route_group("//login"), RouteGroup::Other);
}
