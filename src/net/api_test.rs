use super::*;

#[test]
fn shared_ride_endpoint_formats_expected_path() {
    assert_eq!(shared_ride_endpoint("r-42"), "/api/rides/shared/r-42");
}

#[test]
fn request_code_failed_message_formats_status() {
    assert_eq!(request_code_failed_message(429), "code request failed: 429");
}

#[test]
fn verify_code_failed_message_formats_status() {
    assert_eq!(verify_code_failed_message(401), "code verification failed: 401");
}

#[test]
fn accept_invite_failed_message_formats_status() {
    assert_eq!(accept_invite_failed_message(410), "invite acceptance failed: 410");
}

#[test]
fn stubbed_probe_resolves_to_no_user() {
    #[cfg(not(feature = "hydrate"))]
    {
        let user = futures::executor::block_on(fetch_current_user());
        assert!(user.is_none());
    }
}
