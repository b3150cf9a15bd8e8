use futures::executor::block_on;

use super::*;
use crate::net::test_support::{TEST_BASE_URL, test_client};

const POSTING: &str = r#"{"id":"g1","venue_id":"v1","title":"Friday Jazz Night","genre":"jazz",
    "date_time":"2026-11-06T20:00:00","description":"Two sets","pay_range":"$300",
    "created_at":"2026-10-01T12:00:00"}"#;

const VENUE: &str = r#"{"id":"p1","user_id":"v1","venue_name":"The Basement","location_city":"Austin",
    "location_state":"TX","capacity":120,"typical_genres":["jazz"],"contact_method":"email",
    "contact_email":"book@basement.test","created_at":"2026-01-01T00:00:00Z"}"#;

#[test]
fn load_gig_detail_fetches_posting_then_venue() {
    let (api, _storage, transport) = test_client();
    transport.respond(200, POSTING);
    transport.respond(200, VENUE);

    let detail = block_on(load_gig_detail(&api, "g1")).unwrap();
    assert_eq!(detail.gig.title, "Friday Jazz Night");
    assert_eq!(detail.venue.as_ref().map(|v| v.venue_name.as_str()), Some("The Basement"));

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec![format!("{TEST_BASE_URL}/gigs/g1"), format!("{TEST_BASE_URL}/profiles/v1")]);
}

#[test]
fn load_gig_detail_survives_missing_venue_profile() {
    let (api, _storage, transport) = test_client();
    transport.respond(200, POSTING);
    transport.respond(404, r#"{"detail":"Profile not found"}"#);

    let detail = block_on(load_gig_detail(&api, "g1")).unwrap();
    assert_eq!(detail.gig.id, "g1");
    assert_eq!(detail.venue, None);
}

#[test]
fn load_gig_detail_unknown_gig_skips_venue_lookup() {
    let (api, _storage, transport) = test_client();
    transport.respond(404, r#"{"detail":"Gig not found"}"#);

    let err = block_on(load_gig_detail(&api, "nope")).unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn detail_error_message_distinguishes_missing_gigs() {
    let missing = ApiError::from_status(404, r#"{"detail":"Gig not found"}"#);
    assert_eq!(detail_error_message(&missing, TEST_BASE_URL), "Gig not found.");

    let offline = ApiError::Network("connection refused".into());
    assert!(detail_error_message(&offline, TEST_BASE_URL).starts_with("Network error: Cannot reach the server at"));
}
