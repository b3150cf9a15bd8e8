use super::*;
use crate::net::test_support::sample_user;
use crate::state::session::SessionAction;

#[test]
fn landing_route_sends_anonymous_users_to_login() {
    assert_eq!(landing_route(&SessionState::default()), LOGIN_ROUTE);
}

#[test]
fn landing_route_sends_authenticated_users_to_dashboard() {
    let mut state = SessionState::default();
    state.apply(SessionAction::SetAuth {
        user: sample_user(),
        access_token: "tok123".into(),
        refresh_token: "ref456".into(),
    });
    assert_eq!(landing_route(&state), DASHBOARD_ROUTE);
}

#[test]
fn landing_route_requires_token_not_just_user() {
    let state = SessionState { user: Some(sample_user()), ..SessionState::default() };
    assert_eq!(landing_route(&state), LOGIN_ROUTE);
}

#[test]
fn detail_routes_embed_ids() {
    assert_eq!(gig_route("g1"), "/dashboard/gigs/g1");
    assert_eq!(profile_route("u9"), "/dashboard/profiles/u9");
}
