//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::state::store::SessionStore;

pub const LOGIN_ROUTE: &str = "/auth/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const PROFILE_ROUTE: &str = "/dashboard/profile";
pub const PROFILE_EDIT_ROUTE: &str = "/dashboard/profile/edit";

pub fn gig_route(gig_id: &str) -> String {
    format!("/dashboard/gigs/{gig_id}")
}

/// Public profile of another user.
pub fn profile_route(user_id: &str) -> String {
    format!("/dashboard/profiles/{user_id}")
}

/// Where an entry route should send the user.
pub fn landing_route(state: &SessionState) -> &'static str {
    if state.is_authenticated() { DASHBOARD_ROUTE } else { LOGIN_ROUTE }
}

/// Redirect to the login page whenever the session is not authenticated.
pub fn install_unauth_redirect<F>(session: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = session.state();
    Effect::new(move || {
        if !state.with(SessionState::is_authenticated) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
