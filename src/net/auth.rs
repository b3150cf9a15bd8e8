//! Sign-in and sign-up flows composed from gateway calls.
//!
//! The session is only written once every step has succeeded, so a failure at
//! any point leaves no half-authenticated state behind.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::types::{LoginRequest, RegisterRequest, User};
use crate::state::store::SessionStore;

/// Log in, load the user with the fresh token, then commit the session.
///
/// # Errors
///
/// Returns the first failing gateway call; the session is not modified.
pub async fn sign_in(api: &ApiClient, session: &SessionStore, credentials: &LoginRequest) -> Result<User, ApiError> {
    let tokens = api.login(credentials).await?;
    let user = api.current_user_with_token(&tokens.access_token).await?;
    session.set_auth(user.clone(), tokens.access_token, tokens.refresh_token);
    log::info!("signed in as {}", user.email);
    Ok(user)
}

/// Register a new account and sign straight in with the same credentials.
///
/// # Errors
///
/// Returns the first failing gateway call; the session is not modified.
pub async fn sign_up(
    api: &ApiClient,
    session: &SessionStore,
    registration: &RegisterRequest,
) -> Result<User, ApiError> {
    api.register(registration).await?;
    sign_in(api, session, &registration.credentials()).await
}
