//! Reactive session store provided through context at the application root.
//!
//! Each operation applies one [`SessionAction`] to the signal and then calls
//! the explicit persistence boundary, so the in-memory state and durable
//! storage never disagree after a transition completes.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use super::persist::{clear_snapshot, restore_snapshot, save_snapshot};
use super::session::{SessionAction, SessionState, UserContext};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::util::storage::SharedStorage;

#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    storage: SharedStorage,
}

impl SessionStore {
    /// Create the store, restoring the last persisted session.
    pub fn restore(storage: SharedStorage) -> Self {
        let state = RwSignal::new(restore_snapshot(storage.as_ref()));
        Self { state, storage }
    }

    /// Read-only handle for reactive views.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn current_context(&self) -> UserContext {
        self.state.with(|s| s.current_context)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Record a completed authentication exchange. No network side effect.
    pub fn set_auth(&self, user: User, access_token: String, refresh_token: String) {
        self.dispatch(SessionAction::SetAuth { user, access_token, refresh_token });
    }

    /// Change the role context. Profile completeness is the caller's concern.
    pub fn switch_context(&self, context: UserContext) {
        self.dispatch(SessionAction::SwitchContext(context));
    }

    /// Forget the session locally. Server-side revocation is not attempted.
    pub fn logout(&self) {
        self.state.update(|s| s.apply(SessionAction::Logout));
        clear_snapshot(self.storage.as_ref());
        log::info!("session cleared");
    }

    /// Refresh `user` from `/users/me`.
    ///
    /// Only `user` changes, and only after the response resolves. Concurrent
    /// calls are last-write-wins. A response that lands after `logout` is
    /// returned but not stored.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure unchanged; the session is left untouched.
    pub async fn fetch_user(&self, api: &ApiClient) -> Result<User, ApiError> {
        match api.current_user().await {
            Ok(user) => {
                if self.state.with_untracked(|s| s.access_token.is_none()) {
                    log::debug!("dropping /users/me result that arrived after logout");
                    return Ok(user);
                }
                self.dispatch(SessionAction::UserLoaded(user.clone()));
                Ok(user)
            }
            Err(e) => {
                log::warn!("failed to refresh current user: {e}");
                Err(e)
            }
        }
    }

    fn dispatch(&self, action: SessionAction) {
        self.state.update(|s| s.apply(action));
        self.state.with_untracked(|s| save_snapshot(self.storage.as_ref(), s));
    }
}
