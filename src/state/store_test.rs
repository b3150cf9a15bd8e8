use std::sync::Arc;

use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::net::test_support::{sample_user, test_client, user_json};
use crate::state::persist::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SNAPSHOT_KEY};
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn store_with(storage: &MemoryStorage) -> SessionStore {
    SessionStore::restore(Arc::new(storage.clone()))
}

fn with_owner(test: impl FnOnce()) {
    let owner = Owner::new();
    owner.set();
    test();
}

#[test]
fn set_auth_authenticates_and_persists_tokens() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.set_auth(sample_user(), "tok123".into(), "ref456".into());

        assert!(store.is_authenticated());
        assert_eq!(store.current_context(), UserContext::Finding);
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok123"));
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("ref456"));
    });
}

#[test]
fn reload_restores_user_and_token() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        store_with(&storage).set_auth(sample_user(), "tok123".into(), "ref456".into());

        let reloaded = store_with(&storage);
        let state = reloaded.snapshot();
        assert!(state.is_authenticated());
        assert_eq!(state.user, Some(sample_user()));
        assert_eq!(state.access_token.as_deref(), Some("tok123"));
    });
}

#[test]
fn switch_context_survives_reload() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.set_auth(sample_user(), "tok123".into(), "ref456".into());
        store.switch_context(UserContext::Hosting);

        assert_eq!(store_with(&storage).current_context(), UserContext::Hosting);
    });
}

#[test]
fn logout_clears_state_and_credentials() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.set_auth(sample_user(), "tok123".into(), "ref456".into());
        store.switch_context(UserContext::Hosting);

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert_eq!(store.current_context(), UserContext::Finding);
        assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(storage.get(REFRESH_TOKEN_KEY), None);
        assert_eq!(storage.get(SNAPSHOT_KEY), None);
    });
}

#[test]
fn logout_when_already_logged_out_is_harmless() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.logout();
        assert_eq!(store.snapshot(), SessionState::default());
        assert!(storage.is_empty());
    });
}

#[test]
fn fetch_user_replaces_only_user() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.set_auth(sample_user(), "tok123".into(), "ref456".into());
        store.switch_context(UserContext::Hosting);

        let (api, api_storage, transport) = test_client();
        api_storage.set(ACCESS_TOKEN_KEY, "tok123");
        let refreshed = User { has_venue_profile: true, ..sample_user() };
        transport.respond(200, &user_json(&refreshed));

        let fetched = block_on(store.fetch_user(&api)).unwrap();
        assert_eq!(fetched, refreshed);

        let state = store.snapshot();
        assert_eq!(state.user, Some(refreshed));
        assert_eq!(state.access_token.as_deref(), Some("tok123"));
        assert_eq!(state.refresh_token.as_deref(), Some("ref456"));
        assert_eq!(state.current_context, UserContext::Hosting);
        assert_eq!(transport.last_request().header("Authorization"), Some("Bearer tok123"));
    });
}

#[test]
fn fetch_user_network_failure_leaves_state_unchanged() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.set_auth(sample_user(), "tok123".into(), "ref456".into());
        store.switch_context(UserContext::Hosting);
        let before = store.snapshot();
        let persisted_before = storage.get(SNAPSHOT_KEY);

        let (api, _api_storage, transport) = test_client();
        transport.fail("connection refused");

        let err = block_on(store.fetch_user(&api)).unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".into()));
        assert_eq!(store.snapshot(), before);
        assert_eq!(storage.get(SNAPSHOT_KEY), persisted_before);
    });
}

#[test]
fn fetch_user_unauthorized_is_returned_to_caller() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        let (api, _api_storage, transport) = test_client();
        transport.respond(401, r#"{"detail":"Not authenticated"}"#);

        let err = block_on(store.fetch_user(&api)).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(store.snapshot(), SessionState::default());
    });
}

#[test]
fn fetch_user_resolving_after_logout_does_not_revive_session() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.set_auth(sample_user(), "tok123".into(), "ref456".into());

        let (api, api_storage, transport) = test_client();
        api_storage.set(ACCESS_TOKEN_KEY, "tok123");
        transport.respond(200, &user_json(&sample_user()));

        // Logout lands while the refresh is still pending.
        let pending = store.fetch_user(&api);
        store.logout();
        let fetched = block_on(pending).unwrap();

        assert_eq!(fetched, sample_user());
        assert_eq!(store.snapshot(), SessionState::default());
        assert!(storage.is_empty());
    });
}
