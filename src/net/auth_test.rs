use std::sync::Arc;

use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::net::test_support::{sample_user, test_client, user_json};
use crate::net::transport::HttpMethod;
use crate::net::types::Role;
use crate::state::persist::ACCESS_TOKEN_KEY;
use crate::util::storage::{KeyValueStore, MemoryStorage};

const TOKENS: &str = r#"{"access_token":"tok123","refresh_token":"ref456","token_type":"bearer"}"#;

fn credentials() -> LoginRequest {
    LoginRequest { email: "a@b.com".into(), password: "secret".into() }
}

#[test]
fn sign_in_commits_session_after_user_loads() {
    let owner = Owner::new();
    owner.set();
    let (api, storage, transport) = test_client();
    let session = SessionStore::restore(Arc::new(storage.clone()));
    transport.respond(200, TOKENS);
    transport.respond(200, &user_json(&sample_user()));

    let user = block_on(sign_in(&api, &session, &credentials())).unwrap();
    assert_eq!(user, sample_user());
    assert!(session.is_authenticated());
    assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok123"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].header("Authorization"), None);
    assert_eq!(requests[1].method, HttpMethod::Get);
    assert_eq!(requests[1].header("Authorization"), Some("Bearer tok123"));
}

#[test]
fn sign_in_with_bad_credentials_changes_nothing() {
    let owner = Owner::new();
    owner.set();
    let (api, storage, transport) = test_client();
    let session = SessionStore::restore(Arc::new(storage.clone()));
    transport.respond(401, r#"{"detail":"Incorrect email or password"}"#);

    let err = block_on(sign_in(&api, &session, &credentials())).unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!session.is_authenticated());
    assert!(storage.is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn sign_in_failing_user_lookup_persists_no_tokens() {
    let owner = Owner::new();
    owner.set();
    let (api, storage, transport) = test_client();
    let session = SessionStore::restore(Arc::new(storage.clone()));
    transport.respond(200, TOKENS);
    transport.fail("connection reset");

    let err = block_on(sign_in(&api, &session, &credentials())).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert!(!session.is_authenticated());
    assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
}

#[test]
fn sign_up_registers_then_signs_in() {
    let owner = Owner::new();
    owner.set();
    let (api, _storage, transport) = test_client();
    let session = SessionStore::restore(Arc::new(MemoryStorage::new()));
    transport.respond(200, &user_json(&sample_user()));
    transport.respond(200, TOKENS);
    transport.respond(200, &user_json(&sample_user()));

    let registration = RegisterRequest { email: "a@b.com".into(), password: "secret".into(), role: Role::Band };
    block_on(sign_up(&api, &session, &registration)).unwrap();
    assert!(session.is_authenticated());

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert!(urls[0].ends_with("/auth/register"));
    assert!(urls[1].ends_with("/auth/login"));
    assert!(urls[2].ends_with("/users/me"));
}

#[test]
fn sign_up_with_taken_email_stops_before_login() {
    let owner = Owner::new();
    owner.set();
    let (api, _storage, transport) = test_client();
    let session = SessionStore::restore(Arc::new(MemoryStorage::new()));
    transport.respond(400, r#"{"detail":"A user with this email already exists."}"#);

    let registration = RegisterRequest { email: "a@b.com".into(), password: "secret".into(), role: Role::Venue };
    let err = block_on(sign_up(&api, &session, &registration)).unwrap_err();
    assert_eq!(err.user_message("x", "fallback"), "A user with this email already exists.");
    assert_eq!(transport.requests().len(), 1);
    assert!(!session.is_authenticated());
}

#[test]
fn sign_up_as_venue_starts_in_default_context() {
    let owner = Owner::new();
    owner.set();
    let (api, _storage, transport) = test_client();
    let session = SessionStore::restore(Arc::new(MemoryStorage::new()));
    let venue = User { role: Some(Role::Venue), ..sample_user() };
    transport.respond(200, &user_json(&venue));
    transport.respond(200, TOKENS);
    transport.respond(200, &user_json(&venue));

    let registration = RegisterRequest { email: "a@b.com".into(), password: "secret".into(), role: Role::Venue };
    block_on(sign_up(&api, &session, &registration)).unwrap();
    assert_eq!(session.current_context(), crate::state::session::UserContext::Finding);
}
