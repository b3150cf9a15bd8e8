//! Durable snapshots of the session.
//!
//! The access token is also read by the API gateway interceptor, so both
//! tokens live under dedicated keys next to the full JSON snapshot. On restore
//! the dedicated keys win over whatever the snapshot recorded.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use super::session::SessionState;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const SNAPSHOT_KEY: &str = "auth-storage";

/// Write the tokens and a snapshot of `state`. Unset tokens are removed.
pub fn save_snapshot(storage: &dyn KeyValueStore, state: &SessionState) {
    write_or_remove(storage, ACCESS_TOKEN_KEY, state.access_token.as_deref());
    write_or_remove(storage, REFRESH_TOKEN_KEY, state.refresh_token.as_deref());
    save_json(storage, SNAPSHOT_KEY, state);
}

/// Rebuild the session from storage; anything missing restores as empty.
pub fn restore_snapshot(storage: &dyn KeyValueStore) -> SessionState {
    let mut state: SessionState = load_json(storage, SNAPSHOT_KEY).unwrap_or_default();
    state.access_token = storage.get(ACCESS_TOKEN_KEY);
    state.refresh_token = storage.get(REFRESH_TOKEN_KEY);
    state
}

/// Remove every persisted credential and the snapshot.
pub fn clear_snapshot(storage: &dyn KeyValueStore) {
    storage.remove(ACCESS_TOKEN_KEY);
    storage.remove(REFRESH_TOKEN_KEY);
    storage.remove(SNAPSHOT_KEY);
}

fn write_or_remove(storage: &dyn KeyValueStore, key: &str, value: Option<&str>) {
    match value {
        Some(value) => storage.set(key, value),
        None => storage.remove(key),
    }
}
