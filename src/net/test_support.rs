//! Recording transport and fixtures for gateway tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use super::types::User;
use crate::config::ApiConfig;
use crate::util::storage::MemoryStorage;

pub const TEST_BASE_URL: &str = "http://api.test/v1";

/// Replays queued outcomes in order and records every request it sees.
/// Once the queue is drained every call fails as unreachable.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    outcomes: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl RecordingTransport {
    pub fn respond(&self, status: u16, body: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn fail(&self, message: &str) {
        self.outcomes.lock().unwrap().push_back(Err(ApiError::Network(message.to_owned())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

#[async_trait(?Send)]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("connection refused".to_owned())))
    }
}

/// A gateway wired to in-memory storage and a recording transport.
pub fn test_client() -> (ApiClient, MemoryStorage, Arc<RecordingTransport>) {
    let storage = MemoryStorage::new();
    let transport = Arc::new(RecordingTransport::default());
    let client = ApiClient::new(ApiConfig::new(TEST_BASE_URL), Arc::new(storage.clone()), transport.clone());
    (client, storage, transport)
}

pub fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        role: None,
        has_band_profile: false,
        has_venue_profile: false,
    }
}

pub fn user_json(user: &User) -> String {
    serde_json::to_string(user).unwrap()
}
