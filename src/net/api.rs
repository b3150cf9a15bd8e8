//! The API gateway: one configured client for every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request passes through [`ApiClient::prepare`], whose interceptor
//! attaches `Authorization: Bearer <token>` whenever durable storage holds an
//! access token. There is no response interceptor; a 401 reaches the caller
//! as `ApiError::Status` and the view decides how to re-authenticate.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` outputs instead of panics so failures
//! degrade view behavior without crashing the app.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, HttpMethod, HttpTransport};
use super::types::{
    Application, ApplicationStatus, GigPost, GigPosting, LoginRequest, NewApplication, NewGigPost, Notification,
    Profile, ProfileUpdate, RegisterRequest, TokenPair, User,
};
use crate::config::ApiConfig;
use crate::state::persist::ACCESS_TOKEN_KEY;
use crate::util::storage::SharedStorage;

pub const DEFAULT_DISCOVERY_RADIUS_METERS: f64 = 10_000.0;
pub const DEFAULT_DISCOVERY_LIMIT: u32 = 20;

/// Shared HTTP client provided through context at the application root.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    storage: SharedStorage,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, storage: SharedStorage, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, storage, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build a request for `path` and run it through the auth interceptor.
    pub fn prepare(&self, method: HttpMethod, path: &str, body: Option<String>) -> ApiRequest {
        let request = ApiRequest {
            method,
            url: self.config.url(path),
            query: Vec::new(),
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body,
        };
        self.intercept(request)
    }

    fn intercept(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(token) = self.storage.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty()) {
            request.set_header("Authorization", bearer(&token));
        }
        request
    }

    /// Send a prepared request and decode a JSON success body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when no response arrived, `ApiError::Status`
    /// for non-2xx responses, and `ApiError::Decode` for malformed bodies.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.prepare(HttpMethod::Get, path, None)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`]; also `ApiError::Encode` if `body` fails to serialize.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.execute(self.prepare(HttpMethod::Post, path, Some(encode(body)?))).await
    }

    // =============================================================
    // Auth
    // =============================================================

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 401 means bad credentials.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<TokenPair, ApiError> {
        self.post("/auth/login", credentials).await
    }

    /// `POST /auth/register`. Returns the created user, who still has to log in.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 400 when the email is taken.
    pub async fn register(&self, registration: &RegisterRequest) -> Result<User, ApiError> {
        self.post("/auth/register", registration).await
    }

    /// `GET /users/me` with whatever token the interceptor finds.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get(CURRENT_USER_PATH).await
    }

    /// `GET /users/me` authorized by `access_token` instead of stored credentials.
    ///
    /// Used right after login, before the new tokens are committed to the session.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn current_user_with_token(&self, access_token: &str) -> Result<User, ApiError> {
        let mut request = self.prepare(HttpMethod::Get, CURRENT_USER_PATH, None);
        request.set_header("Authorization", bearer(access_token));
        self.execute(request).await
    }

    // =============================================================
    // Gigs & discovery
    // =============================================================

    /// `GET /discovery/gigs` with only the filters that are set.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn discover_gigs(&self, query: &DiscoveryQuery) -> Result<Vec<GigPost>, ApiError> {
        let mut request = self.prepare(HttpMethod::Get, "/discovery/gigs", None);
        request.query = query.to_params();
        self.execute(request).await
    }

    /// `GET /gigs/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 404 for unknown gigs.
    pub async fn gig(&self, gig_id: &str) -> Result<GigPosting, ApiError> {
        self.get(&gig_endpoint(gig_id)).await
    }

    /// `POST /gigs/`. The server answers with the stored posting.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 403 unless the account is a venue.
    pub async fn post_gig(&self, gig: &NewGigPost) -> Result<GigPosting, ApiError> {
        self.post("/gigs/", gig).await
    }

    /// `GET /gigs/me/managed`: postings owned by the current venue, newest first.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 403 unless the account is a venue.
    pub async fn managed_gigs(&self) -> Result<Vec<GigPosting>, ApiError> {
        self.get("/gigs/me/managed").await
    }

    // =============================================================
    // Applications
    // =============================================================

    /// `POST /applications/`.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn apply_to_gig(&self, application: &NewApplication) -> Result<Application, ApiError> {
        self.post("/applications/", application).await
    }

    /// `GET /applications/my-applications`: applications the user has sent.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn my_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get("/applications/my-applications").await
    }

    /// `GET /applications/venue`: applications to gigs the user posted.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn venue_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get("/applications/venue").await
    }

    /// `PATCH /applications/{id}/status?status_update=<status>`.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 403 unless the user authored the gig.
    pub async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<Application, ApiError> {
        let mut request = self.prepare(HttpMethod::Patch, &application_status_endpoint(application_id), None);
        request.query = vec![("status_update".to_owned(), status.as_str().to_owned())];
        self.execute(request).await
    }

    // =============================================================
    // Notifications & profiles
    // =============================================================

    /// `GET /notifications`, newest first.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("/notifications").await
    }

    /// `POST /notifications/{id}/read`.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 404 for unknown notifications.
    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<(), ApiError> {
        let request = self.prepare(HttpMethod::Post, &notification_read_endpoint(notification_id), None);
        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    /// `GET /profiles/me`.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 404 before onboarding is complete.
    pub async fn my_profile(&self) -> Result<Profile, ApiError> {
        self.get(MY_PROFILE_PATH).await
    }

    /// `PUT /profiles/me`: creates the profile on first save, then updates it.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 422 when the body does not match the
    /// account role.
    pub async fn save_my_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        let request = self.prepare(HttpMethod::Put, MY_PROFILE_PATH, Some(encode(update)?));
        self.execute(request).await
    }

    /// `GET /profiles/{user_id}`: another user's public profile.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures; 404 for unknown users or missing profiles.
    pub async fn profile_of(&self, user_id: &str) -> Result<Profile, ApiError> {
        self.get(&profile_endpoint(user_id)).await
    }
}

const CURRENT_USER_PATH: &str = "/users/me";
const MY_PROFILE_PATH: &str = "/profiles/me";

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn gig_endpoint(gig_id: &str) -> String {
    format!("/gigs/{gig_id}")
}

fn application_status_endpoint(application_id: &str) -> String {
    format!("/applications/{application_id}/status")
}

fn profile_endpoint(user_id: &str) -> String {
    format!("/profiles/{user_id}")
}

fn notification_read_endpoint(notification_id: &str) -> String {
    format!("/notifications/{notification_id}/read")
}

/// Filters for the discovery feed.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscoveryQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    /// `(lat, lng)` center for a radius search.
    pub near: Option<(f64, f64)>,
    pub radius_meters: f64,
    pub limit: u32,
    pub offset: u32,
}

impl Default for DiscoveryQuery {
    fn default() -> Self {
        Self {
            search: None,
            genre: None,
            near: None,
            radius_meters: DEFAULT_DISCOVERY_RADIUS_METERS,
            limit: DEFAULT_DISCOVERY_LIMIT,
            offset: 0,
        }
    }
}

impl DiscoveryQuery {
    /// Query parameters in a stable order. Blank text filters are omitted and
    /// the radius is only sent alongside a center point.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(search) = non_blank(self.search.as_deref()) {
            params.push(("search".to_owned(), search.to_owned()));
        }
        if let Some(genre) = non_blank(self.genre.as_deref()) {
            params.push(("genre".to_owned(), genre.to_owned()));
        }
        if let Some((lat, lng)) = self.near {
            params.push(("lat".to_owned(), lat.to_string()));
            params.push(("lng".to_owned(), lng.to_string()));
            params.push(("radius_meters".to_owned(), self.radius_meters.to_string()));
        }
        params.push(("limit".to_owned(), self.limit.to_string()));
        params.push(("offset".to_owned(), self.offset.to_string()));
        params
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
