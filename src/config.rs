//! API gateway configuration.
//!
//! The base address is baked in at compile time because the bundle runs in a
//! browser with no process environment. `BOOKLYN_API_URL` overrides the local
//! development default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Compile-time override for the API base address.
const API_URL_ENV: Option<&str> = option_env!("BOOKLYN_API_URL");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base address every request path is appended to, without a trailing `/`.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: normalize_base_url(&base_url.into()) }
    }

    /// Build the config from `BOOKLYN_API_URL`, falling back to
    /// [`DEFAULT_API_URL`] when unset or blank.
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(API_URL_ENV))
    }

    /// Join a request path onto the base address.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn resolve_base_url(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_URL,
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
