//! Error taxonomy for API gateway calls.
//!
//! ERROR HANDLING
//! ==============
//! Two failure classes reach the user: the server was unreachable (no
//! response at all) or it answered with an error payload. Views render both
//! through [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error from a raw error body, keeping a string `detail`
    /// field when the server supplied one.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, detail: extract_detail(body) }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for an error banner.
    ///
    /// `fallback` is shown when the server gave no usable `detail`.
    pub fn user_message(&self, base_url: &str, fallback: &str) -> String {
        match self {
            Self::Network(_) => {
                format!("Network error: Cannot reach the server at {base_url}. Please check your connection.")
            }
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Status { detail: None, .. } | Self::Decode(_) | Self::Encode(_) => fallback.to_owned(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}
