//! Small display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::ApplicationStatus;

/// Human label for an application status.
pub fn status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "Pending",
        ApplicationStatus::Accepted => "Accepted",
        ApplicationStatus::Declined => "Declined",
    }
}

/// BEM modifier class for status badges.
pub fn status_class(status: ApplicationStatus) -> String {
    format!("status-badge status-badge--{}", status.as_str())
}

/// Date part of an ISO 8601 timestamp; other input is returned unchanged.
pub fn short_date(timestamp: &str) -> &str {
    match timestamp.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => timestamp,
    }
}

/// `HH:MM` from an ISO 8601 timestamp, or `None` when there is no time part.
pub fn short_time(timestamp: &str) -> Option<&str> {
    let (_, time) = timestamp.split_once('T')?;
    time.get(..5).filter(|t| t.as_bytes().get(2) == Some(&b':'))
}

/// Split a comma-separated tag input into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
