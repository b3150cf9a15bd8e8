//! Discovery feed state: filter inputs and the latest results.

#[cfg(test)]
#[path = "discovery_test.rs"]
mod discovery_test;

use crate::net::api::DiscoveryQuery;
use crate::net::types::GigPost;

#[derive(Clone, Debug, Default)]
pub struct DiscoveryState {
    pub search: String,
    pub genre: String,
    pub gigs: Vec<GigPost>,
    pub loading: bool,
    pub error: Option<String>,
    /// Gig IDs the user applied to during this visit.
    pub applied: Vec<String>,
}

impl DiscoveryState {
    /// Translate the filter inputs into an API query.
    pub fn query(&self) -> DiscoveryQuery {
        DiscoveryQuery {
            search: optional_text(&self.search),
            genre: optional_text(&self.genre),
            ..DiscoveryQuery::default()
        }
    }

    pub fn has_applied(&self, gig_id: &str) -> bool {
        self.applied.iter().any(|id| id == gig_id)
    }

    pub fn record_application(&mut self, gig_id: &str) {
        if !self.has_applied(gig_id) {
            self.applied.push(gig_id.to_owned());
        }
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
