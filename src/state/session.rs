//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects, role-context switching, and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! Every mutation goes through [`SessionState::apply`] so the set of legal
//! transitions is a closed enum. Persistence lives in `persist` and is invoked
//! explicitly by the store after each transition.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Which side of the marketplace the user is currently acting on.
///
/// A client-only view mode; the server never validates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserContext {
    /// Browsing gigs as a band.
    #[default]
    Finding,
    /// Posting gigs and reviewing applications as a venue.
    Hosting,
}

impl UserContext {
    pub fn toggled(self) -> Self {
        match self {
            Self::Finding => Self::Hosting,
            Self::Hosting => Self::Finding,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Finding => "Artist",
            Self::Hosting => "Venue Manager",
        }
    }
}

/// Who is logged in, with what credentials, in which context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub current_context: UserContext,
}

/// Closed set of session transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    SetAuth { user: User, access_token: String, refresh_token: String },
    SwitchContext(UserContext),
    Logout,
    /// A fresh `/users/me` result; tokens and context are untouched.
    /// Ignored once the session has no access token.
    UserLoaded(User),
}

impl SessionState {
    /// True iff both a user and an access token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::SetAuth { user, access_token, refresh_token } => {
                self.user = Some(user);
                self.access_token = Some(access_token);
                self.refresh_token = Some(refresh_token);
            }
            SessionAction::SwitchContext(context) => self.current_context = context,
            SessionAction::Logout => *self = Self::default(),
            SessionAction::UserLoaded(user) => {
                if self.access_token.is_some() {
                    self.user = Some(user);
                }
            }
        }
    }

    /// Whether the active context still needs its profile set up.
    pub fn needs_onboarding(&self) -> bool {
        let Some(user) = self.user.as_ref() else {
            return false;
        };
        match self.current_context {
            UserContext::Finding => !user.has_band_profile,
            UserContext::Hosting => !user.has_venue_profile,
        }
    }
}
