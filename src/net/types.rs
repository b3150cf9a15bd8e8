//! Wire DTOs for the REST API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the API's JSON payloads. Identifiers and timestamps stay
//! as strings because the client only displays and echoes them back.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Account role chosen at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Band,
    Venue,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Band => "band",
            Self::Venue => "venue",
        }
    }
}

/// The authenticated user as returned by `/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: String,
    /// Role recorded server-side. Unknown or missing roles decode as `None`.
    #[serde(default, deserialize_with = "deserialize_lenient_role")]
    pub role: Option<Role>,
    #[serde(default)]
    pub has_band_profile: bool,
    #[serde(default)]
    pub has_venue_profile: bool,
}

fn deserialize_lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("band") => Some(Role::Band),
        Some("venue") => Some(Role::Venue),
        _ => None,
    })
}

/// Credentials issued by `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }
}

/// A gig post from the discovery feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GigPost {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub date: String,
    pub time: String,
    pub pay: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub photo_url: Option<String>,
    pub author_id: String,
    pub author_name: String,
    /// Single-letter avatar fallback for the author.
    pub avatar_char: String,
    pub created_at: String,
}

/// Payload for posting a new gig.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGigPost {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub date: String,
    pub time: String,
    pub pay: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// A venue's gig posting as returned by `/gigs/`.
///
/// This is the venue-side record, distinct from the discovery feed's
/// [`GigPost`]. `date_time` is an ISO-8601 timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GigPosting {
    pub id: String,
    pub venue_id: String,
    pub title: String,
    pub genre: String,
    pub date_time: String,
    pub description: Option<String>,
    pub pay_range: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub created_at: String,
}

/// Lifecycle of a band's application to a gig.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Declined,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub gig_id: String,
    pub applicant_id: String,
    pub venue_id: String,
    pub applicant_name: String,
    pub applicant_avatar: Option<String>,
    pub message: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: String,
    pub gig_title: Option<String>,
    pub gig_date: Option<String>,
    pub venue_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub gig_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Server-defined category (e.g. `"application"`).
    #[serde(rename = "type")]
    pub kind: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandProfile {
    pub id: String,
    pub user_id: String,
    pub band_name: String,
    pub genre: String,
    pub location_city: String,
    pub location_state: String,
    pub bio: Option<String>,
    pub contact_method: Option<String>,
    pub contact_email: Option<String>,
    pub whatsapp_number: Option<String>,
    pub instagram: Option<String>,
    pub spotify: Option<String>,
    pub youtube: Option<String>,
    pub demo_url: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueProfile {
    pub id: String,
    pub user_id: String,
    pub venue_name: String,
    pub location_city: String,
    pub location_state: String,
    pub capacity: Option<u32>,
    #[serde(default)]
    pub typical_genres: Vec<String>,
    pub bio: Option<String>,
    pub contact_method: Option<String>,
    pub contact_email: Option<String>,
    pub whatsapp_number: Option<String>,
    pub instagram: Option<String>,
    pub photo_url: Option<String>,
}

/// `/profiles/me` returns whichever profile the user has.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Profile {
    Band(BandProfile),
    Venue(VenueProfile),
}

impl Profile {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Band(band) => &band.band_name,
            Self::Venue(venue) => &venue.venue_name,
        }
    }

    pub fn location(&self) -> String {
        let (city, state) = match self {
            Self::Band(band) => (&band.location_city, &band.location_state),
            Self::Venue(venue) => (&venue.location_city, &venue.location_state),
        };
        format!("{city}, {state}")
    }
}

impl VenueProfile {
    /// The handle for the venue's preferred contact method, falling back to
    /// the contact email.
    pub fn contact(&self) -> Option<(&'static str, &str)> {
        let by_method = match self.contact_method.as_deref() {
            Some("whatsapp") => self.whatsapp_number.as_deref().map(|v| ("WhatsApp", v)),
            Some("instagram") => self.instagram.as_deref().map(|v| ("Instagram", v)),
            _ => None,
        };
        by_method
            .or_else(|| self.contact_email.as_deref().map(|v| ("Email", v)))
            .filter(|(_, v)| !v.trim().is_empty())
    }
}

/// Body of `PUT /profiles/me` for a band. Unset optionals are omitted so the
/// server leaves them alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BandProfileUpdate {
    pub band_name: String,
    pub genre: String,
    pub location_city: String,
    pub location_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// Body of `PUT /profiles/me` for a venue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VenueProfileUpdate {
    pub venue_name: String,
    pub location_city: String,
    pub location_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    pub typical_genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// The server picks band or venue from the account role; the body just has
/// to match it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProfileUpdate {
    Band(BandProfileUpdate),
    Venue(VenueProfileUpdate),
}

impl ProfileUpdate {
    pub fn role(&self) -> Role {
        match self {
            Self::Band(_) => Role::Band,
            Self::Venue(_) => Role::Venue,
        }
    }
}
