use super::*;
use crate::net::test_support::sample_user;
use crate::net::types::{BandProfile, VenueProfile};

fn band_form() -> ProfileForm {
    ProfileForm {
        name: " The Hollows ".into(),
        genre: "indie".into(),
        location_city: "Denver".into(),
        location_state: "CO".into(),
        spotify: "hollows".into(),
        ..ProfileForm::default()
    }
}

fn venue_form() -> ProfileForm {
    ProfileForm {
        name: "The Basement".into(),
        location_city: "Austin".into(),
        location_state: "TX".into(),
        capacity: "120".into(),
        typical_genres: "jazz, blues,".into(),
        ..ProfileForm::default()
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn band_form_builds_band_update_without_blank_optionals() {
    let Ok(ProfileUpdate::Band(update)) = validate_profile_form(&band_form(), Role::Band) else {
        panic!("expected a band update");
    };
    assert_eq!(update.band_name, "The Hollows");
    assert_eq!(update.spotify.as_deref(), Some("hollows"));
    assert_eq!(update.contact_method.as_deref(), Some("email"));
    assert_eq!(update.bio, None);
    assert_eq!(update.youtube, None);
}

#[test]
fn venue_form_parses_capacity_and_genres() {
    let Ok(ProfileUpdate::Venue(update)) = validate_profile_form(&venue_form(), Role::Venue) else {
        panic!("expected a venue update");
    };
    assert_eq!(update.capacity, Some(120));
    assert_eq!(update.typical_genres, vec!["jazz".to_owned(), "blues".to_owned()]);
}

#[test]
fn missing_name_is_reported_per_role() {
    let blank = ProfileForm { name: "  ".into(), ..band_form() };
    assert_eq!(validate_profile_form(&blank, Role::Band), Err("Band name is required"));
    assert_eq!(validate_profile_form(&blank, Role::Venue), Err("Venue name is required"));
}

#[test]
fn band_requires_genre_but_venue_does_not() {
    let form = ProfileForm { genre: String::new(), ..band_form() };
    assert_eq!(validate_profile_form(&form, Role::Band), Err("Genre is required"));
    assert!(validate_profile_form(&form, Role::Venue).is_ok());
}

#[test]
fn location_is_required() {
    let form = ProfileForm { location_state: " ".into(), ..venue_form() };
    assert_eq!(validate_profile_form(&form, Role::Venue), Err("State is required"));
}

#[test]
fn capacity_must_be_a_whole_number() {
    let form = ProfileForm { capacity: "about 100".into(), ..venue_form() };
    assert_eq!(validate_profile_form(&form, Role::Venue), Err("Capacity must be a whole number"));
}

#[test]
fn contact_email_must_look_like_an_address() {
    let form = ProfileForm { contact_email: "bookings".into(), ..band_form() };
    assert_eq!(validate_profile_form(&form, Role::Band), Err("Enter a valid contact email"));
}

// =============================================================
// Prefill & role
// =============================================================

#[test]
fn from_profile_prefills_an_equivalent_venue_update() {
    let profile = Profile::Venue(VenueProfile {
        id: "p1".into(),
        user_id: "v1".into(),
        venue_name: "The Basement".into(),
        location_city: "Austin".into(),
        location_state: "TX".into(),
        capacity: Some(120),
        typical_genres: vec!["jazz".into(), "blues".into()],
        bio: Some("Downstairs room".into()),
        contact_method: Some("whatsapp".into()),
        contact_email: None,
        whatsapp_number: Some("+15550100".into()),
        instagram: None,
        photo_url: None,
    });
    let form = ProfileForm::from_profile(&profile);
    assert_eq!(form.capacity, "120");
    assert_eq!(form.typical_genres, "jazz, blues");

    let Ok(ProfileUpdate::Venue(update)) = validate_profile_form(&form, Role::Venue) else {
        panic!("expected a venue update");
    };
    assert_eq!(update.venue_name, "The Basement");
    assert_eq!(update.typical_genres, vec!["jazz".to_owned(), "blues".to_owned()]);
    assert_eq!(update.contact_method.as_deref(), Some("whatsapp"));
    assert_eq!(update.whatsapp_number.as_deref(), Some("+15550100"));
}

#[test]
fn from_profile_defaults_missing_contact_method() {
    let profile = Profile::Band(BandProfile {
        id: "p2".into(),
        user_id: "u2".into(),
        band_name: "The Hollows".into(),
        genre: "indie".into(),
        location_city: "Denver".into(),
        location_state: "CO".into(),
        bio: None,
        contact_method: None,
        contact_email: None,
        whatsapp_number: None,
        instagram: None,
        spotify: None,
        youtube: None,
        demo_url: None,
        photo_url: None,
    });
    assert_eq!(ProfileForm::from_profile(&profile).contact_method, "email");
}

#[test]
fn profile_role_prefers_account_role_over_context() {
    let venue = User { role: Some(Role::Venue), ..sample_user() };
    assert_eq!(profile_role(Some(&venue), UserContext::Finding), Role::Venue);
    assert_eq!(profile_role(Some(&sample_user()), UserContext::Hosting), Role::Venue);
    assert_eq!(profile_role(None, UserContext::Finding), Role::Band);
}
