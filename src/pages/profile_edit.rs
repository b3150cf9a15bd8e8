//! Create or edit the current user's band or venue profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PUT /profiles/me` creates the profile on the first save. After a save the
//! session user is refreshed so the `has_*_profile` flags, and with them the
//! onboarding prompt, catch up.

#[cfg(test)]
#[path = "profile_edit_test.rs"]
mod profile_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{BandProfileUpdate, Profile, ProfileUpdate, Role, User, VenueProfileUpdate};
use crate::state::session::UserContext;
use crate::state::store::SessionStore;
use crate::util::auth::{PROFILE_ROUTE, install_unauth_redirect};
use crate::util::format::parse_tags;

const SAVE_FAILED: &str = "Could not save your profile. Please try again.";
const LOAD_FAILED: &str = "Could not load your profile.";
const DEFAULT_CONTACT_METHOD: &str = "email";
const CONTACT_METHODS: [(&str, &str); 3] = [("email", "Email"), ("whatsapp", "WhatsApp"), ("instagram", "Instagram")];

/// Raw form input shared by both profile kinds. `name` is the band or venue
/// name; fields that do not apply to the role are ignored on save.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ProfileForm {
    name: String,
    genre: String,
    location_city: String,
    location_state: String,
    capacity: String,
    typical_genres: String,
    bio: String,
    contact_method: String,
    contact_email: String,
    whatsapp_number: String,
    instagram: String,
    spotify: String,
    youtube: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            genre: String::new(),
            location_city: String::new(),
            location_state: String::new(),
            capacity: String::new(),
            typical_genres: String::new(),
            bio: String::new(),
            contact_method: DEFAULT_CONTACT_METHOD.to_owned(),
            contact_email: String::new(),
            whatsapp_number: String::new(),
            instagram: String::new(),
            spotify: String::new(),
            youtube: String::new(),
        }
    }
}

impl ProfileForm {
    fn from_profile(profile: &Profile) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let method = |value: &Option<String>| value.clone().unwrap_or_else(|| DEFAULT_CONTACT_METHOD.to_owned());
        match profile {
            Profile::Band(band) => Self {
                name: band.band_name.clone(),
                genre: band.genre.clone(),
                location_city: band.location_city.clone(),
                location_state: band.location_state.clone(),
                bio: text(&band.bio),
                contact_method: method(&band.contact_method),
                contact_email: text(&band.contact_email),
                whatsapp_number: text(&band.whatsapp_number),
                instagram: text(&band.instagram),
                spotify: text(&band.spotify),
                youtube: text(&band.youtube),
                ..Self::default()
            },
            Profile::Venue(venue) => Self {
                name: venue.venue_name.clone(),
                location_city: venue.location_city.clone(),
                location_state: venue.location_state.clone(),
                capacity: venue.capacity.map(|c| c.to_string()).unwrap_or_default(),
                typical_genres: venue.typical_genres.join(", "),
                bio: text(&venue.bio),
                contact_method: method(&venue.contact_method),
                contact_email: text(&venue.contact_email),
                whatsapp_number: text(&venue.whatsapp_number),
                instagram: text(&venue.instagram),
                ..Self::default()
            },
        }
    }
}

/// Which profile kind to edit. The account role decides; accounts without a
/// recognised role fall back to the active context.
fn profile_role(user: Option<&User>, context: UserContext) -> Role {
    user.and_then(|u| u.role).unwrap_or(match context {
        UserContext::Finding => Role::Band,
        UserContext::Hosting => Role::Venue,
    })
}

fn validate_profile_form(form: &ProfileForm, role: Role) -> Result<ProfileUpdate, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(match role {
            Role::Band => "Band name is required",
            Role::Venue => "Venue name is required",
        });
    }
    if role == Role::Band && form.genre.trim().is_empty() {
        return Err("Genre is required");
    }
    if form.location_city.trim().is_empty() {
        return Err("City is required");
    }
    if form.location_state.trim().is_empty() {
        return Err("State is required");
    }
    let contact_email = optional(&form.contact_email);
    if contact_email.as_deref().is_some_and(|email| !email.contains('@')) {
        return Err("Enter a valid contact email");
    }

    Ok(match role {
        Role::Band => ProfileUpdate::Band(BandProfileUpdate {
            band_name: name.to_owned(),
            genre: form.genre.trim().to_owned(),
            location_city: form.location_city.trim().to_owned(),
            location_state: form.location_state.trim().to_owned(),
            bio: optional(&form.bio),
            contact_method: optional(&form.contact_method),
            contact_email,
            whatsapp_number: optional(&form.whatsapp_number),
            instagram: optional(&form.instagram),
            spotify: optional(&form.spotify),
            youtube: optional(&form.youtube),
        }),
        Role::Venue => {
            let capacity = match optional(&form.capacity) {
                Some(raw) => Some(raw.parse::<u32>().map_err(|_| "Capacity must be a whole number")?),
                None => None,
            };
            ProfileUpdate::Venue(VenueProfileUpdate {
                venue_name: name.to_owned(),
                location_city: form.location_city.trim().to_owned(),
                location_state: form.location_state.trim().to_owned(),
                capacity,
                typical_genres: parse_tags(&form.typical_genres),
                bio: optional(&form.bio),
                contact_method: optional(&form.contact_method),
                contact_email,
                whatsapp_number: optional(&form.whatsapp_number),
                instagram: optional(&form.instagram),
            })
        }
    })
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    install_unauth_redirect(session.clone(), navigate.clone());

    let state = session.state();
    let role = Memo::new(move |_| state.with(|s| profile_role(s.user.as_ref(), s.current_context)));
    let form = RwSignal::new(ProfileForm::default());
    let existing = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.my_profile().await {
                Ok(profile) => {
                    form.set(ProfileForm::from_profile(&profile));
                    existing.set(true);
                }
                Err(ApiError::Status { status: 404, .. }) => {}
                Err(e) => error.set(e.user_message(api.base_url(), LOAD_FAILED)),
            }
            loading.set(false);
        });
    }

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = match validate_profile_form(&form.get(), role.get()) {
            Ok(update) => update,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.save_my_profile(&update).await {
                Ok(saved) => {
                    log::info!("saved {} profile {}", update.role().as_str(), saved.display_name());
                    // Failures are logged by the store; the flags catch up on the next refresh.
                    let _ = session.fetch_user(&api).await;
                    navigate(PROFILE_ROUTE, NavigateOptions::default());
                }
                Err(e) => error.set(e.user_message(api.base_url(), SAVE_FAILED)),
            }
            busy.set(false);
        });
    });

    let field = move |label: &'static str, get: fn(&ProfileForm) -> String, set: fn(&mut ProfileForm, String)| {
        view! {
            <label class="form__field">
                <span>{label}</span>
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    let title = move || match (existing.get(), role.get()) {
        (true, _) => "Edit Profile",
        (false, Role::Band) => "Set Up Your Band",
        (false, Role::Venue) => "Set Up Your Venue",
    };

    view! {
        <div class="dashboard">
            <Navbar/>
            <main class="dashboard__main">
                <h1 class="page-title">{title}</h1>
                <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading profile..."</p> }>
                    <form class="form" on:submit=move |ev| on_submit.run(ev)>
                        {move || match role.get() {
                            Role::Band => view! {
                                {field("Band name", |f| f.name.clone(), |f, v| f.name = v)}
                                {field("Genre", |f| f.genre.clone(), |f, v| f.genre = v)}
                            }
                            .into_any(),
                            Role::Venue => view! {
                                {field("Venue name", |f| f.name.clone(), |f, v| f.name = v)}
                                {field("Capacity", |f| f.capacity.clone(), |f, v| f.capacity = v)}
                                {field("Typical genres (comma separated)", |f| f.typical_genres.clone(), |f, v| f.typical_genres = v)}
                            }
                            .into_any(),
                        }}
                        {field("City", |f| f.location_city.clone(), |f, v| f.location_city = v)}
                        {field("State", |f| f.location_state.clone(), |f, v| f.location_state = v)}
                        <label class="form__field">
                            <span>"Bio"</span>
                            <textarea
                                class="form__input form__input--area"
                                prop:value=move || form.with(|f| f.bio.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.bio = value);
                                }
                            ></textarea>
                        </label>
                        <label class="form__field">
                            <span>"Preferred contact"</span>
                            <select
                                class="form__input"
                                prop:value=move || form.with(|f| f.contact_method.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.contact_method = value);
                                }
                            >
                                {CONTACT_METHODS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        {field("Contact email", |f| f.contact_email.clone(), |f, v| f.contact_email = v)}
                        {field("WhatsApp number", |f| f.whatsapp_number.clone(), |f, v| f.whatsapp_number = v)}
                        {field("Instagram", |f| f.instagram.clone(), |f, v| f.instagram = v)}
                        <Show when=move || role.get() == Role::Band>
                            {field("Spotify", |f| f.spotify.clone(), |f, v| f.spotify = v)}
                            {field("YouTube", |f| f.youtube.clone(), |f, v| f.youtube = v)}
                        </Show>
                        <Show when=move || !error.get().is_empty()>
                            <div class="form__error">{move || error.get()}</div>
                        </Show>
                        <button class="button button--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save Profile" }}
                        </button>
                    </form>
                </Show>
            </main>
        </div>
    }
}
