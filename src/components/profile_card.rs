//! Read-only card for a band or venue profile.

use leptos::prelude::*;

use crate::net::types::Profile;

#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
    let name = profile.display_name().to_owned();
    let location = profile.location();
    let (kind, bio, details) = match &profile {
        Profile::Band(band) => {
            let mut details = vec![("Genre", band.genre.clone())];
            details.extend(
                [("Instagram", &band.instagram), ("Spotify", &band.spotify), ("YouTube", &band.youtube)]
                    .into_iter()
                    .filter_map(|(label, value)| value.clone().map(|v| (label, v))),
            );
            ("Band", band.bio.clone(), details)
        }
        Profile::Venue(venue) => {
            let mut details = vec![
                ("Capacity", venue.capacity.map_or_else(|| "n/a".to_owned(), |c| c.to_string())),
                ("Typical genres", venue.typical_genres.join(", ")),
            ];
            if let Some((label, handle)) = venue.contact() {
                details.push((label, handle.to_owned()));
            }
            ("Venue", venue.bio.clone(), details)
        }
    };

    view! {
        <article class="profile-card">
            <span class="profile-card__kind">{kind}</span>
            <h2 class="profile-card__name">{name}</h2>
            <p class="profile-card__location">{location}</p>
            {bio.map(|bio| view! { <p class="profile-card__bio">{bio}</p> })}
            <dl class="profile-card__details">
                {details
                    .into_iter()
                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                    .collect_view()}
            </dl>
        </article>
    }
}
