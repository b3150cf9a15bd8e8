//! Detail view of one gig posting with the hosting venue's contact.

#[cfg(test)]
#[path = "gig_detail_test.rs"]
mod gig_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{GigPosting, NewApplication, Profile, VenueProfile};
use crate::state::session::UserContext;
use crate::state::store::SessionStore;
use crate::util::auth::{install_unauth_redirect, profile_route};
use crate::util::format::{short_date, short_time};

const LOAD_FAILED: &str = "Could not load this gig.";
const APPLY_FAILED: &str = "Could not send your application.";

#[derive(Clone, Debug, PartialEq)]
struct GigDetail {
    gig: GigPosting,
    /// Missing when the venue has no profile yet or the lookup failed.
    venue: Option<VenueProfile>,
}

/// Load the posting, then best-effort the venue profile behind it.
async fn load_gig_detail(api: &ApiClient, gig_id: &str) -> Result<GigDetail, ApiError> {
    let gig = api.gig(gig_id).await?;
    let venue = match api.profile_of(&gig.venue_id).await {
        Ok(Profile::Venue(venue)) => Some(venue),
        Ok(Profile::Band(_)) => {
            log::warn!("gig {} is owned by a band profile", gig.id);
            None
        }
        Err(e) => {
            log::warn!("failed to load venue {} for gig {}: {e}", gig.venue_id, gig.id);
            None
        }
    };
    Ok(GigDetail { gig, venue })
}

fn detail_error_message(err: &ApiError, base_url: &str) -> String {
    if err.status() == Some(404) {
        "Gig not found.".to_owned()
    } else {
        err.user_message(base_url, LOAD_FAILED)
    }
}

#[component]
pub fn GigDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    install_unauth_redirect(session.clone(), use_navigate());

    let params = use_params_map();
    let gig_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let detail = RwSignal::new(None::<Result<GigDetail, String>>);
    let applied = RwSignal::new(false);
    let apply_error = RwSignal::new(None::<String>);
    let state = session.state();

    {
        let api = api.clone();
        Effect::new(move || {
            let id = gig_id.get();
            detail.set(None);
            applied.set(false);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = load_gig_detail(&api, &id).await.map_err(|e| detail_error_message(&e, api.base_url()));
                detail.set(Some(result));
            });
        });
    }

    let on_apply = Callback::new(move |(): ()| {
        let api = api.clone();
        let gig_id = gig_id.get_untracked();
        apply_error.set(None);
        leptos::task::spawn_local(async move {
            let application = NewApplication { gig_id, message: None };
            match api.apply_to_gig(&application).await {
                Ok(_) => applied.set(true),
                Err(e) => apply_error.set(Some(e.user_message(api.base_url(), APPLY_FAILED))),
            }
        });
    });

    let can_apply = move || state.with(|s| s.current_context == UserContext::Finding);

    view! {
        <div class="dashboard">
            <Navbar/>
            <main class="dashboard__main">
                <a class="button button--ghost" href="/dashboard">"Back to dashboard"</a>
                {move || match detail.get() {
                    None => view! { <p class="muted">"Loading gig details..."</p> }.into_any(),
                    Some(Err(message)) => view! { <p class="form__error">{message}</p> }.into_any(),
                    Some(Ok(GigDetail { gig, venue })) => {
                        let date = short_date(&gig.date_time).to_owned();
                        let time = short_time(&gig.date_time).map(str::to_owned);
                        view! {
                            <article class="gig-detail">
                                <header class="gig-detail__header">
                                    <span class="gig-card__genre">{gig.genre.clone()}</span>
                                    {gig.pay_range.clone().map(|pay| view! { <span class="gig-card__tag">{pay}</span> })}
                                    <h1 class="page-title">{gig.title.clone()}</h1>
                                    <p class="gig-card__meta">
                                        {date}
                                        {time.map(|t| format!(" · {t}"))}
                                    </p>
                                </header>
                                <section class="dashboard__section">
                                    <h2 class="section-title">"Description"</h2>
                                    <p>{gig.description.clone().unwrap_or_else(|| "No description yet.".to_owned())}</p>
                                </section>
                                <VenueSummary venue_id=gig.venue_id.clone() venue/>
                                <Show when=can_apply>
                                    <button
                                        class="button button--primary"
                                        disabled=move || applied.get()
                                        on:click=move |_| on_apply.run(())
                                    >
                                        {move || if applied.get() { "Applied" } else { "Apply" }}
                                    </button>
                                </Show>
                                {move || apply_error.get().map(|e| view! { <p class="form__error">{e}</p> })}
                            </article>
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn VenueSummary(venue_id: String, venue: Option<VenueProfile>) -> impl IntoView {
    let href = profile_route(&venue_id);
    let Some(venue) = venue else {
        return view! {
            <section class="dashboard__section">
                <h2 class="section-title">"About the Venue"</h2>
                <p class="muted">"This venue has not shared its details yet."</p>
            </section>
        }
        .into_any();
    };
    let contact = venue.contact().map(|(label, handle)| format!("{label}: {handle}"));

    view! {
        <section class="dashboard__section">
            <h2 class="section-title">"About the Venue"</h2>
            <a class="profile-card__name" href=href>{venue.venue_name.clone()}</a>
            <p class="profile-card__location">{format!("{}, {}", venue.location_city, venue.location_state)}</p>
            {venue.capacity.map(|c| view! { <p class="muted">{format!("Capacity: {c} people")}</p> })}
            {venue.bio.clone().map(|bio| view! { <p class="profile-card__bio">{bio}</p> })}
            {contact.map(|c| view! { <p class="gig-detail__contact">{c}</p> })}
        </section>
    }
    .into_any()
}
