//! "My gigs": sent applications while finding, own postings while hosting.

#[cfg(test)]
#[path = "my_gigs_test.rs"]
mod my_gigs_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::application_row::ApplicationRow;
use crate::components::navbar::Navbar;
use crate::net::api::ApiClient;
use crate::net::types::{Application, GigPosting};
use crate::state::session::UserContext;
use crate::state::store::SessionStore;
use crate::util::auth::{gig_route, install_unauth_redirect};
use crate::util::format::{short_date, short_time};

const LOAD_FAILED: &str = "Could not load your gigs.";

#[derive(Clone, Debug, PartialEq)]
enum Activity {
    Applications(Vec<Application>),
    Postings(Vec<GigPosting>),
}

/// One-line schedule and pay summary for a posting.
fn posting_summary(gig: &GigPosting) -> String {
    let mut parts = vec![short_date(&gig.date_time).to_owned()];
    parts.extend(short_time(&gig.date_time).map(str::to_owned));
    parts.extend(gig.pay_range.clone().filter(|p| !p.trim().is_empty()));
    parts.join(" · ")
}

#[component]
pub fn MyGigsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    install_unauth_redirect(session.clone(), use_navigate());

    let state = session.state();
    let context = Memo::new(move |_| state.with(|s| s.current_context));
    let activity = RwSignal::new(None::<Result<Activity, String>>);

    Effect::new(move || {
        let context = context.get();
        activity.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = match context {
                UserContext::Finding => api.my_applications().await.map(Activity::Applications),
                UserContext::Hosting => api.managed_gigs().await.map(Activity::Postings),
            };
            let result = result.map_err(|e| {
                log::warn!("failed to load {context:?} activity: {e}");
                e.user_message(api.base_url(), LOAD_FAILED)
            });
            activity.set(Some(result));
        });
    });

    view! {
        <div class="dashboard">
            <Navbar/>
            <main class="dashboard__main">
                <h1 class="page-title">
                    {move || match context.get() {
                        UserContext::Finding => "My Applications",
                        UserContext::Hosting => "My Gig Postings",
                    }}
                </h1>
                {move || match activity.get() {
                    None => view! { <p class="muted">"Loading..."</p> }.into_any(),
                    Some(Err(message)) => view! { <p class="form__error">{message}</p> }.into_any(),
                    Some(Ok(Activity::Applications(items))) if items.is_empty() => {
                        view! { <p class="muted">"You have not applied to any gigs yet."</p> }.into_any()
                    }
                    Some(Ok(Activity::Postings(items))) if items.is_empty() => {
                        view! { <p class="muted">"You have not posted any gigs yet."</p> }.into_any()
                    }
                    Some(Ok(Activity::Applications(items))) => view! {
                        <ul class="application-list">
                            {items.into_iter().map(|application| view! { <ApplicationRow application/> }).collect_view()}
                        </ul>
                    }
                    .into_any(),
                    Some(Ok(Activity::Postings(items))) => view! {
                        <ul class="application-list">
                            {items
                                .into_iter()
                                .map(|gig| {
                                    let summary = posting_summary(&gig);
                                    view! {
                                        <li class="application-row">
                                            <div class="application-row__main">
                                                <a class="application-row__title" href=gig_route(&gig.id)>{gig.title}</a>
                                                <span class="application-row__who">{summary}</span>
                                            </div>
                                            <span class="gig-card__genre">{gig.genre}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
