//! Dashboard page: the discovery feed or the venue inbox, depending on context.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it refreshes the current
//! user so profile flags are current; an expired token sends the user back to
//! login. Switching context reloads the context-specific lists.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::application_row::ApplicationRow;
use crate::components::gig_card::GigCard;
use crate::components::navbar::Navbar;
use crate::components::onboarding_banner::OnboardingBanner;
use crate::net::api::ApiClient;
use crate::net::types::{Application, ApplicationStatus, NewApplication};
use crate::state::discovery::DiscoveryState;
use crate::state::session::UserContext;
use crate::state::store::SessionStore;
use crate::util::auth::{LOGIN_ROUTE, install_unauth_redirect};

const LOAD_FAILED: &str = "Could not load this page. Please try again.";

/// Applications shown in either context.
#[derive(Clone, Debug, Default)]
struct ApplicationsState {
    items: Vec<Application>,
    loading: bool,
    error: Option<String>,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    install_unauth_redirect(session.clone(), navigate.clone());

    let discovery = RwSignal::new(DiscoveryState::default());
    let applications = RwSignal::new(ApplicationsState::default());
    let state = session.state();

    {
        let api = api.clone();
        let session = session.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = session.fetch_user(&api).await {
                if e.is_unauthorized() {
                    session.logout();
                    navigate(LOGIN_ROUTE, NavigateOptions::default());
                }
            }
        });
    }

    // Profile refreshes touch `state` too; only a context change reloads.
    let context = Memo::new(move |_| state.with(|s| s.current_context));
    {
        let api = api.clone();
        Effect::new(move || {
            let context = context.get();
            load_applications(api.clone(), context, applications);
            if context == UserContext::Finding {
                load_gigs(api.clone(), discovery);
            }
        });
    }

    let on_search = {
        let api = api.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            load_gigs(api.clone(), discovery);
        })
    };

    let on_apply = {
        let api = api.clone();
        Callback::new(move |gig_id: String| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let application = NewApplication { gig_id: gig_id.clone(), message: None };
                match api.apply_to_gig(&application).await {
                    Ok(_) => discovery.update(|d| d.record_application(&gig_id)),
                    Err(e) => {
                        let message = e.user_message(api.base_url(), "Could not send your application.");
                        discovery.update(|d| d.error = Some(message));
                    }
                }
            });
        })
    };

    let on_decide = {
        let api = api.clone();
        Callback::new(move |(application_id, status): (String, ApplicationStatus)| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.update_application_status(&application_id, status).await {
                    Ok(updated) => applications.update(|a| {
                        replace_application(&mut a.items, updated);
                    }),
                    Err(e) => {
                        log::warn!("failed to update application {application_id}: {e}");
                        let message = e.user_message(api.base_url(), "Could not update the application.");
                        applications.update(|a| a.error = Some(message));
                    }
                }
            });
        })
    };

    view! {
        <Show
            when=move || state.with(|s| s.is_authenticated())
            fallback=|| view! { <div class="dashboard"><p>"Redirecting to login..."</p></div> }
        >
            <div class="dashboard">
                <Navbar/>
                <main class="dashboard__main">
                    <OnboardingBanner/>
                    {move || match context.get() {
                        UserContext::Finding => view! {
                            <section class="dashboard__section">
                                <h1 class="page-title">"Discover Gigs"</h1>
                                <form class="discovery-filters" on:submit=move |ev| on_search.run(ev)>
                                    <input
                                        class="form__input"
                                        type="search"
                                        placeholder="Search gigs..."
                                        prop:value=move || discovery.with(|d| d.search.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            discovery.update(|d| d.search = value);
                                        }
                                    />
                                    <input
                                        class="form__input"
                                        type="text"
                                        placeholder="Genre"
                                        prop:value=move || discovery.with(|d| d.genre.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            discovery.update(|d| d.genre = value);
                                        }
                                    />
                                    <button class="button" type="submit">"Search"</button>
                                </form>
                                {move || discovery.with(|d| d.error.clone()).map(|e| view! { <p class="form__error">{e}</p> })}
                                <Show
                                    when=move || !discovery.with(|d| d.loading)
                                    fallback=|| view! { <p class="muted">"Loading gigs..."</p> }
                                >
                                    <div class="gig-grid">
                                        <For
                                            each=move || discovery.with(|d| d.gigs.clone())
                                            key=|gig| gig.id.clone()
                                            children=move |gig| {
                                                let gig_id = gig.id.clone();
                                                let applied = Signal::derive(move || discovery.with(|d| d.has_applied(&gig_id)));
                                                view! { <GigCard gig applied on_apply/> }
                                            }
                                        />
                                    </div>
                                    <Show when=move || discovery.with(|d| d.gigs.is_empty())>
                                        <p class="muted">"No gigs match those filters yet."</p>
                                    </Show>
                                </Show>
                                <h2 class="section-title">"My Applications"</h2>
                                <ApplicationList applications/>
                            </section>
                        }
                        .into_any(),
                        UserContext::Hosting => view! {
                            <section class="dashboard__section">
                                <h1 class="page-title">"Incoming Applications"</h1>
                                <ApplicationList applications on_decide/>
                            </section>
                        }
                        .into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}

#[component]
fn ApplicationList(
    applications: RwSignal<ApplicationsState>,
    #[prop(optional)] on_decide: Option<Callback<(String, ApplicationStatus)>>,
) -> impl IntoView {
    view! {
        {move || applications.with(|a| a.error.clone()).map(|e| view! { <p class="form__error">{e}</p> })}
        <Show
            when=move || !applications.with(|a| a.loading)
            fallback=|| view! { <p class="muted">"Loading applications..."</p> }
        >
            <Show
                when=move || !applications.with(|a| a.items.is_empty())
                fallback=|| view! { <p class="muted">"Nothing here yet."</p> }
            >
                <ul class="application-list">
                    <For
                        each=move || applications.with(|a| a.items.clone())
                        key=|item| (item.id.clone(), item.status)
                        children=move |application| {
                            match on_decide {
                                Some(on_decide) => view! { <ApplicationRow application on_decide/> }.into_any(),
                                None => view! { <ApplicationRow application/> }.into_any(),
                            }
                        }
                    />
                </ul>
            </Show>
        </Show>
    }
}

/// Swap in the server's copy of an application. Returns false when the id is
/// no longer listed.
fn replace_application(items: &mut [Application], updated: Application) -> bool {
    match items.iter_mut().find(|item| item.id == updated.id) {
        Some(item) => {
            *item = updated;
            true
        }
        None => false,
    }
}

fn load_gigs(api: ApiClient, discovery: RwSignal<DiscoveryState>) {
    let query = discovery.with_untracked(DiscoveryState::query);
    discovery.update(|d| {
        d.loading = true;
        d.error = None;
    });
    leptos::task::spawn_local(async move {
        match api.discover_gigs(&query).await {
            Ok(gigs) => discovery.update(|d| d.gigs = gigs),
            Err(e) => {
                log::warn!("failed to load discovery feed: {e}");
                let message = e.user_message(api.base_url(), LOAD_FAILED);
                discovery.update(|d| d.error = Some(message));
            }
        }
        discovery.update(|d| d.loading = false);
    });
}

fn load_applications(api: ApiClient, context: UserContext, applications: RwSignal<ApplicationsState>) {
    applications.update(|a| {
        a.loading = true;
        a.error = None;
    });
    leptos::task::spawn_local(async move {
        let result = match context {
            UserContext::Finding => api.my_applications().await,
            UserContext::Hosting => api.venue_applications().await,
        };
        match result {
            Ok(items) => applications.update(|a| a.items = items),
            Err(e) => {
                log::warn!("failed to load applications: {e}");
                let message = e.user_message(api.base_url(), LOAD_FAILED);
                applications.update(|a| a.error = Some(message));
            }
        }
        applications.update(|a| a.loading = false);
    });
}
