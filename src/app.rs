//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::crash_screen::CrashScreen;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::transport::FetchTransport;
use crate::pages::{
    dashboard::DashboardPage, gig_detail::GigDetailPage, gig_new::NewGigPage, home::HomePage, login::LoginPage,
    my_gigs::MyGigsPage, not_found::NotFoundPage, notifications::NotificationsPage, profile::ProfilePage,
    profile_edit::ProfileEditPage, public_profile::PublicProfilePage, register::RegisterPage,
};
use crate::state::notifications::NotificationsState;
use crate::state::store::SessionStore;
use crate::util::storage::{BrowserStorage, SharedStorage};

/// Root application component.
///
/// Builds the one API client and the session store over browser storage,
/// provides them as context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let storage: SharedStorage = Arc::new(BrowserStorage);
    let config = ApiConfig::from_env();
    log::info!("api base url: {}", config.base_url);
    let api = ApiClient::new(config, storage.clone(), Arc::new(FetchTransport));
    let session = SessionStore::restore(storage);

    provide_context(api);
    provide_context(session);
    provide_context(RwSignal::new(NotificationsState::default()));

    view! {
        <Title text="Booklyn | Band-to-Gig Platform"/>
        <Meta name="description" content="Booklyn connects bands with venues looking for live music."/>

        <Router>
            <ErrorBoundary fallback=|errors| view! { <CrashScreen errors/> }>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("notifications")) view=NotificationsPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("profile")) view=ProfilePage/>
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("profile"), StaticSegment("edit"))
                        view=ProfileEditPage
                    />
                    <Route path=(StaticSegment("dashboard"), StaticSegment("my-gigs")) view=MyGigsPage/>
                    // Matched in order: the static "new" segment must precede the id.
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("gigs"), StaticSegment("new"))
                        view=NewGigPage
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("gigs"), ParamSegment("id"))
                        view=GigDetailPage
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("profiles"), ParamSegment("id"))
                        view=PublicProfilePage
                    />
                </Routes>
            </ErrorBoundary>
        </Router>
    }
}
