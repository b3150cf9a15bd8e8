//! Dashboard navigation bar: context switch, inbox badge, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The unread badge polls `/notifications` while mounted. Polling failures are
//! logged and leave the previous count in place.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::notifications::{NotificationsState, badge_label, unread_count};
use crate::state::session::UserContext;
use crate::state::store::SessionStore;
use crate::util::auth::LOGIN_ROUTE;

#[cfg(feature = "csr")]
const UNREAD_POLL_SECS: u64 = 30;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let navigate = use_navigate();
    let state = session.state();

    refresh_unread(api.clone(), notifications);

    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(UNREAD_POLL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_unread(api.clone(), notifications);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_toggle_context = {
        let session = session.clone();
        move |_| {
            let next = session.current_context().toggled();
            session.switch_context(next);
        }
    };

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/dashboard">"Booklyn"</a>
            <nav class="navbar__links">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/dashboard/my-gigs">"My Gigs"</a>
                <Show when=move || state.with(|s| s.current_context == UserContext::Hosting)>
                    <a class="navbar__cta" href="/dashboard/gigs/new">"Post a Gig"</a>
                </Show>
                <a class="navbar__inbox" href="/dashboard/notifications">
                    "Notifications"
                    {move || {
                        notifications
                            .with(|n| badge_label(n.unread_count()))
                            .map(|label| view! { <span class="navbar__badge">{label}</span> })
                    }}
                </a>
                <a href="/dashboard/profile">"Profile"</a>
            </nav>
            <div class="navbar__identity">
                <span class="navbar__email">
                    {move || state.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                </span>
                <span class="navbar__context">{move || state.with(|s| s.current_context.label())}</span>
                <button class="button button--ghost" on:click=on_toggle_context>
                    {move || match state.with(|s| s.current_context) {
                        UserContext::Finding => "Switch to Hosting",
                        UserContext::Hosting => "Switch to Finding",
                    }}
                </button>
                <button class="button button--ghost" on:click=on_logout>"Log out"</button>
            </div>
        </header>
    }
}

fn refresh_unread(api: ApiClient, notifications: RwSignal<NotificationsState>) {
    leptos::task::spawn_local(async move {
        match api.notifications().await {
            Ok(items) => {
                log::debug!("{} unread notifications", unread_count(&items));
                notifications.update(|n| {
                    n.items = items;
                    n.error = None;
                });
            }
            Err(e) => log::warn!("failed to fetch unread count: {e}"),
        }
    });
}
