//! Notification inbox with mark-read actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::net::api::ApiClient;
use crate::state::notifications::NotificationsState;
use crate::state::store::SessionStore;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::short_date;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    install_unauth_redirect(session, use_navigate());

    {
        let api = api.clone();
        notifications.update(|n| {
            n.loading = true;
            n.error = None;
        });
        leptos::task::spawn_local(async move {
            match api.notifications().await {
                Ok(items) => notifications.update(|n| n.items = items),
                Err(e) => {
                    let message = e.user_message(api.base_url(), "Could not load notifications.");
                    notifications.update(|n| n.error = Some(message));
                }
            }
            notifications.update(|n| n.loading = false);
        });
    }

    let mark_read = {
        let api = api.clone();
        Callback::new(move |id: String| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.mark_notification_read(&id).await {
                    Ok(()) => {
                        notifications.update(|n| {
                            n.mark_read(&id);
                        });
                    }
                    Err(e) => log::warn!("failed to mark notification {id} read: {e}"),
                }
            });
        })
    };

    let on_mark_all = move |_| {
        let ids = notifications.with_untracked(NotificationsState::unread_ids);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let mut failed = 0usize;
            for id in &ids {
                if let Err(e) = api.mark_notification_read(id).await {
                    log::warn!("failed to mark notification {id} read: {e}");
                    failed += 1;
                }
            }
            if failed == 0 {
                notifications.update(NotificationsState::mark_all_read);
            } else {
                notifications.update(|n| n.error = Some(format!("{failed} notifications could not be updated.")));
            }
        });
    };

    view! {
        <div class="dashboard">
            <Navbar/>
            <main class="dashboard__main">
                <header class="page-header">
                    <h1 class="page-title">"Notifications"</h1>
                    <button
                        class="button button--ghost"
                        disabled=move || notifications.with(|n| n.unread_count() == 0)
                        on:click=on_mark_all
                    >
                        "Mark all as read"
                    </button>
                </header>
                {move || notifications.with(|n| n.error.clone()).map(|e| view! { <p class="form__error">{e}</p> })}
                <Show
                    when=move || !notifications.with(|n| n.items.is_empty())
                    fallback=move || {
                        view! {
                            <p class="muted">
                                {move || if notifications.with(|n| n.loading) { "Loading..." } else { "You're all caught up." }}
                            </p>
                        }
                    }
                >
                    <ul class="notification-list">
                        <For
                            each=move || notifications.with(|n| n.items.clone())
                            key=|n| (n.id.clone(), n.is_read)
                            children=move |n| {
                                let id = n.id.clone();
                                let unread = !n.is_read;
                                view! {
                                    <li class="notification" class:notification--unread=unread>
                                        <div class="notification__body">
                                            <span class="notification__title">{n.title.clone()}</span>
                                            <p class="notification__content">{n.content.clone()}</p>
                                            {n.link.clone().map(|href| view! { <a class="notification__link" href=href>"View"</a> })}
                                        </div>
                                        <span class="notification__date">{short_date(&n.created_at).to_owned()}</span>
                                        {unread.then(move || view! {
                                            <button class="button button--ghost" on:click=move |_| mark_read.run(id.clone())>
                                                "Mark read"
                                            </button>
                                        })}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </main>
        </div>
    }
}
