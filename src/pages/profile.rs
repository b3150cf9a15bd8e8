//! Current user's band or venue profile.
//!
//! A 404 means onboarding is not finished and renders a prompt; any other
//! failure is thrown to the root error boundary.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::profile_card::ProfileCard;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Profile;
use crate::state::store::SessionStore;
use crate::util::auth::{PROFILE_EDIT_ROUTE, install_unauth_redirect};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    install_unauth_redirect(session.clone(), use_navigate());

    let profile = RwSignal::new(None::<Result<Option<Profile>, ApiError>>);
    leptos::task::spawn_local(async move {
        let result = match api.my_profile().await {
            Ok(found) => Ok(Some(found)),
            Err(ApiError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        };
        profile.set(Some(result));
    });

    let email = move || session.user().map(|u| u.email).unwrap_or_default();

    view! {
        <div class="dashboard">
            <Navbar/>
            <main class="dashboard__main">
                <h1 class="page-title">"Profile"</h1>
                <p class="muted">{email}</p>
                {move || match profile.get() {
                    None => view! { <p class="muted">"Loading profile..."</p> }.into_any(),
                    Some(result) => result.map(|found| match found {
                        Some(profile) => view! {
                            <ProfileCard profile/>
                            <a class="button" href=PROFILE_EDIT_ROUTE>"Edit profile"</a>
                        }
                        .into_any(),
                        None => view! {
                            <p class="onboarding-banner">
                                "You have not set up a profile yet. Complete onboarding to start booking."
                                <a class="onboarding-banner__link" href=PROFILE_EDIT_ROUTE>"Set up profile"</a>
                            </p>
                        }
                        .into_any(),
                    })
                    .into_any(),
                }}
            </main>
        </div>
    }
}
