//! Another user's band or venue profile, read-only.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::components::profile_card::ProfileCard;
use crate::net::api::ApiClient;
use crate::net::types::Profile;
use crate::state::store::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn PublicProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let user_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let profile = RwSignal::new(None::<Result<Profile, String>>);

    Effect::new(move || {
        let id = user_id.get();
        profile.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.profile_of(&id).await.map_err(|e| {
                if e.status() == Some(404) {
                    "Profile not found.".to_owned()
                } else {
                    e.user_message(api.base_url(), "Could not load this profile.")
                }
            });
            profile.set(Some(result));
        });
    });

    view! {
        <div class="dashboard">
            <Navbar/>
            <main class="dashboard__main">
                {move || match profile.get() {
                    None => view! { <p class="muted">"Loading profile..."</p> }.into_any(),
                    Some(Ok(profile)) => view! { <ProfileCard profile/> }.into_any(),
                    Some(Err(message)) => view! { <p class="form__error">{message}</p> }.into_any(),
                }}
            </main>
        </div>
    }
}
