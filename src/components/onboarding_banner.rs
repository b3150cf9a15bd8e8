//! Prompt shown when the active context has no profile yet.

use leptos::prelude::*;

use crate::state::session::UserContext;
use crate::state::store::SessionStore;
use crate::util::auth::PROFILE_EDIT_ROUTE;

#[component]
pub fn OnboardingBanner() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();

    view! {
        <Show when=move || state.with(|s| s.needs_onboarding())>
            <aside class="onboarding-banner">
                {move || match state.with(|s| s.current_context) {
                    UserContext::Finding => {
                        "Finish your band profile so venues can find you and review your applications."
                    }
                    UserContext::Hosting => {
                        "Set up your venue profile before posting gigs and reviewing applications."
                    }
                }}
                <a class="onboarding-banner__link" href=PROFILE_EDIT_ROUTE>"Set up profile"</a>
            </aside>
        </Show>
    }
}
