//! Entry route: forwards to the dashboard or the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::store::SessionStore;
use crate::util::auth::landing_route;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let state = session.state();

    Effect::new(move || {
        let target = state.with(landing_route);
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <div class="status-page"><p>"Loading..."</p></div> }
}
