//! Fallback screen for unmatched routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code">"404"</h1>
            <h2 class="status-page__title">"Off the Beat"</h2>
            <p class="status-page__body">
                "The stage you're looking for doesn't exist. It looks like the rhythm got lost in translation."
            </p>
            <a class="button" href="/dashboard">"Back to Dashboard"</a>
        </div>
    }
}
