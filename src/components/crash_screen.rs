//! Top-level fallback for errors thrown into the root error boundary.

use leptos::error::Errors;
use leptos::prelude::*;

/// Generic crash screen with a manual retry action.
///
/// Retrying clears the collected errors, which re-renders the boundary's
/// children.
#[component]
pub fn CrashScreen(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let detail = {
        let errors = errors.clone();
        move || errors.with(|errs| errs.iter().next().map(|(_, err)| err.to_string()))
    };
    let on_retry = move |_| {
        log::info!("retrying after crash");
        errors.set(Errors::default());
    };

    view! {
        <div class="status-page status-page--error">
            <h2 class="status-page__title">"Static on the Line"</h2>
            <p class="status-page__body">
                "Something went wrong while processing the rhythm. We can try to patch it back in."
            </p>
            <button class="button" on:click=on_retry>"Try Again"</button>
            <p class="status-page__fineprint">{move || detail().unwrap_or_else(|| "unknown error".to_owned())}</p>
        </div>
    }
}
