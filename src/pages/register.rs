//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::auth::sign_up;
use crate::net::types::{RegisterRequest, Role};
use crate::state::store::SessionStore;
use crate::util::auth::DASHBOARD_ROUTE;

const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
const MIN_PASSWORD_LEN: usize = 6;

fn validate_register_input(email: &str, password: &str, role: Option<Role>) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Minimum 6 characters");
    }
    let Some(role) = role else {
        return Err("Please select a role");
    };
    Ok(RegisterRequest { email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(None::<Role>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_register_input(&email.get(), &password.get(), role.get()) {
            Ok(registration) => registration,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sign_up(&api, &session, &registration).await {
                Ok(_) => navigate(DASHBOARD_ROUTE, NavigateOptions::default()),
                Err(e) => error.set(e.user_message(api.base_url(), REGISTRATION_FAILED)),
            }
            busy.set(false);
        });
    };

    let role_button = move |value: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class="role-option"
                class:role-option--selected=move || role.get() == Some(value)
                on:click=move |_| role.set(Some(value))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Booklyn"</h1>
                <h2 class="auth-card__title">"Create Account"</h2>
                <p class="auth-card__subtitle">"Join as a band looking for stages or a venue looking for sound."</p>
                <form class="auth-form" on:submit=on_submit>
                    <div class="role-picker">
                        {role_button(Role::Band, "Band")}
                        {role_button(Role::Venue, "Venue")}
                    </div>
                    <label class="auth-form__field">
                        <span>"Email Address"</span>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="name@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        <span>"Password"</span>
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="At least 6 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-form__error">{move || error.get()}</div>
                    </Show>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/auth/login">"Log In"</a>
                </p>
            </div>
        </div>
    }
}
