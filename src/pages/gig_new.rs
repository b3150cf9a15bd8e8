//! Post-a-gig form for the hosting context.

#[cfg(test)]
#[path = "gig_new_test.rs"]
mod gig_new_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::net::api::ApiClient;
use crate::net::types::NewGigPost;
use crate::state::store::SessionStore;
use crate::util::auth::{gig_route, install_unauth_redirect};
use crate::util::format::parse_tags;

const POST_FAILED: &str = "Could not post the gig. Please try again.";

/// Raw form input before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct GigForm {
    title: String,
    description: String,
    genre: String,
    date: String,
    time: String,
    pay: String,
    tags: String,
}

fn validate_gig_form(form: &GigForm) -> Result<NewGigPost, &'static str> {
    let required = [
        (&form.title, "Title is required"),
        (&form.genre, "Genre is required"),
        (&form.pay, "Pay info is required"),
        (&form.date, "Date is required"),
        (&form.time, "Time is required"),
    ];
    if let Some((_, message)) = required.iter().find(|(value, _)| value.trim().is_empty()) {
        return Err(*message);
    }
    Ok(NewGigPost {
        title: form.title.trim().to_owned(),
        description: form.description.trim().to_owned(),
        genre: form.genre.trim().to_owned(),
        date: form.date.trim().to_owned(),
        time: form.time.trim().to_owned(),
        pay: form.pay.trim().to_owned(),
        tags: parse_tags(&form.tags),
        photo_url: None,
    })
}

#[component]
pub fn NewGigPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let form = RwSignal::new(GigForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let gig = match validate_gig_form(&form.get()) {
            Ok(gig) => gig,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.post_gig(&gig).await {
                Ok(posted) => {
                    log::info!("posted gig {}", posted.id);
                    navigate(&gig_route(&posted.id), NavigateOptions::default());
                }
                Err(e) => error.set(e.user_message(api.base_url(), POST_FAILED)),
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, input_type: &'static str, get: fn(&GigForm) -> String, set: fn(&mut GigForm, String)| {
        view! {
            <label class="form__field">
                <span>{label}</span>
                <input
                    class="form__input"
                    type=input_type
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dashboard">
            <Navbar/>
            <main class="dashboard__main">
                <h1 class="page-title">"Post a Gig"</h1>
                <form class="form" on:submit=on_submit>
                    {field("Title", "text", |f| f.title.clone(), |f, v| f.title = v)}
                    {field("Genre", "text", |f| f.genre.clone(), |f, v| f.genre = v)}
                    {field("Pay", "text", |f| f.pay.clone(), |f, v| f.pay = v)}
                    {field("Date", "date", |f| f.date.clone(), |f, v| f.date = v)}
                    {field("Time", "time", |f| f.time.clone(), |f, v| f.time = v)}
                    {field("Tags (comma separated)", "text", |f| f.tags.clone(), |f, v| f.tags = v)}
                    <label class="form__field">
                        <span>"Description"</span>
                        <textarea
                            class="form__input form__input--area"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.description = value);
                            }
                        ></textarea>
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <div class="form__error">{move || error.get()}</div>
                    </Show>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Posting..." } else { "Post Gig" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
