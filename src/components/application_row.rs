//! One application in the venue inbox or the band's sent list.

use leptos::prelude::*;

use crate::net::types::{Application, ApplicationStatus};
use crate::util::format::{short_date, status_class, status_label};

/// Application summary. When `on_decide` is set, pending applications get
/// accept/decline buttons.
#[component]
pub fn ApplicationRow(
    application: Application,
    #[prop(optional)] on_decide: Option<Callback<(String, ApplicationStatus)>>,
) -> impl IntoView {
    let id = application.id.clone();
    let pending = application.status == ApplicationStatus::Pending;
    let title = application.gig_title.clone().unwrap_or_else(|| "Untitled gig".to_owned());
    let counterpart = application
        .venue_name
        .clone()
        .filter(|_| on_decide.is_none())
        .unwrap_or_else(|| application.applicant_name.clone());

    let decide = move |status: ApplicationStatus| {
        let id = id.clone();
        move |_| {
            if let Some(on_decide) = on_decide.as_ref() {
                on_decide.run((id.clone(), status));
            }
        }
    };

    view! {
        <li class="application-row">
            <div class="application-row__main">
                <span class="application-row__title">{title}</span>
                <span class="application-row__who">{counterpart}</span>
                {application.message.clone().map(|m| view! { <p class="application-row__message">{m}</p> })}
            </div>
            <span class="application-row__date">{short_date(&application.created_at).to_owned()}</span>
            <span class=status_class(application.status)>{status_label(application.status)}</span>
            <Show when=move || pending && on_decide.is_some()>
                <div class="application-row__actions">
                    <button class="button button--accept" on:click=decide(ApplicationStatus::Accepted)>
                        "Accept"
                    </button>
                    <button class="button button--decline" on:click=decide(ApplicationStatus::Declined)>
                        "Decline"
                    </button>
                </div>
            </Show>
        </li>
    }
}
