//! Card for one gig in the discovery feed.

use leptos::prelude::*;

use crate::net::types::GigPost;

/// A discovery feed entry with an apply action.
#[component]
pub fn GigCard(
    gig: GigPost,
    #[prop(into)] applied: Signal<bool>,
    #[prop(optional)] on_apply: Option<Callback<String>>,
) -> impl IntoView {
    let gig_id = gig.id.clone();
    let tags = gig.tags.clone();
    let can_apply = on_apply.is_some();

    view! {
        <article class="gig-card">
            <header class="gig-card__header">
                <span class="gig-card__avatar" aria-hidden="true">{gig.avatar_char.clone()}</span>
                <div>
                    <h3 class="gig-card__title">{gig.title.clone()}</h3>
                    <p class="gig-card__author">{gig.author_name.clone()}</p>
                </div>
                <span class="gig-card__genre">{gig.genre.clone()}</span>
            </header>
            <p class="gig-card__description">{gig.description.clone()}</p>
            <dl class="gig-card__meta">
                <dt>"When"</dt>
                <dd>{format!("{} · {}", gig.date, gig.time)}</dd>
                <dt>"Pay"</dt>
                <dd>{gig.pay.clone()}</dd>
            </dl>
            <ul class="gig-card__tags">
                {tags.into_iter().map(|tag| view! { <li class="gig-card__tag">{tag}</li> }).collect_view()}
            </ul>
            <Show when=move || can_apply>
                <button
                    class="gig-card__apply"
                    disabled=move || applied.get()
                    on:click={
                        let gig_id = gig_id.clone();
                        move |_| {
                            if let Some(on_apply) = on_apply.as_ref() {
                                on_apply.run(gig_id.clone());
                            }
                        }
                    }
                >
                    {move || if applied.get() { "Applied" } else { "Apply" }}
                </button>
            </Show>
        </article>
    }
}
