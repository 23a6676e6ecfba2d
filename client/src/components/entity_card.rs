//! Collapsible card listing one entity collection with add/edit triggers.
//!
//! DESIGN
//! ======
//! The card owns its fetched list and never mutates records. It refetches
//! on mount and whenever its refresh key changes; the page bumps the key
//! after a save for this kind.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use records::{EntityKind, Record, RecordFields};

use crate::net::sync::load_collection;
use crate::state::collection::CollectionState;

#[component]
pub fn EntityCard<F: RecordFields>(
    #[prop(into)] refresh_key: Signal<u64>,
    on_add: Callback<EntityKind>,
    on_edit: Callback<Record<F>>,
) -> impl IntoView {
    let state = RwSignal::new(CollectionState::<F>::default());

    Effect::new(move || {
        refresh_key.track();
        load_collection(state);
    });

    let expanded = move || state.with(|s| s.expanded);
    let loading = move || state.with(|s| s.loading);

    view! {
        <section class="info-card">
            <header class="info-card__header">
                <button
                    class="info-card__toggle"
                    on:click=move |_| state.update(CollectionState::toggle_expanded)
                    aria-expanded=move || expanded().to_string()
                >
                    <span class="info-card__title">{F::KIND.card_title()}</span>
                    <span class="info-card__chevron" aria-hidden="true">
                        {move || if expanded() { "▾" } else { "▸" }}
                    </span>
                </button>
                <Show when=expanded>
                    <button
                        class="btn btn--primary info-card__add"
                        disabled=loading
                        on:click=move |_| on_add.run(F::KIND)
                    >
                        "Add New"
                    </button>
                </Show>
            </header>
            <Show when=expanded>
                <div class="info-card__body">{move || card_body(state, on_edit)}</div>
            </Show>
        </section>
    }
}

fn card_body<F: RecordFields>(state: RwSignal<CollectionState<F>>, on_edit: Callback<Record<F>>) -> AnyView {
    state.with(|s| {
        if s.loading {
            return view! { <p class="info-card__status">"Loading..."</p> }.into_any();
        }
        if let Some(error) = &s.error {
            return view! { <p class="info-card__error">{error.clone()}</p> }.into_any();
        }
        if s.items.is_empty() {
            return view! { <p class="info-card__empty">{F::KIND.empty_message()}</p> }.into_any();
        }
        let rows = s
            .items
            .iter()
            .cloned()
            .map(|item| {
                let headline = item.fields.headline();
                let detail = item.fields.detail();
                view! {
                    <li class="info-card__item">
                        <div class="info-card__text">
                            <span class="info-card__headline">{headline}</span>
                            {detail.map(|d| view! { <span class="info-card__detail">{d}</span> })}
                        </div>
                        <button
                            class="btn info-card__edit"
                            title="Edit"
                            on:click=move |_| on_edit.run(item.clone())
                        >
                            "Edit"
                        </button>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="info-card__list">{rows}</ul> }.into_any()
    })
}
