//! "Showing a-b of n" footer with previous/next buttons.

use leptos::prelude::*;

use crate::state::pager::Pager;

#[component]
pub fn PagerFooter(pager: RwSignal<Pager>) -> impl IntoView {
    view! {
        <div class="pager">
            <p class="pager__summary">{move || pager.with(Pager::footer)}</p>
            <div class="pager__buttons">
                <button
                    class="pager__button"
                    disabled=move || !pager.with(Pager::has_prev)
                    on:click=move |_| pager.update(Pager::prev)
                    aria-label="Previous"
                >
                    "‹"
                </button>
                <button
                    class="pager__button"
                    disabled=move || !pager.with(Pager::has_next)
                    on:click=move |_| pager.update(Pager::next)
                    aria-label="Next"
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
