//! Dashboard summary tile.

use leptos::prelude::*;

#[component]
pub fn StatTile(title: &'static str, #[prop(into)] value: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <p class="stat-tile__title">{title}</p>
            <p class="stat-tile__value">{move || value.get().map_or_else(|| "—".to_owned(), |v| v.to_string())}</p>
        </div>
    }
}
