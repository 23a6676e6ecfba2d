//! Navigation sidebar with the mobile drawer and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the app layout around every page. Reads and writes the
//! shared `UiState` context; layout preferences persist through
//! `util::ui_persistence`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;
use crate::util::{dark_mode, ui_persistence};

/// Route path and label of each navigation entry, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/advertisement", "Advertisement"),
    ("/users", "Users"),
    ("/email-list", "Email List"),
    ("/product-categories", "Product Categories"),
    ("/change-password", "Change Password"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let on_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let on_collapse = move |_| {
        if let Some(prefs) = ui.try_update(UiState::toggle_collapsed) {
            ui_persistence::save_sidebar_prefs(prefs);
        }
    };

    view! {
        <div
            class="sidebar-backdrop"
            class:sidebar-backdrop--open=move || ui.with(|u| u.sidebar_open)
            on:click=move |_| ui.update(UiState::navigated)
        ></div>
        <aside
            class="sidebar"
            class:sidebar--open=move || ui.with(|u| u.sidebar_open)
            class:sidebar--collapsed=move || ui.with(|u| u.sidebar_collapsed)
        >
            <div class="sidebar__brand">
                <a href="/">"Trade Admin"</a>
            </div>
            <nav class="sidebar__nav">
                <ul>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, text)| {
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="sidebar__link"
                                        class:sidebar__link--active=move || pathname.with(|p| p == href)
                                        on:click=move |_| ui.update(UiState::navigated)
                                    >
                                        {text}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <div class="sidebar__footer">
                <button class="btn sidebar__theme" on:click=on_theme title="Toggle dark mode">
                    {move || if ui.with(|u| u.dark_mode) { "☀ Light" } else { "☾ Dark" }}
                </button>
                <button class="btn sidebar__collapse" on:click=on_collapse title="Collapse sidebar">
                    {move || if ui.with(|u| u.sidebar_collapsed) { "»" } else { "«" }}
                </button>
            </div>
        </aside>
    }
}

/// Top bar shown on narrow screens with the drawer toggle.
#[component]
pub fn MobileBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <header class="mobile-bar">
            <button
                class="mobile-bar__toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || ui.with(|u| u.sidebar_open).to_string()
                on:click=move |_| ui.update(UiState::toggle_mobile_sidebar)
            >
                "☰"
            </button>
            <span class="mobile-bar__title">"Trade Admin"</span>
        </header>
    }
}
