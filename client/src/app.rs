//! Root application component with routing, layout, and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::{MobileBar, Sidebar};
use crate::pages::{
    advertisement::AdvertisementPage, change_password::ChangePasswordPage, dashboard::DashboardPage,
    email_list::EmailListPage, product_categories::ProductCategoriesPage, users::UsersPage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI context and lays out the sidebar around the routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Browser-only preferences; the server always renders the defaults.
    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        let prefs = crate::util::ui_persistence::load_sidebar_prefs();
        ui.update(|u| {
            u.dark_mode = dark;
            if let Some(prefs) = prefs {
                u.apply_prefs(prefs);
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/trade-admin.css"/>
        <Title text="Trade Admin"/>

        <Router>
            <div class="layout">
                <Sidebar/>
                <div class="layout__main">
                    <MobileBar/>
                    <main class="layout__content">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=DashboardPage/>
                            <Route path=StaticSegment("advertisement") view=AdvertisementPage/>
                            <Route path=StaticSegment("users") view=UsersPage/>
                            <Route path=StaticSegment("email-list") view=EmailListPage/>
                            <Route path=StaticSegment("product-categories") view=ProductCategoriesPage/>
                            <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
