//! Dashboard page with account and mailing-list counts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Reads `/api/stats` once on mount; the numbers are not kept
//! live while the page is open.

use leptos::prelude::*;
use records::DashboardStats;

use crate::components::stat_tile::StatTile;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<DashboardStats>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_stats().await {
                Ok(loaded) => {
                    stats.try_set(Some(loaded));
                }
                Err(err) => {
                    leptos::logging::warn!("stats load failed: {err}");
                    error.try_set(Some("Failed to load dashboard stats.".to_owned()));
                }
            }
        });
    }

    let count = move |pick: fn(&DashboardStats) -> usize| Signal::derive(move || stats.with(|s| s.as_ref().map(pick)));

    view! {
        <div class="page page--dashboard">
            <h1 class="page__title">"Dashboard"</h1>
            <Show when=move || error.with(Option::is_some)>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="stat-grid">
                <StatTile title="Total Users" value=count(|s| s.total_users)/>
                <StatTile title="Admins" value=count(|s| s.admins)/>
                <StatTile title="Editors" value=count(|s| s.editors)/>
                <StatTile title="Registered Emails" value=count(|s| s.registered_emails)/>
                <StatTile title="Newsletter Subscribers" value=count(|s| s.newsletter_emails)/>
            </div>
        </div>
    }
}
