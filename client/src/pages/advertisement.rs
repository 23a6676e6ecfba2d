//! Advertisement settings: four entity cards sharing one panel coordinator.

use leptos::prelude::*;
use records::{AdShowFields, AdTypeFields, DurationFields, EntityKind, PromotionPowerFields};

use crate::components::edit_panel::{
    EditPanel, active_panel, close_panel, open_add, open_edit, panel_saved, refresh_key,
};
use crate::components::entity_card::EntityCard;
use crate::state::panel::PanelCoordinator;

#[component]
pub fn AdvertisementPage() -> impl IntoView {
    let coordinator = RwSignal::new(PanelCoordinator::default());
    let panel = active_panel(coordinator);

    view! {
        <div class="page page--advertisement">
            <h1 class="page__title">"Advertisement Settings"</h1>
            <div class="card-grid">
                <EntityCard
                    refresh_key=refresh_key(coordinator, EntityKind::AdType)
                    on_add=open_add(coordinator)
                    on_edit={open_edit::<AdTypeFields>(coordinator)}
                />
                <EntityCard
                    refresh_key=refresh_key(coordinator, EntityKind::PromotionPower)
                    on_add=open_add(coordinator)
                    on_edit={open_edit::<PromotionPowerFields>(coordinator)}
                />
                <EntityCard
                    refresh_key=refresh_key(coordinator, EntityKind::Duration)
                    on_add=open_add(coordinator)
                    on_edit={open_edit::<DurationFields>(coordinator)}
                />
                <EntityCard
                    refresh_key=refresh_key(coordinator, EntityKind::AdShow)
                    on_add=open_add(coordinator)
                    on_edit={open_edit::<AdShowFields>(coordinator)}
                />
            </div>

            <EditPanel panel=panel on_close=close_panel(coordinator) on_saved={panel_saved::<AdTypeFields>(coordinator)}/>
            <EditPanel
                panel=panel
                on_close=close_panel(coordinator)
                on_saved={panel_saved::<PromotionPowerFields>(coordinator)}
            />
            <EditPanel panel=panel on_close=close_panel(coordinator) on_saved={panel_saved::<DurationFields>(coordinator)}/>
            <EditPanel panel=panel on_close=close_panel(coordinator) on_saved={panel_saved::<AdShowFields>(coordinator)}/>
        </div>
    }
}
