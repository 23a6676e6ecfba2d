//! Users table with per-row actions and the user edit panel.

use leptos::prelude::*;
use records::format::format_optional_timestamp;
use records::{EntityKind, Record, UserFields};

use crate::components::edit_panel::{
    EditPanel, active_panel, close_panel, open_add, open_edit, panel_saved, refresh_key,
};
use crate::components::pager_footer::PagerFooter;
use crate::components::row_actions::{MenuItem, RowActions};
use crate::net::sync::{confirm_and_delete, load_collection};
use crate::state::collection::CollectionState;
use crate::state::menu::{RowAction, RowMenuState, menu_id};
use crate::state::pager::Pager;
use crate::state::panel::PanelCoordinator;

const USERS_PER_PAGE: usize = 10;

#[component]
pub fn UsersPage() -> impl IntoView {
    let coordinator = RwSignal::new(PanelCoordinator::default());
    let users = RwSignal::new(CollectionState::<UserFields>::default());
    let pager = RwSignal::new(Pager::new(USERS_PER_PAGE));
    let menu = RwSignal::new(RowMenuState::default());
    let refresh = refresh_key(coordinator, EntityKind::User);
    let on_add = open_add(coordinator);
    let on_edit = open_edit::<UserFields>(coordinator);

    Effect::new(move || {
        refresh.track();
        load_collection(users);
    });
    Effect::new(move || {
        let total = users.with(|u| u.items.len());
        pager.update(|p| p.set_total(total));
    });

    let rows = move || {
        let page = pager.get();
        users.with(|u| page.slice(&u.items).to_vec())
    };

    view! {
        <div class="page page--users">
            <div class="page__header">
                <h1 class="page__title">"Users"</h1>
                <button class="btn btn--primary" on:click=move |_| on_add.run(EntityKind::User)>
                    "Add New User"
                </button>
            </div>
            <Show when=move || users.with(|u| u.error.is_some())>
                <p class="page__error">{move || users.with(|u| u.error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Full Name"</th>
                            <th>"Email Address"</th>
                            <th class="data-table__wide">"Join Date"</th>
                            <th class="data-table__wide">"Last Login"</th>
                            <th>"Permission"</th>
                            <th class="data-table__actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|user| user_row(user, menu, users, on_edit))
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
            <PagerFooter pager=pager/>
            <EditPanel
                panel=active_panel(coordinator)
                on_close=close_panel(coordinator)
                on_saved={panel_saved::<UserFields>(coordinator)}
            />
        </div>
    }
}

fn user_row(
    user: Record<UserFields>,
    menu: RwSignal<RowMenuState>,
    users: RwSignal<CollectionState<UserFields>>,
    on_edit: Callback<Record<UserFields>>,
) -> impl IntoView {
    let permission = user.fields.permission.as_str();
    let badge_class = format!("badge badge--{}", permission.to_lowercase());
    let edit_target = user.clone();
    let delete_id = user.id.clone();
    let items = vec![
        MenuItem::new(RowAction::new("Edit").with_icon("✎"), move || on_edit.run(edit_target.clone())),
        MenuItem::new(RowAction::new("Delete").with_icon("🗑").danger(), move || {
            confirm_and_delete(users, delete_id.clone());
        }),
    ];

    view! {
        <tr>
            <td>{user.id.to_string()}</td>
            <td>{user.fields.full_name.clone()}</td>
            <td class="data-table__email">{user.fields.email.clone()}</td>
            <td class="data-table__wide">{format_optional_timestamp(user.fields.joined_at)}</td>
            <td class="data-table__wide">{format_optional_timestamp(user.fields.last_login_at)}</td>
            <td>
                <span class=badge_class>{permission}</span>
            </td>
            <td class="data-table__actions">
                <RowActions row=menu_id("user", user.id.as_str()) menu=menu items=items/>
            </td>
        </tr>
    }
}
