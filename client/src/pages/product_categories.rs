//! Product categories table with inline edit/delete buttons.
//!
//! Deletes ask for confirmation first. Protected categories come back as a
//! declined delete and stay in the table with an alert.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use records::{CategoryFields, EntityKind};

use crate::components::edit_panel::{
    EditPanel, active_panel, close_panel, open_add, open_edit, panel_saved, refresh_key,
};
use crate::net::sync::{confirm_and_delete, load_collection};
use crate::state::collection::CollectionState;
use crate::state::panel::PanelCoordinator;

#[component]
pub fn ProductCategoriesPage() -> impl IntoView {
    let coordinator = RwSignal::new(PanelCoordinator::default());
    let categories = RwSignal::new(CollectionState::<CategoryFields>::default());
    let refresh = refresh_key(coordinator, EntityKind::Category);
    let on_add = open_add(coordinator);
    let on_edit = open_edit::<CategoryFields>(coordinator);

    Effect::new(move || {
        refresh.track();
        load_collection(categories);
    });

    let body = move || {
        categories.with(|c| {
            if c.loading && c.items.is_empty() {
                return view! { <p class="page__status">"Loading categories..."</p> }.into_any();
            }
            if let Some(error) = &c.error {
                return view! { <p class="page__error">{error.clone()}</p> }.into_any();
            }
            if c.items.is_empty() {
                return view! { <p class="page__status">{EntityKind::Category.empty_message()}</p> }.into_any();
            }
            let rows = c
                .items
                .iter()
                .cloned()
                .map(|category| {
                    let name = category.fields.name.clone();
                    let parent = category.fields.parent_name.clone().unwrap_or_else(|| "—".to_owned());
                    let id = category.id.clone();
                    view! {
                        <tr>
                            <td>{name.clone()}</td>
                            <td>{parent}</td>
                            <td class="data-table__actions">
                                <button
                                    class="btn btn--small"
                                    aria-label=format!("Edit {name}")
                                    on:click=move |_| on_edit.run(category.clone())
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn--small btn--danger"
                                    aria-label=format!("Delete {name}")
                                    on:click=move |_| confirm_and_delete(categories, id.clone())
                                >
                                    "Delete"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Parent"</th>
                            <th class="data-table__actions"></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
                .into_any()
        })
    };

    view! {
        <div class="page page--categories">
            <div class="page__header">
                <h1 class="page__title">"Product Categories"</h1>
                <button class="btn btn--primary" on:click=move |_| on_add.run(EntityKind::Category)>
                    "Add New Category"
                </button>
            </div>
            <div class="table-card">{body}</div>
            <EditPanel
                panel=active_panel(coordinator)
                on_close=close_panel(coordinator)
                on_saved={panel_saved::<CategoryFields>(coordinator)}
            />
        </div>
    }
}
