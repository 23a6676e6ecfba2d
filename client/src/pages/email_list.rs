//! Email list: registered users and newsletter subscribers in two tables.
//!
//! Both tables page over the one email collection, split by audience. They
//! share a single row-menu state with table-prefixed row ids, so opening a
//! menu in either table closes any other.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use records::{Audience, EmailFields, EntityKind, Record};

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

pub const EMAILS_PER_PAGE: usize = 9;

#[component]
pub fn EmailListPage() -> impl IntoView {
    let coordinator = RwSignal::new(PanelCoordinator::default());
    let emails = RwSignal::new(CollectionState::<EmailFields>::default());
    let menu = RwSignal::new(RowMenuState::default());
    let refresh = refresh_key(coordinator, EntityKind::Email);
    let on_add = open_add(coordinator);

    Effect::new(move || {
        refresh.track();
        load_collection(emails);
    });

    view! {
        <div class="page page--email-list">
            <div class="page__header">
                <h1 class="page__title">"Email List"</h1>
                <button class="btn btn--primary" on:click=move |_| on_add.run(EntityKind::Email)>
                    "Add New Email"
                </button>
            </div>
            <Show when=move || emails.with(|e| e.error.is_some())>
                <p class="page__error">{move || emails.with(|e| e.error.clone().unwrap_or_default())}</p>
            </Show>
            <EmailTable
                title="Registered Users"
                audience=Audience::Registered
                emails=emails
                menu=menu
                coordinator=coordinator
            />
            <EmailTable
                title="Newsletter Emails"
                audience=Audience::Newsletter
                emails=emails
                menu=menu
                coordinator=coordinator
            />
            <EditPanel
                panel=active_panel(coordinator)
                on_close=close_panel(coordinator)
                on_saved={panel_saved::<EmailFields>(coordinator)}
            />
        </div>
    }
}

#[component]
fn EmailTable(
    title: &'static str,
    audience: Audience,
    emails: RwSignal<CollectionState<EmailFields>>,
    menu: RwSignal<RowMenuState>,
    coordinator: RwSignal<PanelCoordinator>,
) -> impl IntoView {
    let pager = RwSignal::new(Pager::new(EMAILS_PER_PAGE));
    let on_view = open_edit::<EmailFields>(coordinator);
    let matching = move || {
        emails.with(|e| {
            e.items
                .iter()
                .filter(|r| r.fields.audience == audience)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    Effect::new(move || {
        let total = matching().len();
        pager.update(|p| p.set_total(total));
    });

    let registered = audience == Audience::Registered;
    let prefix = audience.as_str();
    let delete_label = if registered { "Delete User" } else { "Delete Email" };

    view! {
        <section class="table-card">
            <h2 class="table-card__title">{title}</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        {registered.then(|| view! { <th>"Name"</th> })}
                        <th>"Email Address"</th>
                        <th class="data-table__actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = pager.with(|p| p.slice(&matching()).to_vec());
                        if rows.is_empty() && emails.with(|e| e.loading) {
                            return view! {
                                <tr>
                                    <td class="data-table__empty" colspan="4">"Loading..."</td>
                                </tr>
                            }
                                .into_any();
                        }
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="data-table__empty" colspan="4">"No data available."</td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|record| {
                                let items = vec![
                                    MenuItem::new(RowAction::new("View Details").with_icon("👁"), {
                                        let record = record.clone();
                                        move || on_view.run(record.clone())
                                    }),
                                    MenuItem::new(RowAction::new(delete_label).with_icon("🗑").danger(), {
                                        let id = record.id.clone();
                                        move || confirm_and_delete(emails, id.clone())
                                    }),
                                ];
                                let row = menu_id(prefix, record.id.as_str());
                                email_row(record, registered, row, menu, items)
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            <PagerFooter pager=pager/>
        </section>
    }
}

fn email_row(
    record: Record<EmailFields>,
    registered: bool,
    row: String,
    menu: RwSignal<RowMenuState>,
    items: Vec<MenuItem>,
) -> impl IntoView {
    let Record { id, fields } = record;
    let name = fields.name.unwrap_or_default();
    view! {
        <tr>
            <td>{id.to_string()}</td>
            {registered.then(|| view! { <td>{name}</td> })}
            <td class="data-table__email">{fields.email}</td>
            <td class="data-table__actions">
                <RowActions row=row menu=menu items=items/>
            </td>
        </tr>
    }
}
