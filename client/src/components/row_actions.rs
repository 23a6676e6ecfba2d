//! Per-row "⋮" dropdown for data tables.
//!
//! DESIGN
//! ======
//! Open state lives in the table's shared [`RowMenuState`], so at most one
//! menu per table is open. The floating menu installs a window pointer-down
//! listener when it mounts and removes it in `on_cleanup`, which covers both
//! closing and unmounting the row. Hit testing uses the rendered bounds of
//! the trigger and of the absolutely positioned menu, so pressing a menu
//! item runs it and pressing the trigger toggles instead of closing and
//! reopening.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::menu::{Bounds, pointer_within};
use crate::state::menu::{RowAction, RowMenuState};

/// One dropdown entry and what it does.
#[derive(Clone)]
pub struct MenuItem {
    pub action: RowAction,
    pub on_select: Callback<()>,
}

impl MenuItem {
    pub fn new(action: RowAction, on_select: impl Fn() + Send + Sync + 'static) -> Self {
        Self { action, on_select: Callback::new(move |()| on_select()) }
    }
}

#[component]
pub fn RowActions(
    /// Table-scoped row id (see `menu_id`).
    #[prop(into)]
    row: String,
    menu: RwSignal<RowMenuState>,
    items: Vec<MenuItem>,
) -> impl IntoView {
    let trigger = NodeRef::<leptos::html::Button>::new();
    let label = format!("Actions for {row}");
    let is_open = Memo::new({
        let row = row.clone();
        move |_| menu.with(|m| m.is_open(&row))
    });

    view! {
        <div class="row-actions">
            <button
                node_ref=trigger
                class="row-actions__trigger"
                class:row-actions__trigger--open=move || is_open.get()
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
                aria-label=label
                on:click=move |_| menu.update(|m| m.toggle(&row))
            >
                "⋮"
            </button>
            <Show when=move || is_open.get()>
                <RowMenu trigger=trigger menu=menu items=items.clone()/>
            </Show>
        </div>
    }
}

#[component]
fn RowMenu(
    trigger: NodeRef<leptos::html::Button>,
    menu: RwSignal<RowMenuState>,
    items: Vec<MenuItem>,
) -> impl IntoView {
    let panel = NodeRef::<leptos::html::Div>::new();
    let listener = window_event_listener(leptos::ev::pointerdown, move |ev| {
        if !pointer_inside(trigger, panel, &ev) {
            menu.try_update(RowMenuState::close);
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <div class="row-actions__menu" role="menu" node_ref=panel>
            {items
                .into_iter()
                .map(|MenuItem { action, on_select }| {
                    view! {
                        <button
                            class="row-actions__item"
                            class:row-actions__item--danger=action.danger
                            role="menuitem"
                            on:click=move |_| {
                                on_select.run(());
                                menu.try_update(RowMenuState::close);
                            }
                        >
                            {action.icon.map(|icon| view! { <span class="row-actions__icon" aria-hidden="true">{icon}</span> })}
                            {action.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn pointer_inside(
    trigger: NodeRef<leptos::html::Button>,
    panel: NodeRef<leptos::html::Div>,
    ev: &leptos::ev::PointerEvent,
) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let mut regions = Vec::with_capacity(2);
        if let Some(el) = trigger.get_untracked() {
            regions.push(rendered_bounds(&el.get_bounding_client_rect()));
        }
        if let Some(el) = panel.get_untracked() {
            regions.push(rendered_bounds(&el.get_bounding_client_rect()));
        }
        pointer_within(&regions, f64::from(ev.client_x()), f64::from(ev.client_y()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (trigger, panel, ev);
        true
    }
}

#[cfg(feature = "hydrate")]
fn rendered_bounds(rect: &web_sys::DomRect) -> Bounds {
    Bounds { left: rect.left(), top: rect.top(), right: rect.right(), bottom: rect.bottom() }
}
