//! Slide-over form that creates or edits one record.
//!
//! DESIGN
//! ======
//! The panel is generic over the entity's field set and renders its inputs
//! from the schema. Open/closed and add/edit come from the page's
//! [`PanelCoordinator`]; the panel only reports close and save outcomes.
//!
//! ERROR HANDLING
//! ==============
//! Validation and save failures render inline under the form. Close is
//! unavailable while a save is in flight.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use records::{EntityKind, FieldSpec, InputKind, Record, RecordFields};

use crate::net::api::HttpApi;
use crate::state::editor::EditorState;
use crate::state::panel::{ActivePanel, PanelCoordinator, PanelEvent, PanelMode};

// =============================================================================
// COORDINATOR WIRING
// =============================================================================

/// The page's active panel. Memoized so panels only react to real changes.
pub fn active_panel(coordinator: RwSignal<PanelCoordinator>) -> Memo<ActivePanel> {
    Memo::new(move |_| coordinator.with(|c| c.active.clone()))
}

/// Refresh counter for `kind`. Opening or closing panels does not touch it.
pub fn refresh_key(coordinator: RwSignal<PanelCoordinator>, kind: EntityKind) -> Memo<u64> {
    Memo::new(move |_| coordinator.with(|c| c.refresh.get(kind)))
}

/// "Add New" handler for a card on a page owning `coordinator`.
pub fn open_add(coordinator: RwSignal<PanelCoordinator>) -> Callback<EntityKind> {
    Callback::new(move |kind| coordinator.update(|c| c.handle(PanelEvent::OpenAdd(kind))))
}

/// Row edit handler for `F`'s card or table.
pub fn open_edit<F: RecordFields>(coordinator: RwSignal<PanelCoordinator>) -> Callback<Record<F>> {
    Callback::new(move |record| coordinator.update(|c| c.handle(PanelEvent::OpenEdit(F::wrap(record)))))
}

pub fn close_panel(coordinator: RwSignal<PanelCoordinator>) -> Callback<()> {
    Callback::new(move |()| coordinator.update(|c| c.handle(PanelEvent::Close)))
}

/// Save handler for `F`'s panel: refreshes `F`'s card only.
pub fn panel_saved<F: RecordFields>(coordinator: RwSignal<PanelCoordinator>) -> Callback<Record<F>> {
    Callback::new(move |_record| coordinator.update(|c| c.handle(PanelEvent::SaveSuccess(F::KIND))))
}

// =============================================================================
// PANEL
// =============================================================================

#[component]
pub fn EditPanel<F: RecordFields>(
    #[prop(into)] panel: Signal<ActivePanel>,
    on_close: Callback<()>,
    on_saved: Callback<Record<F>>,
) -> impl IntoView {
    let editor = RwSignal::new(EditorState::default());

    // Reseed whenever this kind's panel is (re)opened.
    Effect::new(move || {
        let active = panel.get();
        if let Some(mode) = active.mode_for(F::KIND) {
            let item = active.edit_item::<F>();
            editor.update(|e| e.open(mode, item.as_ref()));
        }
    });

    let is_open = move || panel.with(|p| p.is_open_for(F::KIND));
    let submitting = move || editor.with(|e| e.submitting);
    let request_close = move || {
        if !editor.with_untracked(|e| e.submitting) {
            on_close.run(());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = editor.try_update(|e| e.begin_submit::<F>()).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = request.send(&HttpApi).await;
            if let Err(err) = &result {
                leptos::logging::warn!("{} save failed: {err}", F::KIND);
            }
            if let Some(Some(record)) = editor.try_update(|e| e.finish_submit(result)) {
                on_saved.run(record);
                on_close.run(());
            }
        });
    };

    let label = F::KIND.label();
    let title = move || match editor.with(|e| e.mode) {
        PanelMode::Add => format!("Add New {label}"),
        PanelMode::Edit => format!("Edit {label}"),
    };
    let submit_label = move || {
        editor.with(|e| match (e.submitting, e.mode) {
            (true, _) => "Saving...".to_owned(),
            (false, PanelMode::Add) => format!("Add New {label}"),
            (false, PanelMode::Edit) => "Save Changes".to_owned(),
        })
    };

    view! {
        <Show when=is_open>
            <div
                class="panel-overlay"
                class:panel-overlay--busy=submitting
                on:click=move |_| request_close()
            ></div>
            <aside class="edit-panel" role="dialog" aria-modal="true">
                <header class="edit-panel__header">
                    <h2 class="edit-panel__title">{title}</h2>
                    <button
                        class="edit-panel__close"
                        disabled=submitting
                        on:click=move |_| request_close()
                        aria-label="Close"
                    >
                        "✕"
                    </button>
                </header>
                <form class="edit-panel__form" novalidate=true on:submit=on_submit>
                    {F::schema()
                        .iter()
                        .map(|spec| field_input(F::KIND, spec, editor))
                        .collect_view()}
                    <Show when=move || editor.with(|e| e.error.is_some())>
                        <p class="edit-panel__error" role="alert">
                            {move || editor.with(|e| e.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <button type="submit" class="btn btn--primary edit-panel__submit" disabled=submitting>
                        {submit_label}
                    </button>
                </form>
            </aside>
        </Show>
    }
}

fn field_input(kind: EntityKind, spec: &'static FieldSpec, editor: RwSignal<EditorState>) -> impl IntoView {
    let id = format!("{}-{}", kind.slug(), spec.key);
    let value = move || editor.with(|e| e.form.get(spec.key).to_owned());
    let set = move |raw: String| editor.update(|e| e.set_field(spec.key, raw));
    let disabled = move || editor.with(|e| e.submitting);
    let text_type = if spec.input == InputKind::Email { "email" } else { "text" };

    let input = match spec.input {
        InputKind::Text | InputKind::Email => view! {
            <input
                id=id.clone()
                class="form__input"
                type=text_type
                placeholder=spec.placeholder
                required=spec.required
                disabled=disabled
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        InputKind::Number { min } => view! {
            <input
                id=id.clone()
                class="form__input"
                type="number"
                min=min.to_string()
                placeholder=spec.placeholder
                required=spec.required
                disabled=disabled
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        InputKind::TextArea => view! {
            <textarea
                id=id.clone()
                class="form__input form__input--area"
                placeholder=spec.placeholder
                required=spec.required
                disabled=disabled
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        InputKind::Select { options } => view! {
            <select
                id=id.clone()
                class="form__input"
                disabled=disabled
                prop:value=value
                on:change=move |ev| set(event_target_value(&ev))
            >
                {options.iter().map(|option| view! { <option value=*option>{*option}</option> }).collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <label class="form__field" for=id>
            <span class="form__label">{spec.label}</span>
            {input}
        </label>
    }
}
