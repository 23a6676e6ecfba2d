//! Collaborator calls bound to page signals.
//!
//! Results are written back with `try_update`, which is a no-op once the
//! owning component has been disposed, so completions after navigation are
//! dropped instead of touching dead state.

use leptos::prelude::*;
use records::{RecordFields, RecordId};

use crate::net::api::{HttpApi, RecordApi};
use crate::state::collection::CollectionState;
use crate::util::dialog;

/// Fetch `F`'s collection into `state`. Completions of superseded fetches are dropped.
pub fn load_collection<F: RecordFields>(state: RwSignal<CollectionState<F>>) {
    let Some(ticket) = state.try_update(|s| s.begin_load()) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = RecordApi::<F>::list(&HttpApi).await;
        if let Err(err) = &result {
            leptos::logging::warn!("{} load failed: {err}", F::KIND);
        }
        state.try_update(|s| s.finish_load(ticket, result));
    });
}

/// Delete `id` and alert when the collaborator declines or fails.
pub fn delete_record<F: RecordFields>(state: RwSignal<CollectionState<F>>, id: RecordId) {
    leptos::task::spawn_local(async move {
        let result = RecordApi::<F>::delete(&HttpApi, &id).await;
        if let Some(Some(notice)) = state.try_update(|s| s.apply_delete(&id, result)) {
            leptos::logging::warn!("{} delete of {id}: {notice}", F::KIND);
            dialog::alert(&notice);
        }
    });
}

/// Ask first, then [`delete_record`].
pub fn confirm_and_delete<F: RecordFields>(state: RwSignal<CollectionState<F>>, id: RecordId) {
    if dialog::confirm(&dialog::delete_prompt(F::KIND)) {
        delete_record(state, id);
    }
}
