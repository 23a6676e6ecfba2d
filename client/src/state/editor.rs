//! Edit panel form state: seeding, local validation, and the save lifecycle.
//!
//! DESIGN
//! ======
//! The panel component owns one [`EditorState`] in a `RwSignal` and drives it
//! through three steps: [`EditorState::begin_submit`] validates and yields a
//! [`SaveRequest`] (or nothing), the request is sent through a
//! [`RecordApi`], and [`EditorState::finish_submit`] records the outcome.
//! Splitting the steps keeps the async call outside the signal update.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the collaborator. Collaborator failures
//! are shown inline and leave the panel open for a retry.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use records::{FormValues, Record, RecordFields, RecordId};

use crate::net::api::{ApiError, RecordApi};
use crate::state::panel::PanelMode;

/// Shown when a save fails without a usable message.
pub const SAVE_FALLBACK_MESSAGE: &str = "Failed to save. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub mode: PanelMode,
    pub editing_id: Option<RecordId>,
    pub form: FormValues,
    pub error: Option<String>,
    pub submitting: bool,
}

impl EditorState {
    /// Reset for a freshly opened panel.
    ///
    /// Edit mode copies every field of `item`; add mode ignores it and starts
    /// from the schema defaults.
    pub fn open<F: RecordFields>(&mut self, mode: PanelMode, item: Option<&Record<F>>) {
        let (editing_id, form) = match (mode, item) {
            (PanelMode::Edit, Some(item)) => (Some(item.id.clone()), item.fields.to_form()),
            _ => (None, F::blank_form()),
        };
        *self = Self { mode, editing_id, form, error: None, submitting: false };
    }

    pub fn set_field(&mut self, key: &'static str, value: impl Into<String>) {
        self.form.set(key, value);
    }

    /// Validate the form and enter the submitting state.
    ///
    /// Returns `None` while a save is already in flight, or when validation
    /// fails (the message is kept in [`EditorState::error`]).
    pub fn begin_submit<F: RecordFields>(&mut self) -> Option<SaveRequest<F>> {
        if self.submitting {
            return None;
        }
        self.error = None;
        let fields = match F::from_form(&self.form) {
            Ok(fields) => fields,
            Err(err) => {
                self.error = Some(err.message);
                return None;
            }
        };
        let target = match (self.mode, &self.editing_id) {
            (PanelMode::Edit, Some(id)) => SaveTarget::Update(id.clone()),
            _ => SaveTarget::Create,
        };
        self.submitting = true;
        Some(SaveRequest { target, fields })
    }

    /// Record a save outcome. Returns the saved value when the panel should close.
    pub fn finish_submit<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        self.submitting = false;
        match result {
            Ok(saved) => Some(saved),
            Err(err) => {
                let message = err.to_string();
                self.error = Some(if message.trim().is_empty() { SAVE_FALLBACK_MESSAGE.to_owned() } else { message });
                None
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(RecordId),
}

/// A validated save, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest<F> {
    pub target: SaveTarget,
    pub fields: F,
}

impl<F: RecordFields> SaveRequest<F> {
    /// Create or update through `api`, depending on the panel mode.
    ///
    /// # Errors
    ///
    /// Propagates the collaborator's [`ApiError`].
    pub async fn send(&self, api: &impl RecordApi<F>) -> Result<Record<F>, ApiError> {
        match &self.target {
            SaveTarget::Create => api.create(&self.fields).await,
            SaveTarget::Update(id) => api.update(id, &self.fields).await,
        }
    }
}
