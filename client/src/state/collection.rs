//! Card list state: the fetched collection, load flags, and stale-load guard.
//!
//! Each fetch takes a ticket from [`CollectionState::begin_load`]. Only the
//! completion carrying the latest ticket is applied, so a slow earlier fetch
//! can never overwrite a newer one.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use records::{DeleteOutcome, Record, RecordFields, RecordId};

use crate::net::api::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState<F> {
    pub items: Vec<Record<F>>,
    pub loading: bool,
    pub error: Option<String>,
    pub expanded: bool,
    ticket: u64,
}

/// A fresh collection has not been fetched yet, so it starts out loading.
impl<F> Default for CollectionState<F> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, expanded: true, ticket: 0 }
    }
}

impl<F: RecordFields> CollectionState<F> {
    /// Enter loading and return the ticket the completion must present.
    pub fn begin_load(&mut self) -> u64 {
        self.ticket += 1;
        self.loading = true;
        self.ticket
    }

    /// Apply a fetch completion. Returns `false` when `ticket` is stale.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<Record<F>>, ApiError>) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(_) => self.error = Some(F::KIND.load_error()),
        }
        true
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Drop a deleted row without refetching.
    pub fn remove_item(&mut self, id: &RecordId) {
        self.items.retain(|r| &r.id != id);
    }

    /// Apply a delete outcome and return the alert to show, if any.
    ///
    /// A declined delete leaves the list as it was and is not an error.
    pub fn apply_delete(&mut self, id: &RecordId, result: Result<DeleteOutcome, ApiError>) -> Option<String> {
        let noun = F::KIND.label().to_lowercase();
        match result {
            Ok(DeleteOutcome::Deleted) => {
                self.remove_item(id);
                None
            }
            Ok(DeleteOutcome::Declined) => Some(format!("Could not delete the {noun}")),
            Err(err) => Some(format!("Error deleting {noun}: {err}")),
        }
    }

    /// Nothing to show: loaded, no error, no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
