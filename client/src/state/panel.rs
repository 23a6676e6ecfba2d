//! Page-level coordination of edit panels and card refreshes.
//!
//! DESIGN
//! ======
//! A page owns one [`PanelCoordinator`] in a `RwSignal`. Its single
//! [`ActivePanel`] value makes "at most one panel open" structural: opening a
//! panel for one kind replaces whatever was open before. Refresh counters are
//! per kind and only grow; a card re-fetches when its counter changes.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::collections::BTreeMap;

use records::{AnyRecord, EntityKind, Record, RecordFields};

/// Whether a panel creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelMode {
    #[default]
    Add,
    Edit,
}

/// The one edit panel a page may show.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActivePanel {
    #[default]
    Closed,
    Open {
        kind: EntityKind,
        mode: PanelMode,
        /// Present in edit mode.
        item: Option<AnyRecord>,
    },
}

impl ActivePanel {
    #[must_use]
    pub fn is_open_for(&self, kind: EntityKind) -> bool {
        matches!(self, Self::Open { kind: open, .. } if *open == kind)
    }

    /// Mode of the panel for `kind`, if that panel is open.
    #[must_use]
    pub fn mode_for(&self, kind: EntityKind) -> Option<PanelMode> {
        match self {
            Self::Open { kind: open, mode, .. } if *open == kind => Some(*mode),
            _ => None,
        }
    }

    /// Typed edit item for `F`'s panel, if that panel is open in edit mode.
    #[must_use]
    pub fn edit_item<F: RecordFields>(&self) -> Option<Record<F>> {
        match self {
            Self::Open { kind, item: Some(item), .. } if *kind == F::KIND => F::unwrap_any(item).cloned(),
            _ => None,
        }
    }
}

/// Monotonic per-kind refresh counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefreshKeys(BTreeMap<EntityKind, u64>);

impl RefreshKeys {
    #[must_use]
    pub fn get(&self, kind: EntityKind) -> u64 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, kind: EntityKind) {
        *self.0.entry(kind).or_insert(0) += 1;
    }
}

/// Requests a page's cards and panels send upward.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    OpenAdd(EntityKind),
    OpenEdit(AnyRecord),
    Close,
    SaveSuccess(EntityKind),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelCoordinator {
    pub active: ActivePanel,
    pub refresh: RefreshKeys,
}

impl PanelCoordinator {
    pub fn handle(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::OpenAdd(kind) => {
                self.active = ActivePanel::Open { kind, mode: PanelMode::Add, item: None };
            }
            PanelEvent::OpenEdit(item) => {
                self.active = ActivePanel::Open { kind: item.kind(), mode: PanelMode::Edit, item: Some(item) };
            }
            PanelEvent::Close => self.active = ActivePanel::Closed,
            PanelEvent::SaveSuccess(kind) => {
                self.refresh.bump(kind);
                self.active = ActivePanel::Closed;
            }
        }
    }
}
