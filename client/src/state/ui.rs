//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of entity state so the shell can change
//! without touching cards or panels.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

/// Sidebar preference persisted across visits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarPrefs {
    pub collapsed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Desktop sidebar shrunk to icons.
    pub sidebar_collapsed: bool,
    /// Mobile drawer shown over the page.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_mobile_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Navigation closes the mobile drawer.
    pub fn navigated(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_collapsed(&mut self) -> SidebarPrefs {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_prefs()
    }

    #[must_use]
    pub fn sidebar_prefs(&self) -> SidebarPrefs {
        SidebarPrefs { collapsed: self.sidebar_collapsed }
    }

    pub fn apply_prefs(&mut self, prefs: SidebarPrefs) {
        self.sidebar_collapsed = prefs.collapsed;
    }
}
