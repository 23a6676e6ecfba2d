//! Row action dropdown state for one table.
//!
//! A table holds a single open-row id, so opening one row's menu closes any
//! other. Outside-click detection compares the pointer with the rendered
//! [`Bounds`] of the trigger and of the floating menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowMenuState {
    open: Option<String>,
}

impl RowMenuState {
    /// Trigger clicked for `row`: open it, or close it if it is already open.
    pub fn toggle(&mut self, row: &str) {
        if self.is_open(row) {
            self.open = None;
        } else {
            self.open = Some(row.to_owned());
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub fn is_open(&self, row: &str) -> bool {
        self.open.as_deref() == Some(row)
    }

    #[must_use]
    pub fn open_row(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

/// Row id scoped to its table, so two tables on a page never collide.
#[must_use]
pub fn menu_id(prefix: &str, id: &str) -> String {
    format!("{prefix}-{id}")
}

/// Rendered rectangle of a menu in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Edges count as inside.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// True when `(x, y)` falls in any of `regions`.
///
/// The menu floats outside its trigger's box, so both rectangles are passed.
#[must_use]
pub fn pointer_within(regions: &[Bounds], x: f64, y: f64) -> bool {
    regions.iter().any(|bounds| bounds.contains(x, y))
}

/// One entry of a row dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowAction {
    pub label: String,
    pub icon: Option<&'static str>,
    pub danger: bool,
}

impl RowAction {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), icon: None, danger: false }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}
