//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from page and component logic so
//! the rest of the crate stays testable off the browser.

pub mod dark_mode;
pub mod dialog;
pub mod ui_persistence;
