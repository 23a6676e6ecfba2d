//! Client state machines behind the admin pages.
//!
//! DESIGN
//! ======
//! Each type here is plain data with synchronous transitions. Components wrap
//! them in `RwSignal`s and perform network calls between transitions, so the
//! rules are testable without a browser.

pub mod collection;
pub mod editor;
pub mod menu;
pub mod pager;
pub mod panel;
pub mod password;
pub mod ui;
