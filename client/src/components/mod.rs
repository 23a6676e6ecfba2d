//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, panels, and table chrome. Page modules own the
//! state they share and hand it down as props.

pub mod edit_panel;
pub mod entity_card;
pub mod pager_footer;
pub mod row_actions;
pub mod sidebar;
pub mod stat_tile;
