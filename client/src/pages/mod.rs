//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (its panel coordinator, table
//! state, and pagers) and delegates rendering details to `components`.

pub mod advertisement;
pub mod change_password;
pub mod dashboard;
pub mod email_list;
pub mod product_categories;
pub mod users;
