//! Blocking browser dialogs used by delete flows.
//!
//! On the server both are inert: `confirm` answers `false` so nothing is
//! deleted during rendering.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use records::EntityKind;

/// Question asked before deleting a record of `kind`.
#[must_use]
pub fn delete_prompt(kind: EntityKind) -> String {
    format!("Are you sure you want to delete this {}?", kind.label().to_lowercase())
}

pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}
