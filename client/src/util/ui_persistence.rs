//! Sidebar layout persisted in `localStorage`.
//!
//! Only the desktop collapse flag survives a reload. The mobile drawer and
//! all entity data start fresh on every visit.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use crate::state::ui::SidebarPrefs;

/// Storage key of the serialized [`SidebarPrefs`].
pub const SIDEBAR_PREFS_KEY: &str = "trade_admin_sidebar";

/// Decode a stored value. Corrupt or outdated entries count as unset.
#[must_use]
pub fn decode_prefs(raw: &str) -> Option<SidebarPrefs> {
    serde_json::from_str(raw).ok()
}

#[must_use]
pub fn encode_prefs(prefs: SidebarPrefs) -> String {
    // A struct of one bool always serializes.
    serde_json::to_string(&prefs).unwrap_or_else(|_| String::from("{}"))
}

/// Saved layout, or `None` off the browser or when nothing was stored.
pub fn load_sidebar_prefs() -> Option<SidebarPrefs> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        decode_prefs(&storage.get_item(SIDEBAR_PREFS_KEY).ok().flatten()?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remember the layout. Storage failures are ignored.
pub fn save_sidebar_prefs(prefs: SidebarPrefs) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(SIDEBAR_PREFS_KEY, &encode_prefs(prefs));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefs;
    }
}
