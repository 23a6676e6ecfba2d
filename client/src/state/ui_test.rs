use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_with_sidebar_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_open);
    assert!(!state.sidebar_collapsed);
}

// =============================================================
// Sidebar
// =============================================================

#[test]
fn mobile_toggle_and_navigation() {
    let mut state = UiState::default();
    state.toggle_mobile_sidebar();
    assert!(state.sidebar_open);
    state.navigated();
    assert!(!state.sidebar_open);
}

#[test]
fn collapse_round_trips_through_prefs() {
    let mut state = UiState::default();
    let prefs = state.toggle_collapsed();
    assert_eq!(prefs, SidebarPrefs { collapsed: true });

    let mut restored = UiState::default();
    restored.apply_prefs(prefs);
    assert!(restored.sidebar_collapsed);
}

#[test]
fn prefs_serialize_as_json() {
    let json = serde_json::to_string(&SidebarPrefs { collapsed: true }).unwrap();
    assert_eq!(json, r#"{"collapsed":true}"#);
}
