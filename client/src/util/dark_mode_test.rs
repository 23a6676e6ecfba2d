use super::*;

#[test]
fn theme_names() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn parse_theme_accepts_only_known_values() {
    assert_eq!(parse_theme("dark"), Some(true));
    assert_eq!(parse_theme("light"), Some(false));
    assert_eq!(parse_theme("true"), None);
    assert_eq!(parse_theme(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_starts_light() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
