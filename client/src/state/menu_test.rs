use super::*;

#[test]
fn only_one_row_open_at_a_time() {
    let mut menu = RowMenuState::default();
    menu.toggle("u-001");
    menu.toggle("u-002");
    assert!(!menu.is_open("u-001"));
    assert!(menu.is_open("u-002"));
    assert_eq!(menu.open_row(), Some("u-002"));
}

#[test]
fn toggling_the_open_row_closes_it() {
    let mut menu = RowMenuState::default();
    menu.toggle("u-001");
    menu.toggle("u-001");
    assert_eq!(menu.open_row(), None);
}

#[test]
fn close_clears_any_open_row() {
    let mut menu = RowMenuState::default();
    menu.toggle("u-003");
    menu.close();
    assert_eq!(menu.open_row(), None);
    menu.close();
    assert_eq!(menu.open_row(), None);
}

#[test]
fn menu_ids_are_scoped_by_table() {
    assert_eq!(menu_id("registered", "001"), "registered-001");
    assert_ne!(menu_id("registered", "001"), menu_id("newsletter", "001"));
}

#[test]
fn bounds_include_edges() {
    let bounds = Bounds { left: 10.0, top: 20.0, right: 110.0, bottom: 80.0 };
    assert!(bounds.contains(10.0, 20.0));
    assert!(bounds.contains(60.0, 50.0));
    assert!(bounds.contains(110.0, 80.0));
    assert!(!bounds.contains(9.9, 50.0));
    assert!(!bounds.contains(60.0, 80.1));
}

#[test]
fn press_on_floating_menu_counts_as_inside() {
    // Trigger at the row's right edge; menu drops below it, wider than the trigger.
    let trigger = Bounds { left: 300.0, top: 100.0, right: 330.0, bottom: 124.0 };
    let menu = Bounds { left: 150.0, top: 128.0, right: 330.0, bottom: 200.0 };

    assert!(!trigger.contains(200.0, 150.0));
    assert!(pointer_within(&[trigger, menu], 200.0, 150.0));
    assert!(pointer_within(&[trigger, menu], 310.0, 110.0));
    assert!(!pointer_within(&[trigger, menu], 50.0, 150.0));
    assert!(!pointer_within(&[], 310.0, 110.0));
}

#[test]
fn row_action_builders() {
    let action = RowAction::new("Delete User").with_icon("trash").danger();
    assert_eq!(action.label, "Delete User");
    assert_eq!(action.icon, Some("trash"));
    assert!(action.danger);
    assert!(!RowAction::new("Edit").danger);
}
