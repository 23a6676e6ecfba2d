use futures::executor::block_on;
use records::{AdTypeFields, CategoryFields, DurationFields};

use super::*;
use crate::net::fake::{Call, FakeApi};

fn fourteen_days() -> Record<DurationFields> {
    Record::new("2", DurationFields { label: "14 Days".into(), value_days: 14 })
}

#[test]
fn edit_mode_seeds_every_field_from_the_item() {
    let item = fourteen_days();
    let mut editor = EditorState::default();
    editor.open(PanelMode::Edit, Some(&item));

    assert_eq!(editor.editing_id, Some(RecordId::from("2")));
    assert_eq!(editor.form.get("label"), "14 Days");
    assert_eq!(editor.form.get("valueDays"), "14");
    assert_eq!(DurationFields::from_form(&editor.form).unwrap(), item.fields);
}

#[test]
fn add_mode_resets_after_an_edit() {
    let item = fourteen_days();
    let mut editor = EditorState::default();
    editor.open(PanelMode::Edit, Some(&item));
    editor.error = Some("stale".into());

    editor.open(PanelMode::Add, Some(&item));
    assert_eq!(editor.editing_id, None);
    assert_eq!(editor.form, DurationFields::blank_form());
    assert_eq!(editor.error, None);
    assert!(!editor.submitting);
}

#[test]
fn invalid_form_never_reaches_the_collaborator() {
    let api = FakeApi::<CategoryFields>::new(Vec::new());
    let mut editor = EditorState::default();
    editor.open::<CategoryFields>(PanelMode::Add, None);
    editor.set_field("name", "   ");

    assert!(editor.begin_submit::<CategoryFields>().is_none());
    assert_eq!(editor.error.as_deref(), Some("Category name cannot be empty."));
    assert!(!editor.submitting);
    assert!(api.calls().is_empty());
}

#[test]
fn second_submit_while_submitting_is_ignored() {
    let mut editor = EditorState::default();
    editor.open::<AdTypeFields>(PanelMode::Add, None);
    editor.set_field("name", "Sponsored Post");
    editor.set_field("price", "10000");

    assert!(editor.begin_submit::<AdTypeFields>().is_some());
    assert!(editor.submitting);
    assert!(editor.begin_submit::<AdTypeFields>().is_none());
}

#[test]
fn add_save_creates_then_closes() {
    let api = FakeApi::<AdTypeFields>::new(Vec::new());
    let mut editor = EditorState::default();
    editor.open::<AdTypeFields>(PanelMode::Add, None);
    editor.set_field("name", "Sponsored Post");
    editor.set_field("price", "10000");

    let request = editor.begin_submit::<AdTypeFields>().unwrap();
    assert_eq!(request.target, SaveTarget::Create);
    let result = block_on(request.send(&api));
    assert!(editor.finish_submit(result).is_some());
    assert!(!editor.submitting);

    assert_eq!(api.calls(), vec![Call::Create]);
    let saved = api.records();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].fields.name, "Sponsored Post");
    assert_eq!(saved[0].fields.price, 10_000);
}

#[test]
fn edit_save_updates_the_same_id() {
    let api = FakeApi::new(vec![fourteen_days()]);
    let mut editor = EditorState::default();
    editor.open(PanelMode::Edit, Some(&fourteen_days()));
    editor.set_field("label", "20 Days");

    let request = editor.begin_submit::<DurationFields>().unwrap();
    let result = block_on(request.send(&api));
    assert!(editor.finish_submit(result).is_some());

    assert_eq!(api.calls(), vec![Call::Update(RecordId::from("2"))]);
    assert_eq!(api.records()[0].fields.label, "20 Days");
}

#[test]
fn failed_save_shows_message_and_stays_open() {
    let api = FakeApi::<AdTypeFields>::new(Vec::new());
    api.fail_next(ApiError::Status { status: 500, message: "database unavailable".into() });
    let mut editor = EditorState::default();
    editor.open::<AdTypeFields>(PanelMode::Add, None);
    editor.set_field("name", "Banner");
    editor.set_field("price", "5");

    let request = editor.begin_submit::<AdTypeFields>().unwrap();
    let result = block_on(request.send(&api));
    assert!(editor.finish_submit(result).is_none());
    assert_eq!(editor.error.as_deref(), Some("database unavailable"));
    assert!(!editor.submitting);

    // Retry succeeds with the same form.
    let request = editor.begin_submit::<AdTypeFields>().unwrap();
    assert!(editor.finish_submit(block_on(request.send(&api))).is_some());
    assert_eq!(editor.error, None);
}

#[test]
fn empty_failure_message_uses_fallback() {
    let mut editor = EditorState::default();
    let failed: Result<(), ApiError> = Err(ApiError::Status { status: 500, message: String::new() });
    assert!(editor.finish_submit(failed).is_none());
    assert_eq!(editor.error.as_deref(), Some(SAVE_FALLBACK_MESSAGE));
}
