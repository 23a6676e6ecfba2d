use super::*;

const SPECS: &[FieldSpec] = &[
    FieldSpec {
        key: "name",
        label: "Name",
        input: InputKind::Text,
        placeholder: "",
        required: true,
        default: "",
    },
    FieldSpec {
        key: "currency",
        label: "Currency",
        input: InputKind::Text,
        placeholder: "",
        required: false,
        default: "NGN",
    },
];

#[test]
fn defaults_apply_every_field_default() {
    let form = FormValues::defaults(SPECS);
    assert_eq!(form.get("name"), "");
    assert_eq!(form.get("currency"), "NGN");
    assert_eq!(form.iter().count(), 2);
}

#[test]
fn get_missing_key_is_empty() {
    assert_eq!(FormValues::new().get("nope"), "");
}

#[test]
fn set_overwrites_previous_value() {
    let mut form = FormValues::new().with("name", "a");
    form.set("name", "b");
    assert_eq!(form.get("name"), "b");
}

#[test]
fn required_text_trims_and_rejects_blank() {
    let form = FormValues::new().with("name", "  Banner  ");
    assert_eq!(required_text(&form, "name", "empty"), Ok("Banner".to_owned()));

    let blank = FormValues::new().with("name", "   ");
    let err = required_text(&blank, "name", "empty").expect_err("blank should fail");
    assert_eq!(err.field, Some("name"));
    assert_eq!(err.to_string(), "empty");
}

#[test]
fn optional_text_maps_blank_to_none() {
    let form = FormValues::new().with("parent", "  ");
    assert_eq!(optional_text(&form, "parent"), None);
    let form = form.with("parent", " Home ");
    assert_eq!(optional_text(&form, "parent"), Some("Home".to_owned()));
}

#[test]
fn email_shape_check() {
    assert!(looks_like_email("brooks@gmail.com"));
    assert!(looks_like_email("a.b@sub.example.co"));
    assert!(!looks_like_email("brooks"));
    assert!(!looks_like_email("@gmail.com"));
    assert!(!looks_like_email("brooks@gmail"));
    assert!(!looks_like_email("brooks@.com"));
    assert!(!looks_like_email("bro oks@gmail.com"));
    assert!(!looks_like_email("a@b@c.com"));
}
