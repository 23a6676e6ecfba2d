use super::*;

fn form(old: &str, new: &str, confirm: &str) -> PasswordForm {
    PasswordForm {
        old_password: old.into(),
        new_password: new.into(),
        confirm_password: confirm.into(),
        ..PasswordForm::default()
    }
}

fn rejection(mut f: PasswordForm) -> String {
    assert!(f.begin_submit().is_none());
    assert!(!f.submitting);
    f.error.unwrap_or_default()
}

#[test]
fn every_field_is_required() {
    assert_eq!(rejection(form("", "newpassword", "newpassword")), "Please fill in all fields.");
    assert_eq!(rejection(form("oldpassword", "newpassword", "")), "Please fill in all fields.");
}

#[test]
fn short_password_is_rejected_before_mismatch() {
    assert_eq!(rejection(form("oldpassword", "short", "other")), "New password must be at least 8 characters long.");
}

#[test]
fn confirmation_must_match() {
    assert_eq!(rejection(form("oldpassword", "newpassword", "newpassworx")), "New passwords do not match.");
}

#[test]
fn new_must_differ_from_old() {
    assert_eq!(
        rejection(form("samepassword", "samepassword", "samepassword")),
        "New password must be different from the old password."
    );
}

#[test]
fn valid_form_yields_the_change() {
    let mut f = form("changeme123", "better-secret", "better-secret");
    let change = f.begin_submit().unwrap();
    assert_eq!(change.old_password, "changeme123");
    assert_eq!(change.new_password, "better-secret");
    assert!(f.submitting);
    assert!(f.begin_submit().is_none());
}

#[test]
fn success_clears_fields_and_shows_message() {
    let mut f = form("changeme123", "better-secret", "better-secret");
    f.begin_submit().unwrap();
    f.finish_submit(Ok(()));
    assert_eq!(f.success.as_deref(), Some(PASSWORD_UPDATED));
    assert!(f.old_password.is_empty());
    assert!(f.new_password.is_empty());
    assert!(f.confirm_password.is_empty());
    assert!(!f.submitting);
}

#[test]
fn server_failure_keeps_fields_and_shows_message() {
    let mut f = form("wrong-password", "better-secret", "better-secret");
    f.begin_submit().unwrap();
    f.finish_submit(Err(ApiError::Status { status: 403, message: "Incorrect old password.".into() }));
    assert_eq!(f.error.as_deref(), Some("Incorrect old password."));
    assert_eq!(f.old_password, "wrong-password");
    assert_eq!(f.success, None);
}
