//! Change-password form state.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use records::{MIN_PASSWORD_LEN, PasswordChange};

use crate::net::api::ApiError;

pub const PASSWORD_UPDATED: &str = "Password successfully updated!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    pub success: Option<String>,
    pub submitting: bool,
}

impl PasswordForm {
    /// Validate and enter submitting. `None` when busy or a rule fails.
    pub fn begin_submit(&mut self) -> Option<PasswordChange> {
        if self.submitting {
            return None;
        }
        self.error = None;
        self.success = None;
        match self.check() {
            Ok(change) => {
                self.submitting = true;
                Some(change)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    fn check(&self) -> Result<PasswordChange, String> {
        if self.old_password.is_empty() || self.new_password.is_empty() || self.confirm_password.is_empty() {
            return Err("Please fill in all fields.".to_owned());
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!("New password must be at least {MIN_PASSWORD_LEN} characters long."));
        }
        if self.new_password != self.confirm_password {
            return Err("New passwords do not match.".to_owned());
        }
        let change = PasswordChange { old_password: self.old_password.clone(), new_password: self.new_password.clone() };
        change.validate().map_err(|e| e.message)?;
        Ok(change)
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                *self = Self { success: Some(PASSWORD_UPDATED.to_owned()), ..Self::default() };
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }
}
