//! Persisted record envelope and collaborator response types.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};

use crate::entities::{
    AdShowFields, AdTypeFields, CategoryFields, DurationFields, EmailFields, PromotionPowerFields, UserFields,
};
use crate::kind::EntityKind;
use crate::schema::{RecordFields, ValidationError};

/// Opaque record identifier, unique within one entity collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A stored record: its id plus the entity's flattened fields.
///
/// Serializes as `{ "id": "...", ...fields }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> Record<F> {
    #[must_use]
    pub fn new(id: impl Into<RecordId>, fields: F) -> Self {
        Self { id: id.into(), fields }
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A record of any managed kind.
///
/// Lets page-level state (the active panel) carry a typed item without being
/// generic over every entity on the page.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyRecord {
    AdType(Record<AdTypeFields>),
    PromotionPower(Record<PromotionPowerFields>),
    Duration(Record<DurationFields>),
    AdShow(Record<AdShowFields>),
    Category(Record<CategoryFields>),
    User(Record<UserFields>),
    Email(Record<EmailFields>),
}

impl AnyRecord {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::AdType(_) => EntityKind::AdType,
            Self::PromotionPower(_) => EntityKind::PromotionPower,
            Self::Duration(_) => EntityKind::Duration,
            Self::AdShow(_) => EntityKind::AdShow,
            Self::Category(_) => EntityKind::Category,
            Self::User(_) => EntityKind::User,
            Self::Email(_) => EntityKind::Email,
        }
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        match self {
            Self::AdType(r) => &r.id,
            Self::PromotionPower(r) => &r.id,
            Self::Duration(r) => &r.id,
            Self::AdShow(r) => &r.id,
            Self::Category(r) => &r.id,
            Self::User(r) => &r.id,
            Self::Email(r) => &r.id,
        }
    }

    /// Primary display text of the wrapped record.
    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            Self::AdType(r) => r.fields.headline(),
            Self::PromotionPower(r) => r.fields.headline(),
            Self::Duration(r) => r.fields.headline(),
            Self::AdShow(r) => r.fields.headline(),
            Self::Category(r) => r.fields.headline(),
            Self::User(r) => r.fields.headline(),
            Self::Email(r) => r.fields.headline(),
        }
    }

    /// Wire JSON of the wrapped record.
    ///
    /// # Errors
    ///
    /// Fails only if a field type refuses to serialize.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::AdType(r) => serde_json::to_value(r),
            Self::PromotionPower(r) => serde_json::to_value(r),
            Self::Duration(r) => serde_json::to_value(r),
            Self::AdShow(r) => serde_json::to_value(r),
            Self::Category(r) => serde_json::to_value(r),
            Self::User(r) => serde_json::to_value(r),
            Self::Email(r) => serde_json::to_value(r),
        }
    }
}

/// Outcome of a delete call that did not fail outright.
///
/// A collaborator may decline a delete without raising an error; that case is
/// kept apart from transport or server failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

/// Wire body of `DELETE /api/records/{kind}/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl From<DeleteResponse> for DeleteOutcome {
    fn from(value: DeleteResponse) -> Self {
        if value.success { Self::Deleted } else { Self::Declined }
    }
}

impl From<DeleteOutcome> for DeleteResponse {
    fn from(value: DeleteOutcome) -> Self {
        Self { success: value == DeleteOutcome::Deleted }
    }
}

/// JSON error body returned by the collaborator on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Summary counts shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    pub admins: usize,
    pub editors: usize,
    pub registered_emails: usize,
    pub newsletter_emails: usize,
}

/// Body of `POST /api/account/password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// Minimum accepted length of a new admin password.
pub const MIN_PASSWORD_LEN: usize = 8;

impl PasswordChange {
    /// Shape checks shared by the password form and the account route.
    ///
    /// # Errors
    ///
    /// Returns the message shown next to the form when a rule fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.old_password.is_empty() || self.new_password.is_empty() {
            return Err(ValidationError::general("Please fill in all fields."));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::new(
                "newPassword",
                "New password must be at least 8 characters long.",
            ));
        }
        if self.new_password == self.old_password {
            return Err(ValidationError::new(
                "newPassword",
                "New password must be different from the old password.",
            ));
        }
        Ok(())
    }
}
