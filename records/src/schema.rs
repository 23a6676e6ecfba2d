//! Field schemas, raw form values, and the [`RecordFields`] capability.
//!
//! DESIGN
//! ======
//! Forms edit strings. A schema lists the inputs an entity exposes, and each
//! entity converts between its typed fields and a [`FormValues`] map keyed by
//! the schema's field keys. Parsing and validation live next to the types so
//! the UI and the server reject the same inputs with the same messages.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::kind::EntityKind;
use crate::record::{AnyRecord, Record};

/// Rendering hint for one form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    TextArea,
    Email,
    Number { min: u64 },
    Select { options: &'static [&'static str] },
}

/// Static description of one editable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub placeholder: &'static str,
    pub required: bool,
    /// Value used when a form is opened in add mode.
    pub default: &'static str,
}

/// Raw string values of a form, keyed by [`FieldSpec::key`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form populated with each field's add-mode default.
    #[must_use]
    pub fn defaults(schema: &[FieldSpec]) -> Self {
        let mut values = Self::new();
        for spec in schema {
            values.set(spec.key, spec.default);
        }
        values
    }

    /// Current raw value, or `""` when the key was never set.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map_or("", String::as_str)
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// A field value was missing or out of range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Key of the offending field, when one field is to blame.
    pub field: Option<&'static str>,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field: Some(field), message: message.into() }
    }

    #[must_use]
    pub fn general(message: impl Into<String>) -> Self {
        Self { field: None, message: message.into() }
    }
}

/// Capability set of a managed entity's field struct.
pub trait RecordFields: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Editable inputs, in display order.
    fn schema() -> &'static [FieldSpec];

    /// Render typed fields into raw form values.
    fn to_form(&self) -> FormValues;

    /// Parse raw form values into typed fields, applying [`RecordFields::validate`].
    ///
    /// # Errors
    ///
    /// Returns the first failing field's message.
    fn from_form(form: &FormValues) -> Result<Self, ValidationError>;

    /// Parse a JSON payload the same way a submitted form is parsed.
    ///
    /// Schema keys are read as text, so trimming, blank-to-`None`, numeric
    /// parsing and the error messages all match [`RecordFields::from_form`].
    /// Missing keys take the schema default. Keys outside the schema are
    /// ignored; server-managed values come from [`RecordFields::stamp_created`]
    /// and [`RecordFields::carry_over`].
    ///
    /// # Errors
    ///
    /// Returns the first failing field's message, or a general error when
    /// `payload` is not an object.
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let Some(map) = payload.as_object() else {
            return Err(ValidationError::general("Payload must be a JSON object."));
        };
        let mut form = Self::blank_form();
        for spec in Self::schema() {
            if let Some(value) = map.get(spec.key) {
                form.set(spec.key, payload_text(value));
            }
        }
        Self::from_form(&form)
    }

    /// Check invariants on typed fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's message.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Primary display text (list row title).
    fn headline(&self) -> String;

    /// Secondary display text (list row subtitle).
    fn detail(&self) -> Option<String> {
        None
    }

    /// Fill server-managed values on create.
    fn stamp_created(&mut self, now_ms: i64) {
        let _ = now_ms;
    }

    /// Keep server-managed values from the stored version on update.
    fn carry_over(&mut self, previous: &Self) {
        let _ = previous;
    }

    fn wrap(record: Record<Self>) -> AnyRecord;

    fn unwrap_any(any: &AnyRecord) -> Option<&Record<Self>>;

    /// Form populated with add-mode defaults.
    #[must_use]
    fn blank_form() -> FormValues {
        FormValues::defaults(Self::schema())
    }
}

// =============================================================================
// PARSE HELPERS
// =============================================================================

/// Form text of one JSON value. Containers read as blank.
fn payload_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Trimmed, non-empty text or the given error.
pub(crate) fn required_text(
    form: &FormValues,
    key: &'static str,
    message: &'static str,
) -> Result<String, ValidationError> {
    let value = form.get(key).trim();
    if value.is_empty() {
        return Err(ValidationError::new(key, message));
    }
    Ok(value.to_owned())
}

/// Trimmed text, `None` when blank.
pub(crate) fn optional_text(form: &FormValues, key: &str) -> Option<String> {
    let value = form.get(key).trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Loose email shape check: one `@`, non-empty local part, dotted domain.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
