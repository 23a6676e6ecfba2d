//! Field sets of the seven managed entity kinds.

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;

use serde::{Deserialize, Serialize};

use crate::format::format_money;
use crate::kind::EntityKind;
use crate::record::{AnyRecord, Record};
use crate::schema::{
    FieldSpec, FormValues, InputKind, RecordFields, ValidationError, looks_like_email, optional_text, required_text,
};

const DEFAULT_CURRENCY: &str = "NGN";
const EMAIL_MESSAGE: &str = "Please enter a valid email address.";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

fn non_empty(value: &str, key: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(key, message));
    }
    Ok(())
}

// =============================================================================
// AD TYPE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdTypeFields {
    pub name: String,
    /// Whole currency units.
    pub price: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

const AD_TYPE_NAME_MESSAGE: &str = "Ad name cannot be empty.";
const AD_TYPE_PRICE_MESSAGE: &str = "Please enter a valid positive price.";

impl RecordFields for AdTypeFields {
    const KIND: EntityKind = EntityKind::AdType;

    fn schema() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                key: "name",
                label: "Ad Name",
                input: InputKind::Text,
                placeholder: "e.g., Sponsored Post",
                required: true,
                default: "",
            },
            FieldSpec {
                key: "price",
                label: "Price",
                input: InputKind::Number { min: 0 },
                placeholder: "e.g., 10000",
                required: true,
                default: "",
            },
            FieldSpec {
                key: "currency",
                label: "Currency",
                input: InputKind::Select { options: &["NGN", "USD", "GBP"] },
                placeholder: "",
                required: true,
                default: DEFAULT_CURRENCY,
            },
        ]
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("name", self.name.clone())
            .with("price", self.price.to_string())
            .with("currency", self.currency.clone())
    }

    fn from_form(form: &FormValues) -> Result<Self, ValidationError> {
        let name = required_text(form, "name", AD_TYPE_NAME_MESSAGE)?;
        let price = form
            .get("price")
            .trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::new("price", AD_TYPE_PRICE_MESSAGE))?;
        let currency = optional_text(form, "currency").unwrap_or_else(default_currency);
        let fields = Self { name, price, currency };
        fields.validate()?;
        Ok(fields)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.name, "name", AD_TYPE_NAME_MESSAGE)?;
        non_empty(&self.currency, "currency", "Currency cannot be empty.")
    }

    fn headline(&self) -> String {
        self.name.clone()
    }

    fn detail(&self) -> Option<String> {
        Some(format!("Price: {}", format_money(self.price, &self.currency)))
    }

    fn wrap(record: Record<Self>) -> AnyRecord {
        AnyRecord::AdType(record)
    }

    fn unwrap_any(any: &AnyRecord) -> Option<&Record<Self>> {
        match any {
            AnyRecord::AdType(record) => Some(record),
            _ => None,
        }
    }
}

// =============================================================================
// PROMOTION POWER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionPowerFields {
    pub name: String,
}

const PROMOTION_POWER_NAME_MESSAGE: &str = "Name (Options) cannot be empty.";

impl RecordFields for PromotionPowerFields {
    const KIND: EntityKind = EntityKind::PromotionPower;

    fn schema() -> &'static [FieldSpec] {
        &[FieldSpec {
            key: "name",
            label: "Name (Options)",
            input: InputKind::TextArea,
            placeholder: "e.g., Standard (Basic reach)",
            required: true,
            default: "",
        }]
    }

    fn to_form(&self) -> FormValues {
        FormValues::new().with("name", self.name.clone())
    }

    fn from_form(form: &FormValues) -> Result<Self, ValidationError> {
        let name = required_text(form, "name", PROMOTION_POWER_NAME_MESSAGE)?;
        Ok(Self { name })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.name, "name", PROMOTION_POWER_NAME_MESSAGE)
    }

    fn headline(&self) -> String {
        self.name.clone()
    }

    fn wrap(record: Record<Self>) -> AnyRecord {
        AnyRecord::PromotionPower(record)
    }

    fn unwrap_any(any: &AnyRecord) -> Option<&Record<Self>> {
        match any {
            AnyRecord::PromotionPower(record) => Some(record),
            _ => None,
        }
    }
}

// =============================================================================
// DURATION
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationFields {
    /// Display label, e.g. "7 Days".
    pub label: String,
    pub value_days: u32,
}

const DURATION_LABEL_MESSAGE: &str = "Label cannot be empty.";
const DURATION_DAYS_MESSAGE: &str = "Please enter a valid number of days (greater than 0).";

impl RecordFields for DurationFields {
    const KIND: EntityKind = EntityKind::Duration;

    fn schema() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                key: "label",
                label: "Label",
                input: InputKind::Text,
                placeholder: "e.g., 1 Month",
                required: true,
                default: "",
            },
            FieldSpec {
                key: "valueDays",
                label: "Value (Days)",
                input: InputKind::Number { min: 1 },
                placeholder: "e.g., 30",
                required: true,
                default: "",
            },
        ]
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("label", self.label.clone())
            .with("valueDays", self.value_days.to_string())
    }

    fn from_form(form: &FormValues) -> Result<Self, ValidationError> {
        let label = required_text(form, "label", DURATION_LABEL_MESSAGE)?;
        let value_days = form
            .get("valueDays")
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::new("valueDays", DURATION_DAYS_MESSAGE))?;
        let fields = Self { label, value_days };
        fields.validate()?;
        Ok(fields)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.label, "label", DURATION_LABEL_MESSAGE)?;
        if self.value_days == 0 {
            return Err(ValidationError::new("valueDays", DURATION_DAYS_MESSAGE));
        }
        Ok(())
    }

    fn headline(&self) -> String {
        self.label.clone()
    }

    fn detail(&self) -> Option<String> {
        Some(format!("({} days)", self.value_days))
    }

    fn wrap(record: Record<Self>) -> AnyRecord {
        AnyRecord::Duration(record)
    }

    fn unwrap_any(any: &AnyRecord) -> Option<&Record<Self>> {
        match any {
            AnyRecord::Duration(record) => Some(record),
            _ => None,
        }
    }
}

// =============================================================================
// AD SHOW OPTION
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdShowFields {
    pub name: String,
}

const AD_SHOW_NAME_MESSAGE: &str = "Name cannot be empty.";

impl RecordFields for AdShowFields {
    const KIND: EntityKind = EntityKind::AdShow;

    fn schema() -> &'static [FieldSpec] {
        &[FieldSpec {
            key: "name",
            label: "Name",
            input: InputKind::Text,
            placeholder: "e.g., Standard Visibility",
            required: true,
            default: "",
        }]
    }

    fn to_form(&self) -> FormValues {
        FormValues::new().with("name", self.name.clone())
    }

    fn from_form(form: &FormValues) -> Result<Self, ValidationError> {
        let name = required_text(form, "name", AD_SHOW_NAME_MESSAGE)?;
        Ok(Self { name })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.name, "name", AD_SHOW_NAME_MESSAGE)
    }

    fn headline(&self) -> String {
        self.name.clone()
    }

    fn wrap(record: Record<Self>) -> AnyRecord {
        AnyRecord::AdShow(record)
    }

    fn unwrap_any(any: &AnyRecord) -> Option<&Record<Self>> {
        match any {
            AnyRecord::AdShow(record) => Some(record),
            _ => None,
        }
    }
}

// =============================================================================
// CATEGORY
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFields {
    pub name: String,
    /// Free-text parent name; not a reference to another record.
    #[serde(default)]
    pub parent_name: Option<String>,
}

const CATEGORY_NAME_MESSAGE: &str = "Category name cannot be empty.";

impl RecordFields for CategoryFields {
    const KIND: EntityKind = EntityKind::Category;

    fn schema() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                key: "parentName",
                label: "Parent",
                input: InputKind::Text,
                placeholder: "Enter parent category name (or leave blank)",
                required: false,
                default: "",
            },
            FieldSpec {
                key: "name",
                label: "Category",
                input: InputKind::Text,
                placeholder: "Enter category name",
                required: true,
                default: "",
            },
        ]
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("parentName", self.parent_name.clone().unwrap_or_default())
            .with("name", self.name.clone())
    }

    fn from_form(form: &FormValues) -> Result<Self, ValidationError> {
        let name = required_text(form, "name", CATEGORY_NAME_MESSAGE)?;
        let parent_name = optional_text(form, "parentName");
        Ok(Self { name, parent_name })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.name, "name", CATEGORY_NAME_MESSAGE)
    }

    fn headline(&self) -> String {
        self.name.clone()
    }

    fn detail(&self) -> Option<String> {
        self.parent_name.clone()
    }

    fn wrap(record: Record<Self>) -> AnyRecord {
        AnyRecord::Category(record)
    }

    fn unwrap_any(any: &AnyRecord) -> Option<&Record<Self>> {
        match any {
            AnyRecord::Category(record) => Some(record),
            _ => None,
        }
    }
}

// =============================================================================
// USER
// =============================================================================

/// Access level of a console user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    Admin,
    Editor,
    #[default]
    User,
}

impl Permission {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Editor, Self::User];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::User => "User",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub permission: Permission,
    /// Unix milliseconds; assigned by the server on create.
    #[serde(default)]
    pub joined_at: Option<i64>,
    /// Unix milliseconds of the last sign-in, if any.
    #[serde(default)]
    pub last_login_at: Option<i64>,
}

const USER_NAME_MESSAGE: &str = "Full name cannot be empty.";

impl RecordFields for UserFields {
    const KIND: EntityKind = EntityKind::User;

    fn schema() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                key: "fullName",
                label: "Full Name",
                input: InputKind::Text,
                placeholder: "e.g., Christine Brooks",
                required: true,
                default: "",
            },
            FieldSpec {
                key: "email",
                label: "Email",
                input: InputKind::Email,
                placeholder: "name@example.com",
                required: true,
                default: "",
            },
            FieldSpec {
                key: "permission",
                label: "Permission",
                input: InputKind::Select { options: &["Admin", "Editor", "User"] },
                placeholder: "",
                required: true,
                default: "User",
            },
        ]
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("fullName", self.full_name.clone())
            .with("email", self.email.clone())
            .with("permission", self.permission.as_str())
    }

    fn from_form(form: &FormValues) -> Result<Self, ValidationError> {
        let full_name = required_text(form, "fullName", USER_NAME_MESSAGE)?;
        let email = form.get("email").trim().to_owned();
        let permission = Permission::parse(form.get("permission"))
            .ok_or_else(|| ValidationError::new("permission", "Please choose a permission."))?;
        let fields = Self { full_name, email, permission, joined_at: None, last_login_at: None };
        fields.validate()?;
        Ok(fields)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        non_empty(&self.full_name, "fullName", USER_NAME_MESSAGE)?;
        if !looks_like_email(self.email.trim()) {
            return Err(ValidationError::new("email", EMAIL_MESSAGE));
        }
        Ok(())
    }

    fn headline(&self) -> String {
        self.full_name.clone()
    }

    fn detail(&self) -> Option<String> {
        Some(self.email.clone())
    }

    fn stamp_created(&mut self, now_ms: i64) {
        self.joined_at.get_or_insert(now_ms);
    }

    fn carry_over(&mut self, previous: &Self) {
        if self.joined_at.is_none() {
            self.joined_at = previous.joined_at;
        }
        if self.last_login_at.is_none() {
            self.last_login_at = previous.last_login_at;
        }
    }

    fn wrap(record: Record<Self>) -> AnyRecord {
        AnyRecord::User(record)
    }

    fn unwrap_any(any: &AnyRecord) -> Option<&Record<Self>> {
        match any {
            AnyRecord::User(record) => Some(record),
            _ => None,
        }
    }
}

// =============================================================================
// EMAIL
// =============================================================================

/// Which list an email address belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Address of a registered account.
    Registered,
    /// Newsletter-only subscriber.
    #[default]
    Newsletter,
}

impl Audience {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Newsletter => "newsletter",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "registered" => Some(Self::Registered),
            "newsletter" => Some(Self::Newsletter),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFields {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub audience: Audience,
}

impl RecordFields for EmailFields {
    const KIND: EntityKind = EntityKind::Email;

    fn schema() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                key: "email",
                label: "Email Address",
                input: InputKind::Email,
                placeholder: "name@example.com",
                required: true,
                default: "",
            },
            FieldSpec {
                key: "name",
                label: "Name",
                input: InputKind::Text,
                placeholder: "Optional",
                required: false,
                default: "",
            },
            FieldSpec {
                key: "audience",
                label: "List",
                input: InputKind::Select { options: &["registered", "newsletter"] },
                placeholder: "",
                required: true,
                default: "newsletter",
            },
        ]
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("email", self.email.clone())
            .with("name", self.name.clone().unwrap_or_default())
            .with("audience", self.audience.as_str())
    }

    fn from_form(form: &FormValues) -> Result<Self, ValidationError> {
        let email = form.get("email").trim().to_owned();
        let name = optional_text(form, "name");
        let audience = Audience::parse(form.get("audience"))
            .ok_or_else(|| ValidationError::new("audience", "Please choose a list."))?;
        let fields = Self { name, email, audience };
        fields.validate()?;
        Ok(fields)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !looks_like_email(self.email.trim()) {
            return Err(ValidationError::new("email", EMAIL_MESSAGE));
        }
        Ok(())
    }

    fn headline(&self) -> String {
        self.email.clone()
    }

    fn detail(&self) -> Option<String> {
        self.name.clone()
    }

    fn wrap(record: Record<Self>) -> AnyRecord {
        AnyRecord::Email(record)
    }

    fn unwrap_any(any: &AnyRecord) -> Option<&Record<Self>> {
        match any {
            AnyRecord::Email(record) => Some(record),
            _ => None,
        }
    }
}
