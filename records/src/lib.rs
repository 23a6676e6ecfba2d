//! Shared record model for the admin console.
//!
//! This crate owns the entity shapes exchanged between the `client` UI, the
//! server, and the CLI: the seven managed entity kinds, their field sets and
//! form schemas, the validation rules applied on both sides of the wire, and
//! the small response types used by the REST collaborator.
//!
//! DESIGN
//! ======
//! Every entity is a flat field struct implementing [`RecordFields`]. The
//! struct knows how to render itself into raw form values, how to parse and
//! validate those values back, and how to wrap itself into [`AnyRecord`] so
//! page-level state can hold "one record of some kind" without generics.

pub mod entities;
pub mod format;
pub mod kind;
pub mod record;
pub mod schema;
pub mod seed;

pub use entities::{
    AdShowFields, AdTypeFields, Audience, CategoryFields, DurationFields, EmailFields, Permission,
    PromotionPowerFields, UserFields,
};
pub use kind::EntityKind;
pub use record::{
    AnyRecord, DashboardStats, DeleteOutcome, DeleteResponse, ErrorBody, MIN_PASSWORD_LEN, PasswordChange, Record, RecordId,
};
pub use schema::{FieldSpec, FormValues, InputKind, RecordFields, ValidationError};
