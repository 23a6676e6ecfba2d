//! Catalog service: validated CRUD over the in-memory record collections.
//!
//! DESIGN
//! ======
//! Collections are stored as normalized JSON field objects so one code path
//! serves every kind. Each write is first decoded into the kind's typed field
//! struct from `records`, stamped or merged with server-managed values, and
//! validated with the same rules the UI applies, then re-encoded for storage.
//! Mutations take the catalog write lock, so create/update/delete are atomic
//! with respect to each other.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures carry the user-facing message verbatim. Deleting an
//! absent id is a success; deleting a locked id is declined, not an error.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

use records::seed;
use records::{
    AdShowFields, AdTypeFields, Audience, CategoryFields, DashboardStats, DeleteOutcome, DurationFields, EmailFields,
    EntityKind, Permission, PromotionPowerFields, RecordFields, RecordId, UserFields, ValidationError,
};
use serde_json::Value;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::state::{AppState, CatalogState, StoredRecord};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown record kind: {0}")]
    UnknownKind(String),
    #[error("record not found")]
    NotFound,
    #[error("{0}")]
    Invalid(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err.message)
    }
}

/// Resolve a URL slug to its kind.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownKind`] for unrecognized slugs.
pub fn parse_kind(slug: &str) -> Result<EntityKind, CatalogError> {
    EntityKind::from_slug(slug).ok_or_else(|| CatalogError::UnknownKind(slug.to_owned()))
}

pub(crate) fn now_ms() -> i64 {
    let Ok(duration) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_millis()).unwrap_or(0)
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Decode, merge, validate, and re-encode a write payload for `kind`.
///
/// `previous` is the stored field object on update, `None` on create.
pub(crate) fn normalize(
    kind: EntityKind,
    body: Value,
    previous: Option<&Value>,
    now_ms: i64,
) -> Result<Value, CatalogError> {
    match kind {
        EntityKind::AdType => normalize_as::<AdTypeFields>(body, previous, now_ms),
        EntityKind::PromotionPower => normalize_as::<PromotionPowerFields>(body, previous, now_ms),
        EntityKind::Duration => normalize_as::<DurationFields>(body, previous, now_ms),
        EntityKind::AdShow => normalize_as::<AdShowFields>(body, previous, now_ms),
        EntityKind::Category => normalize_as::<CategoryFields>(body, previous, now_ms),
        EntityKind::User => normalize_as::<UserFields>(body, previous, now_ms),
        EntityKind::Email => normalize_as::<EmailFields>(body, previous, now_ms),
    }
}

fn normalize_as<F: RecordFields>(body: Value, previous: Option<&Value>, now_ms: i64) -> Result<Value, CatalogError> {
    let mut fields = F::from_payload(&body)?;
    match previous {
        Some(stored) => fields.carry_over(&decode::<F>(stored.clone())?),
        None => fields.stamp_created(now_ms),
    }
    serde_json::to_value(&fields).map_err(|e| CatalogError::Invalid(e.to_string()))
}

/// Stored records are already normalized; only their shape is checked.
fn decode<F: RecordFields>(value: Value) -> Result<F, CatalogError> {
    serde_json::from_value(value)
        .map_err(|e| CatalogError::Invalid(format!("invalid {} payload: {e}", F::KIND.label().to_lowercase())))
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// All records of `kind` in insertion order, as wire JSON.
pub async fn list_records(state: &AppState, kind: EntityKind) -> Vec<Value> {
    let catalog = state.catalog.read().await;
    catalog
        .collection(kind)
        .map(|c| c.records.iter().map(StoredRecord::to_wire).collect())
        .unwrap_or_default()
}

/// Validate `body` and append it as a new record with a generated id.
///
/// # Errors
///
/// Returns [`CatalogError::Invalid`] when the payload fails validation.
pub async fn create_record(state: &AppState, kind: EntityKind, body: Value) -> Result<Value, CatalogError> {
    let data = normalize(kind, body, None, now_ms())?;
    let id = RecordId::new(Uuid::new_v4().to_string());

    let mut catalog = state.catalog.write().await;
    let wire = catalog.collection_mut(kind).push(id.clone(), data, false).to_wire();
    catalog.mark_dirty(kind, id.clone());
    info!(%kind, %id, "record created");
    Ok(wire)
}

/// Validate `body` and replace the fields of record `id`.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] for an unknown id and
/// [`CatalogError::Invalid`] when the payload fails validation.
pub async fn update_record(
    state: &AppState,
    kind: EntityKind,
    id: &RecordId,
    body: Value,
) -> Result<Value, CatalogError> {
    let mut catalog = state.catalog.write().await;
    let record = catalog
        .collection_mut(kind)
        .find_mut(id)
        .ok_or(CatalogError::NotFound)?;
    record.data = normalize(kind, body, Some(&record.data), now_ms())?;
    record.revision += 1;
    let wire = record.to_wire();
    catalog.mark_dirty(kind, id.clone());
    info!(%kind, %id, "record updated");
    Ok(wire)
}

/// Remove record `id`. Absent ids count as deleted; locked ids are declined.
pub async fn delete_record(state: &AppState, kind: EntityKind, id: &RecordId) -> DeleteOutcome {
    let mut catalog = state.catalog.write().await;
    let collection = catalog.collection_mut(kind);
    if collection.find(id).is_some_and(|r| r.locked) {
        warn!(%kind, %id, "delete declined for locked record");
        return DeleteOutcome::Declined;
    }
    if collection.remove(id).is_some() {
        catalog.mark_dirty(kind, id.clone());
        info!(%kind, %id, "record deleted");
    }
    DeleteOutcome::Deleted
}

/// Counts shown on the dashboard.
pub async fn dashboard_stats(state: &AppState) -> DashboardStats {
    let catalog = state.catalog.read().await;
    let mut stats = DashboardStats::default();

    for record in catalog.collection(EntityKind::User).map_or(&[][..], |c| c.records.as_slice()) {
        let Ok(user) = serde_json::from_value::<UserFields>(record.data.clone()) else {
            continue;
        };
        stats.total_users += 1;
        match user.permission {
            Permission::Admin => stats.admins += 1,
            Permission::Editor => stats.editors += 1,
            Permission::User => {}
        }
    }

    for record in catalog.collection(EntityKind::Email).map_or(&[][..], |c| c.records.as_slice()) {
        let Ok(email) = serde_json::from_value::<EmailFields>(record.data.clone()) else {
            continue;
        };
        match email.audience {
            Audience::Registered => stats.registered_emails += 1,
            Audience::Newsletter => stats.newsletter_emails += 1,
        }
    }

    stats
}

// =============================================================================
// STARTUP
// =============================================================================

/// Install the default collections, marking each record dirty.
pub fn seed_defaults(catalog: &mut CatalogState) {
    let mut count = 0usize;
    for any in seed::default_records() {
        let kind = any.kind();
        let id = any.id().clone();
        let Ok(Value::Object(mut map)) = any.to_value() else {
            continue;
        };
        map.remove("id");
        let locked = seed::is_locked(kind, id.as_str());
        catalog.collection_mut(kind).push(id.clone(), Value::Object(map), locked);
        catalog.mark_dirty(kind, id);
        count += 1;
    }
    info!(count, "seeded default records");
}

/// Load every stored record from Postgres.
///
/// Rows with an unknown kind are skipped with a warning.
///
/// # Errors
///
/// Returns [`CatalogError::Database`] if the query fails.
pub async fn load_catalog(pool: &PgPool) -> Result<CatalogState, CatalogError> {
    let rows = sqlx::query_as::<_, (String, String, i64, bool, Value)>(
        "SELECT kind, id, position, locked, data FROM records ORDER BY kind ASC, position ASC",
    )
    .fetch_all(pool)
    .await?;

    let mut catalog = CatalogState::new();
    let mut count = 0usize;
    for (kind, id, position, locked, data) in rows {
        let Some(kind) = EntityKind::from_slug(&kind) else {
            warn!(%kind, %id, "skipping stored record of unknown kind");
            continue;
        };
        catalog
            .collection_mut(kind)
            .restore(StoredRecord { id: RecordId::new(id), position, locked, data, revision: 0 });
        count += 1;
    }
    info!(count, "catalog hydrated");
    Ok(catalog)
}
