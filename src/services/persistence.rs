//! Persistence service: background flush for dirty records.
//!
//! DESIGN
//! ======
//! A background task snapshots dirty keys under the catalog lock, writes them
//! to Postgres in one transaction without holding the lock, then acks the
//! keys it wrote. A key whose record changed again after the snapshot keeps
//! its dirty mark for the next cycle.
//!
//! ERROR HANDLING
//! ==============
//! Dirty flags are cleared only after successful writes. Repeated upserts are
//! acceptable; silent data loss is not.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;

use std::time::Duration;

use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::state::{AccountState, AppState, CatalogState, RecordKey};

/// One pending row change captured from the catalog.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PendingWrite {
    Upsert { key: RecordKey, position: i64, locked: bool, data: serde_json::Value, revision: u64 },
    Delete { key: RecordKey },
}

impl PendingWrite {
    fn key(&self) -> &RecordKey {
        match self {
            Self::Upsert { key, .. } | Self::Delete { key } => key,
        }
    }
}

/// Spawn the background persistence task. Returns a handle for shutdown.
pub fn spawn_persistence_task(state: AppState, flush_interval_ms: u64) -> JoinHandle<()> {
    info!(flush_interval_ms, "record persistence flush configured");
    tokio::spawn(async move {
        loop {
            flush_all_dirty(&state).await;
            tokio::time::sleep(Duration::from_millis(flush_interval_ms)).await;
        }
    })
}

/// Flush dirty records and the admin credential once.
pub async fn flush_all_dirty(state: &AppState) {
    flush_catalog(state).await;
    flush_account(state).await;
}

async fn flush_catalog(state: &AppState) {
    // PHASE: SNAPSHOT DIRTY RECORDS
    let writes = {
        let catalog = state.catalog.read().await;
        snapshot_dirty(&catalog)
    };
    if writes.is_empty() {
        return;
    }

    // PHASE: WRITE + ACK
    match write_batch(&state.pool, &writes).await {
        Ok(()) => {
            let mut catalog = state.catalog.write().await;
            clear_flushed(&mut catalog, &writes);
        }
        Err(e) => {
            error!(error = %e, count = writes.len(), "record flush failed");
        }
    }
}

async fn flush_account(state: &AppState) {
    let snapshot = {
        let account = state.account.read().await;
        if !account.dirty {
            return;
        }
        account.clone()
    };

    match upsert_account(&state.pool, &snapshot).await {
        Ok(()) => {
            let mut account = state.account.write().await;
            // EDGE: keep dirty if the password changed again after the snapshot.
            if account.revision == snapshot.revision {
                account.dirty = false;
            }
        }
        Err(e) => {
            error!(error = %e, "admin account flush failed");
        }
    }
}

pub(crate) fn snapshot_dirty(catalog: &CatalogState) -> Vec<PendingWrite> {
    let mut keys: Vec<&RecordKey> = catalog.dirty.iter().collect();
    keys.sort();
    keys.into_iter()
        .map(|key| {
            match catalog.collection(key.kind).and_then(|c| c.find(&key.id)) {
                Some(record) => PendingWrite::Upsert {
                    key: key.clone(),
                    position: record.position,
                    locked: record.locked,
                    data: record.data.clone(),
                    revision: record.revision,
                },
                None => PendingWrite::Delete { key: key.clone() },
            }
        })
        .collect()
}

pub(crate) fn clear_flushed(catalog: &mut CatalogState, writes: &[PendingWrite]) {
    for write in writes {
        let current = catalog
            .collection(write.key().kind)
            .and_then(|c| c.find(&write.key().id))
            .map(|r| r.revision);
        let can_clear = match write {
            PendingWrite::Upsert { revision, .. } => current == Some(*revision),
            PendingWrite::Delete { .. } => current.is_none(),
        };
        if can_clear {
            catalog.dirty.remove(write.key());
        }
    }
}

/// Apply pending writes in a single transaction.
///
/// # Errors
///
/// Returns the first database error; the transaction is rolled back.
pub(crate) async fn write_batch(pool: &PgPool, writes: &[PendingWrite]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for write in writes {
        match write {
            PendingWrite::Upsert { key, position, locked, data, .. } => {
                sqlx::query(
                    "INSERT INTO records (kind, id, position, locked, data, updated_at) \
                     VALUES ($1, $2, $3, $4, $5, now()) \
                     ON CONFLICT (kind, id) DO UPDATE SET \
                         position = EXCLUDED.position, locked = EXCLUDED.locked, \
                         data = EXCLUDED.data, updated_at = now()",
                )
                .bind(key.kind.slug())
                .bind(key.id.as_str())
                .bind(position)
                .bind(locked)
                .bind(data)
                .execute(tx.as_mut())
                .await?;
            }
            PendingWrite::Delete { key } => {
                sqlx::query("DELETE FROM records WHERE kind = $1 AND id = $2")
                    .bind(key.kind.slug())
                    .bind(key.id.as_str())
                    .execute(tx.as_mut())
                    .await?;
            }
        }
    }
    tx.commit().await?;
    Ok(())
}

async fn upsert_account(pool: &PgPool, account: &AccountState) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO admin_account (id, salt, password_hash, updated_at) VALUES (1, $1, $2, now()) \
         ON CONFLICT (id) DO UPDATE SET salt = EXCLUDED.salt, password_hash = EXCLUDED.password_hash, \
         updated_at = now()",
    )
    .bind(&account.salt)
    .bind(&account.password_hash)
    .execute(pool)
    .await?;
    Ok(())
}
