//! Admin account service: password verification and rotation.
//!
//! DESIGN
//! ======
//! A single admin credential is kept as a random salt plus the hex SHA-256 of
//! `salt || password`. The credential lives in `AppState` and is written back
//! by the persistence task, like records.

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;

use std::fmt::Write;

use rand::Rng;
use records::{PasswordChange, ValidationError};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tracing::info;

use crate::state::{AccountState, AppState};

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("Incorrect old password.")]
    IncorrectPassword,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a random 16-byte hex salt.
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Fresh credential for `password`, pending its first flush.
#[must_use]
pub fn new_account(password: &str) -> AccountState {
    let salt = generate_salt();
    let password_hash = hash_password(&salt, password);
    AccountState { salt, password_hash, revision: 1, dirty: true }
}

#[must_use]
pub fn verify_password(account: &AccountState, password: &str) -> bool {
    hash_password(&account.salt, password) == account.password_hash
}

/// Replace the admin password after checking the old one.
///
/// # Errors
///
/// Returns [`AccountError::Invalid`] when the new password breaks a rule and
/// [`AccountError::IncorrectPassword`] when the old password does not match.
pub async fn change_password(state: &AppState, change: &PasswordChange) -> Result<(), AccountError> {
    change.validate()?;

    let mut account = state.account.write().await;
    if !verify_password(&account, &change.old_password) {
        return Err(AccountError::IncorrectPassword);
    }
    let salt = generate_salt();
    account.password_hash = hash_password(&salt, &change.new_password);
    account.salt = salt;
    account.revision += 1;
    account.dirty = true;
    info!("admin password changed");
    Ok(())
}

/// Load the stored credential, or create one from `initial_password`.
///
/// # Errors
///
/// Returns [`AccountError::Database`] if the query fails.
pub async fn load_account(pool: &PgPool, initial_password: &str) -> Result<AccountState, AccountError> {
    let row = sqlx::query_as::<_, (String, String)>("SELECT salt, password_hash FROM admin_account WHERE id = 1")
        .fetch_optional(pool)
        .await?;

    Ok(match row {
        Some((salt, password_hash)) => AccountState { salt, password_hash, revision: 0, dirty: false },
        None => {
            info!("no admin account stored; installing initial password");
            new_account(initial_password)
        }
    })
}
