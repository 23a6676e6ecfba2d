//! Admin account routes.

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use records::{ErrorBody, PasswordChange};

use crate::routes::records::ApiError;
use crate::services::account::{self, AccountError};
use crate::state::AppState;

pub(crate) fn account_error_to_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AccountError::IncorrectPassword => StatusCode::FORBIDDEN,
        AccountError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/account/password`: rotate the admin password.
pub async fn change_password(
    State(state): State<AppState>,
    Json(body): Json<PasswordChange>,
) -> Result<Json<serde_json::Value>, ApiError> {
    account::change_password(&state, &body).await.map_err(|err| {
        let status = account_error_to_status(&err);
        (status, Json(ErrorBody { error: err.to_string() }))
    })?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
