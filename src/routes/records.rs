//! Record CRUD routes: `/api/records/{kind}` and `/api/records/{kind}/{id}`.

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::{DeleteResponse, ErrorBody, RecordId};
use serde_json::Value;

use crate::services::catalog::{self, CatalogError};
use crate::state::AppState;

pub(crate) type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn catalog_error_to_status(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::UnknownKind(_) | CatalogError::NotFound => StatusCode::NOT_FOUND,
        CatalogError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CatalogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn catalog_error_response(err: CatalogError) -> ApiError {
    let status = catalog_error_to_status(&err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "record request failed");
    }
    (status, Json(ErrorBody { error: err.to_string() }))
}

/// `GET /api/records/{kind}`: list records in insertion order.
pub async fn list(State(state): State<AppState>, Path(kind): Path<String>) -> Result<Json<Vec<Value>>, ApiError> {
    let kind = catalog::parse_kind(&kind).map_err(catalog_error_response)?;
    Ok(Json(catalog::list_records(&state, kind).await))
}

/// `POST /api/records/{kind}`: create a record.
pub async fn create(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let kind = catalog::parse_kind(&kind).map_err(catalog_error_response)?;
    let record = catalog::create_record(&state, kind, body)
        .await
        .map_err(catalog_error_response)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PATCH /api/records/{kind}/{id}`: replace a record's fields.
pub async fn update(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let kind = catalog::parse_kind(&kind).map_err(catalog_error_response)?;
    let record = catalog::update_record(&state, kind, &RecordId::new(id), body)
        .await
        .map_err(catalog_error_response)?;
    Ok(Json(record))
}

/// `DELETE /api/records/{kind}/{id}`: delete a record; `success: false` when declined.
pub async fn delete(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let kind = catalog::parse_kind(&kind).map_err(catalog_error_response)?;
    let outcome = catalog::delete_record(&state, kind, &RecordId::new(id)).await;
    Ok(Json(outcome.into()))
}
