//! REST collaborator for record collections, stats, and the admin account.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Network`] since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! [`RecordApi`] is the seam between the UI state machines and the network.
//! Cards and panels only see the trait, so tests drive them with an
//! in-memory fake while the app uses [`HttpApi`].
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the server's
//! `{"error": ...}` message when present, so callers can show it inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{DashboardStats, DeleteOutcome, PasswordChange, Record, RecordFields, RecordId};
#[cfg(any(test, feature = "hydrate"))]
use records::{EntityKind, ErrorBody};

/// A collaborator call that did not produce a usable answer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

/// List/create/update/delete for one entity kind.
pub trait RecordApi<F: RecordFields> {
    fn list(&self) -> impl Future<Output = Result<Vec<Record<F>>, ApiError>>;

    fn create(&self, fields: &F) -> impl Future<Output = Result<Record<F>, ApiError>>;

    fn update(&self, id: &RecordId, fields: &F) -> impl Future<Output = Result<Record<F>, ApiError>>;

    /// `Ok(DeleteOutcome::Declined)` when the collaborator refused without failing.
    fn delete(&self, id: &RecordId) -> impl Future<Output = Result<DeleteOutcome, ApiError>>;
}

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(kind: EntityKind) -> String {
    format!("/api/records/{}", kind.slug())
}

#[cfg(any(test, feature = "hydrate"))]
fn record_endpoint(kind: EntityKind, id: &RecordId) -> String {
    format!("/api/records/{}/{}", kind.slug(), id)
}

/// Message for a non-2xx response: the server's error text, or a generic fallback.
#[cfg(any(test, feature = "hydrate"))]
fn status_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, message: status_message(status, &body) });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Browser HTTP implementation of [`RecordApi`] for every kind.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl<F: RecordFields> RecordApi<F> for HttpApi {
    async fn list(&self) -> Result<Vec<Record<F>>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&collection_endpoint(F::KIND))
                .send()
                .await
                .map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }

    async fn create(&self, fields: &F) -> Result<Record<F>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&collection_endpoint(F::KIND))
                .json(fields)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = fields;
            Err(unavailable())
        }
    }

    async fn update(&self, id: &RecordId, fields: &F) -> Result<Record<F>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::patch(&record_endpoint(F::KIND, id))
                .json(fields)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, fields);
            Err(unavailable())
        }
    }

    async fn delete(&self, id: &RecordId) -> Result<DeleteOutcome, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&record_endpoint(F::KIND, id))
                .send()
                .await
                .map_err(network)?;
            let body: records::DeleteResponse = read_json(resp).await?;
            Ok(body.into())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(unavailable())
        }
    }
}

/// Fetch dashboard counts from `/api/stats`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn fetch_stats() -> Result<DashboardStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/stats").send().await.map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Rotate the admin password via `POST /api/account/password`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with the server message (e.g. "Incorrect old password.").
pub async fn change_password(change: &PasswordChange) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/account/password")
            .json(change)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let _: serde_json::Value = read_json(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = change;
        Err(unavailable())
    }
}
