//! Dashboard summary route.

use axum::extract::State;
use axum::response::Json;
use records::DashboardStats;

use crate::services::catalog;
use crate::state::AppState;

/// `GET /api/stats`: user and email counts.
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(catalog::dashboard_stats(&state).await)
}
