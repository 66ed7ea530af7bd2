//! Liveness, readiness and version probes.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

/// Body of `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse)))]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Ready once the store answers `SELECT 1`.
#[utoipa::path(get, path = "/ready", tag = "health",
    responses(
        (status = 200, description = "Store reachable"),
        (status = 503, description = "Store unreachable")
    ))]
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    if let Err(e) = state.db_pool.health_check().await {
        warn!("Readiness check failed: {}", e);
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    StatusCode::OK
}

#[utoipa::path(get, path = "/live", tag = "health",
    responses((status = 200, description = "Process is alive")))]
pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}
