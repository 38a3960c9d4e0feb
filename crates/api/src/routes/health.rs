use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::config::StoreConfig;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which store backs the service (`postgres` or `memory`).
    pub store: &'static str,
    /// Whether the store is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = state.tasks.store_reachable().await;

    let status = if db_healthy { "ok" } else { "degraded" };
    let store = match state.config.store {
        StoreConfig::Postgres { .. } => "postgres",
        StoreConfig::Memory => "memory",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store,
        db_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
