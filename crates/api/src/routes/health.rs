use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the entity store is reachable.
    pub db_healthy: bool,
}

/// GET / -- public welcome message plus store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Store health check failed");
            false
        }
    };

    Json(HealthResponse {
        success: true,
        message: "Welcome to the casting agency API",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}
