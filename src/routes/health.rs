/// Health check endpoint
///
/// `GET /health` reports whether the process is up and whether it can
/// currently reach its database. The endpoint itself never fails: a broken
/// database shows up as `"degraded"` in the body, not as an error response.

use crate::{app::AppState, db};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health check response
///
/// ```json
/// {"status": "healthy", "version": "0.1.0", "database": "connected"}
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status: "healthy" or "degraded"
    pub status: String,

    /// Application version
    pub version: String,

    /// Database reachability: "connected" or "disconnected"
    pub database: String,
}

/// Health check handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_ok = db::pool::health_check(&state.db).await.is_ok();

    Json(HealthResponse {
        status: if db_ok { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if db_ok { "connected" } else { "disconnected" }.to_string(),
    })
}
