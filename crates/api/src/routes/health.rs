//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::StorageMode;
use serde::Serialize;

use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `postgres` or `memory`. Memory means data is lost on restart.
    pub storage: String,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub configured: bool,
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Pings the database when there is one. Memory mode has nothing to check.
async fn check_database(state: &AppState) -> DatabaseHealth {
    match state.storage.pool() {
        Some(pool) => {
            persistence::metrics::record_pool_metrics(pool);
            let start = std::time::Instant::now();
            let connected = persistence::db::ping(pool).await.is_ok();
            DatabaseHealth {
                configured: true,
                connected,
                latency_ms: connected.then(|| start.elapsed().as_millis() as u64),
            }
        }
        None => DatabaseHealth {
            configured: false,
            connected: false,
            latency_ms: None,
        },
    }
}

fn is_healthy(mode: StorageMode, database: &DatabaseHealth) -> bool {
    mode == StorageMode::Memory || database.connected
}

/// Full health check.
///
/// GET /api/health
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let mode = state.storage.mode();
    let database = check_database(&state).await;
    let healthy = is_healthy(mode, &database);

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: mode.to_string(),
        database,
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}

/// Liveness probe. 200 while the process runs.
///
/// GET /api/health/live
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe. 503 when a configured database is unreachable.
///
/// GET /api/health/ready
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    let database = check_database(&state).await;

    if is_healthy(state.storage.mode(), &database) {
        Ok(Json(StatusResponse {
            status: "ready".to_string(),
        }))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
