//! Dashboard statistics endpoint.

use axum::{extract::State, Json};
use domain::models::DailyStats;

use crate::app::AppState;
use crate::error::ApiError;

/// Today's statistics snapshot.
///
/// GET /api/v1/dashboard/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DailyStats>, ApiError> {
    let stats = state.dashboard.get_stats().await?;

    tracing::debug!(
        total_today = stats.total_today,
        active_devices = stats.active_devices,
        "Dashboard stats served"
    );

    Ok(Json(stats))
}
