//! Device listing endpoint.

use axum::{extract::State, Json};
use domain::models::DeviceSummary;
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct ListDevicesResponse {
    pub devices: Vec<DeviceSummary>,
}

/// All registered devices ordered by serial number.
///
/// GET /api/v1/devices
pub async fn list_devices(
    State(state): State<AppState>,
) -> Result<Json<ListDevicesResponse>, ApiError> {
    let devices = state.storage.devices.list().await?;

    Ok(Json(ListDevicesResponse {
        devices: devices.into_iter().map(DeviceSummary::from).collect(),
    }))
}
