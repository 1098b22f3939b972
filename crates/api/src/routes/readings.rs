//! Reading sync endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use domain::models::reading::{SyncReadingRequest, SyncReadingResponse};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_activity_update_failure, record_reading_ingested};

/// Accept one scan from a field device.
///
/// POST /api/v1/sync/reading
///
/// Any `classification` in the body is ignored; it is recomputed from `t_score`.
pub async fn sync_reading(
    State(state): State<AppState>,
    payload: Result<Json<SyncReadingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SyncReadingResponse>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    let (device_serial, submission) = request.into_parts()?;

    let outcome = state
        .ingestion
        .sync_reading(submission, &device_serial)
        .await?;

    record_reading_ingested(outcome.classification);
    if !outcome.activity_recorded {
        record_activity_update_failure();
    }

    info!(
        device_serial = %device_serial,
        reading_id = %outcome.reading_id,
        "Reading accepted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SyncReadingResponse {
            id: outcome.reading_id,
        }),
    ))
}
