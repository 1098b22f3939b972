//! Medical record endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use domain::models::medical_record::CreateMedicalRecordRequest;
use domain::models::MedicalRecord;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Record a scan result for a patient. The diagnosis is computed server-side.
///
/// POST /api/v1/patients/:id/records
pub async fn create_medical_record(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
    payload: Result<Json<CreateMedicalRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MedicalRecord>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    let input = request.into_input(patient_id)?;

    let record = state.records.create_medical_record(input).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// A patient's history, most recent scan first.
///
/// GET /api/v1/patients/:id/records
pub async fn list_patient_records(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Vec<MedicalRecord>>, ApiError> {
    Ok(Json(state.records.patient_records(&patient_id).await?))
}
