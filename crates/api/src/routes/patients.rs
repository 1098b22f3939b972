//! Patient endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use domain::models::patient::{CreatePatientResponse, PatientRequest};
use domain::models::{Patient, PatientInput};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

fn into_input(request: PatientRequest) -> Result<PatientInput, ApiError> {
    request.validate()?;
    Ok(PatientInput::try_from(request)?)
}

/// GET /api/v1/patients
pub async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(state.storage.patients.list().await?))
}

/// POST /api/v1/patients
pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<PatientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatePatientResponse>), ApiError> {
    let Json(request) = payload?;
    let patient = state.storage.patients.create(into_input(request)?).await?;

    info!(patient_id = %patient.id, "Patient created");

    Ok((
        StatusCode::CREATED,
        Json(CreatePatientResponse { id: patient.id }),
    ))
}

/// PUT /api/v1/patients/:id
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PatientRequest>, JsonRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Json(request) = payload?;
    state
        .storage
        .patients
        .update(&id, into_input(request)?)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Patient not found".to_string()))
}

/// DELETE /api/v1/patients/:id
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.storage.patients.delete(&id).await? {
        info!(patient_id = %id, "Patient deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Patient not found".to_string()))
    }
}
