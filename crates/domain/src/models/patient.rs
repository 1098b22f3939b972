//! Patient domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::time::{parse_date, DateParseError};
use validator::Validate;

/// A patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    /// National identity number.
    pub nik: String,
    pub name: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated patient attributes for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientInput {
    pub nik: String,
    pub name: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub address: String,
}

/// Request payload for creating or updating a patient.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PatientRequest {
    #[validate(length(min = 1, max = 32, message = "NIK must be between 1 and 32 characters"))]
    pub nik: String,

    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 16, message = "Gender must be at most 16 characters"))]
    pub gender: String,

    /// `YYYY-MM-DD`
    pub birth_date: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: String,
}

impl TryFrom<PatientRequest> for PatientInput {
    type Error = DateParseError;

    fn try_from(request: PatientRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            birth_date: parse_date(&request.birth_date)?,
            nik: request.nik,
            name: request.name,
            gender: request.gender,
            address: request.address,
        })
    }
}

/// Response carrying a created patient's identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientResponse {
    pub id: String,
}
