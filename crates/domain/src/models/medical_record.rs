//! Medical record domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::time::{parse_timestamp, DateParseError};
use validator::Validate;

/// A patient's interpreted scan result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalRecord {
    pub id: i64,
    pub patient_id: String,
    pub t_score: f64,
    pub diagnosis: String,
    pub scan_date: DateTime<Utc>,
    pub notes: String,
}

/// A record ready for insertion: diagnosis already computed, scan date resolved.
#[derive(Debug, Clone)]
pub struct NewMedicalRecord {
    pub patient_id: String,
    pub t_score: f64,
    pub diagnosis: String,
    pub scan_date: DateTime<Utc>,
    pub notes: String,
}

impl NewMedicalRecord {
    pub fn into_record(self, id: i64) -> MedicalRecord {
        MedicalRecord {
            id,
            patient_id: self.patient_id,
            t_score: self.t_score,
            diagnosis: self.diagnosis,
            scan_date: self.scan_date,
            notes: self.notes,
        }
    }
}

/// Request payload for `POST /api/v1/patients/:patient_id/records`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMedicalRecordRequest {
    pub t_score: f64,

    /// Accepted for wire compatibility and ignored.
    #[serde(default)]
    pub diagnosis: Option<String>,

    /// RFC 3339; defaults to server time when absent.
    #[serde(default)]
    pub scan_date: Option<String>,

    #[serde(default)]
    #[validate(length(max = 4000, message = "Notes must be at most 4000 characters"))]
    pub notes: String,
}

impl CreateMedicalRecordRequest {
    /// Resolves the payload for `patient_id`. A blank `scan_date` is absent.
    pub fn into_input(self, patient_id: String) -> Result<MedicalRecordInput, DateParseError> {
        let scan_date = match self.scan_date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => Some(parse_timestamp(date)?),
            _ => None,
        };
        Ok(MedicalRecordInput {
            patient_id,
            t_score: self.t_score,
            scan_date,
            notes: self.notes,
        })
    }
}

/// Record input as seen by the medical record service.
#[derive(Debug, Clone, Default)]
pub struct MedicalRecordInput {
    pub patient_id: String,
    pub t_score: f64,
    pub scan_date: Option<DateTime<Utc>>,
    pub notes: String,
}
