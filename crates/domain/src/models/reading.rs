//! Reading domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::time::{parse_timestamp, DateParseError};
use uuid::Uuid;
use validator::Validate;

use super::classification::Classification;

/// A persisted bone-density scan event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub id: String,
    pub device_id: Uuid,
    pub patient_id: String,
    pub doctor_id: String,
    pub bmd_result: f64,
    pub t_score: f64,
    pub classification: String,
    pub raw_signal_data: Value,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

/// A scan as submitted by a field device, before device resolution.
///
/// Carries no classification: it is always computed from `t_score`.
#[derive(Debug, Clone, Default)]
pub struct ReadingSubmission {
    pub patient_id: String,
    pub doctor_id: String,
    pub bmd_result: f64,
    pub t_score: f64,
    pub raw_signal_data: Option<Value>,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

/// A fully resolved reading handed to the store for insertion.
#[derive(Debug, Clone)]
pub struct NewReading {
    pub device_id: Uuid,
    pub patient_id: String,
    pub doctor_id: String,
    pub bmd_result: f64,
    pub t_score: f64,
    pub classification: Classification,
    pub raw_signal_data: Value,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl NewReading {
    /// Materialises the stored form under the given identifier.
    pub fn into_reading(self, id: String) -> Reading {
        Reading {
            id,
            device_id: self.device_id,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            bmd_result: self.bmd_result,
            t_score: self.t_score,
            classification: self.classification.as_str().to_string(),
            raw_signal_data: self.raw_signal_data,
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: self.created_at,
        }
    }
}

/// Request payload for `POST /api/v1/sync/reading`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SyncReadingRequest {
    #[serde(default)]
    pub device_serial: String,

    #[serde(default)]
    pub patient_id: String,

    #[serde(default)]
    pub doctor_id: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_bmd_result"))]
    pub bmd_result: f64,

    pub t_score: f64,

    /// Accepted for wire compatibility and ignored.
    #[serde(default)]
    pub classification: Option<String>,

    #[serde(default)]
    pub raw_signal_data: Option<Value>,

    #[serde(default, rename = "lat")]
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[serde(default, rename = "long")]
    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    /// RFC 3339 capture time; defaults to server time when absent.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl SyncReadingRequest {
    /// Splits the payload into the device serial and the submission.
    pub fn into_parts(self) -> Result<(String, ReadingSubmission), DateParseError> {
        let timestamp = match self.timestamp.as_deref().map(str::trim) {
            Some(ts) if !ts.is_empty() => Some(parse_timestamp(ts)?),
            _ => None,
        };

        Ok((
            self.device_serial,
            ReadingSubmission {
                patient_id: self.patient_id,
                doctor_id: self.doctor_id,
                bmd_result: self.bmd_result,
                t_score: self.t_score,
                raw_signal_data: self.raw_signal_data,
                latitude: self.latitude,
                longitude: self.longitude,
                timestamp,
            },
        ))
    }
}

/// Response payload for a reading sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReadingResponse {
    pub id: String,
}

/// One of today's most recent scans, as shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentScan {
    pub id: String,
    pub patient_id: String,
    pub device_id: Uuid,
    pub t_score: f64,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Reading> for RecentScan {
    fn from(reading: &Reading) -> Self {
        Self {
            id: reading.id.clone(),
            patient_id: reading.patient_id.clone(),
            device_id: reading.device_id,
            t_score: reading.t_score,
            status: reading.classification.clone(),
            timestamp: reading.created_at,
        }
    }
}
