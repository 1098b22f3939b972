//! Reading entity (database row mapping).

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the readings table.
#[derive(Debug, Clone, FromRow)]
pub struct ReadingEntity {
    pub id: Uuid,
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

impl From<ReadingEntity> for domain::models::Reading {
    fn from(entity: ReadingEntity) -> Self {
        Self {
            id: entity.id.to_string(),
            device_id: entity.device_id,
            patient_id: entity.patient_id,
            doctor_id: entity.doctor_id,
            bmd_result: entity.bmd_result,
            t_score: entity.t_score,
            classification: entity.classification,
            raw_signal_data: entity.raw_signal_data,
            latitude: entity.latitude,
            longitude: entity.longitude,
            created_at: entity.created_at,
        }
    }
}

/// One row of the per-classification count query.
#[derive(Debug, Clone, FromRow)]
pub struct ClassificationCountEntity {
    pub classification: String,
    pub count: i64,
}
