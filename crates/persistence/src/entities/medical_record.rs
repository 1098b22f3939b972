//! Medical record entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the medical_records table.
#[derive(Debug, Clone, FromRow)]
pub struct MedicalRecordEntity {
    pub id: i64,
    pub patient_id: String,
    pub t_score: f64,
    pub diagnosis: String,
    pub scan_date: DateTime<Utc>,
    pub notes: String,
}

impl From<MedicalRecordEntity> for domain::models::MedicalRecord {
    fn from(entity: MedicalRecordEntity) -> Self {
        Self {
            id: entity.id,
            patient_id: entity.patient_id,
            t_score: entity.t_score,
            diagnosis: entity.diagnosis,
            scan_date: entity.scan_date,
            notes: entity.notes,
        }
    }
}
