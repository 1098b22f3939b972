//! Patient entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database row mapping for the patients table.
#[derive(Debug, Clone, FromRow)]
pub struct PatientEntity {
    pub id: String,
    pub nik: String,
    pub name: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PatientEntity> for domain::models::Patient {
    fn from(entity: PatientEntity) -> Self {
        Self {
            id: entity.id,
            nik: entity.nik,
            name: entity.name,
            gender: entity.gender,
            birth_date: entity.birth_date,
            address: entity.address,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
