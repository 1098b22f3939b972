//! Device entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::DeviceStatus;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the devices table.
#[derive(Debug, Clone, FromRow)]
pub struct DeviceEntity {
    pub id: Uuid,
    pub serial_number: String,
    pub name: String,
    pub status: String,
    pub last_seen_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<DeviceEntity> for domain::models::Device {
    fn from(entity: DeviceEntity) -> Self {
        Self {
            id: entity.id,
            serial_number: entity.serial_number,
            name: entity.name,
            // Rows written before the status column was constrained may hold other values.
            status: entity.status.parse().unwrap_or(DeviceStatus::Unknown),
            last_seen_at: entity.last_seen_at,
            created_at: entity.created_at,
        }
    }
}
