//! Device repository for database operations.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use domain::models::Device;
use domain::stores::DeviceRegistry;
use domain::StoreError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::DeviceEntity;
use crate::metrics::QueryTimer;

/// PostgreSQL-backed device registry.
#[derive(Clone)]
pub struct DeviceRepository {
    pool: PgPool,
}

impl DeviceRepository {
    /// Creates a new DeviceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a device by its serial number.
    pub async fn find_by_serial(&self, serial: &str) -> Result<Option<DeviceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_device_by_serial");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT id, serial_number, name, status, last_seen_at, created_at
            FROM devices
            WHERE serial_number = $1
            LIMIT 1
            "#,
        )
        .bind(serial)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Set last_seen_at (never backwards) and mark the device online.
    ///
    /// Returns the number of rows affected (0 if the device is unknown).
    pub async fn update_last_seen_at(
        &self,
        id: Uuid,
        timestamp: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("update_device_last_seen");
        let result = sqlx::query(
            r#"
            UPDATE devices
            SET last_seen_at = GREATEST(last_seen_at, $2),
                status = 'online'
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(timestamp)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    /// Count devices seen in `[threshold, now]`.
    pub async fn count_seen_between(
        &self,
        threshold: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_active_devices");
        let count: Result<(i64,), _> = sqlx::query_as(
            r#"
            SELECT COUNT(*) as count
            FROM devices
            WHERE last_seen_at >= $1 AND last_seen_at <= $2
            "#,
        )
        .bind(threshold)
        .bind(now)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        Ok(count?.0)
    }

    /// All devices ordered by serial number.
    pub async fn find_all(&self) -> Result<Vec<DeviceEntity>, sqlx::Error> {
        sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT id, serial_number, name, status, last_seen_at, created_at
            FROM devices
            ORDER BY serial_number ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}

#[async_trait]
impl DeviceRegistry for DeviceRepository {
    async fn resolve(&self, serial: &str) -> Result<Option<Device>, StoreError> {
        Ok(self.find_by_serial(serial).await?.map(Into::into))
    }

    async fn mark_active(&self, device_id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError> {
        let rows = self.update_last_seen_at(device_id, at).await?;
        if rows == 0 {
            tracing::debug!(device_id = %device_id, "Activity update matched no device");
        }
        Ok(())
    }

    async fn count_active(&self, since: Duration) -> Result<i64, StoreError> {
        let now = Utc::now();
        Ok(self.count_seen_between(now - since, now).await?)
    }

    async fn list(&self) -> Result<Vec<Device>, StoreError> {
        Ok(self.find_all().await?.into_iter().map(Into::into).collect())
    }
}
