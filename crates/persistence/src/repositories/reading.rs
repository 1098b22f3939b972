//! Reading and medical record repository for database operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::models::{DailyTally, MedicalRecord, NewMedicalRecord, NewReading, RecentScan, Reading};
use domain::stores::ReadingStore;
use domain::StoreError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ClassificationCountEntity, MedicalRecordEntity, ReadingEntity};
use crate::metrics::QueryTimer;

/// PostgreSQL-backed reading store.
#[derive(Clone)]
pub struct ReadingRepository {
    pool: PgPool,
}

impl ReadingRepository {
    /// Creates a new ReadingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a reading and return its generated id.
    pub async fn insert_reading(&self, reading: &NewReading) -> Result<Uuid, sqlx::Error> {
        let timer = QueryTimer::new("insert_reading");
        let row: Result<(Uuid,), _> = sqlx::query_as(
            r#"
            INSERT INTO readings (device_id, patient_id, doctor_id, bmd_result, t_score,
                                  classification, raw_signal_data, latitude, longitude, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(reading.device_id)
        .bind(&reading.patient_id)
        .bind(&reading.doctor_id)
        .bind(reading.bmd_result)
        .bind(reading.t_score)
        .bind(reading.classification.as_str())
        .bind(&reading.raw_signal_data)
        .bind(reading.latitude)
        .bind(reading.longitude)
        .bind(reading.created_at)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        Ok(row?.0)
    }

    /// Count readings created at or after `since`, grouped by stored label.
    pub async fn count_by_classification_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<ClassificationCountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("count_readings_by_classification");
        let rows = sqlx::query_as::<_, ClassificationCountEntity>(
            r#"
            SELECT classification, COUNT(*) as count
            FROM readings
            WHERE created_at >= $1
            GROUP BY classification
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        rows
    }

    /// Most recent readings created at or after `since`.
    pub async fn find_recent_since(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<ReadingEntity>, sqlx::Error> {
        sqlx::query_as::<_, ReadingEntity>(
            r#"
            SELECT id, device_id, patient_id, doctor_id, bmd_result, t_score, classification,
                   raw_signal_data, latitude, longitude, created_at
            FROM readings
            WHERE created_at >= $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Insert a medical record, returning the stored row.
    pub async fn insert_medical_record(
        &self,
        record: &NewMedicalRecord,
    ) -> Result<MedicalRecordEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_medical_record");
        let result = sqlx::query_as::<_, MedicalRecordEntity>(
            r#"
            INSERT INTO medical_records (patient_id, t_score, diagnosis, notes, scan_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, patient_id, t_score, diagnosis, scan_date, notes
            "#,
        )
        .bind(&record.patient_id)
        .bind(record.t_score)
        .bind(&record.diagnosis)
        .bind(&record.notes)
        .bind(record.scan_date)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Medical records of a patient, most recent scan first.
    pub async fn find_records_by_patient(
        &self,
        patient_id: &str,
    ) -> Result<Vec<MedicalRecordEntity>, sqlx::Error> {
        sqlx::query_as::<_, MedicalRecordEntity>(
            r#"
            SELECT id, patient_id, t_score, diagnosis, scan_date, notes
            FROM medical_records
            WHERE patient_id = $1
            ORDER BY scan_date DESC, id DESC
            "#,
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await
    }
}

#[async_trait]
impl ReadingStore for ReadingRepository {
    async fn create_reading(&self, reading: NewReading) -> Result<String, StoreError> {
        Ok(self.insert_reading(&reading).await?.to_string())
    }

    async fn daily_stats(&self) -> Result<DailyTally, StoreError> {
        let since = shared::time::start_of_today();
        let buckets = self.count_by_classification_since(since).await?;

        // Total is the sum of one grouped query.
        let mut tally = DailyTally::with_known_buckets();
        for bucket in buckets {
            tally.add_bucket(&bucket.classification, bucket.count);
        }
        Ok(tally)
    }

    async fn recent_scans(&self, limit: usize) -> Result<Vec<RecentScan>, StoreError> {
        let since = shared::time::start_of_today();
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        Ok(self
            .find_recent_since(since, limit)
            .await?
            .into_iter()
            .map(|entity| RecentScan::from(&Reading::from(entity)))
            .collect())
    }

    async fn create_medical_record(
        &self,
        record: NewMedicalRecord,
    ) -> Result<MedicalRecord, StoreError> {
        Ok(self.insert_medical_record(&record).await?.into())
    }

    async fn patient_records(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, StoreError> {
        Ok(self
            .find_records_by_patient(patient_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
