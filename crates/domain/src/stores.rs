//! Store contracts.
//!
//! Each contract has two implementations in the persistence crate: a
//! PostgreSQL-backed one and an in-memory fallback. Which one is used is
//! decided once at startup; services only see these traits.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{
    DailyTally, Device, MedicalRecord, NewMedicalRecord, NewReading, Patient, PatientInput,
    RecentScan,
};

/// Resolves devices by serial number and tracks their activity.
#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    /// Looks up a device by its external serial number.
    ///
    /// An unregistered serial is `Ok(None)`, not an error.
    async fn resolve(&self, serial: &str) -> Result<Option<Device>, StoreError>;

    /// Records activity at `at` and marks the device online.
    ///
    /// The stored last-activity time never moves backwards.
    async fn mark_active(&self, device_id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError>;

    /// Counts devices whose last activity is within `since` of now.
    async fn count_active(&self, since: Duration) -> Result<i64, StoreError>;

    /// Lists all registered devices ordered by serial number.
    async fn list(&self) -> Result<Vec<Device>, StoreError>;
}

/// Persists readings and medical records and answers the daily rollup.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Inserts a reading and returns its generated identifier.
    async fn create_reading(&self, reading: NewReading) -> Result<String, StoreError>;

    /// Counts readings created since local midnight, bucketed by normalised label.
    async fn daily_stats(&self) -> Result<DailyTally, StoreError>;

    /// Today's most recent readings, newest first.
    async fn recent_scans(&self, limit: usize) -> Result<Vec<RecentScan>, StoreError>;

    /// Inserts a medical record and returns it with its generated identifier.
    async fn create_medical_record(
        &self,
        record: NewMedicalRecord,
    ) -> Result<MedicalRecord, StoreError>;

    /// All records of a patient, most recent scan first. Empty when none exist.
    async fn patient_records(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, StoreError>;
}

/// Patient CRUD.
#[async_trait]
pub trait PatientDirectory: Send + Sync {
    async fn create(&self, input: PatientInput) -> Result<Patient, StoreError>;

    /// All patients, newest first.
    async fn list(&self) -> Result<Vec<Patient>, StoreError>;

    /// Returns `None` when no patient has the given id.
    async fn update(&self, id: &str, input: PatientInput) -> Result<Option<Patient>, StoreError>;

    /// Returns `false` when no patient has the given id.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
