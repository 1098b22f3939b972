//! Reading ingestion.
//!
//! Validates the submitting device, classifies the scan, persists it and
//! then bumps the device's activity timestamp on a best-effort basis.

use chrono::{Duration, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::errors::DomainError;
use crate::models::{Device, NewReading, ReadingSubmission};
use crate::services::classification::classify;
use crate::stores::{DeviceRegistry, ReadingStore};

/// How far past server time a device clock may run before a capture
/// timestamp is rejected.
pub const MAX_CLOCK_SKEW_SECS: i64 = 300;

/// Result of a successful sync.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub reading_id: String,
    pub device: Device,
    pub classification: crate::models::Classification,
    /// False when the post-write activity update failed and was swallowed.
    pub activity_recorded: bool,
}

/// Stateless orchestrator over the reading store and device registry.
#[derive(Clone)]
pub struct ReadingIngestionService {
    readings: Arc<dyn ReadingStore>,
    devices: Arc<dyn DeviceRegistry>,
}

impl ReadingIngestionService {
    pub fn new(readings: Arc<dyn ReadingStore>, devices: Arc<dyn DeviceRegistry>) -> Self {
        Self { readings, devices }
    }

    /// Ingests one scan from the device identified by `device_serial`.
    ///
    /// Nothing is written unless the device resolves. A failure to update
    /// the device's activity after the write is logged, never returned.
    pub async fn sync_reading(
        &self,
        submission: ReadingSubmission,
        device_serial: &str,
    ) -> Result<SyncOutcome, DomainError> {
        shared::validation::validate_device_serial(device_serial)?;
        shared::validation::validate_t_score(submission.t_score)?;

        let device = self
            .devices
            .resolve(device_serial)
            .await?
            .ok_or_else(|| DomainError::not_found("device not registered"))?;

        let now = Utc::now();
        let created_at = match submission.timestamp {
            Some(ts) if ts > now + Duration::seconds(MAX_CLOCK_SKEW_SECS) => {
                return Err(DomainError::validation("timestamp is in the future"));
            }
            Some(ts) => ts,
            None => now,
        };
        let classification = classify(submission.t_score);

        let reading = NewReading {
            device_id: device.id,
            patient_id: submission.patient_id,
            doctor_id: submission.doctor_id,
            bmd_result: submission.bmd_result,
            t_score: submission.t_score,
            classification,
            raw_signal_data: submission
                .raw_signal_data
                .filter(|v| !v.is_null())
                .unwrap_or_else(|| Value::Array(Vec::new())),
            latitude: submission.latitude,
            longitude: submission.longitude,
            created_at,
        };

        let reading_id = self.readings.create_reading(reading).await?;

        // Skewed clocks must not pin last_seen_at ahead of the server.
        let seen_at = created_at.min(Utc::now());
        let activity_recorded = match self.devices.mark_active(device.id, seen_at).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    device_id = %device.id,
                    reading_id = %reading_id,
                    error = %e,
                    "Failed to update device activity"
                );
                false
            }
        };

        info!(
            device_id = %device.id,
            reading_id = %reading_id,
            classification = %classification,
            "Reading synced"
        );

        Ok(SyncOutcome {
            reading_id,
            device,
            classification,
            activity_recorded,
        })
    }
}
