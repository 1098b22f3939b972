//! Hand-rolled store doubles for service tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{
    DailyTally, Device, DeviceStatus, MedicalRecord, NewMedicalRecord, NewReading, RecentScan,
};
use crate::stores::{DeviceRegistry, ReadingStore};

pub fn device(serial: &str) -> Device {
    Device {
        id: Uuid::new_v4(),
        serial_number: serial.to_string(),
        name: format!("Densitometer {}", serial),
        status: DeviceStatus::Unknown,
        last_seen_at: None,
        created_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct MockDeviceRegistry {
    pub device: Option<Device>,
    pub fail_resolve: bool,
    pub fail_mark_active: bool,
    pub fail_count_active: bool,
    pub active_count: i64,
    pub marked: Mutex<Vec<(Uuid, DateTime<Utc>)>>,
    pub resolve_calls: Mutex<u32>,
}

impl MockDeviceRegistry {
    pub fn with_device(device: Device) -> Self {
        Self {
            device: Some(device),
            ..Default::default()
        }
    }
}

#[async_trait]
impl DeviceRegistry for MockDeviceRegistry {
    async fn resolve(&self, serial: &str) -> Result<Option<Device>, StoreError> {
        *self.resolve_calls.lock().unwrap() += 1;
        if self.fail_resolve {
            return Err(StoreError::Unavailable("registry down".into()));
        }
        Ok(self
            .device
            .clone()
            .filter(|d| d.serial_number == serial))
    }

    async fn mark_active(&self, device_id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError> {
        if self.fail_mark_active {
            return Err(StoreError::Unavailable("registry down".into()));
        }
        self.marked.lock().unwrap().push((device_id, at));
        Ok(())
    }

    async fn count_active(&self, _since: Duration) -> Result<i64, StoreError> {
        if self.fail_count_active {
            return Err(StoreError::Unavailable("registry down".into()));
        }
        Ok(self.active_count)
    }

    async fn list(&self) -> Result<Vec<Device>, StoreError> {
        Ok(self.device.clone().into_iter().collect())
    }
}

#[derive(Default)]
pub struct MockReadingStore {
    pub fail_writes: bool,
    pub fail_stats: bool,
    pub tally: DailyTally,
    pub recent: Vec<RecentScan>,
    pub readings: Mutex<Vec<NewReading>>,
    pub records: Mutex<Vec<MedicalRecord>>,
}

#[async_trait]
impl ReadingStore for MockReadingStore {
    async fn create_reading(&self, reading: NewReading) -> Result<String, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("store down".into()));
        }
        let mut readings = self.readings.lock().unwrap();
        readings.push(reading);
        Ok(format!("rid-{}", readings.len()))
    }

    async fn daily_stats(&self) -> Result<DailyTally, StoreError> {
        if self.fail_stats {
            return Err(StoreError::Unavailable("store down".into()));
        }
        Ok(self.tally.clone())
    }

    async fn recent_scans(&self, limit: usize) -> Result<Vec<RecentScan>, StoreError> {
        Ok(self.recent.iter().take(limit).cloned().collect())
    }

    async fn create_medical_record(
        &self,
        record: NewMedicalRecord,
    ) -> Result<MedicalRecord, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("store down".into()));
        }
        let mut records = self.records.lock().unwrap();
        let stored = record.into_record(records.len() as i64 + 1);
        records.push(stored.clone());
        Ok(stored)
    }

    async fn patient_records(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, StoreError> {
        let mut out: Vec<MedicalRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.patient_id == patient_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.scan_date.cmp(&a.scan_date));
        Ok(out)
    }
}
