//! In-memory device registry.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use domain::models::{Device, DeviceSeed, DeviceStatus};
use domain::stores::DeviceRegistry;
use domain::StoreError;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::table::Table;

#[derive(Default)]
struct State {
    devices: Table<Uuid, Device>,
    by_serial: HashMap<String, Uuid>,
}

/// Process-local [`DeviceRegistry`] holding devices registered at startup.
#[derive(Default)]
pub struct InMemoryDeviceRegistry {
    state: Mutex<State>,
}

impl InMemoryDeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from configured seeds. Duplicate serials are skipped.
    pub fn with_seeds(seeds: &[DeviceSeed]) -> Self {
        let mut state = State::default();
        for seed in seeds {
            let serial = seed.serial_number.trim();
            if serial.is_empty() || state.by_serial.contains_key(serial) {
                tracing::warn!(serial_number = %serial, "Skipping device seed");
                continue;
            }
            let device = new_device(serial, &seed.name);
            state.by_serial.insert(serial.to_string(), device.id);
            state.devices.insert(device.id, device);
        }
        Self {
            state: Mutex::new(state),
        }
    }

    /// Registers a device. A serial already in use is a conflict.
    pub async fn register(&self, serial_number: &str, name: &str) -> Result<Device, StoreError> {
        let mut state = self.state.lock().await;
        if state.by_serial.contains_key(serial_number) {
            return Err(StoreError::Conflict(format!(
                "device serial {serial_number} already registered"
            )));
        }
        let device = new_device(serial_number, name);
        state
            .by_serial
            .insert(serial_number.to_string(), device.id);
        state.devices.insert(device.id, device.clone());
        Ok(device)
    }
}

fn new_device(serial_number: &str, name: &str) -> Device {
    Device {
        id: Uuid::new_v4(),
        serial_number: serial_number.to_string(),
        name: name.to_string(),
        status: DeviceStatus::Unknown,
        last_seen_at: None,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl DeviceRegistry for InMemoryDeviceRegistry {
    async fn resolve(&self, serial: &str) -> Result<Option<Device>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .by_serial
            .get(serial)
            .and_then(|id| state.devices.get(id))
            .cloned())
    }

    async fn mark_active(&self, device_id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if let Some(device) = state.devices.get_mut(&device_id) {
            device.last_seen_at = Some(device.last_seen_at.map_or(at, |seen| seen.max(at)));
            device.status = DeviceStatus::Online;
        }
        Ok(())
    }

    async fn count_active(&self, since: Duration) -> Result<i64, StoreError> {
        let now = Utc::now();
        let state = self.state.lock().await;
        Ok(state
            .devices
            .iter()
            .filter(|d| d.is_active_within(since, now))
            .count() as i64)
    }

    async fn list(&self) -> Result<Vec<Device>, StoreError> {
        let state = self.state.lock().await;
        let mut devices: Vec<Device> = state.devices.iter().cloned().collect();
        devices.sort_by(|a, b| a.serial_number.cmp(&b.serial_number));
        Ok(devices)
    }
}
