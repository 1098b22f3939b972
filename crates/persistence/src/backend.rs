//! Storage backend selection.

use domain::models::DeviceSeed;
use domain::stores::{DeviceRegistry, PatientDirectory, ReadingStore};
use sqlx::PgPool;
use std::fmt;
use std::sync::Arc;

use crate::memory::{InMemoryDeviceRegistry, InMemoryPatientDirectory, InMemoryReadingStore};
use crate::repositories::{DeviceRepository, PatientRepository, ReadingRepository};

/// Which backend the process is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Postgres,
    Memory,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Postgres => "postgres",
            StorageMode::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The store handles shared by all services.
///
/// All three handles always belong to the same backend.
#[derive(Clone)]
pub struct Storage {
    mode: StorageMode,
    pool: Option<PgPool>,
    pub readings: Arc<dyn ReadingStore>,
    pub devices: Arc<dyn DeviceRegistry>,
    pub patients: Arc<dyn PatientDirectory>,
}

impl Storage {
    /// Durable storage over an open pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            mode: StorageMode::Postgres,
            readings: Arc::new(ReadingRepository::new(pool.clone())),
            devices: Arc::new(DeviceRepository::new(pool.clone())),
            patients: Arc::new(PatientRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Empty process-local storage with the given devices registered.
    pub fn in_memory(seeds: &[DeviceSeed]) -> Self {
        Self {
            mode: StorageMode::Memory,
            pool: None,
            readings: Arc::new(InMemoryReadingStore::new()),
            devices: Arc::new(InMemoryDeviceRegistry::with_seeds(seeds)),
            patients: Arc::new(InMemoryPatientDirectory::new()),
        }
    }

    /// Postgres when a pool is available, memory otherwise.
    pub fn from_pool(pool: Option<PgPool>, seeds: &[DeviceSeed]) -> Self {
        let storage = match pool {
            Some(pool) => Self::postgres(pool),
            None => Self::in_memory(seeds),
        };
        crate::metrics::record_storage_mode(storage.mode);
        storage
    }

    pub fn mode(&self) -> StorageMode {
        self.mode
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }
}
