//! Dashboard aggregation.

use chrono::Duration;
use std::sync::Arc;
use tracing::warn;

use crate::errors::StoreError;
use crate::models::{Classification, DailyStats};
use crate::stores::{DeviceRegistry, ReadingStore};

/// Trailing window within which a device counts as active.
pub const ACTIVE_DEVICE_WINDOW_SECS: i64 = 300;

/// Number of recent scans included in a snapshot by default.
pub const DEFAULT_RECENT_SCANS: usize = 10;

/// Composes the daily statistics snapshot.
#[derive(Clone)]
pub struct DashboardAggregator {
    readings: Arc<dyn ReadingStore>,
    devices: Arc<dyn DeviceRegistry>,
    active_window: Duration,
    recent_limit: usize,
}

impl DashboardAggregator {
    pub fn new(readings: Arc<dyn ReadingStore>, devices: Arc<dyn DeviceRegistry>) -> Self {
        Self {
            readings,
            devices,
            active_window: Duration::seconds(ACTIVE_DEVICE_WINDOW_SECS),
            recent_limit: DEFAULT_RECENT_SCANS,
        }
    }

    pub fn with_active_window(mut self, window: Duration) -> Self {
        self.active_window = window;
        self
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Builds today's snapshot.
    ///
    /// Reading-store failures are fatal. The active-device figure degrades
    /// to zero if the registry call fails.
    pub async fn get_stats(&self) -> Result<DailyStats, StoreError> {
        let tally = self.readings.daily_stats().await?;
        let recent_scans = if self.recent_limit > 0 {
            self.readings.recent_scans(self.recent_limit).await?
        } else {
            Vec::new()
        };

        let active_devices = match self.devices.count_active(self.active_window).await {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "Active device count unavailable, reporting zero");
                0
            }
        };

        Ok(DailyStats {
            total_today: tally.total,
            osteoporosis_cases: tally.count_of(Classification::Osteoporosis),
            by_classification: tally.by_classification,
            active_devices,
            recent_scans,
        })
    }
}
