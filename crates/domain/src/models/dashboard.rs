//! Dashboard statistics models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::classification::{normalize_label, Classification};
use super::reading::RecentScan;

/// Today's reading count and per-classification breakdown, as reported by a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyTally {
    pub total: i64,
    pub by_classification: BTreeMap<String, i64>,
}

impl DailyTally {
    /// An empty tally with zeroed buckets for every known classification.
    pub fn with_known_buckets() -> Self {
        Self {
            total: 0,
            by_classification: Classification::ALL
                .iter()
                .map(|c| (c.as_str().to_string(), 0))
                .collect(),
        }
    }

    /// Counts one reading under the normalised form of `label`.
    pub fn record(&mut self, label: &str) {
        self.total += 1;
        *self
            .by_classification
            .entry(normalize_label(label))
            .or_insert(0) += 1;
    }

    /// Adds `count` readings of `label` to both the breakdown and the total.
    pub fn add_bucket(&mut self, label: &str, count: i64) {
        self.total += count;
        *self
            .by_classification
            .entry(normalize_label(label))
            .or_insert(0) += count;
    }

    pub fn count_of(&self, classification: Classification) -> i64 {
        self.by_classification
            .get(classification.as_str())
            .copied()
            .unwrap_or(0)
    }
}

/// Daily statistics snapshot served to the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    #[serde(rename = "totalPatientsToday")]
    pub total_today: i64,

    #[serde(rename = "byClassification")]
    pub by_classification: BTreeMap<String, i64>,

    #[serde(rename = "activeDevices")]
    pub active_devices: i64,

    #[serde(rename = "osteoporosisCases")]
    pub osteoporosis_cases: i64,

    #[serde(rename = "recentScans")]
    pub recent_scans: Vec<RecentScan>,
}
