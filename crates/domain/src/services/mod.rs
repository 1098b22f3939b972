//! Domain services for Osteo Sync.
//!
//! Services contain business logic that operates on domain models and the
//! store contracts.

pub mod classification;
pub mod dashboard;
pub mod ingestion;
pub mod medical_records;

#[cfg(test)]
pub(crate) mod test_support;

pub use classification::classify;
pub use dashboard::{DashboardAggregator, ACTIVE_DEVICE_WINDOW_SECS, DEFAULT_RECENT_SCANS};
pub use ingestion::{ReadingIngestionService, SyncOutcome};
pub use medical_records::MedicalRecordService;
