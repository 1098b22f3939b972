//! Domain models for Osteo Sync.

pub mod classification;
pub mod dashboard;
pub mod device;
pub mod medical_record;
pub mod patient;
pub mod reading;

pub use classification::{normalize_label, Classification};
pub use dashboard::{DailyStats, DailyTally};
pub use device::{Device, DeviceSeed, DeviceStatus, DeviceSummary};
pub use medical_record::{MedicalRecord, MedicalRecordInput, NewMedicalRecord};
pub use patient::{Patient, PatientInput};
pub use reading::{NewReading, ReadingSubmission, Reading, RecentScan};
