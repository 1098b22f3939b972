//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod device;
pub mod medical_record;
pub mod patient;
pub mod reading;

pub use device::DeviceEntity;
pub use medical_record::MedicalRecordEntity;
pub use patient::PatientEntity;
pub use reading::{ClassificationCountEntity, ReadingEntity};
