//! PostgreSQL implementations of the domain store contracts.

pub mod device;
pub mod patient;
pub mod reading;

pub use device::DeviceRepository;
pub use patient::PatientRepository;
pub use reading::ReadingRepository;
