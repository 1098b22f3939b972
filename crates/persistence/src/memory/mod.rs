//! In-memory store implementations.
//!
//! Used when no database is configured. Every store keeps its state behind
//! a single async mutex, so each operation is atomic with respect to the
//! others and a sequence of N accepted syncs is always counted N times.

mod devices;
mod patients;
mod readings;
mod table;

pub use devices::InMemoryDeviceRegistry;
pub use patients::InMemoryPatientDirectory;
pub use readings::InMemoryReadingStore;
pub use table::Table;
