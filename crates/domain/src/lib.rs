//! Domain layer for the Osteo Sync backend.
//!
//! This crate contains:
//! - Domain models (Device, Reading, MedicalRecord, Patient, DailyStats)
//! - Store contracts implemented by the persistence layer
//! - Business logic services (classification, ingestion, dashboard)
//! - Domain error types

pub mod errors;
pub mod models;
pub mod services;
pub mod stores;

pub use errors::{DomainError, StoreError};
