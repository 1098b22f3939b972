//! HTTP route handlers.

pub mod dashboard;
pub mod devices;
pub mod health;
pub mod medical_records;
pub mod patients;
pub mod readings;
