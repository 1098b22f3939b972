//! Persistence layer for the osteo sync backend.
//!
//! Two interchangeable backends implement the domain store contracts:
//! PostgreSQL repositories and an in-memory fallback. [`backend::Storage`]
//! picks one at startup.

pub mod backend;
pub mod db;
pub mod entities;
pub mod memory;
pub mod metrics;
pub mod repositories;

pub use backend::{Storage, StorageMode};
