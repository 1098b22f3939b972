//! Shared utilities and common types for the Osteo Sync backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Random identifier generation
//! - Common validation logic
//! - Calendar helpers for "today" windows and date parsing

pub mod crypto;
pub mod time;
pub mod validation;
