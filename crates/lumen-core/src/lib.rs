//! Lumen core: artifact types, errors, configuration, and tracing.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
