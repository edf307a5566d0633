//! Error handling for Lumen.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod audit_error;
pub mod config_error;
pub mod error_code;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
