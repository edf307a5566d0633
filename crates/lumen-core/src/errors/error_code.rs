//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to give the report layer a stable code
/// it can key "errored" audit entries on.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "MISSING_ARTIFACT").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const AUDIT_ERROR: &str = "AUDIT_ERROR";
pub const MISSING_ARTIFACT: &str = "MISSING_ARTIFACT";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
