//! Audit errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while building or running an audit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    /// A required artifact was not produced by the collection phase.
    #[error("Required artifact missing: {name}")]
    MissingArtifact { name: String },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Malformed artifact {name}: {message}")]
    MalformedArtifact { name: String, message: String },

    #[error("Invalid audit definition: {0}")]
    InvalidDefinition(String),

    #[error("Duplicate audit name: {0}")]
    DuplicateAudit(String),
}

impl ErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingArtifact { .. } => error_code::MISSING_ARTIFACT,
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
            Self::MalformedArtifact { .. }
            | Self::InvalidDefinition(_)
            | Self::DuplicateAudit(_) => error_code::AUDIT_ERROR,
        }
    }
}
