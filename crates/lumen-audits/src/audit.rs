//! The shared audit abstraction.

use lumen_core::errors::AuditError;
use lumen_core::types::Artifacts;

use crate::meta::AuditMeta;
use crate::result::AuditResult;

/// A stateless rule over collected artifacts.
///
/// Implementors provide `audit`; callers go through `run`, which first
/// verifies the artifacts named in the metadata are present.
pub trait Audit: Send + Sync {
    fn meta(&self) -> &AuditMeta;

    /// Evaluate the rule. Required artifacts are already known to exist.
    fn audit(&self, artifacts: &Artifacts) -> Result<AuditResult, AuditError>;

    fn name(&self) -> &str {
        &self.meta().name
    }

    /// Check required artifacts, then evaluate.
    fn run(&self, artifacts: &Artifacts) -> Result<AuditResult, AuditError> {
        check_required_artifacts(artifacts, self.meta().required_artifacts.as_slice())?;
        self.audit(artifacts)
    }
}

/// Fails with `MissingArtifact` naming the first absent artifact.
pub fn check_required_artifacts<S: AsRef<str>>(
    artifacts: &Artifacts,
    required: &[S],
) -> Result<(), AuditError> {
    match required.iter().find(|name| !artifacts.contains(name.as_ref())) {
        Some(missing) => Err(AuditError::MissingArtifact {
            name: missing.as_ref().to_string(),
        }),
        None => Ok(()),
    }
}
