//! Pattern audits: a descriptor plus a text pattern.

use lumen_core::errors::AuditError;
use lumen_core::types::Artifacts;

use crate::audit::{check_required_artifacts, Audit};
use crate::meta::AuditMeta;
use crate::pattern::MatchPattern;
use crate::result::AuditResult;
use crate::violations::violation_results;

/// Flags every console message whose text matches `pattern`.
#[derive(Debug, Clone)]
pub struct PatternAudit {
    meta: AuditMeta,
    pattern: MatchPattern,
}

impl PatternAudit {
    pub fn new(meta: AuditMeta, pattern: MatchPattern) -> Self {
        Self { meta, pattern }
    }

    pub fn pattern(&self) -> &MatchPattern {
        &self.pattern
    }

    /// Same descriptor, different pattern.
    pub fn with_pattern(mut self, pattern: MatchPattern) -> Self {
        self.pattern = pattern;
        self
    }
}

impl Audit for PatternAudit {
    fn meta(&self) -> &AuditMeta {
        &self.meta
    }

    fn audit(&self, artifacts: &Artifacts) -> Result<AuditResult, AuditError> {
        let matches = violation_results(artifacts, &self.pattern)?;
        Ok(AuditResult::from_matches(matches))
    }
}

/// One-shot pattern evaluation without building a `PatternAudit`.
///
/// Fails with `MissingArtifact` if any of `required_artifacts` is absent.
pub fn evaluate<S: AsRef<str>>(
    artifacts: &Artifacts,
    required_artifacts: &[S],
    pattern: &MatchPattern,
) -> Result<AuditResult, AuditError> {
    check_required_artifacts(artifacts, required_artifacts)?;
    let matches = violation_results(artifacts, pattern)?;
    Ok(AuditResult::from_matches(matches))
}
