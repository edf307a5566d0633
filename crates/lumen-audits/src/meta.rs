//! Static audit descriptors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Descriptor the orchestrator uses for scheduling and display.
///
/// Built once when an audit is constructed and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    pub category: String,
    /// Unique audit identifier, e.g. `no-mutation-events`.
    pub name: String,
    pub description: String,
    /// Longer guidance; may embed a markdown documentation link.
    pub help_text: String,
    pub required_artifacts: SmallVec<[String; 2]>,
}

impl AuditMeta {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        help_text: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            description: description.into(),
            help_text: help_text.into(),
            required_artifacts: SmallVec::new(),
        }
    }

    /// Declare an artifact the audit cannot run without.
    pub fn requires(mut self, artifact: impl Into<String>) -> Self {
        let artifact = artifact.into();
        if !self.required_artifacts.contains(&artifact) {
            self.required_artifacts.push(artifact);
        }
        self
    }
}
