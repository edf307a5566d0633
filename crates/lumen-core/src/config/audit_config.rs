//! Audit configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for which audits run and what they match.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Audit names that are not registered.
    pub disabled: Vec<String>,
    /// How override patterns are read: "regex" | "literal". Default: "regex".
    pub pattern_mode: Option<String>,
    /// Path to a TOML file of additional pattern audits.
    pub definitions_path: Option<String>,
    /// Per-audit pattern replacing the built-in one, keyed by audit name.
    pub pattern_overrides: HashMap<String, String>,
}

impl AuditConfig {
    /// Returns the effective pattern mode, defaulting to "regex".
    pub fn effective_pattern_mode(&self) -> &str {
        self.pattern_mode.as_deref().unwrap_or("regex")
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|d| d == name)
    }
}
