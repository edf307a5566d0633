//! Audit registry: the set of audits a run evaluates.

use std::path::Path;

use lumen_core::config::AuditConfig;
use lumen_core::errors::AuditError;

use crate::audit::Audit;
use crate::meta::AuditMeta;
use crate::pattern::{MatchPattern, PatternMode};
use crate::pattern_audit::PatternAudit;
use crate::rules;
use crate::toml_audits::TomlAuditLoader;

/// Audits in registration order. Names are unique.
#[derive(Default)]
pub struct AuditRegistry {
    audits: Vec<Box<dyn Audit>>,
}

impl AuditRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in rule with its default pattern.
    pub fn with_builtins() -> Result<Self, AuditError> {
        let mut registry = Self::new();
        for audit in rules::builtin_rules()? {
            registry.register(Box::new(audit))?;
        }
        Ok(registry)
    }

    /// Build the registry from configuration.
    ///
    /// Registers built-in rules, then audits from `definitions_path`
    /// (resolved against `root` when relative). Disabled names are skipped
    /// and `pattern_overrides` replace the pattern of the named audit.
    pub fn from_config(config: &AuditConfig, root: &Path) -> Result<Self, AuditError> {
        let mode = PatternMode::parse_str(config.effective_pattern_mode()).ok_or_else(|| {
            AuditError::InvalidDefinition(format!(
                "unknown pattern mode '{}'",
                config.effective_pattern_mode()
            ))
        })?;

        let mut candidates = rules::builtin_rules()?;
        if let Some(ref path) = config.definitions_path {
            let path = root.join(path);
            candidates.extend(TomlAuditLoader::load_from_file(&path)?);
        }

        for name in config.pattern_overrides.keys() {
            if !candidates.iter().any(|a| a.name() == name) {
                tracing::warn!(audit = %name, "pattern override names no known audit");
            }
        }

        let mut registry = Self::new();
        for audit in candidates {
            if config.is_disabled(audit.name()) {
                tracing::debug!(audit = %audit.name(), "audit disabled by config");
                continue;
            }
            let audit = match config.pattern_overrides.get(audit.name()) {
                Some(source) => audit.with_pattern(MatchPattern::new(source.as_str(), mode)?),
                None => audit,
            };
            registry.register(Box::new(audit))?;
        }

        tracing::info!(audits = registry.len(), "audit registry built");
        Ok(registry)
    }

    /// Add an audit. Fails if an audit with the same name exists.
    pub fn register(&mut self, audit: Box<dyn Audit>) -> Result<(), AuditError> {
        if self.get(audit.name()).is_some() {
            return Err(AuditError::DuplicateAudit(audit.name().to_string()));
        }
        self.audits.push(audit);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Audit> {
        self.audits
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Audit> {
        self.audits.iter().map(|a| a.as_ref() as &dyn Audit)
    }

    /// Descriptors of every registered audit, for scheduling and display.
    pub fn metas(&self) -> Vec<&AuditMeta> {
        self.iter().map(|a| a.meta()).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|a| a.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.audits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audits.is_empty()
    }
}

impl TryFrom<Vec<PatternAudit>> for AuditRegistry {
    type Error = AuditError;

    /// Fails with `DuplicateAudit` on the first repeated name.
    fn try_from(audits: Vec<PatternAudit>) -> Result<Self, Self::Error> {
        let mut registry = Self::new();
        for audit in audits {
            registry.register(Box::new(audit))?;
        }
        Ok(registry)
    }
}
