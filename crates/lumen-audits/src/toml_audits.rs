//! Declarative TOML pattern audits, added without recompiling.
//!
//! ```toml
//! [[audits]]
//! name = "no-document-write"
//! category = "Performance"
//! description = "Avoids document.write()"
//! pattern = "document.write("
//! mode = "literal"
//! ```

use serde::{Deserialize, Serialize};

use lumen_core::errors::AuditError;
use lumen_core::types::CHROME_CONSOLE_MESSAGES;

use crate::meta::AuditMeta;
use crate::pattern::{MatchPattern, PatternMode};
use crate::pattern_audit::PatternAudit;

/// A TOML-defined pattern audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlAuditDef {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub help_text: String,
    pub pattern: String,
    /// "regex" | "literal". Default: "regex".
    pub mode: Option<String>,
    #[serde(default)]
    pub required_artifacts: Vec<String>,
    pub enabled: Option<bool>,
}

/// A collection of TOML audit definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlAuditFile {
    #[serde(default)]
    pub audits: Vec<TomlAuditDef>,
}

/// Loader for TOML audit definitions.
pub struct TomlAuditLoader;

impl TomlAuditLoader {
    /// Load audits from a TOML string. Disabled entries are skipped.
    pub fn load_from_str(toml_str: &str) -> Result<Vec<PatternAudit>, AuditError> {
        let file: TomlAuditFile = toml::from_str(toml_str)
            .map_err(|e| AuditError::InvalidDefinition(format!("TOML parse error: {e}")))?;

        let mut audits = Vec::new();
        for def in file.audits {
            if def.enabled == Some(false) {
                tracing::debug!(audit = %def.name, "skipping disabled audit definition");
                continue;
            }
            audits.push(Self::compile(def)?);
        }
        Ok(audits)
    }

    /// Load audits from a file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Vec<PatternAudit>, AuditError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AuditError::InvalidDefinition(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::load_from_str(&content)
    }

    /// Compile a single definition into an audit.
    fn compile(def: TomlAuditDef) -> Result<PatternAudit, AuditError> {
        if def.name.trim().is_empty() {
            return Err(AuditError::InvalidDefinition(
                "audit definition has an empty name".to_string(),
            ));
        }

        let mode = match def.mode.as_deref() {
            None => PatternMode::default(),
            Some(m) => PatternMode::parse_str(m).ok_or_else(|| {
                AuditError::InvalidDefinition(format!(
                    "unknown mode '{m}' in audit '{}'",
                    def.name
                ))
            })?,
        };
        let pattern = MatchPattern::new(def.pattern, mode)?;

        // Pattern audits always read console messages.
        let mut meta = AuditMeta::new(def.category, def.name, def.description, def.help_text)
            .requires(CHROME_CONSOLE_MESSAGES);
        for artifact in def.required_artifacts {
            meta = meta.requires(artifact);
        }

        Ok(PatternAudit::new(meta, pattern))
    }
}
