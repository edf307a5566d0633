//! Top-level Lumen configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AuditConfig, RunnerConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "lumen.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`LUMEN_*`)
/// 3. Project config (`lumen.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LumenConfig {
    pub audits: AuditConfig,
    pub runner: RunnerConfig,
}

/// Override values supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub disabled_audits: Option<Vec<String>>,
    pub pattern_mode: Option<String>,
    pub definitions_path: Option<String>,
    pub slow_audit_ms: Option<u64>,
}

impl LumenConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &LumenConfig) -> Result<(), ConfigError> {
        if let Some(ref mode) = config.audits.pattern_mode {
            if mode != "regex" && mode != "literal" {
                return Err(ConfigError::ValidationFailed {
                    field: "audits.pattern_mode".to_string(),
                    message: format!("must be \"regex\" or \"literal\", got \"{mode}\""),
                });
            }
        }
        if config.runner.slow_audit_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "runner.slow_audit_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut LumenConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LumenConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; set values in `other` win.
    fn merge(base: &mut LumenConfig, other: &LumenConfig) {
        if !other.audits.disabled.is_empty() {
            base.audits.disabled = other.audits.disabled.clone();
        }
        if other.audits.pattern_mode.is_some() {
            base.audits.pattern_mode = other.audits.pattern_mode.clone();
        }
        for (name, pattern) in &other.audits.pattern_overrides {
            base.audits
                .pattern_overrides
                .insert(name.clone(), pattern.clone());
        }
        if other.audits.definitions_path.is_some() {
            base.audits.definitions_path = other.audits.definitions_path.clone();
        }

        if other.runner.slow_audit_ms.is_some() {
            base.runner.slow_audit_ms = other.runner.slow_audit_ms;
        }
    }

    /// Apply environment variable overrides.
    /// `LUMEN_AUDITS_DISABLED` is a comma-separated list of audit names.
    fn apply_env_overrides(config: &mut LumenConfig) {
        if let Ok(val) = std::env::var("LUMEN_AUDITS_DISABLED") {
            config.audits.disabled = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(val) = std::env::var("LUMEN_AUDITS_PATTERN_MODE") {
            config.audits.pattern_mode = Some(val);
        }
        if let Ok(val) = std::env::var("LUMEN_AUDITS_DEFINITIONS_PATH") {
            config.audits.definitions_path = Some(val);
        }
        if let Ok(val) = std::env::var("LUMEN_RUNNER_SLOW_AUDIT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.runner.slow_audit_ms = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut LumenConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.disabled_audits {
            config.audits.disabled = v.clone();
        }
        if let Some(ref v) = overrides.pattern_mode {
            config.audits.pattern_mode = Some(v.clone());
        }
        if let Some(ref v) = overrides.definitions_path {
            config.audits.definitions_path = Some(v.clone());
        }
        if let Some(v) = overrides.slow_audit_ms {
            config.runner.slow_audit_ms = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
