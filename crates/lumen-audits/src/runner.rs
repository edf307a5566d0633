//! Audit runner: evaluates every registered audit against one artifact set.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use lumen_core::config::LumenConfig;
use lumen_core::errors::{AuditError, ErrorCode};
use lumen_core::types::Artifacts;

use crate::registry::AuditRegistry;
use crate::result::AuditResult;

/// Status of a single audit in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Passed,
    Failed,
    /// The audit could not produce a verdict, e.g. a required artifact was missing.
    Errored,
}

/// Outcome of one audit in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditOutcome {
    pub name: String,
    pub status: AuditStatus,
    pub result: Option<AuditResult>,
    pub error: Option<String>,
    pub error_code: Option<String>,
    pub execution_time_ms: u64,
}

impl AuditOutcome {
    fn completed(name: &str, result: AuditResult) -> Self {
        let status = if result.passed() {
            AuditStatus::Passed
        } else {
            AuditStatus::Failed
        };
        Self {
            name: name.to_string(),
            status,
            result: Some(result),
            error: None,
            error_code: None,
            execution_time_ms: 0,
        }
    }

    fn errored(name: &str, error: &AuditError) -> Self {
        Self {
            name: name.to_string(),
            status: AuditStatus::Errored,
            result: None,
            error: Some(error.to_string()),
            error_code: Some(error.error_code().to_string()),
            execution_time_ms: 0,
        }
    }
}

/// Runs a registry of audits in registration order.
pub struct AuditRunner {
    registry: AuditRegistry,
    /// Audits slower than this are logged. Default: 50ms.
    slow_audit: Duration,
}

impl AuditRunner {
    pub fn new(registry: AuditRegistry) -> Self {
        Self {
            registry,
            slow_audit: Duration::from_millis(50),
        }
    }

    /// Build the registry and runner settings from configuration.
    pub fn from_config(config: &LumenConfig, root: &Path) -> Result<Self, AuditError> {
        let registry = AuditRegistry::from_config(&config.audits, root)?;
        Ok(Self::new(registry).with_slow_threshold(Duration::from_millis(
            config.runner.effective_slow_audit_ms(),
        )))
    }

    pub fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_audit = threshold;
        self
    }

    pub fn registry(&self) -> &AuditRegistry {
        &self.registry
    }

    /// Execute every audit. An audit that errors does not stop the others.
    #[instrument(skip_all, fields(audits = self.registry.len()))]
    pub fn execute(&self, artifacts: &Artifacts) -> Vec<AuditOutcome> {
        let mut outcomes = Vec::with_capacity(self.registry.len());

        for audit in self.registry.iter() {
            let name = audit.name();
            let start = Instant::now();
            let mut outcome = match audit.run(artifacts) {
                Ok(result) => AuditOutcome::completed(name, result),
                Err(e) => {
                    warn!(audit = %name, error = %e.coded_string(), "audit errored");
                    AuditOutcome::errored(name, &e)
                }
            };
            let elapsed = start.elapsed();
            outcome.execution_time_ms = elapsed.as_millis() as u64;

            if elapsed > self.slow_audit {
                warn!(
                    audit = %name,
                    elapsed_ms = outcome.execution_time_ms,
                    limit_ms = self.slow_audit.as_millis() as u64,
                    "slow audit"
                );
            }
            debug!(audit = %name, status = ?outcome.status, "audit finished");

            outcomes.push(outcome);
        }

        outcomes
    }
}
