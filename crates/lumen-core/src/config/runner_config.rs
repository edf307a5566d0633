//! Runner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the audit runner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunnerConfig {
    /// Audits slower than this are logged at warn level. Default: 50.
    pub slow_audit_ms: Option<u64>,
}

impl RunnerConfig {
    /// Returns the effective slow-audit threshold, defaulting to 50ms.
    pub fn effective_slow_audit_ms(&self) -> u64 {
        self.slow_audit_ms.unwrap_or(50)
    }
}
