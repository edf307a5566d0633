//! Built-in rules.

pub mod no_mutation_events;

use lumen_core::errors::AuditError;

use crate::pattern_audit::PatternAudit;

/// All built-in pattern audits, in registration order.
pub fn builtin_rules() -> Result<Vec<PatternAudit>, AuditError> {
    Ok(vec![no_mutation_events::audit()?])
}
