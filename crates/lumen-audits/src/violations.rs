//! Violation extraction shared by pattern audits.

use lumen_core::errors::AuditError;
use lumen_core::types::{Artifacts, ConsoleMessage, CHROME_CONSOLE_MESSAGES};

use crate::pattern::MatchPattern;

/// Console messages whose text matches `pattern`, in collection order.
pub fn violation_results(
    artifacts: &Artifacts,
    pattern: &MatchPattern,
) -> Result<Vec<ConsoleMessage>, AuditError> {
    let messages = artifacts.console_messages(CHROME_CONSOLE_MESSAGES)?;
    let matches: Vec<ConsoleMessage> = messages
        .iter()
        .filter(|m| pattern.is_match(&m.text))
        .cloned()
        .collect();

    tracing::debug!(
        pattern = pattern.source(),
        scanned = messages.len(),
        matched = matches.len(),
        "extracted violations"
    );
    Ok(matches)
}
