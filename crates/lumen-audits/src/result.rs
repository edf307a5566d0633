//! Audit results.

use lumen_core::types::ConsoleMessage;
use serde::{Deserialize, Serialize};

use crate::formatter::Formatter;

/// Verdict plus supporting detail, built fresh per invocation.
///
/// Serializes as `{"rawValue": bool, "extendedInfo": {"formatter": .., "value": [..]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// `true` when the audit passed.
    pub raw_value: bool,
    pub extended_info: ExtendedInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedInfo {
    pub formatter: Formatter,
    pub value: Vec<ConsoleMessage>,
}

impl AuditResult {
    /// Result for a pattern audit: passes iff nothing matched.
    pub fn from_matches(matches: Vec<ConsoleMessage>) -> Self {
        Self {
            raw_value: matches.is_empty(),
            extended_info: ExtendedInfo {
                formatter: Formatter::UrlList,
                value: matches,
            },
        }
    }

    pub fn passed(&self) -> bool {
        self.raw_value
    }

    /// The offending entries, in the order they were collected.
    pub fn matches(&self) -> &[ConsoleMessage] {
        &self.extended_info.value
    }
}
