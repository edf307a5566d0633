//! Flags pages whose scripts use Mutation Events; Mutation Observers replace them.

use lumen_core::errors::AuditError;
use lumen_core::types::CHROME_CONSOLE_MESSAGES;

use crate::meta::AuditMeta;
use crate::pattern::MatchPattern;
use crate::pattern_audit::PatternAudit;

pub const NAME: &str = "no-mutation-events";
pub const CATEGORY: &str = "JavaScript";
pub const PATTERN: &str = "mutation";

pub fn meta() -> AuditMeta {
    AuditMeta::new(
        CATEGORY,
        NAME,
        "Avoids Mutation Events in its own scripts",
        "Mutation Events are deprecated and harm performance. Consider using Mutation \
         Observers instead. [Learn more](https://developers.google.com/web/tools/lighthouse/audits/mutation-events).",
    )
    .requires(CHROME_CONSOLE_MESSAGES)
}

pub fn audit() -> Result<PatternAudit, AuditError> {
    Ok(PatternAudit::new(meta(), MatchPattern::regex(PATTERN)?))
}
