//! Lumen audits: pattern-based rules over collected page artifacts.
//!
//! An audit reads named artifacts, produces a pass/fail verdict, and attaches
//! the offending entries for the report layer. Audits are registered once in
//! an [`AuditRegistry`] and invoked uniformly by the [`AuditRunner`].

pub mod audit;
pub mod formatter;
pub mod meta;
pub mod pattern;
pub mod pattern_audit;
pub mod registry;
pub mod result;
pub mod rules;
pub mod runner;
pub mod toml_audits;
pub mod violations;

pub use audit::{check_required_artifacts, Audit};
pub use formatter::Formatter;
pub use meta::AuditMeta;
pub use pattern::{MatchPattern, PatternMode};
pub use pattern_audit::{evaluate, PatternAudit};
pub use registry::AuditRegistry;
pub use result::{AuditResult, ExtendedInfo};
pub use runner::{AuditOutcome, AuditRunner, AuditStatus};
pub use toml_audits::TomlAuditLoader;
