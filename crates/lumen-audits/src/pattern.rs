//! Match patterns for console message text.
//!
//! Matching is always case-insensitive. A pattern source is read either as a
//! regular expression or as a literal substring.

use lumen_core::errors::AuditError;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// How a pattern source string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    #[default]
    Regex,
    Literal,
}

impl PatternMode {
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "regex" => Some(Self::Regex),
            "literal" => Some(Self::Literal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::Literal => "literal",
        }
    }
}

/// A compiled, case-insensitive text matcher.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    source: String,
    mode: PatternMode,
    regex: Regex,
}

impl MatchPattern {
    /// Compile `source` according to `mode`.
    ///
    /// An empty source is rejected: it would flag every message.
    pub fn new(source: impl Into<String>, mode: PatternMode) -> Result<Self, AuditError> {
        let source = source.into();
        if source.is_empty() {
            return Err(AuditError::InvalidPattern {
                pattern: source,
                message: "pattern must not be empty".to_string(),
            });
        }

        let expr = match mode {
            PatternMode::Regex => source.clone(),
            PatternMode::Literal => regex::escape(&source),
        };
        let regex = RegexBuilder::new(&expr)
            .case_insensitive(true)
            .build()
            .map_err(|e| AuditError::InvalidPattern {
                pattern: source.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            source,
            mode,
            regex,
        })
    }

    pub fn regex(source: impl Into<String>) -> Result<Self, AuditError> {
        Self::new(source, PatternMode::Regex)
    }

    pub fn literal(source: impl Into<String>) -> Result<Self, AuditError> {
        Self::new(source, PatternMode::Literal)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn mode(&self) -> PatternMode {
        self.mode
    }
}

impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.source == other.source
    }
}

impl Eq for MatchPattern {}
