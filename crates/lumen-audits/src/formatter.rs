//! Formatter tags consumed by the report layer.

use serde::{Deserialize, Serialize};

/// Tells the report layer how to render an audit's extended detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Formatter {
    /// A list of messages, each with its source URL and line.
    UrlList,
}

impl Formatter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UrlList => "url-list",
        }
    }
}

impl std::fmt::Display for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
