//! Collected page-load artifacts.
//!
//! Artifacts are produced by an external collection phase and are read-only
//! to audits. Each is keyed by a stable name such as `ChromeConsoleMessages`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AuditError;

/// Artifact name for console messages captured during the page load.
pub const CHROME_CONSOLE_MESSAGES: &str = "ChromeConsoleMessages";

/// A single console message reported by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleMessage {
    pub text: String,
    /// Script URL the message originated from. Empty when unknown or null.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, alias = "lineNumber", skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Console source, e.g. "violation" or "javascript".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl ConsoleMessage {
    /// Message with text only.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Message with text and a source location.
    pub fn at(text: impl Into<String>, url: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            line: Some(line),
            ..Default::default()
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Value of a single artifact.
///
/// Artifacts this crate does not model are kept as raw JSON so other
/// consumers can still read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtifactValue {
    ConsoleMessages(Vec<ConsoleMessage>),
    Other(serde_json::Value),
}

/// Mapping from artifact name to artifact value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Artifacts {
    entries: FxHashMap<String, ArtifactValue>,
}

impl Artifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an artifact mapping from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, AuditError> {
        serde_json::from_str(json).map_err(|e| AuditError::MalformedArtifact {
            name: "<artifacts>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ArtifactValue) {
        self.entries.insert(name.into(), value);
    }

    /// Builder-style insert of the `ChromeConsoleMessages` artifact.
    pub fn with_console_messages(mut self, messages: Vec<ConsoleMessage>) -> Self {
        self.insert(
            CHROME_CONSOLE_MESSAGES,
            ArtifactValue::ConsoleMessages(messages),
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArtifactValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the console messages stored under `name`.
    ///
    /// Fails with `MissingArtifact` when absent and `MalformedArtifact` when
    /// the value is not a message list.
    pub fn console_messages(&self, name: &str) -> Result<&[ConsoleMessage], AuditError> {
        match self.entries.get(name) {
            Some(ArtifactValue::ConsoleMessages(messages)) => Ok(messages),
            Some(ArtifactValue::Other(_)) => Err(AuditError::MalformedArtifact {
                name: name.to_string(),
                message: "expected a list of console messages".to_string(),
            }),
            None => Err(AuditError::MissingArtifact {
                name: name.to_string(),
            }),
        }
    }
}
