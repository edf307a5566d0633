//! Artifact data model shared by the collector and the audits.

pub mod artifacts;

pub use artifacts::{ArtifactValue, Artifacts, ConsoleMessage, CHROME_CONSOLE_MESSAGES};
