//! Configuration system for Lumen.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod audit_config;
pub mod lumen_config;
pub mod runner_config;

pub use audit_config::AuditConfig;
pub use lumen_config::{ConfigOverrides, LumenConfig};
pub use runner_config::RunnerConfig;
