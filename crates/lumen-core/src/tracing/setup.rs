//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Lumen tracing/logging system.
///
/// Reads `LUMEN_LOG` for per-module log levels, e.g.
/// `LUMEN_LOG=lumen_audits=debug,lumen_core=warn`.
///
/// Falls back to `lumen=info` if `LUMEN_LOG` is not set or is invalid.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LUMEN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("lumen=info"));

        // A host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
