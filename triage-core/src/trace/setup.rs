//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the triage tracing/logging system.
///
/// Reads the `TRIAGE_LOG` environment variable for per-subsystem log levels.
/// Format: `TRIAGE_LOG=triage_pipeline=debug,triage_report=info`
///
/// Falls back to `triage=info` if `TRIAGE_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TRIAGE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("triage=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
