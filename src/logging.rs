//! Logging setup for binaries and tests that embed the library.

use tracing_subscriber::EnvFilter;

/// Initialise a `tracing` subscriber that logs to stdout.
///
/// The log level is taken from the `RUST_LOG` environment variable and
/// defaults to `info`. Call this once at startup; library code itself only
/// emits events through the `tracing` macros.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
