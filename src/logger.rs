//! Logging setup

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Honors `RUST_LOG` when set and falls back to `info` so run progress
/// is visible without extra setup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
