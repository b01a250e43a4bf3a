//! Log subscriber setup
//!
//! Logs go to stderr so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Filter from `RUST_LOG`, falling back to the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global fmt subscriber
///
/// A subscriber that is already installed is left in place.
pub fn init(verbosity: Verbosity) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
