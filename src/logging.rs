//! Log subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_filter` when it is set and parses.
/// Calling this more than once is harmless: when a global subscriber is
/// already installed the existing one is kept.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
    if let Err(e) = installed {
        tracing::debug!(%e, "keeping existing tracing subscriber");
    }
}
