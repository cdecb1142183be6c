//! Tracing setup for floodctl.
//!
//! Logs go to stderr so the transcript on stdout stays clean. RUST_LOG wins
//! over the default level when set.

use tracing_subscriber::EnvFilter;

/// Default filter: quiet unless asked.
pub fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
