//! Runtime helpers shared across binaries.
//!
//! Centralizes logging setup so both CLIs emit diagnostics the same way:
//! `tracing` events go to stderr, stdout stays reserved for user-facing text.

use tracing_subscriber::EnvFilter;

// Warnings only unless RUST_LOG or --verbose asks for more.
const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "debug";

/// Pick the log filter: `--verbose` wins, then `RUST_LOG`, then the default.
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_LOG_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global stderr subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
