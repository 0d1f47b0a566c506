//! Logging setup for the tdt binary

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system with environment-based filtering.
///
/// - `RUST_LOG` wins when set
/// - Otherwise `info`, or `warn` when `quiet` is set
/// - Output goes to stderr so stdout stays clean for the table
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(quiet)));

    // A subscriber may already be installed (tests, embedding callers)
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn default_level(quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else {
        "info"
    }
}
