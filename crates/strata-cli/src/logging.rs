//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Build the log filter.
///
/// `-v` flags win, then `RUST_LOG`, then the configured default level.
pub fn filter_for(verbose: u8, default_level: &str) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber, logging to stderr so stdout stays parseable.
pub fn init(verbose: u8, default_level: &str) {
    let installed = fmt()
        .with_env_filter(filter_for(verbose, default_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
