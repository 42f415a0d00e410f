//! Logging setup
//!
//! `tracing` output goes to stderr so JSON on stdout stays machine-readable.
//! `RUST_LOG` takes precedence; otherwise the level is `warn`, or `debug`
//! with `--verbose`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}
