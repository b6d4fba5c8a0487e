//! Logging setup for the binaries
//!
//! Logs go to stderr so stdout stays clean for the tool's own messages.
//! `RUST_LOG` takes precedence over the verbosity flags.

use crate::cli::Verbosity;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Build the filter for a verbosity level
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flowstep={}", verbosity.log_directive())))
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    debug!(verbosity = verbosity.as_str(), "logging initialised");
}
