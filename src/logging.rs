//! Tracing setup for the `genz` binary
//!
//! Events go to stderr so report output on stdout stays clean for piping.
//! `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter: `RUST_LOG` if set and valid, otherwise `level` for this
/// crate and warnings for everything else.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,genz_finance={level},genz={level}")))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(level: &str) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    let installed = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(stderr_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level, "tracing initialized");
    }
}
