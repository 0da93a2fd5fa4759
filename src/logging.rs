//! Logging setup
//!
//! Diagnostics go to stderr so a host speaking a protocol on stdout is
//! never disturbed. Verbosity is controlled with `RUST_LOG` (default
//! `info`).

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Call once at process startup; returns an error if a subscriber is
/// already installed.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
