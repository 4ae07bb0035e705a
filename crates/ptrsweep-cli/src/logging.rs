//! Diagnostic logging to stderr.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter directive
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global subscriber with the given filter directive.
///
/// Logs go to stderr so stdout carries only results. The directive is taken
/// as given; no environment variable is consulted.
pub fn init(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level {directive:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
