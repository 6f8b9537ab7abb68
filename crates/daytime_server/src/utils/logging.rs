use tracing_subscriber::{EnvFilter, prelude::*};

use crate::core::error::{DaytimeError, DaytimeResult};

const DEFAULT_LOG_LEVEL: &str = "info";

/// Initialize logging to stderr
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error).
///   Defaults to `info` so connection diagnostics are always emitted.
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized
/// - `Err(DaytimeError::LoggingInitialization)` if a subscriber is already set
pub fn init_logging() -> DaytimeResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| DaytimeError::LoggingInitialization(e.to_string()))?;

    Ok(())
}
