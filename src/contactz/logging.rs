//! Logging setup.
//!
//! The library only emits `tracing` events. Binaries call [`init_logging`] once to install
//! a stderr subscriber; stdout stays reserved for command output.

use crate::error::{ContactzError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive, e.g. `contactz=debug`.
pub const LOG_ENV: &str = "CONTACTZ_LOG";

/// Install the global subscriber.
///
/// Priority: `CONTACTZ_LOG`, then `verbose` (debug), then the `warn` default.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = build_env_filter(verbose)?;

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    Registry::default()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| ContactzError::Config(format!("Failed to initialize logging: {}", e)))
}

fn build_env_filter(verbose: bool) -> Result<EnvFilter> {
    if let Ok(directive) = std::env::var(LOG_ENV) {
        return EnvFilter::try_new(&directive).map_err(|e| {
            ContactzError::Config(format!("Invalid {} value '{}': {}", LOG_ENV, directive, e))
        });
    }
    let level = if verbose { "debug" } else { "warn" };
    Ok(EnvFilter::new(level))
}
