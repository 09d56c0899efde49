//! Logging setup
//!
//! Installs a `tracing` subscriber. `RUST_LOG` takes precedence over the
//! configured level.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::Error;
use crate::Result;

/// Build the filter: `RUST_LOG` if set and valid, else the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::Config(format!("Invalid log level {:?}: {}", config.level, e)))
}

/// Initialise the global subscriber.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let result = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
    };

    result.map_err(|e| Error::Config(format!("Logging already initialised: {e}")))
}
