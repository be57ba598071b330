//! Logging initialisation
//!
//! `RUST_LOG` takes precedence over the configured level so a single run can
//! be made more verbose without editing the config file.

use lodgely_domain::{LodgelyError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter for `config`
///
/// # Errors
/// Returns `LodgelyError::Config` if the configured directive is invalid.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| {
        LodgelyError::Config(format!("Invalid log level '{}': {}", config.level, e))
    })
}

/// Install the global `tracing` subscriber
///
/// Output is human-readable unless `config.json` is set, in which case one
/// JSON object is written per event.
///
/// # Errors
/// Returns `LodgelyError::Config` if the level is invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| LodgelyError::Config(format!("Failed to install logger: {}", e)))?;
    tracing::debug!(level = %config.level, json = config.json, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_is_a_config_error() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig { level: "lodgely=notalevel".into(), json: false };

        assert!(matches!(build_filter(&config), Err(LodgelyError::Config(_))));
    }

    #[test]
    fn second_initialisation_fails_cleanly() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);

        assert!(init_logging(&config).is_err());
    }
}
