//! Global tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays free for command output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

/// Install the global subscriber described by `config`.
///
/// Returns `InitFailed` if a global subscriber is already installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(&config)?;

    let fmt_layer = config.enable_console.then(|| {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);
        if config.json {
            layer.json().boxed()
        } else {
            layer.boxed()
        }
    });

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service.name = %config.service_name, "logging initialized");
    Ok(())
}

/// Initialize from environment variables (see [`ObservabilityConfig::from_env`]).
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

fn build_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    match &config.log_level {
        Some(level) => {
            EnvFilter::try_new(level).map_err(|e| ObservabilityError::Config(e.to_string()))
        }
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))),
    }
}
