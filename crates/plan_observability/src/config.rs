//! Configuration for logging

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name recorded on the startup event
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Log level filter (e.g., "info", "plan_core=debug")
    /// Falls back to `RUST_LOG`, then "warn"
    #[serde(default)]
    pub log_level: Option<String>,

    /// Write log lines to stderr
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Emit log lines as JSON objects instead of text
    #[serde(default)]
    pub json: bool,
}

fn default_service_name() -> String {
    "plan".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: None,
            enable_console: true,
            json: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Switch to JSON log lines
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `SERVICE_NAME` → service_name
    /// - `PLAN_LOG_LEVEL` or `RUST_LOG` → log_level
    /// - `PLAN_LOG_JSON` → json (any form [`parse_flag`] accepts)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let service_name = lookup("SERVICE_NAME").unwrap_or_else(default_service_name);
        let log_level = lookup("PLAN_LOG_LEVEL").or_else(|| lookup("RUST_LOG"));
        let json = lookup("PLAN_LOG_JSON")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            service_name,
            log_level,
            enable_console: true,
            json,
        }
    }
}

/// Parse a boolean environment flag.
///
/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitive and trimmed.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
