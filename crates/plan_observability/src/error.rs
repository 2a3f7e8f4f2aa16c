//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during logging initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber could not be installed (usually: one already is)
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
