//! Logging setup shared by the plan crates.
//!
//! ```no_run
//! use plan_observability::{init, ObservabilityConfig};
//!
//! init(ObservabilityConfig::new("plan").with_log_level("info"))?;
//! tracing::info!("started");
//! # Ok::<(), plan_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `SERVICE_NAME` - Service name
//! - `PLAN_LOG_LEVEL` or `RUST_LOG` - Log level filter
//! - `PLAN_LOG_JSON` - JSON log lines when `1`/`true`/`yes`/`on`

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{parse_flag, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
