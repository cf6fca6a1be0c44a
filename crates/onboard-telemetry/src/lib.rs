//! # Onboard Telemetry
//!
//! Structured logging for the asset onboarding service.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use onboard_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_telemetry(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AO_LOG_LEVEL` / `RUST_LOG` | `info` | EnvFilter directive |
//! | `AO_JSON_LOGS` | `false` (`true` in containers) | JSON records |
//! | `AO_CONSOLE_OUTPUT` | `true` | Write records at all |
//! | `AO_SERVICE_NAME` | `asset-onboard` | Service name |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Filter directive did not parse.
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}

/// Initialize logging for the process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(config)
}
