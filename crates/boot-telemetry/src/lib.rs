//! # Boot Telemetry
//!
//! Logging setup shared by the first-boot binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boot_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! tracing::info!("ready");
//!
//! // Full-screen UI owns the terminal: keep log lines off it
//! let _mute = boot_telemetry::mute_stderr();
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FIRSTBOOT_LOG_LEVEL` | `warn` | Log level filter (falls back to `RUST_LOG`) |
//! | `FIRSTBOOT_JSON_LOGS` | `false` | Emit JSON lines |
//! | `FIRSTBOOT_LOG_FILE` | unset | Append logs to this file instead of stderr |

mod config;
mod tracing_setup;

use std::path::PathBuf;

pub use config::TelemetryConfig;
pub use tracing_setup::{mute_stderr, stderr_muted, StderrMute, TracingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Initialize logging.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TracingGuard, TelemetryError> {
    tracing_setup::init_tracing(&config)
}
