//! # Application Configuration
//!
//! Command-line arguments and the validated runtime configuration derived
//! from them. Every option has a default, so running `first-boot` with no
//! arguments gives the stock first-boot behaviour.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use boot_report::ReportConfig;
use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Variable naming the display target consumed by the terminal toolkits.
pub const DISPLAY_TARGET_VAR: &str = "TERM";

/// Display target used when none is set: the kernel virtual console.
pub const DEFAULT_DISPLAY_TARGET: &str = "linux";

/// Which presentation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayMode {
    /// Try dashboard, then compact, then console
    #[default]
    Auto,
    /// Full-screen panel (falls back to console if unusable)
    Dashboard,
    /// Static summary screen (falls back to console if unusable)
    Compact,
    /// Plain console banner
    Console,
}

/// first-boot: system information panel
#[derive(Parser, Debug)]
#[command(name = "first-boot")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Presentation strategy
    #[arg(long, value_enum, default_value_t = DisplayMode::Auto)]
    pub mode: DisplayMode,

    /// System information refresh interval in milliseconds
    #[arg(long, default_value = "1000")]
    pub refresh_ms: u64,

    /// Product name shown in titles
    #[arg(long, default_value = "CoreARM")]
    pub product: String,

    /// Processor label reported in the snapshot
    #[arg(long, default_value = boot_report::DEFAULT_PROCESSOR)]
    pub processor: String,

    /// Root of the proc filesystem
    #[arg(long, default_value = "/proc")]
    pub proc_root: PathBuf,

    /// Shell used to run diagnostic commands
    #[arg(long, default_value = "sh")]
    pub shell: String,

    /// Print one snapshot to stdout and exit
    #[arg(long)]
    pub print_snapshot: bool,

    /// Print the snapshot as JSON (with --print-snapshot)
    #[arg(long, requires = "print_snapshot")]
    pub json: bool,
}

/// Configuration errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("refresh interval must be greater than zero")]
    ZeroRefreshInterval,

    #[error("product name must not be empty")]
    EmptyProductName,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: DisplayMode,
    pub refresh_interval: Duration,
    pub product: String,
    pub shell: String,
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Auto,
            refresh_interval: Duration::from_millis(1000),
            product: "CoreARM".to_string(),
            shell: "sh".to_string(),
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build and validate the configuration from parsed arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let config = Self {
            mode: args.mode,
            refresh_interval: Duration::from_millis(args.refresh_ms),
            product: args.product.clone(),
            shell: args.shell.clone(),
            report: ReportConfig {
                proc_root: args.proc_root.clone(),
                processor: args.processor.clone(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval.is_zero() {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        if self.product.trim().is_empty() {
            return Err(ConfigError::EmptyProductName);
        }
        Ok(())
    }

    /// Main window title.
    pub fn window_title(&self) -> String {
        format!("{} - Sample Application", self.product)
    }

    /// Greeting shown at the top of the graphical views.
    pub fn welcome(&self) -> String {
        format!("Welcome to {}", self.product)
    }
}

/// Value to assign to the display target, or `None` if one is already set.
///
/// An empty value counts as unset.
pub fn display_target_default(current: Option<&str>) -> Option<&'static str> {
    match current {
        Some(value) if !value.is_empty() => None,
        _ => Some(DEFAULT_DISPLAY_TARGET),
    }
}

/// Set the display target variable if it is unset.
///
/// Must run before any strategy is probed and before other threads exist.
pub fn apply_display_default() {
    let current = env::var(DISPLAY_TARGET_VAR).ok();
    if let Some(value) = display_target_default(current.as_deref()) {
        env::set_var(DISPLAY_TARGET_VAR, value);
        tracing::debug!(var = DISPLAY_TARGET_VAR, value, "Display target defaulted");
    }
}
