//! first-boot: system information panel for minimal embedded Linux images
//!
//! Shown once on the first boot of a device. Presents a snapshot of the host
//! (kernel, architecture, memory, time, hostname, user) and a few one-shot
//! diagnostic commands, using the richest presentation the terminal supports.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────────────────────────────────────┐
//! │ config     │──→│ display::select_strategy                     │
//! │ (clap)     │   │   dashboard ──→ compact ──→ console fallback │
//! └────────────┘   └──────┬───────────────────────────────────────┘
//!                         │
//!        ┌────────────────┼─────────────────┐
//!        ▼                ▼                 ▼
//!  boot_report::     commands::        timer::
//!  HostProbe         CommandRunner     PeriodicTimer
//! ```

pub mod commands;
pub mod config;
pub mod display;
pub mod timer;

#[cfg(feature = "dashboard")]
pub mod domain;
#[cfg(feature = "dashboard")]
pub mod ui;

pub use commands::{CommandError, CommandOutput, CommandRunner, DiagnosticCommand};
pub use config::{AppConfig, Args, ConfigError, DisplayMode};
pub use display::{
    candidates, select_strategy, Availability, ConsoleStrategy, DisplayContext, DisplayError,
    DisplayStrategy, MissingToolkit,
};
