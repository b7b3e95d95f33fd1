//! Display selection.
//!
//! Presentations are tried in priority order. Each one first reports
//! whether it can run on this host; the first that can is run until the
//! user leaves it. An unusable presentation is not an error, the next one
//! is simply tried. The console banner is the fallback and always works.
//!
//! ```text
//! dashboard (ratatui) ──unavailable──→ compact (crossterm) ──unavailable──→ console
//! ```

#[cfg(feature = "compact")]
mod compact;
mod console;
#[cfg(feature = "dashboard")]
mod dashboard;
#[cfg(any(feature = "dashboard", feature = "compact"))]
mod session;
mod terminal;

use async_trait::async_trait;
use boot_report::HostProbe;
use thiserror::Error;

use crate::commands::CommandRunner;
use crate::config::{AppConfig, DisplayMode};

#[cfg(feature = "compact")]
pub use compact::{compact_lines, CompactLine, CompactStrategy};
pub use console::{banner, ConsoleStrategy};
#[cfg(feature = "dashboard")]
pub use dashboard::{DashboardStrategy, MIN_SIZE as DASHBOARD_MIN_SIZE};
pub use terminal::{check_terminal, TerminalInfo};

/// Display errors.
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("{name} display is not available: {reason}")]
    Unavailable { name: &'static str, reason: String },
}

/// Result of probing a presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable(String),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Everything a running presentation needs.
#[derive(Debug, Clone)]
pub struct DisplayContext {
    pub config: AppConfig,
    pub probe: HostProbe,
    pub runner: CommandRunner,
}

impl DisplayContext {
    pub fn new(config: AppConfig) -> Self {
        let probe = HostProbe::new(config.report.clone());
        let runner = CommandRunner::new(config.shell.clone());
        Self {
            config,
            probe,
            runner,
        }
    }
}

/// A way of presenting the first-boot screen.
#[async_trait(?Send)]
pub trait DisplayStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this presentation can run here. Must not touch the terminal
    /// state.
    fn probe(&self) -> Availability;

    /// Run until the user exits. Blocks the calling task.
    async fn run(self: Box<Self>, ctx: DisplayContext) -> Result<(), DisplayError>;
}

/// Stand-in for a presentation that was not compiled into this build.
pub struct MissingToolkit {
    name: &'static str,
}

impl MissingToolkit {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[async_trait(?Send)]
impl DisplayStrategy for MissingToolkit {
    fn name(&self) -> &'static str {
        self.name
    }

    fn probe(&self) -> Availability {
        Availability::Unavailable("not compiled into this build".to_string())
    }

    async fn run(self: Box<Self>, _ctx: DisplayContext) -> Result<(), DisplayError> {
        Err(DisplayError::Unavailable {
            name: self.name,
            reason: "not compiled into this build".to_string(),
        })
    }
}

/// Candidate presentations for `mode`, highest priority first.
///
/// The console fallback is not included; pass it to [`select_strategy`].
pub fn candidates(mode: DisplayMode) -> Vec<Box<dyn DisplayStrategy>> {
    let mut list: Vec<Box<dyn DisplayStrategy>> = Vec::new();

    if matches!(mode, DisplayMode::Auto | DisplayMode::Dashboard) {
        list.push(dashboard_strategy());
    }
    if matches!(mode, DisplayMode::Auto | DisplayMode::Compact) {
        list.push(compact_strategy());
    }

    list
}

#[cfg(feature = "dashboard")]
fn dashboard_strategy() -> Box<dyn DisplayStrategy> {
    Box::new(DashboardStrategy::new())
}

#[cfg(not(feature = "dashboard"))]
fn dashboard_strategy() -> Box<dyn DisplayStrategy> {
    Box::new(MissingToolkit::new("dashboard"))
}

#[cfg(feature = "compact")]
fn compact_strategy() -> Box<dyn DisplayStrategy> {
    Box::new(CompactStrategy::new())
}

#[cfg(not(feature = "compact"))]
fn compact_strategy() -> Box<dyn DisplayStrategy> {
    Box::new(MissingToolkit::new("compact"))
}

/// Pick the first available candidate, or `fallback` if none is.
///
/// Each candidate is probed once; there are no retries.
pub fn select_strategy(
    candidates: Vec<Box<dyn DisplayStrategy>>,
    fallback: Box<dyn DisplayStrategy>,
) -> Box<dyn DisplayStrategy> {
    for candidate in candidates {
        match candidate.probe() {
            Availability::Available => {
                tracing::info!(strategy = candidate.name(), "Display strategy selected");
                return candidate;
            }
            Availability::Unavailable(reason) => {
                tracing::debug!(
                    strategy = candidate.name(),
                    %reason,
                    "Display strategy unavailable, trying next"
                );
            }
        }
    }

    tracing::info!(strategy = fallback.name(), "Falling back to console display");
    fallback
}
