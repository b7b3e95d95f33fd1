//! Console fallback: print a banner once, then idle until interrupted.

use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use boot_report::snapshot::labels;
use boot_report::SystemSnapshot;
use tokio::time::MissedTickBehavior;

use super::{Availability, DisplayContext, DisplayError, DisplayStrategy};

const RULE_WIDTH: usize = 50;
const IDLE_TICK: Duration = Duration::from_secs(1);

type ShutdownSignal = Pin<Box<dyn Future<Output = ()>>>;

/// Banner text, newline terminated.
pub fn banner(product: &str, snapshot: &SystemSnapshot) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let field = |label: &str| snapshot.get(label).unwrap_or(boot_report::UNKNOWN);

    let lines = [
        rule.clone(),
        format!("{} - Console Mode", product),
        rule.clone(),
        format!("{}: {}", labels::RUST_VERSION, field(labels::RUST_VERSION)),
        format!("{}: {}", labels::SYSTEM, field(labels::SYSTEM)),
        format!("{}: {}", labels::ARCHITECTURE, field(labels::ARCHITECTURE)),
        format!("Date/Time: {}", field(labels::TIME)),
        rule,
        "Press Ctrl+C to exit".to_string(),
    ];

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Plain-text presentation used when no full-screen view can run.
pub struct ConsoleStrategy {
    out: Box<dyn Write>,
    shutdown: ShutdownSignal,
    tick: Duration,
}

impl Default for ConsoleStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleStrategy {
    /// Write to stdout and stop on Ctrl+C or SIGTERM.
    pub fn new() -> Self {
        Self::with_io(Box::new(io::stdout()), interrupt_signal())
    }

    /// Write to `out` and stop when `shutdown` completes.
    pub fn with_io(out: Box<dyn Write>, shutdown: impl Future<Output = ()> + 'static) -> Self {
        Self {
            out,
            shutdown: Box::pin(shutdown),
            tick: IDLE_TICK,
        }
    }
}

#[async_trait(?Send)]
impl DisplayStrategy for ConsoleStrategy {
    fn name(&self) -> &'static str {
        "console"
    }

    fn probe(&self) -> Availability {
        Availability::Available
    }

    async fn run(self: Box<Self>, ctx: DisplayContext) -> Result<(), DisplayError> {
        let ConsoleStrategy {
            mut out,
            mut shutdown,
            tick,
        } = *self;

        let snapshot = ctx.probe.snapshot();
        out.write_all(banner(&ctx.config.product, &snapshot).as_bytes())?;
        out.flush()?;

        let mut ticker = tokio::time::interval(tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {}
            }
        }

        writeln!(out, "\nExiting application")?;
        out.flush()?;
        tracing::info!("Console display interrupted");
        Ok(())
    }
}

/// Completes on Ctrl+C, or SIGTERM on unix.
async fn interrupt_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!(error = %e, "Ctrl+C handler unavailable");
                }
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl+C handler unavailable");
        }
    }
}
