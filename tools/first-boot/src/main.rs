//! first-boot binary.
//!
//! ## Usage
//!
//! ```bash
//! # Pick the best presentation for this terminal
//! first-boot
//!
//! # Force the console banner
//! first-boot --mode console
//!
//! # Dump one snapshot and exit
//! first-boot --print-snapshot --json
//! ```

use anyhow::{Context, Result};
use boot_report::HostProbe;
use boot_telemetry::{init_telemetry, TelemetryConfig};
use clap::Parser;

use first_boot::config::{apply_display_default, AppConfig, Args};
use first_boot::display::{candidates, select_strategy, ConsoleStrategy, DisplayContext};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _guard = init_telemetry(TelemetryConfig::from_env())
        .context("Failed to initialize logging")?;

    // Before any strategy probes the terminal
    apply_display_default();

    let config = AppConfig::from_args(&args).context("Invalid configuration")?;
    tracing::info!(
        mode = ?config.mode,
        product = %config.product,
        refresh_ms = config.refresh_interval.as_millis() as u64,
        "Starting first-boot"
    );

    if args.print_snapshot {
        return print_snapshot(&config, args.json);
    }

    let strategy = select_strategy(candidates(config.mode), Box::new(ConsoleStrategy::new()));
    let name = strategy.name();
    strategy
        .run(DisplayContext::new(config))
        .await
        .with_context(|| format!("{} display failed", name))?;

    Ok(())
}

fn print_snapshot(config: &AppConfig, json: bool) -> Result<()> {
    let snapshot = HostProbe::new(config.report.clone()).snapshot();
    if json {
        let text =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
        println!("{}", text);
    } else {
        println!("{}", snapshot.render());
    }
    Ok(())
}
