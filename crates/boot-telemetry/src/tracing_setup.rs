//! `tracing-subscriber` setup.
//!
//! Installs a global registry with an [`EnvFilter`] and one fmt layer, either
//! human-readable or JSON. Output goes to a log file when one is
//! configured, otherwise to stderr. Stderr output is dropped while a
//! [`StderrMute`] is held, so full-screen terminal views stay clean.

use std::fs::OpenOptions;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::writer::{BoxMakeWriter, EitherWriter, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Number of live [`StderrMute`] guards.
static STDERR_MUTES: AtomicUsize = AtomicUsize::new(0);

/// While held, log lines bound for stderr are discarded.
///
/// Log files are unaffected. Guards nest.
#[must_use = "stderr is unmuted when the guard is dropped"]
pub struct StderrMute {
    _private: (),
}

impl Drop for StderrMute {
    fn drop(&mut self) {
        STDERR_MUTES.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Stop writing logs to stderr until the returned guard is dropped.
pub fn mute_stderr() -> StderrMute {
    STDERR_MUTES.fetch_add(1, Ordering::SeqCst);
    StderrMute { _private: () }
}

/// Whether any [`StderrMute`] is currently held.
pub fn stderr_muted() -> bool {
    STDERR_MUTES.load(Ordering::SeqCst) > 0
}

/// Stderr writer that turns into a sink while muted.
struct GatedStderr;

impl<'a> MakeWriter<'a> for GatedStderr {
    type Writer = EitherWriter<io::Stderr, io::Sink>;

    fn make_writer(&'a self) -> Self::Writer {
        if stderr_muted() {
            EitherWriter::B(io::sink())
        } else {
            EitherWriter::A(io::stderr())
        }
    }
}

use crate::{TelemetryConfig, TelemetryError};

/// Guard returned by [`init_tracing`]. Logs a shutdown line on drop.
pub struct TracingGuard {
    service_name: String,
}

impl Drop for TracingGuard {
    fn drop(&mut self) {
        tracing::debug!(service = %self.service_name, "Logging shut down");
    }
}

/// Initialize the global tracing subscriber.
pub fn init_tracing(config: &TelemetryConfig) -> Result<TracingGuard, TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Filter(e.to_string()))?;

    let writer = make_writer(config)?;
    let ansi = config.log_file.is_none();

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(ansi);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    tracing::debug!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );

    Ok(TracingGuard {
        service_name: config.service_name.clone(),
    })
}

/// Writer for the fmt layer: the configured log file (append) or stderr.
pub(crate) fn make_writer(config: &TelemetryConfig) -> Result<BoxMakeWriter, TelemetryError> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| TelemetryError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(GatedStderr)),
    }
}
