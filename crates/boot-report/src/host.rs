//! Host fact probes.
//!
//! Operating system identity and node name come from a [`HostSource`],
//! backed by `sysinfo` on a real host. Memory statistics are read from the
//! configured proc root.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};
use sysinfo::System;

use crate::meminfo::{read_memory_summary, UNKNOWN};
use crate::snapshot::labels;
use crate::{ReportConfig, SystemSnapshot, RUST_VERSION};

/// Timestamp format used in every view.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Operating system identity of the host.
///
/// Each method returns `None` when the fact is unavailable.
pub trait HostSource: fmt::Debug + Send + Sync {
    /// Operating system name, e.g. `Linux`.
    fn os_name(&self) -> Option<String>;

    /// Kernel release, e.g. `6.1.21-v8+`.
    fn kernel_version(&self) -> Option<String>;

    /// Node name.
    fn host_name(&self) -> Option<String>;
}

/// [`HostSource`] backed by `sysinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoSource;

impl HostSource for SysinfoSource {
    fn os_name(&self) -> Option<String> {
        System::name()
    }

    fn kernel_version(&self) -> Option<String> {
        System::kernel_version()
    }

    fn host_name(&self) -> Option<String> {
        System::host_name()
    }
}

/// Collects [`SystemSnapshot`]s for one host.
#[derive(Debug, Clone)]
pub struct HostProbe {
    config: ReportConfig,
    source: Arc<dyn HostSource>,
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl HostProbe {
    /// Probe the running host.
    pub fn new(config: ReportConfig) -> Self {
        Self::with_source(config, SysinfoSource)
    }

    /// Probe with OS facts from `source`.
    pub fn with_source(config: ReportConfig, source: impl HostSource + 'static) -> Self {
        Self {
            config,
            source: Arc::new(source),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn os_name(&self) -> String {
        non_empty(self.source.os_name()).unwrap_or_else(|| std::env::consts::OS.to_string())
    }

    pub fn os_release(&self) -> String {
        non_empty(self.source.kernel_version()).unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// `"<name> <release>"`.
    pub fn system(&self) -> String {
        format!("{} {}", self.os_name(), self.os_release())
    }

    pub fn architecture(&self) -> &'static str {
        std::env::consts::ARCH
    }

    pub fn hostname(&self) -> String {
        non_empty(self.source.host_name()).unwrap_or_else(|| "localhost".to_string())
    }

    /// Login name from `$USER`.
    pub fn username(&self) -> String {
        non_empty(std::env::var("USER").ok()).unwrap_or_else(|| "user".to_string())
    }

    /// Memory line, `Unknown` when meminfo is unusable.
    pub fn memory(&self) -> String {
        read_memory_summary(&self.config.meminfo_path())
    }

    /// Build a fresh snapshot stamped with the current local time.
    pub fn snapshot(&self) -> SystemSnapshot {
        self.snapshot_at(Local::now())
    }

    /// Build a fresh snapshot stamped with `now`.
    pub fn snapshot_at(&self, now: DateTime<Local>) -> SystemSnapshot {
        let mut snapshot = SystemSnapshot::new();
        snapshot.push(labels::RUST_VERSION, RUST_VERSION);
        snapshot.push(labels::SYSTEM, self.system());
        snapshot.push(labels::ARCHITECTURE, self.architecture());
        snapshot.push(labels::PROCESSOR, self.config.processor.clone());
        snapshot.push(labels::MEMORY, self.memory());
        snapshot.push(labels::TIME, now.format(TIME_FORMAT).to_string());
        snapshot.push(labels::HOSTNAME, self.hostname());
        snapshot.push(labels::USERNAME, self.username());
        snapshot
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
