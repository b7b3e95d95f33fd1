//! Reporter configuration.

use std::path::PathBuf;

/// Default processor label shown in the snapshot.
pub const DEFAULT_PROCESSOR: &str = "ARM Cortex-A53 (64-bit)";

/// Where memory statistics are read from and which fixed labels are reported.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Root of the proc filesystem (`/proc` on a real host).
    pub proc_root: PathBuf,
    /// Fixed processor label.
    pub processor: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from("/proc"),
            processor: DEFAULT_PROCESSOR.to_string(),
        }
    }
}

impl ReportConfig {
    /// Path of the memory statistics file.
    pub fn meminfo_path(&self) -> PathBuf {
        self.proc_root.join("meminfo")
    }
}
