//! # Boot Report
//!
//! System Info Reporter for the first-boot application.
//!
//! Builds a [`SystemSnapshot`]: an ordered list of labeled strings describing
//! the host at one point in time. Every field is best-effort. A value that
//! cannot be read is approximated by a placeholder, never reported as an
//! error to the caller.
//!
//! ## Sources
//!
//! | Field | Source |
//! |-------|--------|
//! | Rust Version | compiler version captured at build time |
//! | System | `sysinfo` OS name + kernel version |
//! | Architecture | `std::env::consts::ARCH` |
//! | Processor | fixed label from [`ReportConfig`] |
//! | Memory | `<proc>/meminfo` (`MemFree` / `MemTotal`) |
//! | Time | local clock |
//! | Hostname | `sysinfo` host name, then `localhost` |
//! | Username | `$USER` |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boot_report::{HostProbe, ReportConfig};
//!
//! let probe = HostProbe::new(ReportConfig::default());
//! println!("{}", probe.snapshot().render());
//! ```

mod config;
mod error;
pub mod host;
pub mod meminfo;
pub mod snapshot;

pub use config::{ReportConfig, DEFAULT_PROCESSOR};
pub use error::ReportError;
pub use host::{HostProbe, HostSource, SysinfoSource};
pub use meminfo::{parse_meminfo, read_memory_summary, MemoryUsage, UNKNOWN};
pub use snapshot::{SnapshotField, SystemSnapshot};

/// Compiler version this crate was built with.
pub const RUST_VERSION: &str = env!("BOOT_REPORT_RUSTC_VERSION");
