//! `/proc/meminfo` parsing.
//!
//! Only two fields are used: `MemTotal` and `MemFree`, both in kilobytes.
//! Megabytes are derived by integer division by 1024.

use std::fmt;
use std::path::Path;

use crate::ReportError;

/// Placeholder reported when memory statistics cannot be read.
pub const UNKNOWN: &str = "Unknown";

const KB_PER_MB: u64 = 1024;

/// Memory usage in whole megabytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryUsage {
    pub free_mb: u64,
    pub total_mb: u64,
}

impl fmt::Display for MemoryUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}MB free / {}MB total", self.free_mb, self.total_mb)
    }
}

/// Parse meminfo text.
///
/// A field whose line is missing is taken as 0. A field whose value is not a
/// number is an error.
pub fn parse_meminfo(text: &str) -> Result<MemoryUsage, ReportError> {
    let mut usage = MemoryUsage::default();

    for line in text.lines() {
        let Some((label, rest)) = line.split_once(':') else {
            continue;
        };

        let (field, slot) = match label.trim() {
            "MemTotal" => ("MemTotal", &mut usage.total_mb),
            "MemFree" => ("MemFree", &mut usage.free_mb),
            _ => continue,
        };

        *slot = parse_kb(field, rest)? / KB_PER_MB;
    }

    Ok(usage)
}

fn parse_kb(field: &'static str, rest: &str) -> Result<u64, ReportError> {
    rest.split_whitespace()
        .next()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| ReportError::InvalidField {
            field,
            value: rest.trim().to_string(),
        })
}

/// Read and parse a meminfo file.
pub fn read_meminfo(path: &Path) -> Result<MemoryUsage, ReportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_meminfo(&text)
}

/// Memory line for the snapshot: `"<free>MB free / <total>MB total"`, or
/// [`UNKNOWN`] on any failure.
pub fn read_memory_summary(path: &Path) -> String {
    match read_meminfo(path) {
        Ok(usage) => usage.to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "memory statistics unavailable");
            UNKNOWN.to_string()
        }
    }
}
