//! # Snapshot Flow
//!
//! `HostProbe` reading a synthetic proc tree, the way every presentation
//! consumes it.

#[cfg(test)]
mod tests {
    use std::fs;

    use boot_report::snapshot::labels;
    use boot_report::{RUST_VERSION, UNKNOWN};
    use chrono::{Local, TimeZone};
    use first_boot::display::banner;

    use crate::fixtures::{device_host, fake_proc, HOST_NAME, OS_RELEASE};

    #[test]
    fn test_snapshot_from_fake_proc() {
        let dir = tempfile::tempdir().unwrap();
        fake_proc(dir.path()).unwrap();

        let now = Local.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
        let snapshot = device_host(dir.path()).snapshot_at(now);

        assert_eq!(snapshot.fields().len(), 8);
        assert_eq!(snapshot.get(labels::RUST_VERSION), Some(RUST_VERSION));
        assert_eq!(
            snapshot.get(labels::SYSTEM),
            Some(format!("Linux {}", OS_RELEASE).as_str())
        );
        assert_eq!(snapshot.get(labels::MEMORY), Some("500MB free / 2000MB total"));
        assert_eq!(snapshot.get(labels::TIME), Some("2025-01-31 23:59:59"));
        assert_eq!(snapshot.get(labels::HOSTNAME), Some(HOST_NAME));
    }

    #[test]
    fn test_malformed_meminfo_reports_unknown() {
        let dir = tempfile::tempdir().unwrap();
        fake_proc(dir.path()).unwrap();
        fs::write(dir.path().join("meminfo"), "MemTotal: lots kB\nMemFree: 1 kB\n").unwrap();

        let snapshot = device_host(dir.path()).snapshot();
        assert_eq!(snapshot.get(labels::MEMORY), Some(UNKNOWN));
    }

    #[test]
    fn test_missing_meminfo_labels_count_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        fake_proc(dir.path()).unwrap();
        fs::write(dir.path().join("meminfo"), "MemTotal: 1048576 kB\n").unwrap();

        let snapshot = device_host(dir.path()).snapshot();
        assert_eq!(snapshot.get(labels::MEMORY), Some("0MB free / 1024MB total"));
    }

    #[test]
    fn test_banner_uses_host_values() {
        let dir = tempfile::tempdir().unwrap();
        fake_proc(dir.path()).unwrap();

        let now = Local.with_ymd_and_hms(2025, 1, 31, 8, 0, 0).unwrap();
        let text = banner("CoreARM", &device_host(dir.path()).snapshot_at(now));

        assert!(text.contains(&format!("Rust Version: {}", RUST_VERSION)));
        assert!(text.contains("Date/Time: 2025-01-31 08:00:00"));
        // Memory and hostname are dashboard-only.
        assert!(!text.contains("Memory"));
        assert!(!text.contains("Hostname"));
    }
}
