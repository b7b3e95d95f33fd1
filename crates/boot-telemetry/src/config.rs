//! Telemetry configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to startup logs
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or a full directive)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Append logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "first-boot".to_string(),
            log_level: "warn".to_string(),
            json_logs: false,
            log_file: None,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FIRSTBOOT_LOG_LEVEL` or `RUST_LOG`: Log level (default: warn)
    /// - `FIRSTBOOT_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `FIRSTBOOT_LOG_FILE`: Write logs to this file (default: stderr)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service_name: defaults.service_name,

            log_level: lookup("FIRSTBOOT_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("FIRSTBOOT_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            log_file: lookup("FIRSTBOOT_LOG_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.service_name, "first-boot");
        assert_eq!(config.log_level, "warn");
        assert!(!config.json_logs);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_level_prefers_own_variable() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("RUST_LOG", "trace"),
            ("FIRSTBOOT_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.log_level, "debug");

        let config = TelemetryConfig::from_lookup(lookup_from(&[("RUST_LOG", "trace")]));
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_json_and_file() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("FIRSTBOOT_JSON_LOGS", "TRUE"),
            ("FIRSTBOOT_LOG_FILE", "/var/log/first-boot.log"),
        ]));
        assert!(config.json_logs);
        assert_eq!(
            config.log_file,
            Some(PathBuf::from("/var/log/first-boot.log"))
        );
    }

    #[test]
    fn test_empty_log_file_means_stderr() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[("FIRSTBOOT_LOG_FILE", "")]));
        assert!(config.log_file.is_none());
    }
}
