//! Reporter errors.
//!
//! These never leave the public snapshot API: callers of
//! [`crate::HostProbe::snapshot`] only ever see placeholder values. They are
//! exposed for the lower-level parsing functions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading host facts.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
}
