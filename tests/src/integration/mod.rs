//! Cross-crate integration flows.

pub mod dashboard;
pub mod fallback;
pub mod snapshot;
