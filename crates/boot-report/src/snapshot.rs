//! Snapshot domain model.

use serde::Serialize;

/// Field labels, in display order.
pub mod labels {
    pub const RUST_VERSION: &str = "Rust Version";
    pub const SYSTEM: &str = "System";
    pub const ARCHITECTURE: &str = "Architecture";
    pub const PROCESSOR: &str = "Processor";
    pub const MEMORY: &str = "Memory";
    pub const TIME: &str = "Time";
    pub const HOSTNAME: &str = "Hostname";
    pub const USERNAME: &str = "Username";
}

/// One labeled value in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotField {
    pub label: &'static str,
    pub value: String,
}

/// Point-in-time rendering of host facts.
///
/// Rebuilt from scratch on every refresh; nothing is cached between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemSnapshot {
    fields: Vec<SnapshotField>,
}

impl SystemSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping insertion order.
    pub fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.fields.push(SnapshotField {
            label,
            value: value.into(),
        });
    }

    pub fn fields(&self) -> &[SnapshotField] {
        &self.fields
    }

    /// Value of the first field with `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    /// The subset shown by the compact view.
    pub fn summary(&self) -> Vec<&SnapshotField> {
        [labels::SYSTEM, labels::RUST_VERSION, labels::ARCHITECTURE]
            .iter()
            .filter_map(|label| self.fields.iter().find(|f| f.label == *label))
            .collect()
    }

    /// `"<label>: <value>"` lines joined by newlines.
    pub fn render(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}: {}", f.label, f.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
