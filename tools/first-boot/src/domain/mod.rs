//! Domain models for the dashboard.

mod app;

pub use app::{Action, App, AppState, Button, OutputView};
