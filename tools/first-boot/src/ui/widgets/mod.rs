//! Reusable dashboard widgets.

mod controls;
mod output_overlay;

pub use controls::render_controls;
pub use output_overlay::render_output_overlay;
