//! UI module - dashboard rendering.
//!
//! - `layout.rs`: window frame, header, system information and footer
//! - `widgets/`: controls row and the command output dialog

mod layout;

pub mod widgets;

pub use layout::{render, WINDOW_SIZE};
