//! Terminal capability probe shared by the full-screen presentations.

use crossterm::tty::IsTty;

use super::Availability;
use crate::config::DISPLAY_TARGET_VAR;

/// What the current process knows about its terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalInfo {
    pub is_tty: bool,
    pub term: Option<String>,
    /// Columns and rows.
    pub size: Option<(u16, u16)>,
}

impl TerminalInfo {
    /// Inspect stdout and the display target variable.
    pub fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_tty(),
            term: std::env::var(DISPLAY_TARGET_VAR).ok(),
            size: crossterm::terminal::size().ok(),
        }
    }
}

/// Decide whether a full-screen view needing `min` cells can run.
pub fn check_terminal(info: &TerminalInfo, min: (u16, u16)) -> Availability {
    if !info.is_tty {
        return Availability::Unavailable("stdout is not a terminal".to_string());
    }

    match info.term.as_deref() {
        None | Some("") => {
            return Availability::Unavailable(format!("{} is not set", DISPLAY_TARGET_VAR));
        }
        Some("dumb") => {
            return Availability::Unavailable("terminal does not support cursor control".to_string());
        }
        Some(_) => {}
    }

    let Some((cols, rows)) = info.size else {
        return Availability::Unavailable("terminal size is unknown".to_string());
    };

    if cols < min.0 || rows < min.1 {
        return Availability::Unavailable(format!(
            "terminal is {}x{}, need at least {}x{}",
            cols, rows, min.0, min.1
        ));
    }

    Availability::Available
}
