//! Full-screen terminal session.
//!
//! Owns raw mode and the alternate screen for the lifetime of a full-screen
//! presentation. The terminal is restored on every exit path: normal
//! return, an error after partial setup, or a panic. Log output to stderr is
//! muted for the same lifetime.

use std::io;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use boot_telemetry::StderrMute;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

type TerminalOp = fn() -> io::Result<()>;
type PanicHook = Arc<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Active full-screen session. Restores the terminal when dropped.
pub(crate) struct TerminalSession {
    leave: TerminalOp,
    restored: bool,
    // Dropped in declaration order, after the terminal is restored.
    _hook: PanicHookGuard,
    _mute: StderrMute,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen on stdout.
    pub(crate) fn enter() -> io::Result<Self> {
        Self::enter_with(enter_screen, leave_screen)
    }

    /// Run `enter`, guaranteeing `leave` runs afterwards even if `enter`
    /// fails halfway.
    pub(crate) fn enter_with(enter: TerminalOp, leave: TerminalOp) -> io::Result<Self> {
        let session = Self {
            leave,
            restored: false,
            _hook: PanicHookGuard::install(leave),
            _mute: boot_telemetry::mute_stderr(),
        };
        enter()?;
        Ok(session)
    }

    /// Restore the terminal, reporting any failure.
    pub(crate) fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        (self.leave)()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored {
            let _ = (self.leave)();
        }
    }
}

fn enter_screen() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)
}

fn leave_screen() -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    raw
}

/// Panic hook that runs a cleanup before the previous hook. The previous
/// hook is reinstated on drop.
struct PanicHookGuard {
    previous: PanicHook,
}

impl PanicHookGuard {
    fn install(cleanup: TerminalOp) -> Self {
        let previous: PanicHook = Arc::from(panic::take_hook());
        let chained = previous.clone();
        panic::set_hook(Box::new(move |info| {
            let _ = cleanup();
            chained(info);
        }));
        Self { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // set_hook panics on a panicking thread
        if std::thread::panicking() {
            return;
        }
        let previous = self.previous.clone();
        panic::set_hook(Box::new(move |info| previous(info)));
    }
}
