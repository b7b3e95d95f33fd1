//! Compact summary screen.
//!
//! Drawn directly with crossterm, without the widget framework: a title,
//! three summary lines and an Exit button, centered. Static, no refresh.

use std::io::{self, Stdout, Write};

use async_trait::async_trait;
use boot_report::SystemSnapshot;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};

use super::session::TerminalSession;
use super::terminal::{check_terminal, TerminalInfo};
use super::{Availability, DisplayContext, DisplayError, DisplayStrategy};

/// Smallest terminal the compact screen fits in.
pub const MIN_SIZE: (u16, u16) = (30, 7);

const EXIT_BUTTON: &str = "[ Exit ]";

/// One centered line of the compact screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactLine {
    pub text: String,
    pub bold: bool,
}

impl CompactLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }
}

/// Lines of the compact screen, top to bottom.
pub fn compact_lines(welcome: &str, snapshot: &SystemSnapshot) -> Vec<CompactLine> {
    let mut lines = vec![
        CompactLine {
            text: welcome.to_string(),
            bold: true,
        },
        CompactLine::plain(""),
    ];

    lines.extend(
        snapshot
            .summary()
            .into_iter()
            .map(|f| CompactLine::plain(format!("{}: {}", f.label, f.value))),
    );

    lines.push(CompactLine::plain(""));
    lines.push(CompactLine {
        text: EXIT_BUTTON.to_string(),
        bold: true,
    });
    lines
}

/// Secondary full-screen presentation.
#[derive(Debug, Default)]
pub struct CompactStrategy;

impl CompactStrategy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl DisplayStrategy for CompactStrategy {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn probe(&self) -> Availability {
        check_terminal(&TerminalInfo::detect(), MIN_SIZE)
    }

    async fn run(self: Box<Self>, ctx: DisplayContext) -> Result<(), DisplayError> {
        let lines = compact_lines(&ctx.config.welcome(), &ctx.probe.snapshot());

        let session = TerminalSession::enter()?;
        let result = event_loop(&mut io::stdout(), &lines);
        session.restore()?;

        tracing::info!("Compact display closed");
        result
    }
}

fn event_loop(stdout: &mut Stdout, lines: &[CompactLine]) -> Result<(), DisplayError> {
    draw(stdout, lines)?;

    loop {
        match event::read()? {
            Event::Key(key) if should_exit(&key) => return Ok(()),
            Event::Resize(_, _) => draw(stdout, lines)?,
            _ => {}
        }
    }
}

/// Exit on Enter, Esc, `q`, or Ctrl+C (raw mode delivers it as a key).
fn should_exit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn draw(stdout: &mut Stdout, lines: &[CompactLine]) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let top = rows.saturating_sub(lines.len() as u16) / 2;

    queue!(stdout, Clear(ClearType::All))?;
    for (i, line) in lines.iter().enumerate() {
        let width = line.text.chars().count().min(cols as usize) as u16;
        let text: String = line.text.chars().take(width as usize).collect();
        let x = cols.saturating_sub(width) / 2;

        queue!(stdout, MoveTo(x, top + i as u16))?;
        if line.bold {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(stdout, Print(text))?;
        }
    }
    stdout.flush()
}
