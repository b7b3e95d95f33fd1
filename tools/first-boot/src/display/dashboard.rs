//! Full-screen dashboard built on ratatui.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::session::TerminalSession;
use super::terminal::{check_terminal, TerminalInfo};
use super::{Availability, DisplayContext, DisplayError, DisplayStrategy};
use crate::domain::{Action, App};
use crate::ui;

/// Smallest terminal the dashboard is laid out for.
pub const MIN_SIZE: (u16, u16) = (60, 18);

/// Upper bound on a single input wait, so resizes and late ticks are noticed.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Primary presentation: live snapshot plus diagnostic buttons.
#[derive(Debug, Default)]
pub struct DashboardStrategy;

impl DashboardStrategy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl DisplayStrategy for DashboardStrategy {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    fn probe(&self) -> Availability {
        check_terminal(&TerminalInfo::detect(), MIN_SIZE)
    }

    async fn run(self: Box<Self>, ctx: DisplayContext) -> Result<(), DisplayError> {
        let session = TerminalSession::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let mut app = App::new(
            ctx.config.window_title(),
            ctx.config.welcome(),
            ctx.config.refresh_interval,
        );
        app.refresh(&ctx.probe.snapshot());
        app.refresh_timer.start(Instant::now());

        let result = run_app(&mut terminal, &mut app, &ctx).await;
        app.refresh_timer.stop();

        drop(terminal);
        session.restore()?;

        tracing::info!("Dashboard closed");
        result
    }
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    ctx: &DisplayContext,
) -> Result<(), DisplayError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        let timeout = app
            .refresh_timer
            .time_until_due(Instant::now())
            .map_or(MAX_POLL, |due| due.min(MAX_POLL));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, ctx, key).await;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        app.tick(Instant::now(), || ctx.probe.snapshot());
    }
}

async fn handle_key(app: &mut App, ctx: &DisplayContext, key: KeyEvent) {
    // Raw mode swallows SIGINT
    let action = if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.quit()
    } else {
        app.on_key(key.code)
    };

    match action {
        Action::None => {}
        Action::Run(command) => {
            let result = ctx.runner.run(command).await;
            app.show_output(command, result);
        }
        Action::Refresh => app.refresh(&ctx.probe.snapshot()),
        Action::Quit => {}
    }
}
