//! Dashboard state management.

use std::time::{Duration, Instant};

use boot_report::SystemSnapshot;
use chrono::{DateTime, Local};
use crossterm::event::KeyCode;

use crate::commands::{CommandError, CommandOutput, DiagnosticCommand};
use crate::timer::PeriodicTimer;

/// Lines moved by PageUp/PageDown in the output dialog.
const PAGE_LINES: u16 = 10;

/// Dashboard view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Main panel.
    #[default]
    Dashboard,
    /// Modal command output dialog.
    Output,
    /// Quitting.
    Quit,
}

/// A button in the Controls row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Command(DiagnosticCommand),
    Exit,
}

impl Button {
    /// Buttons in left-to-right order.
    pub const ALL: [Button; 5] = [
        Button::Command(DiagnosticCommand::Uptime),
        Button::Command(DiagnosticCommand::ProcessList),
        Button::Command(DiagnosticCommand::DiskUsage),
        Button::Command(DiagnosticCommand::Network),
        Button::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Button::Command(cmd) => cmd.label(),
            Button::Exit => "Exit",
        }
    }

    /// Label used when the full row does not fit.
    pub fn short_label(&self) -> &'static str {
        match self {
            Button::Command(DiagnosticCommand::Uptime) => "Uptime",
            Button::Command(DiagnosticCommand::ProcessList) => "Procs",
            Button::Command(DiagnosticCommand::DiskUsage) => "Disk",
            Button::Command(DiagnosticCommand::Network) => "Net",
            Button::Exit => "Exit",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Button::Command(cmd) => cmd.hotkey(),
            Button::Exit => 'q',
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Run(DiagnosticCommand),
    Refresh,
    Quit,
}

/// Contents of the output dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputView {
    pub title: String,
    pub text: String,
    pub scroll: u16,
}

impl OutputView {
    fn max_scroll(&self) -> u16 {
        let lines = self.text.lines().count().max(1);
        u16::try_from(lines - 1).unwrap_or(u16::MAX)
    }
}

/// Main dashboard model.
pub struct App {
    /// Current view.
    pub state: AppState,
    /// Window title.
    pub title: String,
    /// Greeting line.
    pub welcome: String,
    /// Rendered system snapshot.
    pub info_text: String,
    /// Index into [`Button::ALL`].
    pub selected: usize,
    /// Output dialog contents while open.
    pub output: Option<OutputView>,
    /// Drives the snapshot refresh.
    pub refresh_timer: PeriodicTimer,
    /// Wall-clock time of the last refresh.
    pub last_refresh: Option<DateTime<Local>>,
}

impl App {
    pub fn new(title: String, welcome: String, refresh_interval: Duration) -> Self {
        Self {
            state: AppState::Dashboard,
            title,
            welcome,
            info_text: String::new(),
            selected: 0,
            output: None,
            refresh_timer: PeriodicTimer::new(refresh_interval),
            last_refresh: None,
        }
    }

    /// Replace the displayed snapshot.
    pub fn refresh(&mut self, snapshot: &SystemSnapshot) {
        self.info_text = snapshot.render();
        self.last_refresh = Some(Local::now());
    }

    /// Refresh if the timer is due. Returns true when it fired.
    pub fn tick(&mut self, now: Instant, snapshot: impl FnOnce() -> SystemSnapshot) -> bool {
        if !self.refresh_timer.poll(now) {
            return false;
        }
        self.refresh(&snapshot());
        true
    }

    pub fn selected_button(&self) -> Button {
        Button::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Button::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            Button::ALL.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Handle a key press.
    pub fn on_key(&mut self, key: KeyCode) -> Action {
        match self.state {
            AppState::Dashboard => self.on_dashboard_key(key),
            AppState::Output => {
                self.on_output_key(key);
                Action::None
            }
            AppState::Quit => Action::Quit,
        }
    }

    fn on_dashboard_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('r') | KeyCode::Char('R') => Action::Refresh,
            KeyCode::Char(c) => match DiagnosticCommand::from_hotkey(c) {
                Some(cmd) => Action::Run(cmd),
                None => Action::None,
            },
            KeyCode::Right | KeyCode::Tab => {
                self.select_next();
                Action::None
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.select_prev();
                Action::None
            }
            KeyCode::Enter => match self.selected_button() {
                Button::Command(cmd) => Action::Run(cmd),
                Button::Exit => self.quit(),
            },
            _ => Action::None,
        }
    }

    fn on_output_key(&mut self, key: KeyCode) {
        let Some(view) = self.output.as_mut() else {
            self.state = AppState::Dashboard;
            return;
        };
        let max = view.max_scroll();

        match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.close_output();
            }
            KeyCode::Up | KeyCode::Char('k') => view.scroll = view.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => view.scroll = (view.scroll + 1).min(max),
            KeyCode::PageUp => view.scroll = view.scroll.saturating_sub(PAGE_LINES),
            KeyCode::PageDown => view.scroll = view.scroll.saturating_add(PAGE_LINES).min(max),
            KeyCode::Home => view.scroll = 0,
            KeyCode::End => view.scroll = max,
            _ => {}
        }
    }

    /// Leave the dashboard from any state.
    pub fn quit(&mut self) -> Action {
        self.state = AppState::Quit;
        Action::Quit
    }

    /// Open the output dialog with the result of a command run.
    pub fn show_output(
        &mut self,
        command: DiagnosticCommand,
        result: Result<CommandOutput, CommandError>,
    ) {
        let text = match result {
            Ok(output) => output.display_text().to_string(),
            Err(e) => {
                tracing::warn!(command = command.command_line(), error = %e, "Diagnostic command failed");
                e.to_string()
            }
        };

        self.output = Some(OutputView {
            title: "Command Output".to_string(),
            text,
            scroll: 0,
        });
        self.state = AppState::Output;
    }

    pub fn close_output(&mut self) {
        self.output = None;
        self.state = AppState::Dashboard;
    }

    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}
