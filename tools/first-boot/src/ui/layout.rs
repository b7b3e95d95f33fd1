//! Main layout orchestration.
//!
//! Renders a fixed-size window centered in the terminal:
//! ```text
//! ┌ CoreARM - Sample Application ─────────────────────────────────┐
//! │ Welcome to CoreARM                                            │
//! │┌ System Information ─────────────────────────────────────────┐│
//! ││ Rust Version: 1.82.0                                        ││
//! ││ ...                                                         ││
//! │└─────────────────────────────────────────────────────────────┘│
//! │┌ Controls ───────────────────────────────────────────────────┐│
//! ││ [1] Show Uptime [2] Process List ...               [Q] Exit ││
//! │└─────────────────────────────────────────────────────────────┘│
//! │ Last refresh: 12:00:01           [1-4] Run  [←→] Select  ...  │
//! └───────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::domain::{App, AppState};

use super::widgets;

/// Preferred window size in cells, clipped to the terminal.
pub const WINDOW_SIZE: (u16, u16) = (76, 22);

/// Render the entire dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let area = window_rect(frame.area());
    frame.render_widget(Clear, area);

    let window = Block::default()
        .title(format!(" {} ", app.title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = window.inner(area);
    frame.render_widget(window, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(6),    // System information
            Constraint::Length(3), // Controls
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    render_header(frame, chunks[0], app);
    render_info(frame, chunks[1], app);
    widgets::render_controls(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    if app.state == AppState::Output {
        if let Some(view) = &app.output {
            widgets::render_output_overlay(frame, view);
        }
    }
}

/// Center the preferred window size inside `area`.
fn window_rect(area: Rect) -> Rect {
    let width = WINDOW_SIZE.0.min(area.width);
    let height = WINDOW_SIZE.1.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.welcome),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

fn render_info(frame: &mut Frame, area: Rect, app: &App) {
    let info = Paragraph::new(app.info_text.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" System Information ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(info, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = vec![
        Span::styled("[1-4]", Style::default().fg(Color::Yellow)),
        Span::raw(" Run  "),
        Span::styled("[←→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Select  "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Activate "),
    ];
    let hints_len: usize = hints.iter().map(|s| s.width()).sum();

    // Drop the label before the hints get clipped
    let status = match app.last_refresh {
        Some(time) => {
            let full = format!(" Last refresh: {} ", time.format("%H:%M:%S"));
            if full.chars().count() + hints_len <= area.width as usize {
                full
            } else {
                format!(" {} ", time.format("%H:%M:%S"))
            }
        }
        None => " No data ".to_string(),
    };

    let padding = (area.width as usize).saturating_sub(status.chars().count() + hints_len);

    let mut spans = vec![Span::styled(status, Style::default().fg(Color::DarkGray))];
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(hints);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandOutput, DiagnosticCommand};
    use crate::domain::Button;
    use boot_report::snapshot::labels;
    use boot_report::SystemSnapshot;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sample_app() -> App {
        let mut app = App::new(
            "CoreARM - Sample Application".into(),
            "Welcome to CoreARM".into(),
            Duration::from_secs(1),
        );
        let mut snapshot = SystemSnapshot::new();
        snapshot.push(labels::SYSTEM, "Linux 6.1.21");
        snapshot.push(labels::MEMORY, "500MB free / 2000MB total");
        app.refresh(&snapshot);
        app
    }

    #[test]
    fn test_render_dashboard() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let app = sample_app();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("CoreARM - Sample Application"));
        assert!(text.contains("Welcome to CoreARM"));
        assert!(text.contains("System Information"));
        assert!(text.contains("Memory: 500MB free / 2000MB total"));
        assert!(text.contains("Show Uptime"));
        assert!(text.contains("Process List"));
        assert!(text.contains("Disk Usage"));
        assert!(text.contains("Network"));
        assert!(text.contains("Exit"));
        assert!(!text.contains("Command Output"));
    }

    #[test]
    fn test_render_output_dialog() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = sample_app();
        app.show_output(
            DiagnosticCommand::Uptime,
            Ok(CommandOutput {
                command: "uptime".into(),
                stdout: " 12:00:01 up 3 days,  load average: 0.00\n".into(),
                stderr: String::new(),
                exit_code: Some(0),
            }),
        );
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Command Output"));
        assert!(text.contains("up 3 days"));
    }

    #[test]
    fn test_window_is_centered_and_clipped() {
        let rect = window_rect(Rect::new(0, 0, 100, 30));
        assert_eq!(rect, Rect::new(12, 4, 76, 22));

        let rect = window_rect(Rect::new(0, 0, 60, 18));
        assert_eq!(rect, Rect::new(0, 0, 60, 18));
    }

    #[test]
    fn test_render_in_minimum_terminal() {
        let (cols, rows) = crate::display::DASHBOARD_MIN_SIZE;
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        let app = sample_app();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Welcome to CoreARM"));
        for button in Button::ALL {
            let shown = format!("[{}] {}", button.hotkey().to_ascii_uppercase(), button.short_label());
            assert!(text.contains(&shown), "missing {shown}");
        }
        assert!(text.contains("[Enter] Activate"));
    }

    #[test]
    fn test_full_labels_in_preferred_window() {
        let mut terminal = Terminal::new(TestBackend::new(WINDOW_SIZE.0, WINDOW_SIZE.1)).unwrap();
        let app = sample_app();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        for button in Button::ALL {
            assert!(text.contains(button.label()), "missing {}", button.label());
        }
        assert!(text.contains("[Enter] Activate"));
    }
}
