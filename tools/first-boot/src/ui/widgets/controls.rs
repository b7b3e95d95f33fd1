//! Controls row: diagnostic command buttons on the left, Exit on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, Button};

/// Render the Controls block.
///
/// Buttons switch to their short labels when the full row is wider than
/// the block.
pub fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut row = button_row(app.selected, false);
    if row.width() > inner.width as usize {
        row = button_row(app.selected, true);
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(span_width(&row.exit) as u16),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(Line::from(row.commands)), chunks[0]);
    frame.render_widget(Paragraph::new(Line::from(row.exit)).right_aligned(), chunks[1]);
}

struct ButtonRow {
    commands: Vec<Span<'static>>,
    exit: Vec<Span<'static>>,
}

impl ButtonRow {
    /// Cells needed. The separator after the last command button is not
    /// counted; the label padding already keeps it apart from Exit.
    fn width(&self) -> usize {
        span_width(&self.commands).saturating_sub(1) + span_width(&self.exit)
    }
}

fn button_row(selected: usize, short: bool) -> ButtonRow {
    let mut row = ButtonRow {
        commands: Vec::new(),
        exit: Vec::new(),
    };

    for (index, button) in Button::ALL.iter().enumerate() {
        let spans = button_spans(*button, index == selected, short);
        match button {
            Button::Exit => row.exit.extend(spans),
            Button::Command(_) => {
                row.commands.extend(spans);
                row.commands.push(Span::raw(" "));
            }
        }
    }
    row
}

fn span_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.width()).sum()
}

fn button_spans(button: Button, selected: bool, short: bool) -> Vec<Span<'static>> {
    let label_style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let label = if short {
        button.short_label()
    } else {
        button.label()
    };

    vec![
        Span::styled(
            format!("[{}]", button.hotkey().to_ascii_uppercase()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!(" {} ", label), label_style),
    ]
}
