//! Command output dialog.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::domain::OutputView;

/// Render the output dialog centered over the dashboard.
pub fn render_output_overlay(frame: &mut Frame, view: &OutputView) {
    let popup_area = centered_rect(80, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let hint = Line::from(vec![
        Span::styled("[Enter/Esc]", Style::default().fg(Color::Yellow)),
        Span::styled(" Close  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[↑↓]", Style::default().fg(Color::Yellow)),
        Span::styled(" Scroll ", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(view.text.as_str())
        .scroll((view.scroll, 0))
        .block(
            Block::default()
                .title(format!(" {} ", view.title))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .title_bottom(hint.right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
