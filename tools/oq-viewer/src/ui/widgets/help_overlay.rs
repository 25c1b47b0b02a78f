//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn key_line(key: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(text),
    ])
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 60, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(Span::styled(
            "OQ-VIEWER HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled("Question", bold)),
        Line::raw(""),
        key_line("  text     ", "Type the question"),
        key_line("  Enter    ", "Send it to the QA service"),
        key_line("  Bksp     ", "Delete last character"),
        key_line("  Ctrl-U   ", "Clear the question"),
        Line::raw(""),
        Line::from(Span::styled("Views", bold)),
        Line::raw(""),
        key_line("  Tab      ", "Toggle answer / syntax tree"),
        key_line("  F1       ", "Show this help"),
        key_line("  Esc      ", "Quit"),
        Line::raw(""),
        Line::from(Span::styled("Tree markers", bold)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  ○ inner  ", Style::default().fg(Color::Cyan)),
            Span::raw("Label above the node"),
        ]),
        Line::from(vec![
            Span::styled("  ● leaf   ", Style::default().fg(Color::Green)),
            Span::raw("Label below the node"),
        ]),
        Line::from(vec![
            Span::styled("  X* / X^  ", Style::default().fg(Color::Yellow)),
            Span::raw("Adjunction / substitution node"),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
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
