//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  OQ-VIEWER v0.1.0  endpoint                         status      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  QUESTION > ...                                                 │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ANSWER or TREE                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! │  [Enter] Ask   [Tab] Tree   [F1] Help   [Esc] Quit              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, Screen};

use super::{answer_panel, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Main vertical layout: header, question, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Question input
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    render_input(frame, main_chunks[1], app);
    match app.screen {
        Screen::Tree => render_tree(frame, main_chunks[2], app),
        Screen::Answer | Screen::Quit => answer_panel::render(frame, main_chunks[2], app),
    }
    render_footer(frame, main_chunks[3]);

    if app.show_help {
        widgets::render_help_overlay(frame);
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled(
            " OQ-VIEWER ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION"), " "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(app.endpoint.clone()),
    ];

    let status = if app.answers.is_pending() {
        Span::styled(" Waiting for answer... ", Style::default().fg(Color::Yellow))
    } else if let Some(time) = app.last_answer_at {
        Span::styled(
            format!(" Answered {} ", time.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(" Ready ", Style::default().fg(Color::DarkGray))
    };

    // Right-align the status
    let title_len: usize = title.iter().map(|s| s.content.chars().count()).sum();
    let status_len = status.content.chars().count();
    let padding = area
        .width
        .saturating_sub(2)
        .saturating_sub((title_len + status_len) as u16);

    let mut spans = title;
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.push(status);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Render the question input line.
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(app.input.clone()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);
    let input = Paragraph::new(line).block(
        Block::default()
            .title(" QUESTION ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(input, area);
}

/// Render the syntax tree of the current answer.
fn render_tree(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(" SYNTAX TREE ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let drawn = app
        .tree_cache
        .get_or_draw(inner, &app.renderer, app.answers.current());

    match drawn {
        Ok(surface) => surface.render(frame, area, block),
        Err(e) => {
            let message = Paragraph::new(Line::from(Span::styled(
                format!("⚠ {e}"),
                Style::default().fg(Color::Yellow),
            )))
            .block(block);
            frame.render_widget(message, area);
        }
    }
}

/// Render the footer with keyboard shortcuts.
fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = vec![
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Ask  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Answer/Tree  "),
        Span::styled("[F1]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit  "),
    ];

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
