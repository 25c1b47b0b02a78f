//! Answer panel: the current answer and the latest notice.

use oq_01_request_client::{Notice, NoticeLevel};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::App;

fn field<'a>(name: &'static str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{name:<10}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.into()),
    ])
}

fn notice_line(notice: &Notice) -> Line<'static> {
    let (symbol, color) = match notice.level {
        NoticeLevel::Warning => ("⚠", Color::Yellow),
        NoticeLevel::Error => ("✖", Color::Red),
    };
    Line::from(Span::styled(
        format!("{symbol} {}", notice.message),
        Style::default().fg(color),
    ))
}

/// Render the answer panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = match app.answers.current() {
        Some(payload) => {
            let mut lines = vec![
                field("Question", payload.question.clone()),
                field("Answer", payload.answer.clone()),
                field("Query", payload.query.clone()),
            ];
            if let Some(ms) = payload.response_time_ms {
                lines.push(field("Time", format!("{ms} ms")));
            }
            let syntax = match &payload.tree {
                Some(tree) => format!("{} nodes, press Tab to view", tree.node_count()),
                None => "none".to_string(),
            };
            lines.push(field("Tree", syntax));
            lines
        }
        None => vec![Line::from(Span::styled(
            "No answer yet. Type a question and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    if let Some(notice) = app.answers.latest_notice() {
        lines.push(Line::raw(""));
        lines.push(notice_line(notice));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" ANSWER ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}
