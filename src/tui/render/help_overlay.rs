use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("Tab", "switch between form and list"),
    ("↑/↓", "previous / next form field"),
    ("←/→ Space", "cycle doctor, toggle visit type"),
    ("Space", "toggle consent"),
    ("Enter", "submit the form"),
    ("Esc", "reset form / cancel edit"),
    ("j/k", "move through appointments"),
    ("e / Enter", "edit the selected appointment"),
    ("x", "cancel the selected appointment"),
    ("q", "quit (from the list)"),
];

/// Render the key help overlay
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup = centered_rect(area, 48, KEYS.len() as u16 + 5);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));

    let mut lines = vec![Line::from("")];
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<11}", key),
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
            Span::styled(*action, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " any key to close",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
