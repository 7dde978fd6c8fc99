use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Render the status row (bottom of screen): the active notification, or
/// key hints for the focused pane
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(notification) = &app.notification {
        Line::from(Span::styled(
            format!(" {}", notification.message),
            Style::default()
                .fg(app.theme.green)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let hints = match app.focus {
            Focus::Form => " Tab list   ↑/↓ field   Enter submit   Esc reset",
            Focus::List => " Tab form   j/k move   e edit   x cancel   ? help   q quit",
        };
        Line::from(Span::styled(
            hints.chars().take(width).collect::<String>(),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
