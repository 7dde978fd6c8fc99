use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: app name, form mode, appointment count, separator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mode = if app.editor.is_editing() {
        "Edit Appointment"
    } else {
        "Book Appointment"
    };
    let count = match app.store.len() {
        0 => String::new(),
        1 => "1 appointment".to_string(),
        n => format!("{} appointments", n),
    };

    let mut spans = vec![
        Span::styled(
            " frontdesk",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", mode), Style::default().fg(app.theme.text).bg(bg)),
    ];

    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right = format!("{} ", count);
    if used + right.chars().count() < width {
        let padding = width - used - right.chars().count();
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(right, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let separator = Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans), separator])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
