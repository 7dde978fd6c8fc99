use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Appointment;
use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

/// Rows one card occupies (5 content lines + 1 separator)
const CARD_HEIGHT: usize = 6;

/// Render the appointment card list pane
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(" No appointments yet.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor's card inside the visible window
    let visible = ((area.height as usize) / CARD_HEIGHT).max(1);
    if app.list_cursor < app.list_scroll {
        app.list_scroll = app.list_cursor;
    } else if app.list_cursor >= app.list_scroll + visible {
        app.list_scroll = app.list_cursor + 1 - visible;
    }

    let width = (area.width as usize).saturating_sub(3);
    let mut lines: Vec<Line> = Vec::new();

    for (i, record) in app
        .store
        .records()
        .iter()
        .enumerate()
        .skip(app.list_scroll)
        .take(visible)
    {
        let is_cursor = app.focus == Focus::List && i == app.list_cursor;
        lines.extend(card_lines(app, record, is_cursor, width));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// One card: doctor, department, date/time, patient line, chips
fn card_lines(
    app: &App,
    record: &Appointment,
    is_cursor: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let bg = theme.background;
    let marker = if is_cursor { "▸ " } else { "  " };

    let doctor_style = if is_cursor {
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_bright).bg(bg)
    };

    let when = format!("{} — {}", record.display_date(), record.time);
    let who = format!("{} • {}", record.patient_name, record.phone);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                marker.to_string(),
                Style::default().fg(theme.highlight).bg(bg),
            ),
            Span::styled(truncate_to_width(&record.doctor, width), doctor_style),
        ]),
        Line::from(vec![
            Span::styled("  ".to_string(), Style::default().bg(bg)),
            Span::styled(
                truncate_to_width(&record.department, width),
                Style::default().fg(theme.dim).bg(bg),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ".to_string(), Style::default().bg(bg)),
            Span::styled(
                truncate_to_width(&when, width),
                Style::default().fg(theme.text).bg(bg),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ".to_string(), Style::default().bg(bg)),
            Span::styled(
                truncate_to_width(&who, width),
                Style::default().fg(theme.dim).bg(bg),
            ),
        ]),
    ];

    // Chips: visit type + status
    lines.push(Line::from(vec![
        Span::styled("  ".to_string(), Style::default().bg(bg)),
        Span::styled(
            format!("[{}]", record.visit_type.label()),
            Style::default().fg(theme.cyan).bg(bg),
        ),
        Span::styled(" ".to_string(), Style::default().bg(bg)),
        Span::styled(
            format!("[{}]", record.status),
            Style::default().fg(theme.status_color(&record.status)).bg(bg),
        ),
    ]));

    lines.push(Line::from(""));

    lines
}
