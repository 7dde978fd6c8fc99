use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the confirm-before-cancel dialog
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup = centered_rect(area, 52, 7);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .title(Span::styled(
            " Cancel appointment? ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Are you sure you want to cancel this appointment?",
            Style::default().fg(app.theme.text).bg(bg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y ", Style::default().fg(app.theme.red).bg(bg)),
            Span::styled("yes, cancel    ", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled("n ", Style::default().fg(app.theme.green).bg(bg)),
            Span::styled("keep it", Style::default().fg(app.theme.dim).bg(bg)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
