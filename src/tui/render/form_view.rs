use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::NOTES_MAX_CHARS;
use crate::tui::app::{App, FIELD_ORDER, Focus, FormField};
use crate::util::unicode::truncate_to_width;

/// Render the appointment form pane
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    // marker (2) + label (17) + gutter
    let value_width = (area.width as usize).saturating_sub(21);

    let mut lines: Vec<Line> = Vec::new();

    for (i, field) in FIELD_ORDER.iter().copied().enumerate() {
        let focused = app.focus == Focus::Form && app.field_cursor == i;

        let marker_style = Style::default().fg(app.theme.highlight).bg(bg);
        let label_style = if focused {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };

        let mut spans = vec![
            Span::styled(if focused { "▸ " } else { "  " }, marker_style),
            Span::styled(format!("{:<17}", field.label()), label_style),
        ];
        spans.extend(value_spans(app, field, focused, value_width));
        lines.push(Line::from(spans));

        if let Some(error) = field_error(app, field)
            && !error.is_empty()
        {
            lines.push(Line::from(Span::styled(
                format!("    ⚠ {}", error),
                Style::default().fg(app.theme.red).bg(bg),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(submit_line(app));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The value portion of one form row
fn value_spans(app: &App, field: FormField, focused: bool, width: usize) -> Vec<Span<'static>> {
    let bg = app.theme.background;
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    match field {
        FormField::Doctor => {
            let doctor = &app.editor.draft.doctor;
            if doctor.is_empty() {
                let hint = if focused { "select with ←/→" } else { "—" };
                vec![Span::styled(hint.to_string(), dim)]
            } else {
                vec![Span::styled(truncate_to_width(doctor, width), value_style)]
            }
        }
        FormField::VisitType => {
            let (new_mark, follow_mark) = if app.editor.draft.visit_type
                == crate::model::VisitType::New
            {
                ("(•)", "( )")
            } else {
                ("( )", "(•)")
            };
            vec![
                Span::styled(format!("{} New   ", new_mark), value_style),
                Span::styled(format!("{} Follow-up", follow_mark), value_style),
            ]
        }
        FormField::Consent => {
            let mark = if app.editor.draft.consent { "[x]" } else { "[ ]" };
            vec![Span::styled(
                format!("{} I agree to clinic policies", mark),
                value_style,
            )]
        }
        _ => text_value_spans(app, field, focused, width),
    }
}

/// Text-field value with an inline cursor bar when focused
fn text_value_spans(
    app: &App,
    field: FormField,
    focused: bool,
    width: usize,
) -> Vec<Span<'static>> {
    let bg = app.theme.background;
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let text = match field {
        FormField::PatientName => &app.editor.draft.patient_name,
        FormField::Phone => &app.editor.draft.phone,
        FormField::Email => &app.editor.draft.email,
        FormField::Department => &app.editor.draft.department,
        FormField::Date => &app.date_input,
        FormField::Time => &app.time_input,
        FormField::Notes => &app.editor.draft.notes,
        _ => return Vec::new(),
    };

    let mut spans = Vec::new();

    if focused {
        let cursor = app.edit_cursor.min(text.chars().count());
        let byte = text
            .char_indices()
            .nth(cursor)
            .map_or(text.len(), |(b, _)| b);
        spans.push(Span::styled(text[..byte].to_string(), value_style));
        spans.push(Span::styled(
            "\u{258C}".to_string(),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(text[byte..].to_string(), value_style));
    } else if text.is_empty() {
        if let Some(hint) = field.hint() {
            spans.push(Span::styled(hint.to_string(), dim));
        }
    } else {
        spans.push(Span::styled(truncate_to_width(text, width), value_style));
    }

    if field == FormField::Notes {
        spans.push(Span::styled(
            format!(
                "  {}/{}",
                app.editor.draft.notes.chars().count(),
                NOTES_MAX_CHARS
            ),
            dim,
        ));
    }

    spans
}

/// The error slot shown under a field, if it has one
fn field_error(app: &App, field: FormField) -> Option<&str> {
    let errors = &app.editor.errors;
    match field {
        FormField::PatientName => Some(errors.patient_name.as_str()),
        FormField::Phone => Some(errors.phone.as_str()),
        FormField::Email => Some(errors.email.as_str()),
        FormField::Doctor => Some(errors.doctor.as_str()),
        FormField::Department => Some(errors.department.as_str()),
        FormField::Date => Some(errors.date.as_str()),
        FormField::Time => Some(errors.time.as_str()),
        FormField::Consent => Some(errors.consent.as_str()),
        FormField::VisitType | FormField::Notes => None,
    }
}

/// Submit button line: lit when the draft would go through
fn submit_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let label = if app.editor.is_editing() {
        "[ Save Changes ]"
    } else {
        "[ Submit ]"
    };
    let button_style = if app.editor.can_submit(app.today()) {
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let hint = if app.editor.is_editing() {
        "  Enter save   Esc cancel edit"
    } else {
        "  Enter submit   Esc reset"
    };

    Line::from(vec![
        Span::styled("  ".to_string(), Style::default().bg(bg)),
        Span::styled(label.to_string(), button_style),
        Span::styled(hint.to_string(), Style::default().fg(app.theme.dim).bg(bg)),
    ])
}
