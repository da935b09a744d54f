use crate::app::{App, Notice};
use crate::core::navigation::FocusTarget;
use crate::core::{FieldName, TextField};
use crate::input::phone::PHONE_SEGMENTS;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

const TITLE: &str = "User Information Form";
const PHONE_LABEL: &str = "Phone";
const HELP: &str = "tab/shift-tab: move   enter: submit   ctrl-r: clear   esc: quit";

pub fn render(app: &App) -> Vec<SpanLine> {
    let label_width = TextField::ALL
        .iter()
        .map(|field| field.label().width())
        .chain([PHONE_LABEL.width()])
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        vec![Span::styled(TITLE, Style::new().bold().underline())],
        Vec::new(),
    ];

    for field in TextField::ALL {
        let focused = app.focus() == FocusTarget::Field(field);
        let mut line = label_spans(field.label(), label_width, focused);
        line.push(value_span(
            app.form().data().text(field),
            field.placeholder(),
            focused,
            app.form().config().show_placeholders,
        ));
        lines.push(line);
        push_error(&mut lines, app, field.into(), label_width);
    }

    let mut phone_line = label_spans(PHONE_LABEL, label_width, phone_focused(app.focus()));
    for spec in &PHONE_SEGMENTS {
        if spec.prev.is_some() {
            phone_line.push(Span::new(" - "));
        }
        phone_line.push(value_span(
            app.form().data().segment(spec.index).unwrap_or_default(),
            spec.placeholder,
            app.focus() == FocusTarget::PhoneSegment(spec.index),
            app.form().config().show_placeholders,
        ));
    }
    lines.push(phone_line);
    push_error(&mut lines, app, FieldName::Phone, label_width);

    lines.push(Vec::new());
    if let Some(notice) = app.notice() {
        let color = match notice {
            Notice::Accepted => Color::Green,
            Notice::Rejected => Color::Red,
        };
        lines.push(vec![Span::styled(notice.message(), Style::new().color(color).bold())]);
    }
    lines.push(vec![Span::styled(HELP, Style::new().color(Color::DarkGrey))]);
    lines
}

fn phone_focused(focus: FocusTarget) -> bool {
    matches!(focus, FocusTarget::PhoneSegment(_))
}

fn label_spans(label: &str, width: usize, focused: bool) -> SpanLine {
    let marker = if focused { ">" } else { " " };
    let padding = " ".repeat(width.saturating_sub(label.width()));
    vec![
        Span::styled(marker, Style::new().color(Color::Cyan)),
        Span::new(format!(" {label}:{padding} ")),
    ]
}

fn value_span(value: &str, placeholder: &str, focused: bool, show_placeholder: bool) -> Span {
    if value.is_empty() {
        let text = if show_placeholder { placeholder } else { "" };
        let text = if focused && text.is_empty() { "_" } else { text };
        return Span::styled(text, Style::new().color(Color::DarkGrey));
    }
    if focused {
        Span::styled(value, Style::new().color(Color::Cyan).bold())
    } else {
        Span::new(value)
    }
}

fn push_error(lines: &mut Vec<SpanLine>, app: &App, field: FieldName, label_width: usize) {
    let Some(message) = app
        .form()
        .visible_errors()
        .and_then(|errors| errors.get(field))
    else {
        return;
    };
    let indent = " ".repeat(label_width + 4);
    lines.push(vec![Span::styled(
        format!("{indent}{message}"),
        Style::new().color(Color::Red),
    )]);
}
