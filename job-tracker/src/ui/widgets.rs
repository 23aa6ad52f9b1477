use crate::app::{ApplicationDraft, FormField, TextInput};
use crate::types::Status;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Colour and icon shown next to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub color: Color,
    pub icon: &'static str,
}

impl Status {
    pub fn badge(self) -> StatusBadge {
        match self {
            Status::Applied => StatusBadge {
                color: Color::Blue,
                icon: "➤",
            },
            Status::Interview => StatusBadge {
                color: Color::Yellow,
                icon: "📅",
            },
            Status::Offer => StatusBadge {
                color: Color::Green,
                icon: "✔",
            },
            Status::Rejected => StatusBadge {
                color: Color::Red,
                icon: "✖",
            },
        }
    }
}

/// `[icon Status]` on the status colour.
pub fn badge_span(status: Status) -> Span<'static> {
    let badge = status.badge();
    Span::styled(
        format!(" {} {} ", badge.icon, status),
        Style::default()
            .fg(Color::Black)
            .bg(badge.color)
            .add_modifier(Modifier::BOLD),
    )
}

const LABEL_WIDTH: usize = 9;

fn label_span(field: FormField, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), style)
}

/// Render a text input, one line per `\n`, with a block cursor when focused.
fn text_lines(input: &TextInput, focused: bool, placeholder: &str) -> Vec<Vec<Span<'static>>> {
    if input.is_empty() && !focused {
        return vec![vec![Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )]];
    }

    let value_style = Style::default().fg(Color::White);
    let text = if focused {
        let (before, after) = input.split_at_cursor();
        format!("{before}█{after}")
    } else {
        input.value.clone()
    };

    text.split('\n')
        .map(|line| vec![Span::styled(line.to_string(), value_style)])
        .collect()
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Company => "Company 🏢",
        FormField::Role => "Role 👨‍💻",
        FormField::Date => "YYYY-MM-DD",
        FormField::Notes => "Notes 🗒️",
        FormField::Status | FormField::Submit => "",
    }
}

/// Label + value lines for one field of a draft.
pub fn build_field_lines(
    draft: &ApplicationDraft,
    field: FormField,
    focused: bool,
) -> Vec<Line<'static>> {
    match field {
        FormField::Status => {
            let arrows = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![Line::from(vec![
                label_span(field, focused),
                Span::styled("◀ ", arrows),
                badge_span(draft.status),
                Span::styled(" ▶", arrows),
            ])]
        }
        FormField::Submit => {
            let style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Blue)
            };
            vec![Line::from(Span::styled(
                format!("[ {} ]", field.label()),
                style,
            ))]
        }
        _ => {
            let Some(input) = draft.text(field) else {
                return Vec::new();
            };
            let indent = " ".repeat(LABEL_WIDTH);
            text_lines(input, focused, placeholder(field))
                .into_iter()
                .enumerate()
                .map(|(i, spans)| {
                    let prefix = if i == 0 {
                        label_span(field, focused)
                    } else {
                        Span::raw(indent.clone())
                    };
                    let mut line = vec![prefix];
                    line.extend(spans);
                    Line::from(line)
                })
                .collect()
        }
    }
}
