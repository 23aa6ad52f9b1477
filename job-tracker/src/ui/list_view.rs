use super::widgets::{badge_span, build_field_lines};
use super::*;
use crate::app::{EditState, EDIT_FIELDS};
use crate::types::Application;

fn display_lines(application: &Application) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                application.company.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            badge_span(application.status),
        ]),
        Line::from(Span::raw(application.role.clone())),
        Line::from(Span::styled(
            application.date.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if !application.notes.is_empty() {
        lines.extend(application.notes.split('\n').map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::Gray),
            ))
        }));
    }
    lines
}

fn edit_lines(edit: &EditState) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = EDIT_FIELDS
        .iter()
        .flat_map(|&field| build_field_lines(&edit.draft, field, edit.focused_field == field))
        .collect();
    lines.push(Line::from(vec![
        Span::styled(
            "[ 💾 Save ]",
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        Span::raw(" "),
        Span::styled(
            "[ ✕ Cancel ]",
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
    ]));
    lines
}

struct Card {
    lines: Vec<Line<'static>>,
    editing: bool,
}

impl Card {
    fn height(&self) -> u16 {
        self.lines.len() as u16 + 2
    }
}

pub(super) fn render_application_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let list_focused = app.focus == Focus::List || app.is_in_edit_mode();
    let block = panel_block(
        format!(" Applications ({}) ", app.applications.len()),
        list_focused,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.applications.is_empty() {
        let empty = Paragraph::new("No applications yet. Fill in the form above to add one.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let cards: Vec<Card> = app
        .applications
        .iter()
        .map(|application| match &app.edit_state {
            Some(edit) if edit.application_id == application.id => Card {
                lines: edit_lines(edit),
                editing: true,
            },
            _ => Card {
                lines: display_lines(application),
                editing: false,
            },
        })
        .collect();

    scroll_to_selection(app, &cards, inner.height);

    let mut y = inner.y;
    let bottom = inner.y + inner.height;
    for (idx, card) in cards.iter().enumerate().skip(app.list_scroll) {
        if y >= bottom {
            break;
        }
        let height = card.height().min(bottom - y);
        let rect = Rect::new(inner.x, y, inner.width, height);

        let is_selected = list_focused && app.selected_index == Some(idx);
        let border_style = if card.editing {
            Style::default().fg(Color::Yellow)
        } else if is_selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut card_block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        if card.editing {
            card_block = card_block.title(" Editing ");
        } else if is_selected {
            card_block = card_block.title(" ✎ ");
        }

        frame.render_widget(Paragraph::new(card.lines.clone()).block(card_block), rect);
        y += height;
    }
}

/// Keep the selected card fully visible.
fn scroll_to_selection(app: &mut App, cards: &[Card], view_height: u16) {
    app.list_scroll = app.list_scroll.min(cards.len().saturating_sub(1));
    let Some(selected) = app.selected_index.filter(|&i| i < cards.len()) else {
        return;
    };
    if selected < app.list_scroll {
        app.list_scroll = selected;
    }
    let span_height = |from: usize| -> u16 {
        cards[from..=selected].iter().map(Card::height).sum()
    };
    while app.list_scroll < selected && span_height(app.list_scroll) > view_height {
        app.list_scroll += 1;
    }
}
