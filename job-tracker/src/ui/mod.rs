use crate::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

mod form_view;
mod list_view;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                      // Title
            Constraint::Length(form_view::height(app)), // New application form
            Constraint::Min(3),                         // Saved applications
            Constraint::Length(1),                      // Status line
            Constraint::Length(1),                      // Key hints
        ])
        .split(frame.area());

    render_title(frame, root[0]);
    form_view::render_form(frame, app, root[1]);
    list_view::render_application_list(frame, app, root[2]);
    render_status(frame, app, root[3]);
    render_controls(frame, app, root[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Job Tracker 📝",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.status_message.as_deref() else {
        return;
    };
    let status = Paragraph::new(Span::styled(message, Style::default().fg(Color::Cyan)))
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn key_hint<'a>(key: &'a str, action: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let hints: Vec<[Span<'_>; 2]> = if app.is_in_edit_mode() {
        vec![
            key_hint("Tab/↑↓", ": Field  "),
            key_hint("←→", ": Status  "),
            key_hint("Ctrl+T", ": Today  "),
            key_hint("Ctrl+S/Enter", ": Save  "),
            key_hint("Esc", ": Cancel"),
        ]
    } else {
        match app.focus {
            Focus::Form => vec![
                key_hint("Tab/↑↓", ": Field  "),
                key_hint("←→", ": Status  "),
                key_hint("Ctrl+T", ": Today  "),
                key_hint("Ctrl+S/Enter", ": Add  "),
                key_hint("Esc", ": List  "),
                key_hint("Ctrl+Q", ": Quit"),
            ],
            Focus::List => vec![
                key_hint("↑↓/j/k", ": Select  "),
                key_hint("Enter/E", ": Edit  "),
                key_hint("Tab/A", ": Form  "),
                key_hint("Q", ": Quit"),
            ],
        }
    };

    let controls = Paragraph::new(Line::from(hints.into_iter().flatten().collect::<Vec<_>>()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(controls, area);
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}
