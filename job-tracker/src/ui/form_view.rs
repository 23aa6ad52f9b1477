use super::widgets::build_field_lines;
use super::*;
use crate::app::FORM_FIELDS;

fn form_lines(app: &App) -> Vec<Line<'static>> {
    let form_focused = app.focus == Focus::Form && !app.is_in_edit_mode();
    FORM_FIELDS
        .iter()
        .flat_map(|&field| {
            let focused = form_focused && app.form.focused_field == field;
            build_field_lines(&app.form.draft, field, focused)
        })
        .collect()
}

/// Rows the form needs, borders included. Grows with multi-line notes.
pub(super) fn height(app: &App) -> u16 {
    form_lines(app).len() as u16 + 2
}

pub(super) fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Form && !app.is_in_edit_mode();
    let form = Paragraph::new(form_lines(app))
        .block(panel_block(" New Application ".to_string(), focused));
    frame.render_widget(form, area);
}
