use crate::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            app.begin_edit_selected();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('a') | KeyCode::Char('A') => {
            app.focus_on(Focus::Form);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}
