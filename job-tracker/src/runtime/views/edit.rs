use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, is_ctrl};

pub(super) fn handle_edit_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if is_ctrl(&key, 's') {
        save(app, action_tx);
        return;
    }
    if is_ctrl(&key, 't') {
        app.input_today(app::local_today());
        return;
    }
    if is_ctrl(&key, 'x') {
        app.input_clear();
        return;
    }

    let focused_field = match &app.edit_state {
        Some(edit) => edit.focused_field,
        None => return,
    };

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.edit_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.edit_prev_field(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => {
            if focused_field.submits_on_enter() {
                save(app, action_tx);
            } else {
                app.input_char('\n');
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_char(c);
        }
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Left => app.input_move_cursor(true),
        KeyCode::Right => app.input_move_cursor(false),
        KeyCode::Home => app.input_cursor_home_end(true),
        KeyCode::End => app.input_cursor_home_end(false),
        _ => {}
    }
}

fn save(app: &mut App, action_tx: &ActionTx) {
    if app.save_edit() {
        enqueue_action(action_tx, Action::PersistApplications);
    }
}
