use crate::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod edit;
mod form;
mod list;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if is_ctrl(&key, 'c') || is_ctrl(&key, 'q') {
        app.quit();
        return;
    }

    if app.is_in_edit_mode() {
        edit::handle_edit_key(key, app, action_tx);
        return;
    }

    match app.focus {
        Focus::Form => form::handle_form_key(key, app, action_tx),
        Focus::List => list::handle_list_key(key, app),
    }
}
