use crate::app::{self, App, Focus, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, is_ctrl};

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if is_ctrl(&key, 's') {
        submit(app, action_tx);
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

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_prev_field(),
        KeyCode::Esc => app.focus_on(Focus::List),
        KeyCode::Enter => {
            if app.form.focused_field.submits_on_enter() {
                submit(app, action_tx);
            } else {
                app.input_char('\n');
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.form.focused_field == FormField::Submit {
                if c == ' ' {
                    submit(app, action_tx);
                }
            } else {
                app.input_char(c);
            }
        }
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Left => app.input_move_cursor(true),
        KeyCode::Right => app.input_move_cursor(false),
        KeyCode::Home => app.input_cursor_home_end(true),
        KeyCode::End => app.input_cursor_home_end(false),
        _ => {}
    }
}

fn submit(app: &mut App, action_tx: &ActionTx) {
    if app.submit_form() {
        enqueue_action(action_tx, Action::PersistApplications);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, tx: &ActionTx, s: &str) {
        for c in s.chars() {
            handle_form_key(key(KeyCode::Char(c)), app, tx);
        }
    }

    #[test]
    fn typed_form_submits_and_queues_persist() {
        let mut app = App::new();
        let (tx, mut rx) = channel();

        type_str(&mut app, &tx, "Acme");
        handle_form_key(key(KeyCode::Tab), &mut app, &tx);
        type_str(&mut app, &tx, "Engineer");
        handle_form_key(key(KeyCode::Tab), &mut app, &tx);
        handle_form_key(key(KeyCode::Right), &mut app, &tx);
        handle_form_key(key(KeyCode::Tab), &mut app, &tx);
        type_str(&mut app, &tx, "2024-01-10");
        handle_form_key(key(KeyCode::Enter), &mut app, &tx);

        assert_eq!(rx.try_recv().ok(), Some(Action::PersistApplications));
        assert_eq!(app.applications.len(), 1);
        assert_eq!(app.applications[0].company, "Acme");
        assert_eq!(app.applications[0].status, Status::Interview);
        assert_eq!(app.form.draft.company.value, "");
    }

    #[test]
    fn blocked_submit_queues_nothing() {
        let mut app = App::new();
        let (tx, mut rx) = channel();

        type_str(&mut app, &tx, "Acme");
        handle_form_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );

        assert!(rx.try_recv().is_err());
        assert!(app.applications.is_empty());
        assert_eq!(app.form.focused_field, FormField::Role);
    }

    #[test]
    fn enter_in_notes_adds_a_line() {
        let mut app = App::new();
        let (tx, mut rx) = channel();
        app.form.focused_field = FormField::Notes;

        type_str(&mut app, &tx, "a");
        handle_form_key(key(KeyCode::Enter), &mut app, &tx);
        type_str(&mut app, &tx, "b");

        assert_eq!(app.form.draft.notes.value, "a\nb");
        assert!(rx.try_recv().is_err());
    }
}
