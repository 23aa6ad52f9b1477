use super::*;

impl App {
    /// Open the inline editor for the application with `id`, copying all of its
    /// fields into a scratch draft. Any other unsaved edit is dropped.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(position) = self.applications.iter().position(|a| a.id == id) else {
            return false;
        };
        if let Some(previous) = self.edit_state.as_ref().filter(|e| e.application_id != id) {
            tracing::debug!(id = previous.application_id, "discarding unsaved edit");
        }
        self.edit_state = Some(EditState {
            application_id: id,
            draft: ApplicationDraft::from_application(&self.applications[position]),
            focused_field: FormField::Company,
        });
        self.focus = Focus::List;
        self.selected_index = Some(position);
        self.clear_status();
        true
    }

    /// Open the editor for the selected card.
    pub fn begin_edit_selected(&mut self) -> bool {
        match self.selected_application().map(|a| a.id) {
            Some(id) => self.begin_edit(id),
            None => false,
        }
    }

    pub fn edit_next_field(&mut self) {
        if let Some(edit) = &mut self.edit_state {
            edit.focused_field = edit.focused_field.cycle(&EDIT_FIELDS, true);
        }
    }

    pub fn edit_prev_field(&mut self) {
        if let Some(edit) = &mut self.edit_state {
            edit.focused_field = edit.focused_field.cycle(&EDIT_FIELDS, false);
        }
    }

    /// Write the scratch draft over the edited application and close the editor.
    /// The edit path does not re-check required fields. Returns whether the list
    /// changed.
    pub fn save_edit(&mut self) -> bool {
        let Some(edit) = self.edit_state.take() else {
            return false;
        };
        let updated = self.replace_by_id(edit.application_id, &edit.draft.to_patch());
        if updated {
            tracing::info!(id = edit.application_id, "application updated");
            self.set_status("Application updated");
        }
        updated
    }

    /// Close the editor without touching the list.
    pub fn cancel_edit(&mut self) {
        if self.edit_state.take().is_some() {
            self.set_status("Edit cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn seeded_app() -> App {
        let mut app = App::new();
        app.load_applications(vec![
            Application {
                id: 2,
                company: "Globex".to_string(),
                role: "Analyst".to_string(),
                status: Status::Interview,
                date: "2024-01-12".to_string(),
                notes: "phone screen".to_string(),
            },
            Application {
                id: 1,
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                status: Status::Applied,
                date: "2024-01-10".to_string(),
                notes: String::new(),
            },
        ]);
        app
    }

    #[test]
    fn begin_edit_copies_every_field() {
        let mut app = seeded_app();
        assert!(app.begin_edit(2));

        let edit = app.edit_state.as_ref().unwrap();
        assert_eq!(edit.application_id, 2);
        assert_eq!(edit.draft, ApplicationDraft::from_application(&app.applications[0]));
        assert_eq!(edit.draft.notes.value, "phone screen");
    }

    #[test]
    fn save_changes_only_the_edited_application() {
        let mut app = seeded_app();
        let globex = app.applications[0].clone();

        assert!(app.begin_edit(1));
        app.edit_state
            .as_mut()
            .unwrap()
            .draft
            .set_field(FormField::Status, "Offer")
            .unwrap();
        assert!(app.save_edit());

        assert!(app.edit_state.is_none());
        assert_eq!(app.applications[0], globex);
        assert_eq!(app.applications[1].status, Status::Offer);
        assert_eq!(app.applications[1].company, "Acme");
        assert_eq!(app.applications[1].id, 1);
    }

    #[test]
    fn cancel_leaves_list_identical() {
        let mut app = seeded_app();
        let before = app.applications.clone();

        assert!(app.begin_edit(1));
        app.input_char('X');
        app.edit_state
            .as_mut()
            .unwrap()
            .draft
            .set_field(FormField::Role, "")
            .unwrap();
        app.cancel_edit();

        assert!(app.edit_state.is_none());
        assert_eq!(app.applications, before);
    }

    #[test]
    fn editing_another_application_discards_scratch_changes() {
        let mut app = seeded_app();
        assert!(app.begin_edit(1));
        app.input_char('?');

        assert!(app.begin_edit(2));
        assert!(app.save_edit());

        assert_eq!(app.applications[1].company, "Acme");
        assert_eq!(app.applications[0].company, "Globex");
    }

    #[test]
    fn save_allows_empty_required_fields() {
        let mut app = seeded_app();
        assert!(app.begin_edit(1));
        let draft = &mut app.edit_state.as_mut().unwrap().draft;
        draft.set_field(FormField::Company, "").unwrap();
        draft.set_field(FormField::Date, "").unwrap();

        assert!(app.save_edit());
        assert_eq!(app.applications[1].company, "");
        assert_eq!(app.applications[1].date, "");
    }

    #[test]
    fn begin_edit_on_unknown_id_does_nothing() {
        let mut app = seeded_app();
        assert!(!app.begin_edit(404));
        assert!(app.edit_state.is_none());
        assert!(!app.save_edit());
    }
}
