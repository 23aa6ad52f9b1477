use super::*;
use time::macros::format_description;

/// Feedback shown when a required field is empty, as a browser would.
pub const REQUIRED_FIELD_MESSAGE: &str = "Please fill out this field.";
pub const INVALID_DATE_MESSAGE: &str = "Please enter a valid date (YYYY-MM-DD).";
pub const NO_FREE_ID_MESSAGE: &str = "No free id left for a new application.";

impl App {
    pub fn form_next_field(&mut self) {
        self.form.focused_field = self.form.focused_field.cycle(&FORM_FIELDS, true);
    }

    pub fn form_prev_field(&mut self) {
        self.form.focused_field = self.form.focused_field.cycle(&FORM_FIELDS, false);
    }

    pub fn submit_form(&mut self) -> bool {
        self.submit_form_at(now_millis())
    }

    /// Create an application from the form and put it at the top of the list.
    ///
    /// Blocked when company, role or date is empty, or the date is not a real
    /// calendar date; focus then moves to the offending field. Returns whether
    /// an application was created.
    pub fn submit_form_at(&mut self, now_ms: i64) -> bool {
        if let Some(field) = self.form.draft.first_missing_required() {
            self.form.focused_field = field;
            self.set_status(REQUIRED_FIELD_MESSAGE);
            tracing::debug!(field = field.label(), "submission blocked, required field empty");
            return false;
        }
        if !is_calendar_date(&self.form.draft.date.value) {
            self.form.focused_field = FormField::Date;
            self.set_status(INVALID_DATE_MESSAGE);
            return false;
        }

        let Some(id) = self.ids.next(now_ms) else {
            self.set_status(NO_FREE_ID_MESSAGE);
            tracing::error!("submission blocked, id space exhausted");
            return false;
        };
        let application = self.form.draft.to_application(id);
        tracing::info!(id, company = %application.company, "application added");
        self.prepend(application);

        self.form = FormState::default();
        self.set_status("Application added");
        true
    }
}

fn is_calendar_date(s: &str) -> bool {
    time::Date::parse(s, format_description!("[year]-[month]-[day]")).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn fill(app: &mut App, company: &str, role: &str, status: &str, date: &str, notes: &str) {
        let draft = &mut app.form.draft;
        draft.set_field(FormField::Company, company).unwrap();
        draft.set_field(FormField::Role, role).unwrap();
        draft.set_field(FormField::Status, status).unwrap();
        draft.set_field(FormField::Date, date).unwrap();
        draft.set_field(FormField::Notes, notes).unwrap();
    }

    #[test]
    fn submissions_are_listed_newest_first() {
        let mut app = App::new();
        fill(&mut app, "Acme", "Engineer", "Applied", "2024-01-10", "");
        assert!(app.submit_form_at(1_000));
        fill(&mut app, "Globex", "Analyst", "Interview", "2024-01-12", "phone screen");
        assert!(app.submit_form_at(2_000));

        let summary: Vec<_> = app
            .applications
            .iter()
            .map(|a| (a.company.as_str(), a.role.as_str(), a.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Globex", "Analyst", Status::Interview),
                ("Acme", "Engineer", Status::Applied),
            ]
        );
        assert_eq!(app.applications[0].notes, "phone screen");
    }

    #[test]
    fn submit_resets_form_to_defaults() {
        let mut app = App::new();
        fill(&mut app, "Acme", "Engineer", "Offer", "2024-01-10", "referral");
        app.form.focused_field = FormField::Submit;

        assert!(app.submit_form_at(1_000));
        assert_eq!(app.form, FormState::default());
        assert_eq!(app.form.draft.status, Status::Applied);
    }

    #[test]
    fn empty_required_field_blocks_submission() {
        for (company, role, date, missing) in [
            ("", "Engineer", "2024-01-10", FormField::Company),
            ("Acme", "", "2024-01-10", FormField::Role),
            ("Acme", "Engineer", "", FormField::Date),
        ] {
            let mut app = App::new();
            fill(&mut app, company, role, "Applied", date, "");
            app.form.focused_field = FormField::Submit;

            assert!(!app.submit_form_at(1_000));
            assert!(app.applications.is_empty());
            assert_eq!(app.form.focused_field, missing);
            assert_eq!(app.status_message.as_deref(), Some(REQUIRED_FIELD_MESSAGE));
            assert_eq!(app.form.draft.company.value, company);
        }
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut app = App::new();
        fill(&mut app, " ", "Engineer", "Applied", "2024-01-10", "");
        assert!(app.submit_form_at(1_000));
    }

    #[test]
    fn impossible_date_blocks_submission() {
        let mut app = App::new();
        fill(&mut app, "Acme", "Engineer", "Applied", "2024-02-30", "");

        assert!(!app.submit_form_at(1_000));
        assert!(app.applications.is_empty());
        assert_eq!(app.form.focused_field, FormField::Date);
    }

    #[test]
    fn submit_after_loading_max_id_keeps_ids_unique() {
        let mut app = App::new();
        app.load_applications(vec![Application {
            id: i64::MAX,
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            status: Status::Applied,
            date: "2024-01-10".to_string(),
            notes: String::new(),
        }]);

        for _ in 0..2 {
            fill(&mut app, "Globex", "Analyst", "Applied", "2024-01-12", "");
            assert!(app.submit_form_at(1_000));
        }

        let ids: Vec<_> = app.applications.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1_001, 1_000, i64::MAX]);
    }

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let mut app = App::new();
        for _ in 0..3 {
            fill(&mut app, "Acme", "Engineer", "Applied", "2024-01-10", "");
            assert!(app.submit_form_at(42));
        }
        let mut ids: Vec<_> = app.applications.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
