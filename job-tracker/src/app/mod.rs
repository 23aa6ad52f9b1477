use crate::types::Application;

mod edit;
mod form;
mod ids;
mod list;
mod state;
pub use ids::now_millis;
pub use state::{
    ApplicationDraft, EditState, Focus, FormField, FormState, TextInput, EDIT_FIELDS, FORM_FIELDS,
};

use ids::IdAllocator;

pub struct App {
    pub running: bool,
    pub status_message: Option<String>,
    pub focus: Focus,

    // New-application form
    pub form: FormState,

    // Saved applications, newest first
    pub applications: Vec<Application>,
    pub selected_index: Option<usize>,
    pub list_scroll: usize, // Cards skipped from the top (updated by renderer each frame)

    // Inline editing of one saved application
    pub edit_state: Option<EditState>,

    ids: IdAllocator,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            status_message: None,
            focus: Focus::Form,
            form: FormState::default(),
            applications: Vec::new(),
            selected_index: None,
            list_scroll: 0,
            edit_state: None,
            ids: IdAllocator::default(),
        }
    }

    /// Replace the list with applications loaded from storage, keeping their order.
    pub fn load_applications(&mut self, applications: Vec<Application>) {
        self.ids = IdAllocator::seeded(applications.iter().map(|a| a.id));
        self.applications = applications;
        self.selected_index = None;
        self.list_scroll = 0;
        self.edit_state = None;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn is_in_edit_mode(&self) -> bool {
        self.edit_state.is_some()
    }

    /// Switch keyboard focus between the form and the list.
    pub fn focus_on(&mut self, focus: Focus) {
        self.focus = focus;
        self.clear_status();
        if focus == Focus::List && self.selected_index.is_none() && !self.applications.is_empty()
        {
            self.selected_index = Some(0);
        }
    }

    fn active_draft_mut(&mut self) -> Option<(&mut ApplicationDraft, FormField)> {
        match (&mut self.edit_state, self.focus) {
            (Some(edit), _) => Some((&mut edit.draft, edit.focused_field)),
            (None, Focus::Form) => Some((&mut self.form.draft, self.form.focused_field)),
            (None, Focus::List) => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some((draft, field)) = self.active_draft_mut() {
            draft.input_char(field, c);
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some((draft, field)) = self.active_draft_mut() {
            draft.backspace(field);
        }
    }

    pub fn input_move_cursor(&mut self, left: bool) {
        if let Some((draft, field)) = self.active_draft_mut() {
            draft.move_cursor(field, left);
        }
    }

    pub fn input_cursor_home_end(&mut self, home: bool) {
        if let Some((draft, field)) = self.active_draft_mut() {
            draft.cursor_home_end(field, home);
        }
    }

    pub fn input_clear(&mut self) {
        if let Some((draft, field)) = self.active_draft_mut() {
            draft.clear_field(field);
        }
    }

    /// Fill today's date into the focused date field.
    pub fn input_today(&mut self, today: time::Date) {
        if let Some((draft, field @ FormField::Date)) = self.active_draft_mut() {
            // Only the status field can reject a value.
            let _ = draft.set_field(field, &format_date(today));
        }
    }
}

pub fn format_date(date: time::Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Today's date in the local timezone, falling back to UTC.
pub fn local_today() -> time::Date {
    time::OffsetDateTime::now_utc()
        .to_offset(time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC))
        .date()
}
