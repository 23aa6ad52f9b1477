use crate::types::{Application, ApplicationPatch, Status, UnknownStatus};

/// Which half of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    List,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Replace the whole value and park the cursor at the end.
    pub fn set(&mut self, s: &str) {
        self.value = s.to_string();
        self.cursor = self.value.len();
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos - 1;
        while !self.value.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p < self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Company,
    Role,
    Status,
    Date,
    Notes,
    Submit,
}

/// Focus order of the new-application form.
pub const FORM_FIELDS: [FormField; 6] = [
    FormField::Company,
    FormField::Role,
    FormField::Status,
    FormField::Date,
    FormField::Notes,
    FormField::Submit,
];

/// Focus order of the inline editor.
pub const EDIT_FIELDS: [FormField; 5] = [
    FormField::Company,
    FormField::Role,
    FormField::Status,
    FormField::Date,
    FormField::Notes,
];

/// Longest value the date field accepts (`YYYY-MM-DD`).
const DATE_INPUT_LEN: usize = 10;

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Company => "Company",
            FormField::Role => "Role",
            FormField::Status => "Status",
            FormField::Date => "Date",
            FormField::Notes => "Notes",
            FormField::Submit => "Add Job",
        }
    }

    /// Move to the neighbouring field in `order`, wrapping around.
    pub fn cycle(self, order: &[FormField], forward: bool) -> FormField {
        let Some(pos) = order.iter().position(|f| *f == self) else {
            return order.first().copied().unwrap_or(self);
        };
        let len = order.len();
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        order[next]
    }

    /// Enter submits from these fields; in notes it starts a new line.
    pub fn submits_on_enter(self) -> bool {
        !matches!(self, FormField::Notes)
    }
}

/// Field values for an application being created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationDraft {
    pub company: TextInput,
    pub role: TextInput,
    pub status: Status,
    pub date: TextInput,
    pub notes: TextInput,
}

impl ApplicationDraft {
    pub fn from_application(application: &Application) -> Self {
        Self {
            company: TextInput::from_str(&application.company),
            role: TextInput::from_str(&application.role),
            status: application.status,
            date: TextInput::from_str(&application.date),
            notes: TextInput::from_str(&application.notes),
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::Company => Some(&mut self.company),
            FormField::Role => Some(&mut self.role),
            FormField::Date => Some(&mut self.date),
            FormField::Notes => Some(&mut self.notes),
            FormField::Status | FormField::Submit => None,
        }
    }

    pub fn text(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::Company => Some(&self.company),
            FormField::Role => Some(&self.role),
            FormField::Date => Some(&self.date),
            FormField::Notes => Some(&self.notes),
            FormField::Status | FormField::Submit => None,
        }
    }

    /// Set one field from its raw value; every other field is left as is.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), UnknownStatus> {
        if field == FormField::Status {
            self.status = value.parse()?;
        } else if let Some(input) = self.text_mut(field) {
            input.set(value);
        }
        Ok(())
    }

    pub fn input_char(&mut self, field: FormField, c: char) {
        match field {
            FormField::Status => {
                if c == ' ' {
                    self.status = self.status.next();
                }
            }
            FormField::Date => {
                if (c.is_ascii_digit() || c == '-') && self.date.value.len() < DATE_INPUT_LEN {
                    self.date.insert(c);
                }
            }
            FormField::Submit => {}
            _ => {
                if let Some(input) = self.text_mut(field) {
                    input.insert(c);
                }
            }
        }
    }

    pub fn backspace(&mut self, field: FormField) {
        if let Some(input) = self.text_mut(field) {
            input.backspace();
        }
    }

    /// Left/right: move the text cursor, or step the status selector.
    pub fn move_cursor(&mut self, field: FormField, left: bool) {
        if field == FormField::Status {
            self.status = if left {
                self.status.previous()
            } else {
                self.status.next()
            };
        } else if let Some(input) = self.text_mut(field) {
            if left {
                input.move_left();
            } else {
                input.move_right();
            }
        }
    }

    pub fn cursor_home_end(&mut self, field: FormField, home: bool) {
        if let Some(input) = self.text_mut(field) {
            if home {
                input.home();
            } else {
                input.end();
            }
        }
    }

    pub fn clear_field(&mut self, field: FormField) {
        if let Some(input) = self.text_mut(field) {
            input.clear();
        }
    }

    /// First required field (company, role, date) that is still empty.
    pub fn first_missing_required(&self) -> Option<FormField> {
        [
            (FormField::Company, &self.company),
            (FormField::Role, &self.role),
            (FormField::Date, &self.date),
        ]
        .into_iter()
        .find(|(_, input)| input.is_empty())
        .map(|(field, _)| field)
    }

    pub fn to_application(&self, id: i64) -> Application {
        Application {
            id,
            company: self.company.value.clone(),
            role: self.role.value.clone(),
            status: self.status,
            date: self.date.value.clone(),
            notes: self.notes.value.clone(),
        }
    }

    /// Every mutable field, as a patch.
    pub fn to_patch(&self) -> ApplicationPatch {
        ApplicationPatch {
            company: Some(self.company.value.clone()),
            role: Some(self.role.value.clone()),
            status: Some(self.status),
            date: Some(self.date.value.clone()),
            notes: Some(self.notes.value.clone()),
        }
    }
}

/// The new-application form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub draft: ApplicationDraft,
    pub focused_field: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            draft: ApplicationDraft::default(),
            focused_field: FormField::Company,
        }
    }
}

/// Scratch copy of the application being edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub application_id: i64,
    pub draft: ApplicationDraft,
    pub focused_field: FormField,
}
