use super::*;
use crate::types::ApplicationPatch;

impl App {
    /// Insert at the top of the list. A selected card stays selected.
    pub fn prepend(&mut self, application: Application) {
        self.applications.insert(0, application);
        if let Some(idx) = self.selected_index {
            self.selected_index = Some(idx + 1);
        }
    }

    /// Merge `patch` into the application with `id`. Unknown ids leave the list
    /// untouched. Returns whether an application was updated.
    pub fn replace_by_id(&mut self, id: i64, patch: &ApplicationPatch) -> bool {
        match self.applications.iter_mut().find(|a| a.id == id) {
            Some(application) => {
                *application = patch.apply(application);
                true
            }
            None => {
                tracing::debug!(id, "no application with id, nothing replaced");
                false
            }
        }
    }

    pub fn selected_application(&self) -> Option<&Application> {
        self.selected_index.and_then(|i| self.applications.get(i))
    }

    pub fn select_next(&mut self) {
        if self.applications.is_empty() {
            return;
        }
        let last = self.applications.len() - 1;
        self.selected_index = Some(match self.selected_index {
            Some(i) if i < last => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.applications.is_empty() {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
    }
}
