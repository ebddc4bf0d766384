//! In-memory form surface.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::ShortLink;
use crate::domain::form::FormFields;
use crate::domain::ports::FormSurface;
use crate::domain::view::{FormView, Panel};

/// A surface whose whole state is a [`FormView`] behind a mutex.
///
/// Front ends fill the inputs with [`Self::fill`] and read what to display
/// with [`Self::snapshot`].
#[derive(Debug, Default)]
pub struct ViewSurface {
    view: Mutex<FormView>,
}

impl ViewSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: FormFields) -> Self {
        let surface = Self::new();
        surface.fill(fields);
        surface
    }

    /// Replaces the text of the three inputs, as a user typing would.
    pub fn fill(&self, fields: FormFields) {
        self.view().fields = fields;
    }

    pub fn snapshot(&self) -> FormView {
        self.view().clone()
    }

    fn view(&self) -> MutexGuard<'_, FormView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FormSurface for ViewSurface {
    fn read_fields(&self) -> FormFields {
        self.view().fields.clone()
    }

    fn reset_fields(&self) {
        self.view().fields = FormFields::default();
    }

    fn hide_panels(&self) {
        self.view().panel = Panel::Hidden;
    }

    fn show_result(&self, link: &ShortLink) {
        self.view().show_result(link);
    }

    fn show_error(&self, message: &str) {
        self.view().show_error(message);
    }

    fn set_submit_control(&self, enabled: bool, label: &str) {
        let mut view = self.view();
        view.submit.enabled = enabled;
        view.submit.label = label.to_string();
    }

    fn result_target(&self) -> Option<String> {
        self.view().result_target.clone()
    }

    fn set_copy_label(&self, label: &str) {
        self.view().copy.label = label.to_string();
    }

    fn set_copy_background(&self, color: Option<&str>) {
        self.view().copy.background = color.map(str::to_string);
    }
}
