//! Presentational state of the form.

use crate::domain::entities::ShortLink;
use crate::domain::form::{COPY_LABEL, FormFields, SUBMIT_LABEL};

/// Which panel is visible under the form.
///
/// A single enum, so the result and error panels can never show together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Hidden,
    Result(ShortLink),
    Error(String),
}

impl Panel {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub fn link(&self) -> Option<&ShortLink> {
        match self {
            Self::Result(link) => Some(link),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyControl {
    pub label: String,
    /// Background color override; `None` means the stylesheet default.
    pub background: Option<String>,
}

impl Default for CopyControl {
    fn default() -> Self {
        Self {
            label: COPY_LABEL.to_string(),
            background: None,
        }
    }
}

/// Everything a surface displays, as plain data.
///
/// The result link keeps its last target even after the panel is hidden, the
/// way a hidden element keeps its attributes; copy reads it from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub fields: FormFields,
    pub submit: SubmitControl,
    pub panel: Panel,
    pub result_target: Option<String>,
    pub copy: CopyControl,
}

impl FormView {
    pub fn show_result(&mut self, link: &ShortLink) {
        self.result_target = Some(link.target.clone());
        self.panel = Panel::Result(link.clone());
    }

    pub fn show_error(&mut self, message: &str) {
        self.panel = Panel::Error(message.to_string());
    }
}
