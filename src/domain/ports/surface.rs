//! Port for the UI surface the controller drives.

use crate::domain::entities::ShortLink;
use crate::domain::form::FormFields;

/// The visible controls of the shortener form.
///
/// Methods take `&self`: the surface is shared between the controller and its
/// pending label-revert timers, so implementations use interior mutability.
///
/// # Implementations
///
/// - [`crate::infrastructure::surface::ViewSurface`] - in-memory [`crate::domain::view::FormView`]
/// - [`crate::infrastructure::surface::TerminalSurface`] - renders changes to stdout
pub trait FormSurface: Send + Sync {
    /// Current text of the url, alias and expiry inputs.
    fn read_fields(&self) -> FormFields;

    /// Clears every input back to its default.
    fn reset_fields(&self);

    /// Hides both the result and the error panel.
    fn hide_panels(&self);

    /// Points the result link at `link.target`, shows `link.display`, and
    /// reveals the result panel.
    fn show_result(&self, link: &ShortLink);

    /// Reveals the error panel with `message`.
    fn show_error(&self, message: &str);

    fn set_submit_control(&self, enabled: bool, label: &str);

    /// Target of the result link, if one was ever shown.
    fn result_target(&self) -> Option<String>;

    fn set_copy_label(&self, label: &str);

    /// `None` restores the default background.
    fn set_copy_background(&self, color: Option<&str>);
}
