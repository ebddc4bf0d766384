//! [`FormSurface`](crate::domain::ports::FormSurface) implementations.
//!
//! - [`ViewSurface`] - keeps a [`FormView`](crate::domain::view::FormView) in memory
//! - [`TerminalSurface`] - a `ViewSurface` that also renders changes to stdout

mod terminal_surface;
mod view_surface;

pub use terminal_surface::TerminalSurface;
pub use view_surface::ViewSurface;
