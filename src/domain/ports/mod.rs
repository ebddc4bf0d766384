//! Trait definitions for everything the controller talks to.
//!
//! # Architecture
//!
//! - Traits define the contract; implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Ports
//!
//! - [`ShortenApi`] - the remote `/api/v1` endpoint
//! - [`ClipboardWriter`] - the system clipboard
//! - [`FormSurface`] - the form's visible controls

pub mod clipboard;
pub mod shorten_api;
pub mod surface;

pub use clipboard::ClipboardWriter;
pub use shorten_api::ShortenApi;
pub use surface::FormSurface;

#[cfg(test)]
pub use clipboard::MockClipboardWriter;
#[cfg(test)]
pub use shorten_api::MockShortenApi;
