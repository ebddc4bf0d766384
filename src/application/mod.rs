//! Application layer: the form controller.
//!
//! [`controller::ShortenerController`] coordinates the ports defined in
//! [`crate::domain::ports`]. It owns no I/O of its own; the HTTP client,
//! clipboard and surface are injected at mount.

pub mod controller;

pub use controller::{CopyOutcome, DEFAULT_COPY_FEEDBACK, ShortenerController, SubmitOutcome};
