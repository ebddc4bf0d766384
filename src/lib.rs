//! # Shortener Form
//!
//! A form controller for a URL-shortening API, with a terminal front end.
//!
//! ## Architecture
//!
//! The crate is split into layers:
//!
//! - **Domain Layer** ([`domain`]) - Request/response types, form fields, view state and ports
//! - **Application Layer** ([`application`]) - [`ShortenerController`] with `submit` and `copy_short_url`
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client, clipboards and surfaces
//!
//! ## Flow
//!
//! 1. A front end fills the form fields on its [`domain::ports::FormSurface`]
//! 2. [`ShortenerController::submit`] posts `{url, custom_short, expiry}` to `/api/v1`
//! 3. The surface shows either the result panel or the error panel, never both
//! 4. [`ShortenerController::copy_short_url`] puts the short link on the clipboard
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_API_URL="http://localhost:3000"
//!
//! # Interactive form
//! cargo run
//!
//! # One-shot
//! cargo run -- shorten --url https://example.com --expiry 24 --copy
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub mod config;
pub mod telemetry;

pub use application::ShortenerController;
pub use error::FormError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for front ends and
/// integration tests.
pub mod prelude {
    pub use crate::application::{CopyOutcome, ShortenerController, SubmitOutcome};
    pub use crate::domain::entities::{RateQuota, ShortLink, ShortenRequest, ShortenResponse};
    pub use crate::domain::form::FormFields;
    pub use crate::domain::ports::{ClipboardWriter, FormSurface, ShortenApi};
    pub use crate::domain::view::{FormView, Panel};
    pub use crate::error::FormError;
    pub use crate::infrastructure::clipboard::{NullClipboard, SystemClipboard};
    pub use crate::infrastructure::http::HttpShortenApi;
    pub use crate::infrastructure::surface::{TerminalSurface, ViewSurface};
}
