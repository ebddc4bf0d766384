//! Clipboard backends.
//!
//! Provides two [`ClipboardWriter`](crate::domain::ports::ClipboardWriter) implementations:
//! - [`SystemClipboard`] - desktop clipboard through `arboard`
//! - [`NullClipboard`] - rejects every write, for headless sessions

mod null_clipboard;
mod system_clipboard;

pub use null_clipboard::NullClipboard;
pub use system_clipboard::SystemClipboard;
