//! Port for the system clipboard.

use crate::error::FormError;
use async_trait::async_trait;

/// Places text on a clipboard.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::SystemClipboard`] - desktop clipboard via arboard
/// - [`crate::infrastructure::clipboard::NullClipboard`] - always rejects (headless sessions)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns [`FormError::Clipboard`] when the write is rejected.
    async fn write_text(&self, text: &str) -> Result<(), FormError>;
}
