//! Clipboard that is never available.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::ClipboardWriter;
use crate::error::FormError;

/// A clipboard that rejects every write.
///
/// Selected with `CLIPBOARD_BACKEND=none` on machines without a display
/// server. Copy attempts go down the failure path and show `Failed`.
pub struct NullClipboard;

impl NullClipboard {
    pub fn new() -> Self {
        debug!("Using NullClipboard (clipboard disabled)");
        Self
    }
}

impl Default for NullClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardWriter for NullClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), FormError> {
        Err(FormError::clipboard("clipboard is disabled"))
    }
}
