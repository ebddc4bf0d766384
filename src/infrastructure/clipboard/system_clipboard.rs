//! Desktop clipboard backed by `arboard`.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::ClipboardWriter;
use crate::error::FormError;

/// The operating system clipboard.
///
/// The `arboard` handle is opened on first use and kept for the life of this
/// value: on X11 and Wayland the copied text is served by the process that
/// owns the handle. Writes run on the blocking pool.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), FormError> {
        let handle = Arc::clone(&self.handle);
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut slot = handle.lock().unwrap_or_else(PoisonError::into_inner);
            let mut clipboard = match slot.take() {
                Some(clipboard) => clipboard,
                None => arboard::Clipboard::new()
                    .map_err(|e| FormError::clipboard(format!("clipboard init: {e}")))?,
            };

            let result = clipboard
                .set_text(text)
                .map_err(|e| FormError::clipboard(format!("clipboard set: {e}")));
            *slot = Some(clipboard);
            result
        })
        .await
        .map_err(FormError::clipboard)?
    }
}
