//! Clipboard access for copying the latest result.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to set clipboard text: {0}")]
    Write(String),
}

/// Anything that can receive copied text.
pub trait TextClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl TextClipboard for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Stand-in used when the system clipboard could not be opened.
///
/// Every write fails with the original reason so the user sees why.
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl TextClipboard for UnavailableClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}

/// Open the system clipboard, falling back to [`UnavailableClipboard`].
pub fn system_clipboard() -> Box<dyn TextClipboard> {
    match ClipboardHandler::new() {
        Ok(handler) => Box::new(handler),
        Err(err) => {
            tracing::warn!(error = %err, "System clipboard unavailable");
            Box::new(UnavailableClipboard::new(err.to_string()))
        }
    }
}
