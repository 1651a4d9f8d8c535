//! Clipboard adapter.
//!
//! The editing core only needs plain text in and out. Hosts pick an
//! implementation: the system clipboard, an in-memory one, or none at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("could not read clipboard: {0}")]
    ReadFailed(String),
    #[error("could not write clipboard: {0}")]
    WriteFailed(String),
    #[error("clipboard does not support reading")]
    NotSupported,
}

pub trait Clipboard {
    fn name(&self) -> &str;
    fn read(&mut self) -> Result<String, ClipboardError>;
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard through `arboard`. The handle is opened lazily so a
/// headless session only fails when the clipboard is actually used.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.handle.is_none() {
            let handle =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.handle = Some(handle);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard handle".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        self.handle()?
            .get_text()
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = text.to_string();
        Ok(())
    }
}

/// Swallows writes and refuses reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn name(&self) -> &str {
        "none"
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::NotSupported)
    }

    fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}
