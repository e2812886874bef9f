//! Clipboard port.
//!
//! The system clipboard is an external collaborator that can be missing
//! (SSH sessions, headless CI) or refuse a write. Callers get a `Result` and
//! decide how to surface it.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard not available: {0}")]
    Unavailable(String),

    #[error("clipboard rejected the write: {0}")]
    Rejected(String),
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The host clipboard via `arboard`.
///
/// The handle is opened lazily on first write and kept afterwards; on some
/// platforms clipboard contents are dropped when the last handle closes.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    wait: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard for processes that exit right after writing.
    ///
    /// On X11 and Wayland the writing process owns the contents, so a write
    /// blocks until another program (usually a clipboard manager) takes them
    /// over. Elsewhere this behaves like [`SystemClipboard::new`].
    pub fn waiting() -> Self {
        Self {
            inner: None,
            wait: true,
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        match self.inner.as_mut() {
            Some(clipboard) => set_text(clipboard, text, self.wait)
                .map_err(|e| ClipboardError::Rejected(e.to_string())),
            None => Err(ClipboardError::Unavailable("no clipboard handle".into())),
        }
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    wait: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if wait {
        clipboard.set().wait().text(text.to_owned())
    } else {
        clipboard.set_text(text.to_owned())
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _wait: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

/// In-memory clipboard holding the last successful write.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    reject: Option<ClipboardError>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes all fail with `error`.
    pub fn rejecting(error: ClipboardError) -> Self {
        Self {
            contents: None,
            reject: Some(error),
        }
    }

    pub fn set_rejecting(&mut self, error: Option<ClipboardError>) {
        self.reject = error;
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.reject {
            return Err(err.clone());
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
