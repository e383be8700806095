//! System clipboard read contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ClipboardService`].
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for reading text from the system clipboard.
pub trait ClipboardService {
    /// Reads the clipboard's text content.
    ///
    /// Returns `Err` when the clipboard API is missing or access is refused.
    fn read_text<'a>(&'a self) -> ClipboardFuture<'a, Result<String, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard service for hosts without clipboard access.
pub struct NoopClipboardService;

impl ClipboardService for NoopClipboardService {
    fn read_text<'a>(&'a self) -> ClipboardFuture<'a, Result<String, String>> {
        Box::pin(async { Err("clipboard API unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory clipboard; clones share the same content.
pub struct MemoryClipboardService {
    text: Rc<RefCell<String>>,
}

impl MemoryClipboardService {
    /// Replaces the clipboard content.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
    }
}

impl ClipboardService for MemoryClipboardService {
    fn read_text<'a>(&'a self) -> ClipboardFuture<'a, Result<String, String>> {
        Box::pin(async move { Ok(self.text.borrow().clone()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_clipboard_reads_latest_text() {
        let clipboard = MemoryClipboardService::default();
        clipboard.set_text("copied");
        assert_eq!(block_on(clipboard.read_text()), Ok("copied".to_string()));
    }

    #[test]
    fn noop_clipboard_is_unavailable() {
        assert!(block_on(NoopClipboardService.read_text()).is_err());
    }
}
