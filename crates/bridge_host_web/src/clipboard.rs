//! Clipboard adapter backed by `navigator.clipboard.readText()`.

use bridge_host::{ClipboardFuture, ClipboardService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard adapter.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn read_text<'a>(&'a self) -> ClipboardFuture<'a, Result<String, String>> {
        Box::pin(async move { bridge::read_clipboard_text().await })
    }
}
