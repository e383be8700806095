//! Native `alert`/`confirm`/`prompt` adapter.
//!
//! The browser primitives block the UI thread until dismissed; the adapter wraps each in a
//! future so the emulator can expose them with the host bridge's deferred contract.

use bridge_host::{DialogFuture, DialogService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser dialog adapter backed by the window's modal dialogs.
pub struct WebDialogService;

impl DialogService for WebDialogService {
    fn alert<'a>(&'a self, message: &'a str) -> DialogFuture<'a, ()> {
        Box::pin(async move { bridge::alert(message) })
    }

    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async move { bridge::confirm(message) })
    }

    fn prompt<'a>(
        &'a self,
        message: &'a str,
        default_value: &'a str,
    ) -> DialogFuture<'a, Option<String>> {
        Box::pin(async move { bridge::prompt(message, default_value) })
    }
}
