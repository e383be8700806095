//! Hosting-page adapter: viewport height, body background, resize listener, document events.

use bridge_host::PageService;

use crate::bridge;

/// Viewport height reported when the page has no window (non-browser builds).
const FALLBACK_VIEWPORT_HEIGHT: f64 = 0.0;

#[derive(Debug, Clone, Copy, Default)]
/// Browser page adapter.
pub struct WebPageService;

impl PageService for WebPageService {
    fn viewport_height(&self) -> f64 {
        bridge::inner_height().unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
    }

    fn apply_background_color(&self, color: &str) {
        if let Err(err) = bridge::set_body_background(color) {
            log::warn!("page background update failed: {err}");
        }
    }
}

/// Registers `handler` for the page's `resize` events with the new `window.innerHeight`.
///
/// The listener lives for the rest of the page.
///
/// # Errors
///
/// Returns an error when there is no window to listen on.
pub fn install_resize_listener(handler: impl FnMut(f64) + 'static) -> Result<(), String> {
    bridge::add_resize_listener(Box::new(handler))
}

/// Dispatches a plain DOM event named `name` on `document`.
///
/// # Errors
///
/// Returns an error when there is no document or the event cannot be constructed.
pub fn dispatch_document_event(name: &str) -> Result<(), String> {
    bridge::dispatch_document_event(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_fallback_has_no_viewport() {
        assert_eq!(WebPageService.viewport_height(), FALLBACK_VIEWPORT_HEIGHT);
        WebPageService.apply_background_color("#212121");
        assert!(install_resize_listener(|_| {}).is_err());
        assert!(dispatch_document_event("telegram-web-app-ready").is_err());
    }
}
