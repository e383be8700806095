//! New-browsing-context adapter backed by `window.open(url, "_blank")`.

use bridge_host::ExternalUrlService;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser URL adapter.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_in_new_context(&self, url: &str) -> Result<(), String> {
        bridge::open_in_new_context(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_fallback_reports_unsupported() {
        assert!(WebExternalUrlService
            .open_in_new_context("https://t.me/example")
            .is_err());
    }
}
