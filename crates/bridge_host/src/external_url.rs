//! New-browsing-context URL opening contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service that opens a URL in a new browsing context (tab/window).
pub trait ExternalUrlService {
    /// Opens `url` outside the current page.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses to open the context (for example, a popup blocker).
    fn open_in_new_context(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op URL service for hosts without navigation.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_in_new_context(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// URL service that records every opened URL instead of navigating. Clones share the record.
pub struct RecordingExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingExternalUrlService {
    /// Returns every URL opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_in_new_context(&self, url: &str) -> Result<(), String> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
