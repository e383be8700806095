//! Hosting-page surface contracts: viewport metrics and page chrome.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Host service exposing the hosting page's viewport and chrome.
pub trait PageService {
    /// Current inner viewport height in CSS pixels.
    fn viewport_height(&self) -> f64;

    /// Paints the page background. Failures are swallowed by the adapter.
    fn apply_background_color(&self, color: &str);
}

#[derive(Debug, Clone)]
/// In-memory page with a settable viewport height. Clones share state.
pub struct MemoryPageService {
    height: Rc<Cell<f64>>,
    background: Rc<RefCell<Option<String>>>,
}

impl Default for MemoryPageService {
    fn default() -> Self {
        Self::with_height(800.0)
    }
}

impl MemoryPageService {
    /// Creates a page with the given viewport height.
    pub fn with_height(height: f64) -> Self {
        Self {
            height: Rc::new(Cell::new(height)),
            background: Rc::default(),
        }
    }

    /// Simulates the page being resized.
    pub fn set_viewport_height(&self, height: f64) {
        self.height.set(height);
    }

    /// Returns the last background color painted on the page.
    pub fn background_color(&self) -> Option<String> {
        self.background.borrow().clone()
    }
}

impl PageService for MemoryPageService {
    fn viewport_height(&self) -> f64 {
        self.height.get()
    }

    fn apply_background_color(&self, color: &str) {
        *self.background.borrow_mut() = Some(color.to_string());
    }
}
