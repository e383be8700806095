//! Browser (`wasm32`) implementations of [`bridge_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for durable storage, device geolocation,
//! clipboard reads, native dialogs, new-context URL opening, viewport tracking, and timers.
//!
//! All JS interop is routed through `bridge::interop`, which selects the `wasm32` bindings or a
//! non-wasm fallback so the adapters compile and test on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host-service bundle factory.
pub mod adapters;
mod bridge;
pub mod clipboard;
pub mod dialogs;
pub mod external_url;
pub mod geolocation;
pub mod page;
pub mod storage;
pub mod timer;

pub use adapters::{
    build_host_services, host_capabilities, host_strategy_name, selected_host_strategy,
};
pub use clipboard::WebClipboardService;
pub use dialogs::WebDialogService;
pub use external_url::WebExternalUrlService;
pub use geolocation::WebGeolocationService;
pub use page::{dispatch_document_event, install_resize_listener, WebPageService};
pub use storage::local_storage::WebLocalStorage;
pub use timer::WebTimerService;
