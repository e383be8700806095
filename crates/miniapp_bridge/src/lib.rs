//! In-page emulator of the Telegram Mini App host bridge (`Telegram.WebApp`).
//!
//! The emulator reproduces the real bridge's capability surface so a Mini App can run and be
//! tested outside its native host: session identity, the main/back/settings buttons, haptic
//! stubs, a cloud store over the page's durable storage, device location with a synthetic
//! fallback, dialogs, clipboard reads, and named event subscriptions.
//!
//! Host capabilities are injected through [`bridge_host::HostServices`]; the emulator itself has
//! no browser bindings. One [`WebApp`] is built per page and published with [`install`].
//!
//! Every asynchronous operation resolves; none of them can fail. Host failures are absorbed
//! into fallback values and logged.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{future::Future, pin::Pin};

pub mod buttons;
pub mod cloud_storage;
pub mod config;
pub mod error;
pub mod events;
mod global;
pub mod haptics;
pub mod identity;
pub mod location;
pub mod popup;
pub mod theme;
mod webapp;

pub use buttons::{ButtonState, HeaderButton, HeaderButtonKind, MainButton, MainButtonParams};
pub use cloud_storage::{CloudStorage, CLOUD_STORAGE_PREFIX};
pub use config::{BridgeConfig, FallbackLocation};
pub use error::BridgeError;
pub use events::{
    DispatchReport, EventHandler, EventKind, EventPayload, EventRegistry, InvoiceClosed,
    InvoiceStatus, ViewportChanged,
};
pub use global::{install, installed};
pub use haptics::{HapticFeedback, HapticSignal, ImpactStyle, NotificationType};
pub use identity::{WebAppInitData, WebAppUser};
pub use location::{LocationManager, LocationProvider, LocationSample};
pub use popup::{PopupButton, PopupButtonType, PopupParams, PopupResult, ScanQrPopupParams};
pub use theme::{ColorScheme, Theme, ThemeParams};
pub use webapp::WebApp;

/// Boxed future returned by the bridge's deferred operations. It never carries an error.
pub type BridgeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
