//! Host-bundle and capability models for browser and headless emulator composition.

use std::rc::Rc;

use crate::{
    ClipboardService, DialogService, ExternalUrlService, GeolocationService, ImmediateTimerService,
    KeyValueStore, MemoryKeyValueStore, MemoryPageService, NoopClipboardService,
    NoopExternalUrlService, PageService, ScriptedDialogService, TimerService,
    UnsupportedGeolocationService,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`localStorage`, device geolocation, native dialogs).
    Browser,
    /// In-memory composition for tests and non-browser embedding.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host availability state for one capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not supported; the emulator substitutes synthetic data.
    Unavailable,
    /// Capability exists but the host asks the user before granting it.
    RequiresUserActivation,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used without asking the user.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Capability posture of the active host, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Durable key/value storage.
    pub durable_storage: CapabilityStatus,
    /// Device geolocation.
    pub device_geolocation: CapabilityStatus,
    /// System clipboard reads.
    pub clipboard: CapabilityStatus,
    /// Native modal dialogs.
    pub dialogs: CapabilityStatus,
    /// Opening new browsing contexts.
    pub external_urls: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser capability posture.
    pub const fn browser() -> Self {
        Self {
            durable_storage: CapabilityStatus::Available,
            device_geolocation: CapabilityStatus::RequiresUserActivation,
            clipboard: CapabilityStatus::RequiresUserActivation,
            dialogs: CapabilityStatus::Available,
            external_urls: CapabilityStatus::Available,
        }
    }

    /// Headless capability posture.
    pub const fn headless() -> Self {
        Self {
            durable_storage: CapabilityStatus::Available,
            device_geolocation: CapabilityStatus::Unavailable,
            clipboard: CapabilityStatus::Unavailable,
            dialogs: CapabilityStatus::Unavailable,
            external_urls: CapabilityStatus::Unavailable,
        }
    }
}

/// Host service bundle injected into the bridge emulator at construction.
///
/// All environment-specific adapter selection happens before this bundle reaches
/// `miniapp_bridge`, which keeps the emulator free of browser bindings.
#[derive(Clone)]
pub struct HostServices {
    /// Durable page storage backing the cloud store.
    pub storage: Rc<dyn KeyValueStore>,
    /// Device geolocation.
    pub geolocation: Rc<dyn GeolocationService>,
    /// Native modal dialogs.
    pub dialogs: Rc<dyn DialogService>,
    /// System clipboard.
    pub clipboard: Rc<dyn ClipboardService>,
    /// New-context URL opening.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Hosting page viewport and chrome.
    pub page: Rc<dyn PageService>,
    /// Event-loop delays.
    pub timers: Rc<dyn TimerService>,
    /// Capability snapshot for diagnostics.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// In-memory composition: memory storage, no device geolocation or clipboard, scripted
    /// dialogs that cancel, and timers that resolve immediately.
    pub fn headless() -> Self {
        Self {
            storage: Rc::new(MemoryKeyValueStore::default()),
            geolocation: Rc::new(UnsupportedGeolocationService),
            dialogs: Rc::new(ScriptedDialogService::default()),
            clipboard: Rc::new(NoopClipboardService),
            external_urls: Rc::new(NoopExternalUrlService),
            page: Rc::new(MemoryPageService::default()),
            timers: Rc::new(ImmediateTimerService),
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        }
    }
}
