//! Typed host-service contracts shared by the Mini App bridge emulator and its host adapters.
//!
//! This crate is the API-first boundary between the emulator and whatever page hosts it. It
//! exposes the storage, geolocation, dialog, clipboard, URL, page, and timer service traits along
//! with in-memory/no-op adapters, while concrete browser adapters live in `bridge_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod dialogs;
pub mod external_url;
pub mod geolocation;
pub mod host;
pub mod page;
pub mod storage;
pub mod time;
pub mod timer;

pub use clipboard::{
    ClipboardFuture, ClipboardService, MemoryClipboardService, NoopClipboardService,
};
pub use dialogs::{DialogFuture, DialogRecord, DialogService, ScriptedDialogService};
pub use external_url::{ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService};
pub use geolocation::{
    DevicePosition, FixedGeolocationService, GeolocationError, GeolocationFuture,
    GeolocationService, PermissionState, UnsupportedGeolocationService,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use page::{MemoryPageService, PageService};
pub use storage::kv::{KeyValueStore, MemoryKeyValueStore};
pub use time::{unix_time_ms_now, unix_time_secs_now};
pub use timer::{ImmediateTimerService, TimerFuture, TimerService};
