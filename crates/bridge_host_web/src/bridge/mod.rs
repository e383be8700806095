//! Browser capability bindings used by the `bridge_host_web` service adapters.
//!
//! Grouped by host domain; every call routes through `interop`, which owns the target split.

mod interop;

use bridge_host::{DevicePosition, GeolocationError, PermissionState};

pub async fn current_position() -> Result<DevicePosition, GeolocationError> {
    interop::current_position().await
}

pub async fn geolocation_permission_state() -> Result<PermissionState, String> {
    interop::geolocation_permission_state().await
}

pub async fn read_clipboard_text() -> Result<String, String> {
    interop::read_clipboard_text().await
}

pub async fn sleep_ms(ms: u32) {
    interop::sleep_ms(ms).await
}

pub fn alert(message: &str) {
    interop::alert(message)
}

pub fn confirm(message: &str) -> bool {
    interop::confirm(message)
}

pub fn prompt(message: &str, default_value: &str) -> Option<String> {
    interop::prompt(message, default_value)
}

pub fn open_in_new_context(url: &str) -> Result<(), String> {
    interop::open_in_new_context(url)
}

pub fn inner_height() -> Option<f64> {
    interop::inner_height()
}

pub fn set_body_background(color: &str) -> Result<(), String> {
    interop::set_body_background(color)
}

pub fn dispatch_document_event(name: &str) -> Result<(), String> {
    interop::dispatch_document_event(name)
}

pub fn add_resize_listener(handler: Box<dyn FnMut(f64)>) -> Result<(), String> {
    interop::add_resize_listener(handler)
}
