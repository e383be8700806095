//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the domain functions in `bridge`.

use bridge_host::{DevicePosition, GeolocationError, PermissionState};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn current_position() -> Result<DevicePosition, GeolocationError> {
    imp::current_position().await
}

pub async fn geolocation_permission_state() -> Result<PermissionState, String> {
    imp::geolocation_permission_state().await
}

pub async fn read_clipboard_text() -> Result<String, String> {
    imp::read_clipboard_text().await
}

pub async fn sleep_ms(ms: u32) {
    imp::sleep_ms(ms).await
}

pub fn alert(message: &str) {
    imp::alert(message)
}

pub fn confirm(message: &str) -> bool {
    imp::confirm(message)
}

pub fn prompt(message: &str, default_value: &str) -> Option<String> {
    imp::prompt(message, default_value)
}

pub fn open_in_new_context(url: &str) -> Result<(), String> {
    imp::open_in_new_context(url)
}

pub fn inner_height() -> Option<f64> {
    imp::inner_height()
}

pub fn set_body_background(color: &str) -> Result<(), String> {
    imp::set_body_background(color)
}

pub fn dispatch_document_event(name: &str) -> Result<(), String> {
    imp::dispatch_document_event(name)
}

pub fn add_resize_listener(handler: Box<dyn FnMut(f64)>) -> Result<(), String> {
    imp::add_resize_listener(handler)
}
