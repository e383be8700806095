use super::*;

fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn current_position() -> Result<DevicePosition, GeolocationError> {
    Err(GeolocationError::Unsupported)
}

pub async fn geolocation_permission_state() -> Result<PermissionState, String> {
    Err(unsupported())
}

pub async fn read_clipboard_text() -> Result<String, String> {
    Err(unsupported())
}

pub async fn sleep_ms(_ms: u32) {}

pub fn alert(_message: &str) {}

pub fn confirm(_message: &str) -> bool {
    false
}

pub fn prompt(_message: &str, _default_value: &str) -> Option<String> {
    None
}

pub fn open_in_new_context(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn inner_height() -> Option<f64> {
    None
}

pub fn set_body_background(_color: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn dispatch_document_event(_name: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn add_resize_listener(_handler: Box<dyn FnMut(f64)>) -> Result<(), String> {
    Err(unsupported())
}
