//! Wall-clock helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns the current unix timestamp in whole seconds.
pub fn unix_time_secs_now() -> u64 {
    unix_time_ms_now() / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_track_milliseconds() {
        let ms = unix_time_ms_now();
        let secs = unix_time_secs_now();
        assert!(secs >= ms / 1000);
        assert!(secs <= ms / 1000 + 1);
    }
}
