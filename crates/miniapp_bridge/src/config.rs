//! Emulator configuration with defaults matching the stock mock host.

use serde::{Deserialize, Serialize};

use crate::{identity::WebAppUser, theme::ColorScheme, BridgeError, CLOUD_STORAGE_PREFIX};

/// Coordinate reported when no device position can be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackLocation {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Reported accuracy in meters.
    pub accuracy: f64,
}

impl Default for FallbackLocation {
    fn default() -> Self {
        // San Francisco.
        Self {
            latitude: 37.7749,
            longitude: -122.4194,
            accuracy: 100.0,
        }
    }
}

/// Construction-time settings for a [`crate::WebApp`].
///
/// Every field has a default, so a partial JSON document only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Reported bridge API version.
    pub version: String,
    /// Reported host platform token.
    pub platform: String,
    /// Session user.
    pub user: WebAppUser,
    /// Opaque query identifier carried in the init data.
    pub query_id: String,
    /// Static authentication marker. Never validated.
    pub hash: String,
    /// Fixed issue time in unix seconds; `None` stamps the construction time.
    pub auth_date: Option<u64>,
    /// Initial color scheme.
    pub color_scheme: ColorScheme,
    /// Namespace prefix for cloud-store entries in durable storage.
    pub storage_prefix: String,
    /// Synthetic location used when the device cannot report one.
    pub fallback_location: FallbackLocation,
    /// Delay before a simulated invoice reports itself closed.
    pub invoice_close_delay_ms: u32,
    /// Delay before the simulated QR scanner asks for its text.
    pub qr_prompt_delay_ms: u32,
    /// Initial header color.
    pub header_color: String,
    /// Initial background color.
    pub background_color: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            version: "6.9".to_string(),
            platform: "mock".to_string(),
            user: WebAppUser::default(),
            query_id: "AAHdF6IAAAAA13dpfO4iT-hs".to_string(),
            hash: "d8201a81fabdab577914f65f9f35a4a38c5261cc80a7f0490972e47c5dcd1934".to_string(),
            auth_date: None,
            color_scheme: ColorScheme::Light,
            storage_prefix: CLOUD_STORAGE_PREFIX.to_string(),
            fallback_location: FallbackLocation::default(),
            invoice_close_delay_ms: 3000,
            qr_prompt_delay_ms: 1000,
            header_color: "#ffffff".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parses a JSON configuration; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Config`] when `raw` is not a valid configuration document.
    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
