//! Popup and QR-scanner request types.

use serde::{Deserialize, Serialize};

/// Visual role of a popup button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupButtonType {
    /// Plain button with custom text.
    #[default]
    Default,
    /// Localized "OK".
    Ok,
    /// Localized "Close".
    Close,
    /// Localized "Cancel".
    Cancel,
    /// Destructive action with custom text.
    Destructive,
}

/// One popup button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupButton {
    /// Identifier reported back when the popup closes.
    #[serde(default)]
    pub id: Option<String>,
    /// Visual role.
    #[serde(default, rename = "type")]
    pub kind: PopupButtonType,
    /// Label, for the types that take one.
    #[serde(default)]
    pub text: Option<String>,
}

/// `showPopup` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupParams {
    /// Optional title.
    #[serde(default)]
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// Buttons, in display order.
    #[serde(default)]
    pub buttons: Vec<PopupButton>,
}

impl PopupParams {
    /// Text shown by the emulator's stand-in dialog.
    pub fn alert_text(&self) -> String {
        format!(
            "Popup: {}\n{}",
            self.title.as_deref().unwrap_or_default(),
            self.message
        )
    }
}

/// `showPopup` result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupResult {
    /// Identifier of the chosen button.
    ///
    /// The emulator always reports the first configured button's id, whatever the human did.
    pub button_id: Option<String>,
}

/// `showScanQrPopup` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanQrPopupParams {
    /// Hint shown under the scanner viewfinder.
    #[serde(default)]
    pub text: Option<String>,
}
