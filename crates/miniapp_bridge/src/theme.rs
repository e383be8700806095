//! Color scheme and theme tokens.

use serde::{Deserialize, Serialize};

/// The two color schemes the emulated host can report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl ColorScheme {
    /// Returns the other scheme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the wire token (`light` / `dark`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Named color tokens (`themeParams`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeParams {
    /// Page background.
    pub bg_color: String,
    /// Main text.
    pub text_color: String,
    /// Secondary/hint text.
    pub hint_color: String,
    /// Links.
    pub link_color: String,
    /// Button fill.
    pub button_color: String,
    /// Button label.
    pub button_text_color: String,
    /// Secondary surfaces.
    pub secondary_bg_color: String,
}

impl ThemeParams {
    /// Light preset.
    pub fn light() -> Self {
        Self {
            bg_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            hint_color: "#999999".to_string(),
            link_color: "#2481cc".to_string(),
            button_color: "#31a6f7".to_string(),
            button_text_color: "#ffffff".to_string(),
            secondary_bg_color: "#f1f1f1".to_string(),
        }
    }

    /// Dark preset.
    pub fn dark() -> Self {
        Self {
            bg_color: "#212121".to_string(),
            text_color: "#ffffff".to_string(),
            hint_color: "#aaaaaa".to_string(),
            link_color: "#8ec4e6".to_string(),
            button_color: "#31a6f7".to_string(),
            button_text_color: "#ffffff".to_string(),
            secondary_bg_color: "#181818".to_string(),
        }
    }

    /// Preset for `scheme`.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

/// Theme descriptor: a scheme plus its tokens. Tokens always match the scheme's preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    color_scheme: ColorScheme,
    params: ThemeParams,
}

impl Theme {
    /// Theme for `scheme`.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            color_scheme: scheme,
            params: ThemeParams::for_scheme(scheme),
        }
    }

    /// Current scheme.
    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// Current tokens.
    pub fn params(&self) -> &ThemeParams {
        &self.params
    }

    /// Flips to the other scheme.
    pub fn toggle(&mut self) {
        *self = Self::new(self.color_scheme.toggled());
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
