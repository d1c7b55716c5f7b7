use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Names accepted by [`Theme::by_name`].
pub const THEME_NAMES: [&str; 2] = ["midnight", "daylight"];

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    /// Look up a built-in theme by name.
    ///
    pub fn by_name(name: &str) -> Option<Theme> {
        match name.to_lowercase().as_str() {
            "midnight" => Some(Self::midnight()),
            "daylight" => Some(Self::daylight()),
            _ => None,
        }
    }

    /// Dark theme with blue accents.
    ///
    pub fn midnight() -> Self {
        Theme {
            name: "midnight".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),   // Blue
            secondary: ColorSpec::rgb(187, 154, 247), // Violet
            accent: ColorSpec::rgb(255, 158, 100),    // Orange
            text: ColorSpec::rgb(192, 202, 245),
            text_muted: ColorSpec::rgb(86, 95, 137),
            background: ColorSpec::rgb(26, 27, 38),
            surface: ColorSpec::rgb(36, 40, 59),
            success: ColorSpec::rgb(158, 206, 106),
            warning: ColorSpec::rgb(224, 175, 104),
            error: ColorSpec::rgb(247, 118, 142),
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(65, 72, 104),
            highlight_bg: ColorSpec::rgb(51, 59, 91),
            highlight_fg: ColorSpec::rgb(255, 255, 255),
        }
    }

    /// Light theme for bright terminals.
    ///
    pub fn daylight() -> Self {
        Theme {
            name: "daylight".to_string(),
            primary: ColorSpec::rgb(46, 125, 233),
            secondary: ColorSpec::rgb(152, 84, 241),
            accent: ColorSpec::rgb(177, 92, 0),
            text: ColorSpec::rgb(52, 59, 88),
            text_muted: ColorSpec::rgb(132, 140, 181),
            background: ColorSpec::rgb(225, 226, 231),
            surface: ColorSpec::rgb(233, 233, 237),
            success: ColorSpec::rgb(88, 117, 57),
            warning: ColorSpec::rgb(140, 108, 62),
            error: ColorSpec::rgb(245, 42, 101),
            border_active: ColorSpec::rgb(46, 125, 233),
            border_normal: ColorSpec::rgb(168, 174, 203),
            highlight_bg: ColorSpec::rgb(196, 200, 218),
            highlight_fg: ColorSpec::rgb(15, 15, 20),
        }
    }
}
