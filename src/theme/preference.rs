//! User theme preference and its resolution to a concrete scheme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::PreferenceParseError;
use super::scheme::ColorScheme;

/// The user's selected theme setting.
///
/// A closed enumeration: anything outside `light`, `dark`, or `system` is
/// rejected at parse time and never reaches resolution. The preference is
/// process-local UI state; a fresh process starts at [`ThemePreference::System`].
///
/// # Example
///
/// ```rust
/// use daymode::{ColorScheme, ThemePreference};
///
/// assert_eq!(
///     ThemePreference::Dark.resolve(ColorScheme::Light),
///     ColorScheme::Dark,
/// );
/// assert_eq!(
///     ThemePreference::System.resolve(ColorScheme::Light),
///     ColorScheme::Light,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

/// Display metadata for one settings-screen theme option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionMeta {
    /// Row title.
    pub title: &'static str,
    /// One-line description under the title.
    pub description: &'static str,
    /// Icon name in the rendering layer's icon set.
    pub icon: &'static str,
}

impl ThemePreference {
    /// The three preferences in settings-screen display order.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// Returns the settings-row metadata for this preference.
    pub fn meta(self) -> &'static OptionMeta {
        match self {
            ThemePreference::Light => &OptionMeta {
                title: "Light",
                description: "The classic bright interface",
                icon: "sunny",
            },
            ThemePreference::Dark => &OptionMeta {
                title: "Dark",
                description: "Minimal glare, maximum contrast",
                icon: "moon",
            },
            ThemePreference::System => &OptionMeta {
                title: "Match system",
                description: "Follow the device setting",
                icon: "phone-portrait",
            },
        }
    }
    /// Resolves this preference against the device scheme.
    ///
    /// A fixed preference wins regardless of the device; `system` mirrors
    /// the device scheme. Total over both inputs, no side effects.
    pub fn resolve(self, device: ColorScheme) -> ColorScheme {
        match self {
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
            ThemePreference::System => device,
        }
    }

    /// Returns the lowercase name used in serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::System
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(PreferenceParseError::UnknownPreference {
                value: other.to_string(),
            }),
        }
    }
}
