//! Fixed role-to-color palettes, one per color scheme.

use crate::theme::ColorScheme;

use super::gradient::{fade_gradient, FadeGradient};

/// An opaque color identifier: a hex string, an `rgba()` expression, or a
/// named color, consumed as-is by the styling layer.
pub type ColorToken = &'static str;

/// Colors for the theme-option rows on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionPalette {
    pub bg: ColorToken,
    pub border: ColorToken,
    pub text: ColorToken,
    pub description: ColorToken,
    pub icon_bg: ColorToken,
    pub active_bg: ColorToken,
    pub active_border: ColorToken,
    pub active_text: ColorToken,
    pub active_icon_bg: ColorToken,
}

/// A fixed mapping from semantic UI role to color token.
///
/// Exactly two palettes exist, [`Palette::LIGHT`] and [`Palette::DARK`];
/// they are compile-time constants, never built at runtime. Look one up with
/// [`Palette::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: ColorToken,
    pub text_primary: ColorToken,
    pub text_secondary: ColorToken,
    pub subtitle: ColorToken,
    pub card_bg: ColorToken,
    pub card_border: ColorToken,
    pub card_done: ColorToken,
    pub card_active: ColorToken,
    pub card_active_border: ColorToken,
    pub card_locked: ColorToken,
    pub badge_bg: ColorToken,
    pub option: OptionPalette,
}

impl Palette {
    /// Palette applied when the effective scheme is light.
    pub const LIGHT: Palette = Palette {
        background: "#ffffff",
        text_primary: "#11181C",
        text_secondary: "#475569",
        subtitle: "#64748b",
        card_bg: "#f1f5f9",
        card_border: "#e2e8f0",
        card_done: "#ecfdf3",
        card_active: "#e8f1ff",
        card_active_border: "#bfdbfe",
        card_locked: "#f8fafc",
        badge_bg: "#eef2ff",
        option: OptionPalette {
            bg: "#ffffff",
            border: "#e2e8f0",
            text: "#11181C",
            description: "#475569",
            icon_bg: "#e2e8f0",
            active_bg: "#facc15",
            active_border: "#eab308",
            active_text: "#0f172a",
            active_icon_bg: "#f1f5f9",
        },
    };

    /// Palette applied when the effective scheme is dark.
    pub const DARK: Palette = Palette {
        background: "#151718",
        text_primary: "#ECEDEE",
        text_secondary: "#cbd5e1",
        subtitle: "#94a3b8",
        card_bg: "#12283c",
        card_border: "rgba(255,255,255,0.06)",
        card_done: "#0f2a30",
        card_active: "#0f172a",
        card_active_border: "rgba(37, 99, 235, 0.4)",
        card_locked: "#0d1521",
        badge_bg: "rgba(255,255,255,0.04)",
        option: OptionPalette {
            bg: "rgba(255,255,255,0.03)",
            border: "rgba(255,255,255,0.08)",
            text: "#ECEDEE",
            description: "#cbd5e1",
            icon_bg: "#1f2937",
            active_bg: "#fbbf24",
            active_border: "#f59e0b",
            active_text: "#0b1b2b",
            active_icon_bg: "#e2e8f0",
        },
    };

    /// Returns the palette for a scheme.
    pub fn of(scheme: ColorScheme) -> &'static Palette {
        match scheme {
            ColorScheme::Light => &Palette::LIGHT,
            ColorScheme::Dark => &Palette::DARK,
        }
    }

    /// Derives the fade-overlay gradient from this palette's background.
    ///
    /// Cheap and pure; recomputed on demand rather than cached.
    pub fn fade_gradient(&self) -> FadeGradient {
        fade_gradient(self.background)
    }
}
