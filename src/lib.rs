//! Theme preference resolution and adaptive palettes for a lesson-app shell.
//!
//! This crate is the non-presentational core of a small learning app: it
//! decides which of two themes is in effect, hands out the matching color
//! palette, derives the fade-out gradient used over the lesson list, and
//! carries the static lesson seed data. Rendering, navigation, and
//! persistence live elsewhere.
//!
//! The pieces:
//!
//! - [`ThemePreference`] and [`ColorScheme`]: the user's choice
//!   (light/dark/system) and the resolved light-or-dark result.
//! - [`ThemeController`]: a single-owner observable holding the preference
//!   and the device color scheme, notifying subscribers synchronously.
//! - [`Palette`]: two immutable role-to-color tables, one per scheme.
//! - [`fade_gradient`]: derives an `(opaque, transparent)` stop pair from a
//!   hex background token.
//! - [`Lesson`] and [`LessonStatus`]: the static lesson list with per-status
//!   display metadata.
//!
//! # Example
//!
//! ```rust
//! use daymode::{ColorScheme, Palette, ThemeController, ThemePreference};
//!
//! let mut controller = ThemeController::new(ColorScheme::Dark);
//! assert_eq!(controller.effective(), ColorScheme::Dark); // system default
//!
//! controller.set_preference(ThemePreference::Light);
//! let palette = controller.palette();
//! assert_eq!(palette.background, Palette::of(ColorScheme::Light).background);
//!
//! let fade = palette.fade_gradient();
//! assert!(fade.transparent.ends_with("00"));
//! ```

mod lesson;
mod palette;
mod theme;

pub use lesson::{CardColors, Lesson, LessonStatus, StatusMeta, LESSONS};
pub use palette::{fade_gradient, ColorToken, FadeGradient, OptionPalette, Palette};
pub use theme::{
    detect_device_scheme, set_scheme_detector, ColorScheme, OptionMeta, PreferenceParseError,
    ThemeController, ThemePreference, ThemeSnapshot,
};
