//! Theme preference handling and effective-scheme resolution.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: The user's choice of light, dark, or system
//! - [`ColorScheme`]: The resolved light-or-dark scheme actually applied
//! - [`ThemeController`]: Observable owner of the preference and device scheme
//! - [`detect_device_scheme`] / [`set_scheme_detector`]: Host color-scheme
//!   detection with a test override
//!
//! Resolution is a pure projection: a fixed preference wins outright and
//! `system` defers to the device. There is no state machine and nothing is
//! persisted; a fresh controller starts back at `system`.

mod controller;
mod error;
mod preference;
mod scheme;

pub use controller::{ThemeController, ThemeSnapshot};
pub use error::PreferenceParseError;
pub use preference::{OptionMeta, ThemePreference};
pub use scheme::{detect_device_scheme, set_scheme_detector, ColorScheme};
