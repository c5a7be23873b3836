//! Color palettes and gradient derivation.
//!
//! This module provides:
//!
//! - [`Palette`]: A fixed mapping from semantic UI role to color token,
//!   with one immutable constant per [`crate::ColorScheme`]
//! - [`OptionPalette`]: The settings-option role group nested in a palette
//! - [`fade_gradient`] / [`FadeGradient`]: The `(opaque, transparent)` stop
//!   pair for the fade overlay, derived from a background token
//!
//! Tokens are plain strings consumable directly by a styling layer; nothing
//! here renders.

mod gradient;
#[allow(clippy::module_inception)]
mod palette;

pub use gradient::{fade_gradient, FadeGradient};
pub use palette::{ColorToken, OptionPalette, Palette};
