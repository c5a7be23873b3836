//! Fade-overlay gradient derivation.

/// An ordered pair of gradient stops for the fade overlay.
///
/// The first stop is always visually identical to the input color; the
/// second is always fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeGradient {
    /// The background color, unchanged.
    pub opaque: String,
    /// A fully transparent variant of the same color, or the `transparent`
    /// keyword when the input is not a hex token.
    pub transparent: String,
}

/// Derives the fade-overlay gradient stops from a background color token.
///
/// Hex tokens (`#RGB` or `#RRGGBB`, case preserved) get a `00` alpha suffix
/// appended to a 6-digit normalization, producing a transparent variant of
/// the identical color. Anything else — named colors, `rgba()` expressions,
/// hex of the wrong length — cannot be safely alpha-modified and falls back
/// to the `transparent` keyword. Malformed input never produces an error.
///
/// # Example
///
/// ```rust
/// use daymode::fade_gradient;
///
/// let fade = fade_gradient("#fff");
/// assert_eq!(fade.opaque, "#ffffff");
/// assert_eq!(fade.transparent, "#ffffff00");
///
/// let fallback = fade_gradient("skyblue");
/// assert_eq!(fallback.opaque, "skyblue");
/// assert_eq!(fallback.transparent, "transparent");
/// ```
pub fn fade_gradient(background: &str) -> FadeGradient {
    if let Some(digits) = background.strip_prefix('#') {
        let hex = if digits.chars().count() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        if hex.chars().count() == 6 {
            return FadeGradient {
                opaque: format!("#{}", hex),
                transparent: format!("#{}00", hex),
            };
        }
    }

    FadeGradient {
        opaque: background.to_string(),
        transparent: "transparent".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit_hex() {
        let fade = fade_gradient("#ffffff");
        assert_eq!(fade.opaque, "#ffffff");
        assert_eq!(fade.transparent, "#ffffff00");
    }

    #[test]
    fn test_three_digit_hex_expands() {
        let fade = fade_gradient("#fff");
        assert_eq!(fade.opaque, "#ffffff");
        assert_eq!(fade.transparent, "#ffffff00");

        let fade = fade_gradient("#1a9");
        assert_eq!(fade.opaque, "#11aa99");
        assert_eq!(fade.transparent, "#11aa9900");
    }

    #[test]
    fn test_case_is_preserved() {
        let fade = fade_gradient("#ECEDEE");
        assert_eq!(fade.opaque, "#ECEDEE");
        assert_eq!(fade.transparent, "#ECEDEE00");
    }

    #[test]
    fn test_wrong_length_falls_back() {
        let fade = fade_gradient("#12345");
        assert_eq!(fade.opaque, "#12345");
        assert_eq!(fade.transparent, "transparent");

        let fade = fade_gradient("#1234567");
        assert_eq!(fade.transparent, "transparent");
    }

    #[test]
    fn test_named_color_falls_back() {
        let fade = fade_gradient("skyblue");
        assert_eq!(fade.opaque, "skyblue");
        assert_eq!(fade.transparent, "transparent");
    }

    #[test]
    fn test_rgba_expression_falls_back() {
        let fade = fade_gradient("rgba(255,255,255,0.06)");
        assert_eq!(fade.opaque, "rgba(255,255,255,0.06)");
        assert_eq!(fade.transparent, "transparent");
    }

    #[test]
    fn test_empty_string_falls_back() {
        let fade = fade_gradient("");
        assert_eq!(fade.opaque, "");
        assert_eq!(fade.transparent, "transparent");
    }

    #[test]
    fn test_derivation_is_idempotent() {
        assert_eq!(fade_gradient("#151718"), fade_gradient("#151718"));
        assert_eq!(fade_gradient("tomato"), fade_gradient("tomato"));
    }
}
