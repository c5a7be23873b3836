//! Preference parsing errors.

/// Error returned when a string is not a valid theme preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceParseError {
    /// The value is not one of `light`, `dark`, or `system`
    UnknownPreference { value: String },
}

impl std::fmt::Display for PreferenceParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceParseError::UnknownPreference { value } => {
                write!(
                    f,
                    "'{}' is not a theme preference (expected light, dark, or system)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for PreferenceParseError {}
