//! Device color-scheme detection.

use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A concrete light-or-dark color scheme.
///
/// Serves double duty as the signal reported by the host device and as the
/// effective theme produced by preference resolution. Hosts with no usable
/// signal are reported as [`ColorScheme::Light`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

type SchemeDetector = fn() -> ColorScheme;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used to read the device color scheme.
///
/// This is useful for testing or when you want to force a specific scheme.
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Reads the current device color scheme through the active detector.
pub fn detect_device_scheme() -> ColorScheme {
    let detector = SCHEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_scheme_detector() -> ColorScheme {
    match detect_os_scheme() {
        OsSchemeMode::Dark => ColorScheme::Dark,
        OsSchemeMode::Light => ColorScheme::Light,
    }
}
