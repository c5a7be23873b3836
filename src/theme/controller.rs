//! Observable owner of the current theme state.

use std::fmt;

use crate::palette::Palette;

use super::preference::ThemePreference;
use super::scheme::{detect_device_scheme, ColorScheme};

/// A consistent view of the theme state at one point in time.
///
/// The effective scheme is always the resolution of the preference it is
/// paired with; subscribers never observe one without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub preference: ThemePreference,
    pub effective: ColorScheme,
}

impl ThemeSnapshot {
    /// The settings-screen subtitle describing the current state.
    ///
    /// A fixed preference names itself; `system` also reports which scheme
    /// the device is currently supplying.
    pub fn subtitle(&self) -> String {
        match self.preference {
            ThemePreference::Light => "Light theme enabled".to_string(),
            ThemePreference::Dark => "Dark theme enabled".to_string(),
            ThemePreference::System => {
                let current = match self.effective {
                    ColorScheme::Light => "light",
                    ColorScheme::Dark => "dark",
                };
                format!("Following the system: currently the {} theme", current)
            }
        }
    }
}

type Subscriber = Box<dyn Fn(&ThemeSnapshot)>;

/// Single-owner observable holding the theme preference and device scheme.
///
/// There is exactly one writer (whoever owns the controller); screens hold a
/// read-only view through [`ThemeController::subscribe`] and are notified
/// synchronously whenever either input changes, so a rendering pass always
/// sees a fully resolved `(preference, effective)` pair.
///
/// Nothing is persisted: a fresh controller starts at
/// [`ThemePreference::System`].
///
/// # Example
///
/// ```rust
/// use daymode::{ColorScheme, ThemeController, ThemePreference};
///
/// let mut controller = ThemeController::new(ColorScheme::Light);
/// controller.subscribe(|snapshot| {
///     println!("effective theme: {:?}", snapshot.effective);
/// });
/// controller.set_preference(ThemePreference::Dark);
/// assert_eq!(controller.effective(), ColorScheme::Dark);
/// ```
pub struct ThemeController {
    preference: ThemePreference,
    device: ColorScheme,
    subscribers: Vec<Subscriber>,
}

impl ThemeController {
    /// Creates a controller with an explicit device scheme.
    ///
    /// The preference starts at `system`, so the effective scheme initially
    /// mirrors `device`.
    pub fn new(device: ColorScheme) -> Self {
        Self {
            preference: ThemePreference::default(),
            device,
            subscribers: Vec::new(),
        }
    }

    /// Creates a controller seeded from the host's detected color scheme.
    pub fn detect() -> Self {
        Self::new(detect_device_scheme())
    }

    /// The user's current preference.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// The device scheme last reported by the host.
    pub fn device_scheme(&self) -> ColorScheme {
        self.device
    }

    /// The resolved scheme currently in effect.
    pub fn effective(&self) -> ColorScheme {
        self.preference.resolve(self.device)
    }

    /// The current `(preference, effective)` pair.
    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            preference: self.preference,
            effective: self.effective(),
        }
    }

    /// The palette for the scheme currently in effect.
    pub fn palette(&self) -> &'static Palette {
        Palette::of(self.effective())
    }

    /// Sets the user preference, notifying subscribers if it changed.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        if self.preference == preference {
            return;
        }
        self.preference = preference;
        self.notify();
    }

    /// Records a device color-scheme change reported by the host.
    ///
    /// Subscribers are notified even when the preference is fixed: the
    /// effective scheme is unchanged in that case but the snapshot is
    /// re-delivered so dependents stay in step with a single notification
    /// path.
    pub fn set_device_scheme(&mut self, device: ColorScheme) {
        if self.device == device {
            return;
        }
        self.device = device;
        self.notify();
    }

    /// Registers a subscriber and immediately delivers the current snapshot.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&ThemeSnapshot) + 'static,
    {
        let snapshot = self.snapshot();
        subscriber(&snapshot);
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for subscriber in &self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("preference", &self.preference)
            .field("device", &self.device)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
