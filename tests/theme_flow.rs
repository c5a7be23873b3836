//! Integration tests for the theme flow.
//!
//! These exercise the controller, preference resolution, palette lookup, and
//! gradient derivation together, the way the app shell consumes them.

use std::cell::RefCell;
use std::rc::Rc;

use daymode::{
    fade_gradient, ColorScheme, Lesson, LessonStatus, Palette, ThemeController, ThemePreference,
    LESSONS,
};

#[test]
fn settings_change_reaches_subscribed_screen() {
    let observed: Rc<RefCell<Vec<ColorScheme>>> = Rc::new(RefCell::new(Vec::new()));
    let screen = Rc::clone(&observed);

    let mut controller = ThemeController::new(ColorScheme::Light);
    controller.subscribe(move |snapshot| screen.borrow_mut().push(snapshot.effective));

    // user taps "dark", then "system", then the OS flips to dark
    controller.set_preference(ThemePreference::Dark);
    controller.set_preference(ThemePreference::System);
    controller.set_device_scheme(ColorScheme::Dark);

    assert_eq!(
        *observed.borrow(),
        vec![
            ColorScheme::Light, // initial delivery
            ColorScheme::Dark,
            ColorScheme::Light, // system while device is light
            ColorScheme::Dark,
        ]
    );
}

#[test]
fn every_preference_resolves_against_every_device() {
    let preferences = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];
    let schemes = [ColorScheme::Light, ColorScheme::Dark];

    for preference in preferences {
        for device in schemes {
            let expected = match preference {
                ThemePreference::Light => ColorScheme::Light,
                ThemePreference::Dark => ColorScheme::Dark,
                ThemePreference::System => device,
            };
            assert_eq!(preference.resolve(device), expected);
        }
    }
}

#[test]
fn palette_and_gradient_follow_the_controller() {
    let mut controller = ThemeController::new(ColorScheme::Light);
    controller.set_preference(ThemePreference::Dark);

    let palette = controller.palette();
    assert_eq!(palette.background, Palette::of(ColorScheme::Dark).background);

    let fade = palette.fade_gradient();
    assert_eq!(fade.opaque, palette.background);
    assert_eq!(fade.transparent, format!("{}00", palette.background));
}

#[test]
fn three_digit_expansion_matches_six_digit_derivation() {
    // every 3-digit hex value must derive the same gradient as its
    // pre-expanded 6-digit equivalent
    for value in 0u16..0x1000 {
        let short = format!("#{:03x}", value);
        let long: String = short
            .strip_prefix('#')
            .unwrap()
            .chars()
            .flat_map(|c| [c, c])
            .collect();
        let long = format!("#{}", long);

        assert_eq!(fade_gradient(&short), fade_gradient(&long), "{}", short);
    }
}

#[test]
fn lesson_cards_render_from_both_palettes() {
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let palette = Palette::of(scheme);
        for lesson in LESSONS {
            let colors = lesson.status.card_colors(palette);
            let meta = lesson.status.meta();
            assert!(!colors.bg.is_empty());
            assert!(!colors.border.is_empty());
            assert!(!meta.label.is_empty());
        }
    }
}

#[test]
fn settings_rows_render_from_the_option_metadata() {
    let mut controller = ThemeController::new(ColorScheme::Light);
    controller.set_preference(ThemePreference::Dark);
    let palette = controller.palette();
    let snapshot = controller.snapshot();

    for preference in ThemePreference::ALL {
        let meta = preference.meta();
        assert!(!meta.title.is_empty());
        assert!(!meta.description.is_empty());

        // active row gets the highlighted option colors
        let is_active = preference == snapshot.preference;
        let bg = if is_active {
            palette.option.active_bg
        } else {
            palette.option.bg
        };
        assert!(!bg.is_empty());
    }

    assert_eq!(snapshot.subtitle(), "Dark theme enabled");
}

#[test]
fn preference_survives_serde_round_trip() {
    for preference in [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ] {
        let json = serde_json::to_string(&preference).unwrap();
        assert_eq!(json, format!("\"{}\"", preference));
        let back: ThemePreference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preference);
    }
}

#[test]
fn lesson_list_serializes_for_the_rendering_layer() {
    let json = serde_json::to_string(&LESSONS).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 5);
    assert_eq!(parsed[0]["title"], "Welcome Journey");
    assert_eq!(parsed[1]["status"], "active");

    let locked: Vec<&Lesson> = LESSONS
        .iter()
        .filter(|l| l.status == LessonStatus::Locked)
        .collect();
    assert_eq!(locked.len(), 3);
}
