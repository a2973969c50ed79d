use candlekit::{ChartError, RuntimeTheme, UITheme};

#[test]
fn preset_catalog_names_are_stable() {
    assert_eq!(
        RuntimeTheme::presets(),
        &["dark", "light", "high_contrast", "cyberpunk"]
    );
}

#[test]
fn preset_accessors_expose_expected_colors() {
    let dark = UITheme::dark();
    assert_eq!(dark.name, "dark");
    assert_eq!(dark.background, "#131722");
    assert_eq!(dark.candle_up_body, "#26a69a");
    assert_eq!(dark.candle_down_body, "#ef5350");

    assert_eq!(UITheme::light().background, "#ffffff");
    assert_eq!(UITheme::high_contrast().candle_up_body, "#00ff00");
    assert_eq!(UITheme::cyberpunk().background, "#0a0a0f");
}

#[test]
fn from_preset_accepts_every_catalog_name() {
    for name in RuntimeTheme::presets() {
        let theme = RuntimeTheme::from_preset(name).expect("catalog preset");
        assert_eq!(theme.name, *name);
    }
}

#[test]
fn unknown_preset_is_a_typed_error_not_a_silent_default() {
    let err = RuntimeTheme::from_preset("solarized").expect_err("unknown preset");
    match err {
        ChartError::UnknownPreset(name) => assert_eq!(name, "solarized"),
        other => panic!("expected UnknownPreset, got {other:?}"),
    }
}

#[test]
fn every_preset_round_trips_through_json() {
    for name in RuntimeTheme::presets() {
        let theme = RuntimeTheme::from_preset(name).expect("preset");
        let json = theme.to_json();
        let restored = RuntimeTheme::from_json(&json).expect("well-formed payload");
        assert_eq!(restored, theme, "round trip mismatch for {name}");
    }
}

#[test]
fn mutated_theme_round_trips_as_mutated() {
    let mut theme = RuntimeTheme::from_preset("dark").expect("dark preset");
    theme.background = "#101010".to_owned();
    theme.accent = "#ff00ff".to_owned();

    let restored = RuntimeTheme::from_json(&theme.to_json()).expect("well-formed payload");
    assert_eq!(restored, theme);
    assert_ne!(
        restored,
        RuntimeTheme::from_preset("dark").expect("dark preset")
    );
}

#[test]
fn malformed_json_is_absent() {
    assert!(RuntimeTheme::from_json("{").is_none());
    assert!(RuntimeTheme::from_json("[1,2,3]").is_none());
    assert!(RuntimeTheme::from_json("").is_none());
}

#[test]
fn partial_json_falls_back_to_dark_defaults() {
    let theme = RuntimeTheme::from_json(r##"{"accent":"#123456"}"##).expect("partial payload");
    assert_eq!(theme.accent, "#123456");
    assert_eq!(theme.background, UITheme::dark().background);
    assert_eq!(theme.grid, UITheme::dark().grid);
}
