use folio_theme::{
    ColorScheme, ThemePreference, clear_preference, store_preference, stored_preference,
};
use serial_test::serial;

#[test]
fn explicit_preferences_ignore_the_os() {
    for system in [ColorScheme::Light, ColorScheme::Dark] {
        assert_eq!(ThemePreference::Light.resolve(system), ColorScheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(system), ColorScheme::Dark);
    }
}

#[test]
fn system_preference_follows_the_os() {
    assert_eq!(ThemePreference::System.resolve(ColorScheme::Light), ColorScheme::Light);
    assert_eq!(ThemePreference::System.resolve(ColorScheme::Dark), ColorScheme::Dark);
}

#[test]
fn default_preference_is_system() {
    assert_eq!(ThemePreference::default(), ThemePreference::System);
}

#[test]
fn preference_serializes_lowercase() {
    assert_eq!(serde_json::to_value(ThemePreference::Dark).expect("serialize"), "dark");
    let parsed: ThemePreference = serde_json::from_str("\"system\"").expect("deserialize");
    assert_eq!(parsed, ThemePreference::System);
}

#[test]
fn scheme_maps_to_root_class() {
    assert_eq!(ColorScheme::Light.as_class(), "light");
    assert_eq!(ColorScheme::Dark.as_class(), "dark");
}

#[test]
#[serial]
fn preference_survives_a_simulated_reload() {
    for pref in [ThemePreference::Dark, ThemePreference::Light, ThemePreference::System] {
        store_preference(pref).expect("persist");
        // A fresh read stands in for a page reload.
        let restored = stored_preference().expect("read").expect("was persisted");
        assert_eq!(restored, pref);
        // ...and the restored value must still resolve correctly.
        assert_eq!(restored.resolve(ColorScheme::Dark), pref.resolve(ColorScheme::Dark));
    }
    clear_preference().expect("cleanup");
}

#[test]
#[serial]
fn cleared_preference_reads_as_none() {
    store_preference(ThemePreference::Dark).expect("persist");
    clear_preference().expect("clear");
    assert_eq!(stored_preference().expect("read"), None);
}
