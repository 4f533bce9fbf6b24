//! Integration tests for the built-in theme catalog
//!
//! These check catalog-wide properties that individual theme modules can't:
//! ordering, category coverage, and palette sanity across all presets.

use lantern_theme::{
    ColorScheme, ColorToken, ParticleVariant, ThemeCatalog, ThemeCategory, ThemePreset,
    DEFAULT_THEME_ID,
};
use pretty_assertions::assert_eq;

#[test]
fn catalog_preserves_preset_order() {
    let catalog = ThemeCatalog::builtin();
    let ids: Vec<&str> = catalog.all().map(|theme| theme.id).collect();
    let expected: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    assert_eq!(ids, expected);
    assert_eq!(catalog.len(), 15);
}

#[test]
fn every_category_is_populated() {
    let catalog = ThemeCatalog::builtin();
    for &category in ThemeCategory::all() {
        assert!(
            catalog.by_category(category).next().is_some(),
            "no themes in {category}"
        );
    }

    let sports: Vec<&str> = catalog
        .by_category(ThemeCategory::Sports)
        .map(|theme| theme.id)
        .collect();
    assert_eq!(sports, vec!["basketball", "soccer", "hockey"]);
}

#[test]
fn default_theme_is_lantern_fireflies() {
    let catalog = ThemeCatalog::global();
    let theme = catalog.default_theme();
    assert_eq!(theme.id, DEFAULT_THEME_ID);
    assert_eq!(theme.category, ThemeCategory::Default);
    assert_eq!(theme.particles.variant, ParticleVariant::Fireflies);
    assert_eq!(theme.particles.count, 15);
}

#[test]
fn palettes_are_valid_and_distinct_per_scheme() {
    for theme in ThemeCatalog::global().all() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            for (token, color) in theme.palette(scheme).iter() {
                assert!(color.is_valid(), "{} {scheme:?} {token:?}", theme.id);
                assert_eq!(color.a, 1.0);
            }
        }
        assert_ne!(
            theme.light.get(ColorToken::Background),
            theme.dark.get(ColorToken::Background),
            "{} light and dark backgrounds match",
            theme.id
        );
    }
}

#[test]
fn theme_defaults_stay_in_range() {
    for theme in ThemeCatalog::global().all() {
        assert!((0.0..=1.0).contains(&theme.animation.glow_intensity), "{}", theme.id);
        assert!(theme.animation.float_amplitude > 0.0);
        assert!(!theme.particles.variant.is_none());
        assert!(theme.particles.count > 0);
    }
}

#[test]
fn palette_serializes_with_css_names() {
    let forest = ThemeCatalog::global().resolve("forest");
    let json = serde_json::to_value(forest.palette(ColorScheme::Light)).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 20);
    assert!(object.contains_key("card-foreground"));
    assert!(object.contains_key("orb-1"));
}
