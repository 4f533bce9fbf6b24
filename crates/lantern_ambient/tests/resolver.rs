//! End-to-end resolution scenarios
//!
//! Each test drives [`PreferenceResolver`] the way the settings store does:
//! plain settings records in, one presentation out.

use lantern_ambient::wallpaper::StyleSpec;
use lantern_ambient::{
    AccessibilitySignal, AmbientScene, BackgroundStyle, PreferenceResolver, ResolvedPresentation,
    SceneSettings, ScenePreset, SeasonalContext, ThemeSettings,
};
use lantern_animation::AnimationIntensity;
use lantern_paint::Color;
use lantern_theme::{ColorMode, ColorScheme, ColorToken, ParticleVariant, ThemeCatalog};
use pretty_assertions::assert_eq;

fn forest_dark_energetic() -> ThemeSettings {
    ThemeSettings {
        theme_id: "forest".into(),
        color_mode: ColorMode::Dark,
        animation_intensity: AnimationIntensity::Energetic,
        background_style: BackgroundStyle::Particles,
        custom_accent_color: None,
    }
}

fn resolve_with(
    settings: &ThemeSettings,
    scenes: &SceneSettings,
    reduced_motion: bool,
) -> ResolvedPresentation {
    let accessibility = AccessibilitySignal {
        prefers_reduced_motion: reduced_motion,
        system_scheme: ColorScheme::Light,
    };
    PreferenceResolver::default().resolve(
        settings,
        scenes,
        &accessibility,
        &SeasonalContext::default(),
    )
}

#[test]
fn forest_dark_uses_theme_defaults() {
    let resolved = resolve_with(&forest_dark_energetic(), &SceneSettings::default(), false);
    let forest = ThemeCatalog::global().get("forest").unwrap();

    assert_eq!(resolved.theme_id, "forest");
    assert_eq!(resolved.scheme, ColorScheme::Dark);
    assert_eq!(resolved.palette, forest.dark);
    assert_eq!(resolved.particles.variant, forest.particles.variant);
    assert_eq!(
        resolved.particles.count,
        (forest.particles.count as f32 * 1.5).round() as u32
    );
    assert_eq!(resolved.intensity, AnimationIntensity::Energetic);
    assert_eq!(resolved.scene_id, None);
}

#[test]
fn reduced_motion_only_changes_motion() {
    let settings = forest_dark_energetic();
    let animated = resolve_with(&settings, &SceneSettings::default(), false);
    let reduced = resolve_with(&settings, &SceneSettings::default(), true);

    assert_eq!(reduced.intensity, AnimationIntensity::None);
    assert_eq!(reduced.particles.variant, ParticleVariant::None);
    assert_eq!(reduced.motion_scale, 0.0);
    assert_eq!(reduced.float_amplitude, 0.0);

    assert_eq!(reduced.theme_id, animated.theme_id);
    assert_eq!(reduced.palette, animated.palette);
    assert_eq!(reduced.wallpaper, animated.wallpaper);
    assert_eq!(reduced.glow_color, animated.glow_color);
    assert_eq!(reduced.widgets, animated.widgets);
}

#[test]
fn reduced_motion_beats_an_active_scene() {
    let scenes = SceneSettings {
        enabled: true,
        active_scene_id: Some(ScenePreset::CosmicDream.id().to_string()),
        ..SceneSettings::default()
    };
    for &intensity in AnimationIntensity::all() {
        let settings = ThemeSettings {
            animation_intensity: intensity,
            background_style: BackgroundStyle::Dynamic,
            ..ThemeSettings::default()
        };
        let resolved = resolve_with(&settings, &scenes, true);
        assert_eq!(resolved.intensity, AnimationIntensity::None);
        assert!(resolved.particles.is_none());
        assert!(!matches!(resolved.wallpaper, StyleSpec::Animated { .. }));
    }
}

#[test]
fn reduced_motion_freezes_dynamic_background() {
    let settings = ThemeSettings {
        background_style: BackgroundStyle::Dynamic,
        ..ThemeSettings::default()
    };
    let resolved = resolve_with(&settings, &SceneSettings::default(), true);
    assert!(matches!(resolved.wallpaper, StyleSpec::Gradient(_)));
}

#[test]
fn custom_accent_only_replaces_primary() {
    let accent = Color::from_hex(0xff3366);
    let plain = resolve_with(&forest_dark_energetic(), &SceneSettings::default(), false);
    let accented = resolve_with(
        &ThemeSettings {
            custom_accent_color: Some(accent),
            ..forest_dark_energetic()
        },
        &SceneSettings::default(),
        false,
    );

    for (token, color) in accented.palette.iter() {
        if token == ColorToken::Primary {
            assert_eq!(color, accent);
        } else {
            assert_eq!(color, plain.palette.get(token), "{} changed", token.id());
        }
    }
    assert_eq!(accented.glow_color, accent);
    assert_eq!(accented.particles.base_color, accent);
}

#[test]
fn system_mode_follows_platform_scheme() {
    let settings = ThemeSettings {
        color_mode: ColorMode::System,
        ..ThemeSettings::default()
    };
    let dark = AccessibilitySignal {
        prefers_reduced_motion: false,
        system_scheme: ColorScheme::Dark,
    };
    let resolved = PreferenceResolver::default().resolve(
        &settings,
        &SceneSettings::default(),
        &dark,
        &SeasonalContext::default(),
    );
    assert_eq!(resolved.scheme, ColorScheme::Dark);
}

#[test]
fn unknown_ids_fall_back() {
    let settings = ThemeSettings {
        theme_id: "retired-theme".into(),
        ..ThemeSettings::default()
    };
    let scenes = SceneSettings {
        enabled: true,
        active_scene_id: Some("deleted-custom-scene".into()),
        ..SceneSettings::default()
    };
    let resolved = resolve_with(&settings, &scenes, false);
    let fallback = ThemeCatalog::global().default_theme();

    assert_eq!(resolved.theme_id, fallback.id);
    assert_eq!(resolved.scene_id, None);
    assert_eq!(resolved.particles.variant, fallback.particles.variant);
}

#[test]
fn custom_scene_drives_particles_and_glow() {
    let mine = AmbientScene {
        id: "desk".into(),
        name: "Desk".into(),
        is_custom: true,
        ambient_glow: true,
        overlay_opacity: 40.0,
        ..ScenePreset::SunsetCreative.scene()
    };
    let scenes = SceneSettings {
        enabled: true,
        active_scene_id: Some("desk".into()),
        custom_scenes: vec![mine.clone()],
        ..SceneSettings::default()
    };
    let resolved = resolve_with(&ThemeSettings::default(), &scenes, false);

    assert_eq!(resolved.scene_id.as_deref(), Some("desk"));
    assert_eq!(resolved.particles.variant, mine.particles.variant);
    assert_eq!(resolved.glow_color, mine.color_accent);
    let StyleSpec::Image { url, overlay, .. } = &resolved.wallpaper else {
        panic!("expected image wallpaper, got {:?}", resolved.wallpaper);
    };
    assert_eq!(url, &mine.image.url);
    // 40 is read as a percentage; the light theme tint ends at 0.9 of it
    assert!((overlay.stops[1].color.a - 0.36).abs() < 1e-6);
}

#[test]
fn resolve_is_deterministic() {
    let scenes = SceneSettings {
        enabled: true,
        active_scene_id: Some(ScenePreset::AuroraWonder.id().to_string()),
        ..SceneSettings::default()
    };
    let settings = ThemeSettings {
        custom_accent_color: Some(Color::from_hex(0x22c55e)),
        ..forest_dark_energetic()
    };
    let first = resolve_with(&settings, &scenes, false);
    let second = resolve_with(&settings, &scenes, false);
    assert_eq!(first, second);
}
