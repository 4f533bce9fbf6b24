//! Preference resolution
//!
//! [`PreferenceResolver::resolve`] merges the user's theme and scene settings
//! with the accessibility signal and the current seasonal context into one
//! [`ResolvedPresentation`]. The merge is a pure function of its inputs: the
//! catalogs are read-only and nothing is cached between calls.
//!
//! Precedence, from strongest to weakest:
//!
//! 1. Reduced motion: zero intensity, no particles, frozen wallpapers
//! 2. Custom accent color: replaces the primary token and drives the glow
//! 3. Active scene: particles, glow and the image wallpaper
//! 4. Theme defaults

use crate::scene::{AmbientScene, SceneCatalog};
use crate::settings::{BackgroundStyle, SceneSettings, ThemeSettings, WidgetConfig};
use crate::tone::SeasonalContext;
use crate::wallpaper::{
    DynamicSpeed, DynamicStyle, ImageWallpaper, OverlayTint, StyleSpec, Wallpaper,
    WallpaperGenerator,
};
use lantern_animation::{motion_cap, AnimationIntensity, SpringConfig};
use lantern_paint::Color;
use lantern_theme::{
    ColorScheme, ColorToken, ColorTokens, ParticleConfig, ParticleSize, ParticleSpeed,
    ParticleVariant, Theme, ThemeCatalog,
};
use serde::Serialize;

/// Most orbs drawn by the orbs background
const MAX_ORBS: u32 = 5;

/// Platform state the resolver needs besides the user's settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccessibilitySignal {
    pub prefers_reduced_motion: bool,
    /// Scheme the platform reports; used when the color mode is `system`
    pub system_scheme: ColorScheme,
}

/// Everything the view layer needs to draw, fully merged
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedPresentation {
    pub theme_id: &'static str,
    pub scheme: ColorScheme,
    pub palette: ColorTokens,
    pub glow_color: Color,
    pub glow_intensity: f32,
    pub background_style: BackgroundStyle,
    /// Active scene, if one resolved
    pub scene_id: Option<String>,
    pub particles: ParticleConfig,
    pub intensity: AnimationIntensity,
    pub motion_scale: f32,
    pub spring: SpringConfig,
    pub float_amplitude: f32,
    pub wallpaper: StyleSpec,
    pub seasonal: SeasonalContext,
    pub widgets: Vec<WidgetConfig>,
    pub focus_mode: bool,
}

/// Merges settings against the theme and scene catalogs
#[derive(Clone, Copy, Debug)]
pub struct PreferenceResolver<'a> {
    themes: &'a ThemeCatalog,
    scenes: &'a SceneCatalog,
}

impl<'a> PreferenceResolver<'a> {
    pub fn new(themes: &'a ThemeCatalog, scenes: &'a SceneCatalog) -> Self {
        Self { themes, scenes }
    }

    pub fn resolve(
        &self,
        settings: &ThemeSettings,
        scene_settings: &SceneSettings,
        accessibility: &AccessibilitySignal,
        seasonal: &SeasonalContext,
    ) -> ResolvedPresentation {
        let theme = self.themes.resolve(&settings.theme_id);
        let scheme = settings.color_mode.scheme(accessibility.system_scheme);

        let accent = settings.custom_accent_color.filter(|color| {
            let valid = color.is_valid();
            if !valid {
                tracing::warn!(?color, "ignoring invalid custom accent");
            }
            valid
        });
        let mut palette = *theme.palette(scheme);
        if let Some(accent) = accent {
            palette = palette.with_override(ColorToken::PRIMARY_ACCENT, accent);
        }

        let scene = self.active_scene(scene_settings);
        let intensity = motion_cap(
            accessibility.prefers_reduced_motion,
            settings.animation_intensity,
        );
        let motion_scale = intensity.multiplier();

        let particles = effective_particles(
            theme,
            &palette,
            scene.as_ref(),
            settings.background_style,
            intensity,
            accent,
        );

        let generator = WallpaperGenerator::new(scheme).with_motion(intensity.is_animated());
        let wallpaper = generator.style_for(&wallpaper_for(
            theme,
            &palette,
            scene.as_ref(),
            settings.background_style,
        ));

        let glow_color = accent
            .or_else(|| {
                scene
                    .as_ref()
                    .filter(|scene| scene.ambient_glow)
                    .map(|scene| scene.color_accent)
            })
            .unwrap_or(palette.glow);
        let glow_intensity = match &scene {
            Some(scene) if !scene.ambient_glow => 0.0,
            _ => theme.animation.glow_intensity,
        };

        tracing::trace!(
            theme = theme.id,
            ?scheme,
            scene = scene.as_ref().map(|s| s.id.as_str()),
            ?intensity,
            particles = particles.count,
            "presentation resolved"
        );

        ResolvedPresentation {
            theme_id: theme.id,
            scheme,
            palette,
            glow_color,
            glow_intensity,
            background_style: settings.background_style,
            scene_id: scene.map(|scene| scene.id),
            particles,
            intensity,
            motion_scale,
            spring: theme.animation.spring.config(),
            float_amplitude: theme.animation.float_amplitude * motion_scale,
            wallpaper,
            seasonal: seasonal.clone(),
            widgets: scene_settings.visible_widgets().cloned().collect(),
            focus_mode: scene_settings.focus_mode_enabled,
        }
    }

    /// The enabled scene, if its id still resolves
    fn active_scene(&self, scene_settings: &SceneSettings) -> Option<AmbientScene> {
        if !scene_settings.enabled {
            return None;
        }
        let id = scene_settings.active_scene_id.as_deref()?;
        match self.scenes.resolve(id, &scene_settings.custom_scenes) {
            Some(scene) => Some(scene.clone().normalized()),
            None => {
                tracing::warn!(id, "active scene not found, using theme defaults");
                None
            }
        }
    }
}

impl Default for PreferenceResolver<'static> {
    fn default() -> Self {
        Self::new(ThemeCatalog::global(), SceneCatalog::global())
    }
}

fn effective_particles(
    theme: &Theme,
    palette: &ColorTokens,
    scene: Option<&AmbientScene>,
    style: BackgroundStyle,
    intensity: AnimationIntensity,
    accent: Option<Color>,
) -> ParticleConfig {
    if !intensity.is_animated() {
        return ParticleConfig::none();
    }
    let multiplier = intensity.multiplier();

    if style == BackgroundStyle::Orbs {
        let orbs = ParticleConfig {
            variant: ParticleVariant::Orbs,
            count: MAX_ORBS,
            base_color: palette.orb_1,
            secondary_color: Some(palette.orb_2),
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Large,
        }
        .scaled(multiplier);
        return ParticleConfig {
            count: orbs.count.min(MAX_ORBS),
            ..orbs
        };
    }

    let scene_particles = scene.filter(|_| {
        matches!(style, BackgroundStyle::Particles | BackgroundStyle::Dynamic)
    });
    let base = match scene_particles {
        Some(scene) => scene.particles.with_motion_of(&theme.particles),
        None => ParticleConfig {
            base_color: accent.unwrap_or(theme.particles.base_color),
            ..theme.particles
        },
    };
    if base.variant.is_none() {
        return ParticleConfig::none();
    }
    base.scaled(multiplier * style.particle_factor())
}

fn wallpaper_for(
    theme: &Theme,
    palette: &ColorTokens,
    scene: Option<&AmbientScene>,
    style: BackgroundStyle,
) -> Wallpaper {
    if let Some(scene) = scene {
        return Wallpaper::Image(
            ImageWallpaper::new(scene.image.url.as_str())
                .with_overlay(OverlayTint::Theme, scene.overlay_opacity),
        );
    }
    match style {
        BackgroundStyle::Particles | BackgroundStyle::Minimal => {
            Wallpaper::solid(palette.background)
        }
        BackgroundStyle::Orbs => Wallpaper::mesh_from_colors(&[
            palette.background,
            palette.orb_1,
            palette.orb_2,
            palette.glow_soft,
        ]),
        BackgroundStyle::Dynamic => Wallpaper::Dynamic {
            style: dynamic_style(theme.particles.variant),
            colors: vec![palette.background, palette.primary, palette.orb_1, palette.orb_2],
            speed: match theme.particles.speed {
                ParticleSpeed::Slow => DynamicSpeed::Slow,
                ParticleSpeed::Medium => DynamicSpeed::Medium,
                ParticleSpeed::Fast => DynamicSpeed::Fast,
            },
        },
    }
}

/// Animated wallpaper that best matches a theme's particle layer
fn dynamic_style(variant: ParticleVariant) -> DynamicStyle {
    match variant {
        ParticleVariant::Aurora => DynamicStyle::Aurora,
        ParticleVariant::Bubbles => DynamicStyle::Waves,
        ParticleVariant::Stars => DynamicStyle::Nebula,
        ParticleVariant::Snow => DynamicStyle::Particles,
        ParticleVariant::Fireflies | ParticleVariant::Sparks => DynamicStyle::Glow,
        ParticleVariant::Leaves | ParticleVariant::Orbs | ParticleVariant::None => {
            DynamicStyle::Morph
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ScenePreset;

    fn resolve(settings: &ThemeSettings, scenes: &SceneSettings) -> ResolvedPresentation {
        PreferenceResolver::default().resolve(
            settings,
            scenes,
            &AccessibilitySignal::default(),
            &SeasonalContext::default(),
        )
    }

    #[test]
    fn orbs_are_capped_at_five() {
        let settings = ThemeSettings {
            background_style: BackgroundStyle::Orbs,
            animation_intensity: AnimationIntensity::Energetic,
            ..ThemeSettings::default()
        };
        let resolved = resolve(&settings, &SceneSettings::default());
        assert_eq!(resolved.particles.variant, ParticleVariant::Orbs);
        assert_eq!(resolved.particles.count, 5);
        assert_eq!(resolved.particles.base_color, resolved.palette.orb_1);
        assert!(matches!(resolved.wallpaper, StyleSpec::Mesh { .. }));
    }

    #[test]
    fn minimal_style_halves_theme_particles() {
        let settings = ThemeSettings {
            background_style: BackgroundStyle::Minimal,
            ..ThemeSettings::default()
        };
        let resolved = resolve(&settings, &SceneSettings::default());
        let theme = ThemeCatalog::global().default_theme();
        let expected = (theme.particles.count as f32 * 0.5).round() as u32;
        assert_eq!(resolved.particles.count, expected);
    }

    #[test]
    fn minimal_style_ignores_scene_particles() {
        let settings = ThemeSettings {
            background_style: BackgroundStyle::Minimal,
            ..ThemeSettings::default()
        };
        let scenes = SceneSettings {
            enabled: true,
            active_scene_id: Some(ScenePreset::OceanWaves.id().to_string()),
            ..SceneSettings::default()
        };
        let resolved = resolve(&settings, &scenes);
        assert_eq!(resolved.scene_id.as_deref(), Some("ocean-waves"));
        assert_ne!(resolved.particles.variant, ParticleVariant::Bubbles);
        assert!(matches!(resolved.wallpaper, StyleSpec::Image { .. }));
    }

    #[test]
    fn dynamic_style_animates_theme_colors() {
        let settings = ThemeSettings {
            theme_id: "aurora".into(),
            background_style: BackgroundStyle::Dynamic,
            ..ThemeSettings::default()
        };
        let resolved = resolve(&settings, &SceneSettings::default());
        let StyleSpec::Animated { style, colors, .. } = &resolved.wallpaper else {
            panic!("expected animated wallpaper, got {:?}", resolved.wallpaper);
        };
        assert_eq!(*style, DynamicStyle::Aurora);
        assert_eq!(colors[1], resolved.palette.primary);
    }

    #[test]
    fn scene_without_glow_zeroes_glow_intensity() {
        let scenes = SceneSettings {
            enabled: true,
            active_scene_id: Some(ScenePreset::ZenMinimal.id().to_string()),
            ..SceneSettings::default()
        };
        let resolved = resolve(&ThemeSettings::default(), &scenes);
        assert_eq!(resolved.glow_intensity, 0.0);
        assert_eq!(resolved.glow_color, resolved.palette.glow);
    }

    #[test]
    fn disabled_scenes_are_ignored() {
        let scenes = SceneSettings {
            enabled: false,
            active_scene_id: Some(ScenePreset::CityEnergy.id().to_string()),
            ..SceneSettings::default()
        };
        let resolved = resolve(&ThemeSettings::default(), &scenes);
        assert_eq!(resolved.scene_id, None);
        assert!(matches!(resolved.wallpaper, StyleSpec::Solid { .. }));
    }
}
