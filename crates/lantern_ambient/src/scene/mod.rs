//! Ambient scenes
//!
//! A scene pairs a focal image with a particle layer, an accent color and a
//! mood. Built-in scenes live in [`SceneCatalog`]; users can author their own,
//! which are stored alongside their scene settings and flagged `is_custom`.

mod catalog;
mod inspiration;

pub use catalog::{SceneCatalog, ScenePreset};
pub use inspiration::{daily_inspiration, Inspiration, INSPIRATIONS};

use lantern_paint::Color;
use lantern_theme::{ParticleConfig, ParticleVariant};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a scene is meant to help with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneMood {
    Focus,
    Relax,
    Create,
    Energize,
}

impl SceneMood {
    pub fn all() -> &'static [SceneMood] {
        &[Self::Focus, Self::Relax, Self::Create, Self::Energize]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Relax => "Relax",
            Self::Create => "Create",
            Self::Energize => "Energize",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Focus => "Deep concentration and clarity",
            Self::Relax => "Calm and peaceful atmosphere",
            Self::Create => "Inspiration and imagination",
            Self::Energize => "Motivation and drive",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Self::Focus => Color::from_hsl(220.0, 70.0, 55.0),
            Self::Relax => Color::from_hsl(160.0, 50.0, 45.0),
            Self::Create => Color::from_hsl(280.0, 65.0, 55.0),
            Self::Energize => Color::from_hsl(35.0, 90.0, 55.0),
        }
    }
}

impl fmt::Display for SceneMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the focal image is framed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    #[default]
    Card,
    Floating,
    Framed,
    Minimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribution {
    pub photographer_name: String,
    pub photographer_username: String,
    pub photographer_url: String,
    pub unsplash_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneImage {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Attribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_color: Option<Color>,
}

/// Particle layer of a scene; speed and size come from the active theme
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneParticles {
    pub variant: ParticleVariant,
    pub count: u32,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Color>,
}

impl SceneParticles {
    /// Full particle config, borrowing motion settings from `theme`
    pub fn with_motion_of(&self, theme: &ParticleConfig) -> ParticleConfig {
        ParticleConfig {
            variant: self.variant,
            count: self.count,
            base_color: self.color,
            secondary_color: self.secondary_color,
            speed: theme.speed,
            size: theme.size,
        }
    }
}

/// A scene definition, built-in or user-authored
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbientScene {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub mood: SceneMood,
    pub image: SceneImage,
    pub particles: SceneParticles,
    pub color_accent: Color,
    /// Image overlay strength in `[0, 1]`
    pub overlay_opacity: f32,
    #[serde(default)]
    pub image_style: ImageStyle,
    #[serde(default)]
    pub ambient_glow: bool,
    #[serde(default)]
    pub is_custom: bool,
}

impl AmbientScene {
    /// Clamp ranged fields into their documented bounds
    ///
    /// Overlay opacities above 1 are read as percentages, the format older
    /// saved scenes used.
    pub fn normalized(mut self) -> Self {
        let opacity = if self.overlay_opacity.is_finite() {
            self.overlay_opacity
        } else {
            0.0
        };
        self.overlay_opacity = if opacity > 1.0 {
            (opacity / 100.0).min(1.0)
        } else {
            opacity.max(0.0)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_overlays_are_normalized() {
        let mut scene = ScenePreset::MountainFocus.scene();
        scene.overlay_opacity = 35.0;
        assert_eq!(scene.clone().normalized().overlay_opacity, 0.35);

        scene.overlay_opacity = -2.0;
        assert_eq!(scene.clone().normalized().overlay_opacity, 0.0);

        scene.overlay_opacity = f32::NAN;
        assert_eq!(scene.normalized().overlay_opacity, 0.0);
    }

    #[test]
    fn custom_scene_json_uses_camel_case() {
        let json = r#"{
            "id": "desk",
            "name": "My Desk",
            "mood": "focus",
            "image": { "id": "img_1", "url": "https://example.com/desk.jpg" },
            "particles": { "variant": "fireflies", "count": 6, "color": "hsl(38, 95%, 55%)" },
            "colorAccent": "38 95% 55%",
            "overlayOpacity": 0.2,
            "ambientGlow": true,
            "isCustom": true
        }"#;
        let scene: AmbientScene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.mood, SceneMood::Focus);
        assert_eq!(scene.image_style, ImageStyle::Card);
        assert!(scene.is_custom);
        assert_eq!(scene.particles.color, scene.color_accent);
    }
}
