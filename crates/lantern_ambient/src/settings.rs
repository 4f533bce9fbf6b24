//! Persisted user preferences
//!
//! Three independent records, each stored under its own key: theme settings,
//! scene settings and the small color-settings record for chrome colors.
//! Every field has a documented default; see the `Default` impls.

use crate::scene::AmbientScene;
use lantern_animation::AnimationIntensity;
use lantern_paint::Color;
use lantern_theme::{ColorMode, DEFAULT_THEME_ID};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Background layer the user picked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    #[default]
    Particles,
    Orbs,
    Minimal,
    Dynamic,
}

impl BackgroundStyle {
    pub fn all() -> &'static [BackgroundStyle] {
        &[Self::Particles, Self::Orbs, Self::Minimal, Self::Dynamic]
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Particles => "particles",
            Self::Orbs => "orbs",
            Self::Minimal => "minimal",
            Self::Dynamic => "dynamic",
        }
    }

    /// Particle density factor for this style
    pub fn particle_factor(self) -> f32 {
        match self {
            Self::Particles => 1.0,
            Self::Dynamic => 1.5,
            Self::Minimal => 0.5,
            Self::Orbs => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Falls back to the default theme when the id is unknown
    pub theme_id: String,
    pub color_mode: ColorMode,
    pub animation_intensity: AnimationIntensity,
    pub background_style: BackgroundStyle,
    /// Replaces the palette's primary token when set
    pub custom_accent_color: Option<Color>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            theme_id: DEFAULT_THEME_ID.to_string(),
            color_mode: ColorMode::System,
            animation_intensity: AnimationIntensity::Normal,
            background_style: BackgroundStyle::Particles,
            custom_accent_color: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    Clock,
    Weather,
    Inspiration,
    MoodTracker,
    FocusTimer,
    SceneCard,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetPosition {
    pub x: f32,
    pub y: f32,
}

/// A dashboard widget placement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WidgetType,
    pub position: WidgetPosition,
    #[serde(default)]
    pub size: WidgetSize,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    /// Widget-specific options, passed through untouched
    #[serde(default)]
    pub settings: Map<String, Value>,
}

fn visible_by_default() -> bool {
    true
}

impl WidgetConfig {
    pub fn new(id: impl Into<String>, kind: WidgetType, x: f32, y: f32, size: WidgetSize) -> Self {
        Self {
            id: id.into(),
            kind,
            position: WidgetPosition { x, y },
            size,
            visible: true,
            settings: Map::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneSettings {
    pub enabled: bool,
    /// May point at a scene that no longer exists; resolution tolerates that
    pub active_scene_id: Option<String>,
    pub custom_scenes: Vec<AmbientScene>,
    pub widget_layout: Vec<WidgetConfig>,
    pub show_daily_inspiration: bool,
    pub focus_mode_enabled: bool,
}

impl SceneSettings {
    pub fn custom_scene(&self, id: &str) -> Option<&AmbientScene> {
        self.custom_scenes.iter().find(|scene| scene.id == id)
    }

    pub fn widget_mut(&mut self, id: &str) -> Option<&mut WidgetConfig> {
        self.widget_layout.iter_mut().find(|widget| widget.id == id)
    }

    /// Widgets to draw, in layout order
    pub fn visible_widgets(&self) -> impl Iterator<Item = &WidgetConfig> {
        self.widget_layout.iter().filter(|widget| widget.visible)
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            active_scene_id: None,
            custom_scenes: Vec::new(),
            widget_layout: vec![
                WidgetConfig::new("clock-1", WidgetType::Clock, 20.0, 20.0, WidgetSize::Medium),
                WidgetConfig::new(
                    "inspiration-1",
                    WidgetType::Inspiration,
                    50.0,
                    50.0,
                    WidgetSize::Large,
                ),
            ],
            show_daily_inspiration: true,
            focus_mode_enabled: false,
        }
    }
}

/// Chrome colors outside the theme palette
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorSettings {
    pub username_color: Color,
    pub highlight_color: Color,
    pub logo_icon_color: Color,
    pub logo_bg_color: Color,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            username_color: Color::from_hex(0xa855f7),
            highlight_color: Color::from_hex(0xa855f7),
            logo_icon_color: Color::WHITE,
            logo_bg_color: Color::from_hex(0x7c3aed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn theme_settings_defaults() {
        let settings = ThemeSettings::default();
        assert_eq!(settings.theme_id, "lantern");
        assert_eq!(settings.color_mode, ColorMode::System);
        assert_eq!(settings.animation_intensity, AnimationIntensity::Normal);
        assert_eq!(settings.background_style, BackgroundStyle::Particles);
        assert_eq!(settings.custom_accent_color, None);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: ThemeSettings =
            serde_json::from_str(r#"{"themeId":"ocean","colorMode":"dark"}"#).unwrap();
        assert_eq!(settings.theme_id, "ocean");
        assert_eq!(settings.color_mode, ColorMode::Dark);
        assert_eq!(settings.background_style, BackgroundStyle::Particles);
    }

    #[test]
    fn default_layout_has_clock_and_inspiration() {
        let settings = SceneSettings::default();
        let ids: Vec<&str> = settings.visible_widgets().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["clock-1", "inspiration-1"]);
        assert_eq!(settings.widget_layout[1].size, WidgetSize::Large);
    }

    #[test]
    fn widget_json_uses_type_key() {
        let widget: WidgetConfig = serde_json::from_str(
            r#"{"id":"t","type":"focus-timer","position":{"x":1,"y":2},"settings":{"minutes":25}}"#,
        )
        .unwrap();
        assert_eq!(widget.kind, WidgetType::FocusTimer);
        assert!(widget.visible);
        assert_eq!(widget.settings["minutes"], 25);
    }
}
