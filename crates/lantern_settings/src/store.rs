//! Settings store lifecycle
//!
//! The store owns the in-memory copy of a user's three settings records and
//! writes each one back through its [`SettingsBackend`] whenever it changes.
//!
//! # States
//!
//! ```text
//! Uninitialized --load()--> Loading --> Ready
//!                                   \-> Degraded
//! Ready <--successful write-- Degraded --failed write--> Degraded
//! ```
//!
//! A degraded store still serves and accepts changes for the rest of the
//! session; only persistence is affected. Operations take `&mut self`, so
//! writes reach the backend in call order and a later change can never be
//! overwritten by an earlier one.

use crate::backend::{SettingsBackend, SettingsDomain, SettingsKey};
use crate::error::SettingsError;
use crate::events::{EventSink, PresentationEvent, ResetScope};
use crate::patch::{self, FieldRejection, Patchable, UpdateOutcome};
use lantern_ambient::{
    AccessibilitySignal, AmbientScene, BackgroundStyle, ColorSettings, PreferenceResolver,
    ResolvedPresentation, SceneSettings, SeasonalContext, ThemeSettings, WidgetConfig,
};
use lantern_animation::AnimationIntensity;
use lantern_paint::Color;
use lantern_theme::{ColorMode, ColorScheme};
use serde_json::{json, Map, Value};

/// Where the store is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    /// Persistence failed; in-memory settings are still authoritative
    Degraded,
}

/// Per-user settings with validated updates and write-through persistence
pub struct SettingsStore<B> {
    backend: B,
    key: SettingsKey,
    state: StoreState,
    theme: ThemeSettings,
    scene: SceneSettings,
    colors: ColorSettings,
    sink: Option<Box<dyn EventSink>>,
}

impl<B: SettingsBackend> SettingsStore<B> {
    /// A store holding defaults; call [`SettingsStore::load`] to read the
    /// persisted records
    pub fn new(backend: B, key: SettingsKey) -> Self {
        Self {
            backend,
            key,
            state: StoreState::Uninitialized,
            theme: ThemeSettings::default(),
            scene: SceneSettings::default(),
            colors: ColorSettings::default(),
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_degraded(&self) -> bool {
        self.state == StoreState::Degraded
    }

    pub fn key(&self) -> &SettingsKey {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    pub fn scene(&self) -> &SceneSettings {
        &self.scene
    }

    pub fn colors(&self) -> &ColorSettings {
        &self.colors
    }

    /// Read every record, repairing what is missing or malformed
    ///
    /// Missing records and records with invalid fields are rebuilt from
    /// defaults and written back. A failed read leaves defaults in memory
    /// and the store degraded, without overwriting what is on disk.
    pub fn load(&mut self) -> StoreState {
        self.state = StoreState::Loading;
        tracing::debug!(user = self.key.user(), "loading settings");

        let mut healthy = true;
        match self.load_record::<ThemeSettings>(SettingsDomain::Theme) {
            Some(theme) => self.theme = theme,
            None => healthy = false,
        }
        match self.load_record::<SceneSettings>(SettingsDomain::Scene) {
            Some(mut scene) => {
                scene.custom_scenes = scene
                    .custom_scenes
                    .into_iter()
                    .map(|scene| scene.normalized())
                    .collect();
                self.scene = scene;
            }
            None => healthy = false,
        }
        match self.load_record::<ColorSettings>(SettingsDomain::Colors) {
            Some(colors) => self.colors = colors,
            None => healthy = false,
        }

        // A failed repair write may already have degraded the store
        if healthy && self.state == StoreState::Loading {
            self.state = StoreState::Ready;
        } else {
            self.state = StoreState::Degraded;
        }
        tracing::debug!(state = ?self.state, "settings loaded");
        self.state
    }

    /// `None` when the backend could not be read
    fn load_record<T: Patchable + Default>(&mut self, domain: SettingsDomain) -> Option<T> {
        let key = self.key.for_domain(domain);
        let bytes = match self.backend.read(&key) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(%key, error = %err, "settings read failed, using defaults");
                return None;
            }
        };

        let (record, repaired) = match bytes.map(|b| serde_json::from_slice::<Value>(&b)) {
            None => {
                tracing::debug!(%key, "no stored settings, writing defaults");
                (T::default(), true)
            }
            Some(Ok(Value::Object(stored))) => {
                let outcome = patch::sanitize::<T>(&stored);
                for rejection in &outcome.rejected {
                    tracing::warn!(
                        %key,
                        field = rejection.field.as_str(),
                        reason = rejection.reason.as_str(),
                        "stored field invalid, using default"
                    );
                }
                let repaired = !outcome.is_clean();
                (outcome.record, repaired)
            }
            Some(Ok(_)) | Some(Err(_)) => {
                tracing::warn!(%key, "stored settings unreadable, resetting to defaults");
                (T::default(), true)
            }
        };

        if repaired {
            self.persist(domain, &record);
        }
        Some(record)
    }

    /// Write `record` under `domain`; failures degrade the store
    fn persist<T: serde::Serialize>(&mut self, domain: SettingsDomain, record: &T) {
        let key = self.key.for_domain(domain);
        let written = serde_json::to_vec(record)
            .map_err(SettingsError::from)
            .and_then(|bytes| {
                self.backend
                    .write(&key, &bytes)
                    .map_err(SettingsError::from)
            });

        match written {
            Ok(()) => {
                if self.state == StoreState::Degraded {
                    tracing::info!(%key, "settings write succeeded, leaving degraded mode");
                    self.state = StoreState::Ready;
                }
            }
            Err(err) => {
                tracing::warn!(%key, error = %err, "settings write failed, continuing in memory");
                self.state = StoreState::Degraded;
            }
        }
    }

    fn emit(&self, event: PresentationEvent) {
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(err) = sink.emit(&event) {
            tracing::warn!(?event, error = %err, "event sink failed");
        }
    }

    fn commit_theme(&mut self, theme: ThemeSettings) {
        let previous = std::mem::replace(&mut self.theme, theme);
        let theme = self.theme.clone();
        self.persist(SettingsDomain::Theme, &theme);

        if previous.theme_id != theme.theme_id {
            self.emit(PresentationEvent::ThemeChanged {
                theme_id: theme.theme_id.clone(),
            });
        }
        if previous.color_mode != theme.color_mode {
            self.emit(PresentationEvent::ColorModeChanged {
                mode: theme.color_mode,
            });
        }
    }

    fn commit_scene(&mut self, scene: SceneSettings) {
        let previous_active = self.active_scene_id();
        self.scene = scene;
        let scene = self.scene.clone();
        self.persist(SettingsDomain::Scene, &scene);

        let active = self.active_scene_id();
        if previous_active != active {
            self.emit(PresentationEvent::SceneChanged { scene_id: active });
        }
    }

    /// The scene the resolver would try to use
    fn active_scene_id(&self) -> Option<String> {
        self.scene
            .enabled
            .then(|| self.scene.active_scene_id.clone())
            .flatten()
    }

    // Theme settings

    /// Apply a partial theme-settings update, field by field
    pub fn update_theme(&mut self, patch: &Map<String, Value>) -> UpdateOutcome<ThemeSettings> {
        let outcome = patch::apply(&self.theme, patch);
        self.commit_theme(outcome.record.clone());
        outcome
    }

    /// Switch to the built-in theme `theme_id`; unknown ids are rejected
    pub fn set_theme(&mut self, theme_id: &str) -> UpdateOutcome<ThemeSettings> {
        self.update_theme(&single("themeId", json!(theme_id)))
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) -> &ThemeSettings {
        let theme = ThemeSettings {
            color_mode: mode,
            ..self.theme.clone()
        };
        self.commit_theme(theme);
        &self.theme
    }

    /// Flip the scheme currently on screen; `system` resolves against
    /// `system_scheme` first, so the result is always explicit
    pub fn toggle_color_mode(&mut self, system_scheme: ColorScheme) -> &ThemeSettings {
        let current = self.theme.color_mode.scheme(system_scheme);
        self.set_color_mode(ColorMode::from(current.toggle()))
    }

    pub fn set_animation_intensity(&mut self, intensity: AnimationIntensity) -> &ThemeSettings {
        let theme = ThemeSettings {
            animation_intensity: intensity,
            ..self.theme.clone()
        };
        self.commit_theme(theme);
        &self.theme
    }

    pub fn set_background_style(&mut self, style: BackgroundStyle) -> &ThemeSettings {
        let theme = ThemeSettings {
            background_style: style,
            ..self.theme.clone()
        };
        self.commit_theme(theme);
        &self.theme
    }

    /// Set or clear the accent override; out-of-range colors are rejected
    pub fn set_custom_accent_color(
        &mut self,
        color: Option<Color>,
    ) -> UpdateOutcome<ThemeSettings> {
        match color {
            Some(color) if !color.is_valid() => {
                tracing::debug!(?color, "custom accent rejected");
                UpdateOutcome {
                    record: self.theme.clone(),
                    rejected: vec![FieldRejection {
                        field: "customAccentColor".to_string(),
                        value: json!([color.r, color.g, color.b, color.a]),
                        reason: "color out of range".to_string(),
                    }],
                }
            }
            _ => {
                let value = json!(color.map(|color| color.to_css()));
                self.update_theme(&single("customAccentColor", value))
            }
        }
    }

    pub fn reset_theme(&mut self) -> &ThemeSettings {
        self.commit_theme(ThemeSettings::default());
        self.emit(PresentationEvent::SettingsReset {
            scope: ResetScope::Theme,
        });
        &self.theme
    }

    // Scene settings

    /// Patch scene settings; custom scenes in the patch are marked custom
    /// and normalized like [`add_custom_scene`](Self::add_custom_scene)
    pub fn update_scene(&mut self, patch: &Map<String, Value>) -> UpdateOutcome<SceneSettings> {
        let mut outcome = patch::apply(&self.scene, patch);
        outcome.record.custom_scenes = std::mem::take(&mut outcome.record.custom_scenes)
            .into_iter()
            .map(|scene| AmbientScene { is_custom: true, ..scene }.normalized())
            .collect();
        self.commit_scene(outcome.record.clone());
        outcome
    }

    /// Activate a scene, or turn scenes off with `None`
    pub fn set_active_scene(&mut self, scene_id: Option<&str>) -> &SceneSettings {
        let scene = SceneSettings {
            enabled: scene_id.is_some(),
            active_scene_id: scene_id.map(str::to_string),
            ..self.scene.clone()
        };
        self.commit_scene(scene);
        &self.scene
    }

    pub fn toggle_scenes(&mut self) -> &SceneSettings {
        let scene = SceneSettings {
            enabled: !self.scene.enabled,
            ..self.scene.clone()
        };
        self.commit_scene(scene);
        &self.scene
    }

    /// Store a user-authored scene, replacing one with the same id
    pub fn add_custom_scene(&mut self, scene: AmbientScene) -> &SceneSettings {
        let scene = AmbientScene {
            is_custom: true,
            ..scene
        }
        .normalized();
        let mut settings = self.scene.clone();
        settings.custom_scenes.retain(|existing| existing.id != scene.id);
        settings.custom_scenes.push(scene);
        self.commit_scene(settings);
        &self.scene
    }

    /// Delete a custom scene; clears the active scene if it was this one
    pub fn remove_custom_scene(&mut self, scene_id: &str) -> &SceneSettings {
        let mut settings = self.scene.clone();
        settings.custom_scenes.retain(|scene| scene.id != scene_id);
        if settings.active_scene_id.as_deref() == Some(scene_id) {
            settings.active_scene_id = None;
        }
        self.commit_scene(settings);
        &self.scene
    }

    /// Patch a custom scene in place; `None` if no custom scene has `scene_id`
    pub fn update_custom_scene(
        &mut self,
        scene_id: &str,
        patch: &Map<String, Value>,
    ) -> Option<UpdateOutcome<AmbientScene>> {
        let index = self.scene.custom_scenes.iter().position(|s| s.id == scene_id)?;
        let mut patch = patch.clone();
        patch.remove("id");
        patch.remove("isCustom");

        let outcome = patch::apply(&self.scene.custom_scenes[index], &patch);
        let mut settings = self.scene.clone();
        settings.custom_scenes[index] = outcome.record.clone().normalized();
        self.commit_scene(settings);
        Some(outcome)
    }

    /// Append a widget; a widget with the same id is replaced
    pub fn add_widget(&mut self, widget: WidgetConfig) -> &SceneSettings {
        let mut settings = self.scene.clone();
        settings.widget_layout.retain(|existing| existing.id != widget.id);
        settings.widget_layout.push(widget);
        self.commit_scene(settings);
        &self.scene
    }

    pub fn update_widget(
        &mut self,
        widget_id: &str,
        patch: &Map<String, Value>,
    ) -> Option<UpdateOutcome<WidgetConfig>> {
        let mut settings = self.scene.clone();
        let widget = settings.widget_mut(widget_id)?;
        let mut patch = patch.clone();
        patch.remove("id");

        let outcome = patch::apply(&*widget, &patch);
        *widget = outcome.record.clone();
        self.commit_scene(settings);
        Some(outcome)
    }

    pub fn remove_widget(&mut self, widget_id: &str) -> &SceneSettings {
        let mut settings = self.scene.clone();
        settings.widget_layout.retain(|widget| widget.id != widget_id);
        self.commit_scene(settings);
        &self.scene
    }

    pub fn toggle_widget_visibility(&mut self, widget_id: &str) -> &SceneSettings {
        let mut settings = self.scene.clone();
        if let Some(widget) = settings.widget_mut(widget_id) {
            widget.visible = !widget.visible;
            self.commit_scene(settings);
        }
        &self.scene
    }

    pub fn toggle_focus_mode(&mut self) -> &SceneSettings {
        let scene = SceneSettings {
            focus_mode_enabled: !self.scene.focus_mode_enabled,
            ..self.scene.clone()
        };
        self.commit_scene(scene);
        &self.scene
    }

    pub fn set_show_daily_inspiration(&mut self, show: bool) -> &SceneSettings {
        let scene = SceneSettings {
            show_daily_inspiration: show,
            ..self.scene.clone()
        };
        self.commit_scene(scene);
        &self.scene
    }

    pub fn reset_scene(&mut self) -> &SceneSettings {
        self.commit_scene(SceneSettings::default());
        self.emit(PresentationEvent::SettingsReset {
            scope: ResetScope::Scene,
        });
        &self.scene
    }

    // Color settings

    pub fn update_colors(&mut self, patch: &Map<String, Value>) -> UpdateOutcome<ColorSettings> {
        let outcome = patch::apply(&self.colors, patch);
        self.colors = outcome.record;
        let colors = self.colors;
        self.persist(SettingsDomain::Colors, &colors);
        outcome
    }

    /// Restore the default chrome colors; theme and scene settings are
    /// left alone
    pub fn reset_colors(&mut self) -> &ColorSettings {
        self.colors = ColorSettings::default();
        let colors = self.colors;
        self.persist(SettingsDomain::Colors, &colors);
        self.emit(PresentationEvent::SettingsReset {
            scope: ResetScope::Colors,
        });
        &self.colors
    }

    /// Restore every record to its defaults
    pub fn reset(&mut self) {
        self.theme = ThemeSettings::default();
        self.scene = SceneSettings::default();
        self.colors = ColorSettings::default();

        let (theme, scene, colors) = (self.theme.clone(), self.scene.clone(), self.colors);
        self.persist(SettingsDomain::Theme, &theme);
        self.persist(SettingsDomain::Scene, &scene);
        self.persist(SettingsDomain::Colors, &colors);
        self.emit(PresentationEvent::SettingsReset {
            scope: ResetScope::All,
        });
    }

    /// Resolve the current settings against the built-in catalogs
    pub fn resolve(
        &self,
        accessibility: &AccessibilitySignal,
        seasonal: &SeasonalContext,
    ) -> ResolvedPresentation {
        PreferenceResolver::default().resolve(&self.theme, &self.scene, accessibility, seasonal)
    }
}

fn single(field: &str, value: Value) -> Map<String, Value> {
    let mut patch = Map::new();
    patch.insert(field.to_string(), value);
    patch
}

/// Convenience for callers that build patches from pairs
pub fn patch_of<I, K>(fields: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    fields.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn store() -> SettingsStore<MemoryBackend> {
        let mut store = SettingsStore::new(MemoryBackend::new(), SettingsKey::new("test"));
        store.load();
        store
    }

    #[test]
    fn toggle_resolves_system_mode_first() {
        let mut store = store();
        assert_eq!(store.theme().color_mode, ColorMode::System);
        store.toggle_color_mode(ColorScheme::Dark);
        assert_eq!(store.theme().color_mode, ColorMode::Light);
        store.toggle_color_mode(ColorScheme::Dark);
        assert_eq!(store.theme().color_mode, ColorMode::Dark);
    }

    #[test]
    fn invalid_accent_is_rejected() {
        let mut store = store();
        let outcome = store.set_custom_accent_color(Some(Color::new(2.0, 0.0, 0.0, 1.0)));
        assert!(!outcome.is_clean());
        assert_eq!(store.theme().custom_accent_color, None);

        let outcome = store.set_custom_accent_color(Some(Color::from_hex(0x0ea5e9)));
        assert!(outcome.is_clean());
        assert_eq!(store.theme().custom_accent_color, Some(Color::from_hex(0x0ea5e9)));
    }

    #[test]
    fn scene_patch_marks_and_normalizes_custom_scenes() {
        let mut store = store();
        let mut scene = serde_json::to_value(lantern_ambient::ScenePreset::OceanWaves.scene())
            .unwrap();
        scene["id"] = "tide".into();
        scene["overlayOpacity"] = 40.into();
        scene["isCustom"] = false.into();

        let mut patch = Map::new();
        patch.insert("customScenes".into(), Value::Array(vec![scene]));
        let outcome = store.update_scene(&patch);

        assert!(outcome.is_clean());
        let tide = store.scene().custom_scene("tide").unwrap();
        assert!(tide.is_custom);
        assert!((tide.overlay_opacity - 0.4).abs() < 1e-6);
        assert_eq!(outcome.record.custom_scenes[0], *tide);
    }

    #[test]
    fn set_active_scene_tracks_enabled() {
        let mut store = store();
        store.set_active_scene(Some("ocean-waves"));
        assert!(store.scene().enabled);
        store.set_active_scene(None);
        assert!(!store.scene().enabled);
        assert_eq!(store.scene().active_scene_id, None);
    }

    #[test]
    fn patch_of_collects_pairs() {
        let patch = patch_of([("colorMode", json!("dark"))]);
        assert_eq!(patch["colorMode"], "dark");
    }
}
