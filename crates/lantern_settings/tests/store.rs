//! Settings store lifecycle against real backends

use lantern_ambient::{
    AccessibilitySignal, BackgroundStyle, ColorSettings, SceneSettings, ScenePreset,
    SeasonalContext, ThemeSettings, WidgetConfig, WidgetSize, WidgetType,
};
use lantern_animation::AnimationIntensity;
use lantern_paint::Color;
use lantern_settings::{
    patch_of, EventSink, FileBackend, MemoryBackend, PresentationEvent, RecordingSink, ResetScope,
    SettingsBackend, SettingsDomain, SettingsError, SettingsKey, SettingsStore, StorageError,
    StoreState,
};
use lantern_theme::{ColorMode, ParticleVariant};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn key() -> SettingsKey {
    SettingsKey::new("tester")
}

fn stored(backend: &MemoryBackend, domain: SettingsDomain) -> Value {
    let bytes = backend.get(&key().for_domain(domain)).expect("record persisted");
    serde_json::from_slice(&bytes).unwrap()
}

/// Backend whose reads and writes can be switched off from the test
#[derive(Default)]
struct Switches {
    inner: MemoryBackend,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

struct FlakyBackend(Arc<Switches>);

impl SettingsBackend for FlakyBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        if self.0.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("read refused".into()));
        }
        self.0.inner.read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if self.0.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("write refused".into()));
        }
        self.0.inner.write(key, bytes)
    }
}

#[test]
fn first_load_persists_defaults() {
    let mut store = SettingsStore::new(MemoryBackend::new(), key());
    assert_eq!(store.state(), StoreState::Uninitialized);
    assert_eq!(store.load(), StoreState::Ready);

    assert_eq!(store.theme(), &ThemeSettings::default());
    assert_eq!(store.scene(), &SceneSettings::default());
    let theme = stored(store.backend(), SettingsDomain::Theme);
    assert_eq!(theme["themeId"], "lantern");
    assert_eq!(theme["colorMode"], "system");
}

#[test]
fn load_repairs_bad_fields_and_keeps_good_ones() {
    let backend = MemoryBackend::new();
    backend.insert(
        key().for_domain(SettingsDomain::Theme),
        r#"{"themeId":"forest","colorMode":"sepia","animationIntensity":"subtle"}"#,
    );
    backend.insert(key().for_domain(SettingsDomain::Scene), "not json at all");

    let mut store = SettingsStore::new(backend, key());
    assert_eq!(store.load(), StoreState::Ready);

    assert_eq!(store.theme().theme_id, "forest");
    assert_eq!(store.theme().color_mode, ColorMode::System);
    assert_eq!(store.scene(), &SceneSettings::default());

    let theme = stored(store.backend(), SettingsDomain::Theme);
    assert_eq!(theme["colorMode"], "system");
    assert_eq!(theme["animationIntensity"], "subtle");
}

#[test]
fn load_keeps_readable_list_entries() {
    let mut mine = ScenePreset::ForestCalm.scene();
    mine.id = "mine".into();
    mine.is_custom = true;
    let mut sleepy = serde_json::to_value(&mine).unwrap();
    sleepy["id"] = json!("sleepy-scene");
    sleepy["mood"] = json!("sleepy");
    let record = json!({
        "enabled": true,
        "customScenes": [mine, sleepy],
        "widgetLayout": [
            { "id": "clock-1", "type": "clock", "position": { "x": 5.0, "y": 7.0 } },
            { "type": "calendar" },
        ],
    });

    let backend = MemoryBackend::new();
    backend.insert(key().for_domain(SettingsDomain::Scene), record.to_string());
    let mut store = SettingsStore::new(backend, key());
    assert_eq!(store.load(), StoreState::Ready);

    let scenes: Vec<&str> = store.scene().custom_scenes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(scenes, vec!["mine"]);
    let widgets: Vec<&str> = store.scene().widget_layout.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(widgets, vec!["clock-1"]);
    assert_eq!(store.scene().widget_layout[0].position.y, 7.0);

    let persisted = stored(store.backend(), SettingsDomain::Scene);
    assert_eq!(persisted["customScenes"].as_array().map(Vec::len), Some(1));
    assert_eq!(persisted["customScenes"][0]["id"], "mine");
    assert_eq!(persisted["widgetLayout"].as_array().map(Vec::len), Some(1));
    assert_eq!(persisted["widgetLayout"][0]["position"]["x"], 5.0);
}

#[test]
fn partial_update_applies_valid_fields_only() {
    let mut store = SettingsStore::new(MemoryBackend::new(), key());
    store.load();

    let outcome = store.update_theme(&patch_of([
        ("backgroundStyle", json!("lava-lamp")),
        ("colorMode", json!("dark")),
    ]));

    assert_eq!(outcome.rejected_fields().collect::<Vec<_>>(), vec!["backgroundStyle"]);
    assert_eq!(store.theme().color_mode, ColorMode::Dark);
    assert_eq!(store.theme().background_style, BackgroundStyle::Particles);
    assert_eq!(stored(store.backend(), SettingsDomain::Theme)["colorMode"], "dark");
}

#[test]
fn later_updates_win() {
    let mut store = SettingsStore::new(MemoryBackend::new(), key());
    store.load();
    store.set_background_style(BackgroundStyle::Orbs);
    store.set_background_style(BackgroundStyle::Minimal);
    let theme = stored(store.backend(), SettingsDomain::Theme);
    assert_eq!(theme["backgroundStyle"], "minimal");
}

#[test]
fn write_failure_degrades_until_next_success() {
    let backend = Arc::new(Switches::default());
    let mut store = SettingsStore::new(FlakyBackend(Arc::clone(&backend)), key());
    assert_eq!(store.load(), StoreState::Ready);

    backend.fail_writes.store(true, Ordering::SeqCst);
    store.set_color_mode(ColorMode::Dark);
    assert!(store.is_degraded());
    // The change still applies for this session
    assert_eq!(store.theme().color_mode, ColorMode::Dark);

    backend.fail_writes.store(false, Ordering::SeqCst);
    store.set_theme("ocean");
    assert_eq!(store.state(), StoreState::Ready);
}

#[test]
fn read_failure_serves_defaults_without_overwriting() {
    let backend = Arc::new(Switches::default());
    backend
        .inner
        .insert(key().for_domain(SettingsDomain::Theme), r#"{"themeId":"hockey"}"#);
    backend.fail_reads.store(true, Ordering::SeqCst);

    let mut store = SettingsStore::new(FlakyBackend(Arc::clone(&backend)), key());
    assert_eq!(store.load(), StoreState::Degraded);
    assert_eq!(store.theme(), &ThemeSettings::default());

    let kept = backend.inner.get(&key().for_domain(SettingsDomain::Theme)).unwrap();
    assert_eq!(kept, br#"{"themeId":"hockey"}"#.to_vec());
}

#[test]
fn reset_colors_leaves_theme_alone() {
    let mut store = SettingsStore::new(MemoryBackend::new(), key());
    store.load();
    store.set_theme("cyberpunk");
    let outcome = store.update_colors(&patch_of([("usernameColor", json!("#22c55e"))]));
    assert!(outcome.is_clean());

    store.reset_colors();
    assert_eq!(store.colors(), &ColorSettings::default());
    assert_eq!(store.theme().theme_id, "cyberpunk");
}

#[test]
fn full_reset_restores_every_record() {
    let sink = Arc::new(RecordingSink::new());
    let mut store =
        SettingsStore::new(MemoryBackend::new(), key()).with_sink(SharedSink(Arc::clone(&sink)));
    store.load();
    store.set_theme("soccer");
    store.set_active_scene(Some("city-energy"));
    store.reset();

    assert_eq!(store.theme(), &ThemeSettings::default());
    assert_eq!(store.scene(), &SceneSettings::default());

    assert_eq!(
        sink.events(),
        vec![
            PresentationEvent::ThemeChanged {
                theme_id: "soccer".into()
            },
            PresentationEvent::SceneChanged {
                scene_id: Some("city-energy".into())
            },
            PresentationEvent::SettingsReset {
                scope: ResetScope::All
            },
        ]
    );
}

struct SharedSink(Arc<RecordingSink>);

impl EventSink for SharedSink {
    fn emit(&self, event: &PresentationEvent) -> lantern_settings::Result<()> {
        self.0.emit(event)
    }
}

struct RefusingSink;

impl EventSink for RefusingSink {
    fn emit(&self, _event: &PresentationEvent) -> lantern_settings::Result<()> {
        Err(SettingsError::Sink("collector offline".into()))
    }
}

#[test]
fn sink_failure_does_not_block_changes() {
    let mut store = SettingsStore::new(MemoryBackend::new(), key()).with_sink(RefusingSink);
    store.load();

    store.set_theme("forest");
    store.set_active_scene(Some("ocean-waves"));

    assert_eq!(store.state(), StoreState::Ready);
    assert_eq!(store.theme().theme_id, "forest");
    assert_eq!(stored(store.backend(), SettingsDomain::Theme)["themeId"], "forest");
    assert_eq!(store.scene().active_scene_id.as_deref(), Some("ocean-waves"));
}

#[test]
fn removing_the_active_custom_scene_clears_it() {
    let mut store = SettingsStore::new(MemoryBackend::new(), key());
    store.load();

    let mut scene = ScenePreset::ForestCalm.scene();
    scene.id = "my-forest".into();
    store.add_custom_scene(scene);
    store.set_active_scene(Some("my-forest"));
    assert!(store.scene().custom_scene("my-forest").unwrap().is_custom);

    store.remove_custom_scene("my-forest");
    assert_eq!(store.scene().active_scene_id, None);
    assert!(store.scene().custom_scenes.is_empty());
}

#[test]
fn dangling_scene_id_resolves_to_theme_defaults() {
    let backend = MemoryBackend::new();
    backend.insert(
        key().for_domain(SettingsDomain::Scene),
        r#"{"enabled":true,"activeSceneId":"gone"}"#,
    );
    let mut store = SettingsStore::new(backend, key());
    store.load();

    let resolved = store.resolve(&AccessibilitySignal::default(), &SeasonalContext::default());
    assert_eq!(resolved.scene_id, None);
    assert_eq!(resolved.particles.variant, ParticleVariant::Fireflies);
}

#[test]
fn custom_scene_patch_normalizes_overlay() {
    let mut store = SettingsStore::new(MemoryBackend::new(), key());
    store.load();
    let mut scene = ScenePreset::CosmicDream.scene();
    scene.id = "stars".into();
    store.add_custom_scene(scene);

    let outcome = store
        .update_custom_scene("stars", &patch_of([("overlayOpacity", json!(30))]))
        .unwrap();
    assert!(outcome.is_clean());
    let stars = store.scene().custom_scene("stars").unwrap();
    assert!((stars.overlay_opacity - 0.3).abs() < 1e-6);
    assert!(store.update_custom_scene("nope", &patch_of([("name", json!("x"))])).is_none());
}

#[test]
fn widget_operations() {
    let mut store = SettingsStore::new(MemoryBackend::new(), key());
    store.load();

    let timer = WidgetConfig::new("timer", WidgetType::FocusTimer, 70.0, 10.0, WidgetSize::Small);
    store.add_widget(timer);
    store.toggle_widget_visibility("clock-1");
    let outcome = store
        .update_widget("timer", &patch_of([("size", json!("huge")), ("visible", json!(true))]))
        .unwrap();
    assert_eq!(outcome.rejected_fields().collect::<Vec<_>>(), vec!["size"]);

    let visible: Vec<&str> = store.scene().visible_widgets().map(|w| w.id.as_str()).collect();
    assert_eq!(visible, vec!["inspiration-1", "timer"]);

    store.remove_widget("timer");
    store.toggle_focus_mode();
    store.set_show_daily_inspiration(false);
    assert!(store.scene().focus_mode_enabled);
    assert!(!store.scene().show_daily_inspiration);
    assert_eq!(store.scene().widget_layout.len(), 2);

    store.reset_scene();
    assert_eq!(store.scene(), &SceneSettings::default());
}

#[test]
fn file_backend_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = SettingsStore::new(FileBackend::new(dir.path()), key());
        store.load();
        store.set_theme("sunset");
        store.set_custom_accent_color(Some(Color::from_hex(0xf97316)));
        store.toggle_scenes();
        store.set_animation_intensity(AnimationIntensity::Subtle);
    }

    let mut store = SettingsStore::new(FileBackend::new(dir.path()), key());
    assert_eq!(store.load(), StoreState::Ready);
    assert_eq!(store.theme().theme_id, "sunset");
    assert_eq!(store.theme().custom_accent_color, Some(Color::from_hex(0xf97316)));
    assert!(store.scene().enabled);
    assert_eq!(store.theme().animation_intensity, AnimationIntensity::Subtle);
}
