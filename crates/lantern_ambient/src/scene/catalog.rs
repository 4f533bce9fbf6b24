//! Built-in scenes and scene lookup

use super::{AmbientScene, Attribution, ImageStyle, SceneImage, SceneMood, SceneParticles};
use indexmap::IndexMap;
use lantern_paint::Color;
use lantern_theme::ParticleVariant;
use rustc_hash::FxBuildHasher;
use std::sync::OnceLock;

/// Built-in scene catalog entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenePreset {
    MountainFocus,
    ForestCalm,
    OceanWaves,
    SunsetCreative,
    AuroraWonder,
    CityEnergy,
    CosmicDream,
    ZenMinimal,
}

impl ScenePreset {
    pub fn id(self) -> &'static str {
        match self {
            Self::MountainFocus => "mountain-focus",
            Self::ForestCalm => "forest-calm",
            Self::OceanWaves => "ocean-waves",
            Self::SunsetCreative => "sunset-creative",
            Self::AuroraWonder => "aurora-wonder",
            Self::CityEnergy => "city-energy",
            Self::CosmicDream => "cosmic-dream",
            Self::ZenMinimal => "zen-minimal",
        }
    }

    pub fn all() -> &'static [ScenePreset] {
        const PRESETS: [ScenePreset; 8] = [
            ScenePreset::MountainFocus,
            ScenePreset::ForestCalm,
            ScenePreset::OceanWaves,
            ScenePreset::SunsetCreative,
            ScenePreset::AuroraWonder,
            ScenePreset::CityEnergy,
            ScenePreset::CosmicDream,
            ScenePreset::ZenMinimal,
        ];
        &PRESETS
    }

    pub fn scene(self) -> AmbientScene {
        match self {
            Self::MountainFocus => prebuilt(
                self,
                "Mountain Focus",
                "Majestic peaks for deep concentration",
                SceneMood::Focus,
                photo("mountain-1", "1506905925346-21bda4d32df4", 0x4a6fa5)
                    .credit("Samuel Ferrara", "samferrara", "1527pjeb6jg"),
                particles(ParticleVariant::Snow, 15, (210.0, 30.0, 90.0), None),
                (210.0, 50.0, 60.0),
                0.20,
                ImageStyle::Card,
                true,
            ),
            Self::ForestCalm => prebuilt(
                self,
                "Forest Sanctuary",
                "Peaceful woodland for relaxation",
                SceneMood::Relax,
                photo("forest-1", "1448375240586-882707db888b", 0x2d5a4a)
                    .credit("Sebastian Unrau", "sebastian_unrau", "sp-p7uuT0tw"),
                particles(
                    ParticleVariant::Leaves,
                    20,
                    (140.0, 40.0, 45.0),
                    Some((95.0, 35.0, 55.0)),
                ),
                (152.0, 45.0, 40.0),
                0.15,
                ImageStyle::Floating,
                true,
            ),
            Self::OceanWaves => prebuilt(
                self,
                "Ocean Breeze",
                "Calming waves for peaceful moments",
                SceneMood::Relax,
                photo("ocean-1", "1505118380757-91f5f5632de0", 0x1e90b0)
                    .credit("Frank McKenna", "frankiefoto", "tjX_sniNzgQ"),
                particles(
                    ParticleVariant::Bubbles,
                    25,
                    (195.0, 70.0, 65.0),
                    Some((180.0, 60.0, 55.0)),
                ),
                (195.0, 75.0, 55.0),
                0.18,
                ImageStyle::Card,
                true,
            ),
            Self::SunsetCreative => prebuilt(
                self,
                "Golden Hour",
                "Inspiring sunset for creative work",
                SceneMood::Create,
                photo("sunset-1", "1495616811223-4d98c6e9c869", 0xe67e22)
                    .credit("Luca Bravo", "lucabravo", "ESkw2ayO2As"),
                particles(
                    ParticleVariant::Fireflies,
                    12,
                    (35.0, 95.0, 55.0),
                    Some((20.0, 90.0, 50.0)),
                ),
                (30.0, 90.0, 55.0),
                0.12,
                ImageStyle::Floating,
                true,
            ),
            Self::AuroraWonder => prebuilt(
                self,
                "Northern Lights",
                "Magical aurora for inspiration",
                SceneMood::Create,
                photo("aurora-1", "1531366936337-7c912a4589a7", 0x6b5b95)
                    .credit("Johny Goerend", "johnygoerend", "Oz2ZQ2j8We8"),
                particles(
                    ParticleVariant::Aurora,
                    6,
                    (280.0, 70.0, 60.0),
                    Some((160.0, 70.0, 50.0)),
                ),
                (270.0, 65.0, 55.0),
                0.10,
                ImageStyle::Framed,
                true,
            ),
            Self::CityEnergy => prebuilt(
                self,
                "Urban Pulse",
                "City lights for energized focus",
                SceneMood::Energize,
                photo("city-1", "1519501025264-65ba15a82390", 0x1a1a2e)
                    .credit("Jezael Melgoza", "jezael", "layMbSJ3YOE"),
                particles(
                    ParticleVariant::Sparks,
                    18,
                    (45.0, 100.0, 60.0),
                    Some((200.0, 100.0, 60.0)),
                ),
                (45.0, 95.0, 55.0),
                0.25,
                ImageStyle::Card,
                true,
            ),
            Self::CosmicDream => prebuilt(
                self,
                "Cosmic Dream",
                "Stars and galaxies for wonder",
                SceneMood::Create,
                photo("cosmic-1", "1462331940025-496dfbfc7564", 0x1a1a3e)
                    .credit("NASA", "nasa", "rTZW4f02zY8"),
                particles(
                    ParticleVariant::Stars,
                    50,
                    (0.0, 0.0, 100.0),
                    Some((270.0, 100.0, 70.0)),
                ),
                (270.0, 80.0, 60.0),
                0.08,
                ImageStyle::Framed,
                true,
            ),
            Self::ZenMinimal => prebuilt(
                self,
                "Zen Garden",
                "Minimalist peace for clarity",
                SceneMood::Focus,
                photo("zen-1", "1544367567-0f2fcb009e0b", 0xd4c5a9)
                    .credit("Jared Rice", "jareddrice", "NTyBbu66_SI"),
                particles(ParticleVariant::Orbs, 4, (40.0, 30.0, 75.0), None),
                (40.0, 25.0, 65.0),
                0.05,
                ImageStyle::Minimal,
                false,
            ),
        }
    }
}

type Hsl = (f32, f32, f32);

fn hsl((h, s, l): Hsl) -> Color {
    Color::from_hsl(h, s, l)
}

fn photo(id: &str, photo_id: &str, dominant: u32) -> SceneImage {
    SceneImage {
        id: id.to_string(),
        url: format!("https://images.unsplash.com/photo-{photo_id}?w=1200"),
        thumbnail_url: Some(format!("https://images.unsplash.com/photo-{photo_id}?w=400")),
        attribution: None,
        dominant_color: Some(Color::from_hex(dominant)),
    }
}

impl SceneImage {
    fn credit(mut self, name: &str, username: &str, unsplash_id: &str) -> Self {
        self.attribution = Some(Attribution {
            photographer_name: name.to_string(),
            photographer_username: username.to_string(),
            photographer_url: format!("https://unsplash.com/@{username}"),
            unsplash_url: format!("https://unsplash.com/photos/{unsplash_id}"),
        });
        self
    }
}

fn particles(
    variant: ParticleVariant,
    count: u32,
    color: Hsl,
    secondary: Option<Hsl>,
) -> SceneParticles {
    SceneParticles {
        variant,
        count,
        color: hsl(color),
        secondary_color: secondary.map(hsl),
    }
}

#[allow(clippy::too_many_arguments)]
fn prebuilt(
    preset: ScenePreset,
    name: &str,
    description: &str,
    mood: SceneMood,
    image: SceneImage,
    particles: SceneParticles,
    accent: Hsl,
    overlay_opacity: f32,
    image_style: ImageStyle,
    ambient_glow: bool,
) -> AmbientScene {
    AmbientScene {
        id: preset.id().to_string(),
        name: name.to_string(),
        description: description.to_string(),
        mood,
        image,
        particles,
        color_accent: hsl(accent),
        overlay_opacity,
        image_style,
        ambient_glow,
        is_custom: false,
    }
}

/// Read-only registry of built-in scenes keyed by id
#[derive(Debug)]
pub struct SceneCatalog {
    scenes: IndexMap<&'static str, AmbientScene, FxBuildHasher>,
}

static CATALOG: OnceLock<SceneCatalog> = OnceLock::new();

impl SceneCatalog {
    pub fn builtin() -> Self {
        let mut scenes =
            IndexMap::with_capacity_and_hasher(ScenePreset::all().len(), FxBuildHasher);
        for &preset in ScenePreset::all() {
            scenes.insert(preset.id(), preset.scene());
        }
        tracing::debug!(count = scenes.len(), "scene catalog built");
        Self { scenes }
    }

    /// Process-wide catalog, built on first use
    pub fn global() -> &'static SceneCatalog {
        CATALOG.get_or_init(Self::builtin)
    }

    /// Built-in scene by id
    pub fn get(&self, id: &str) -> Option<&AmbientScene> {
        self.scenes.get(id)
    }

    /// Look up `id` in the catalog, then in the user's custom scenes
    pub fn resolve<'a>(
        &'a self,
        id: &str,
        custom: &'a [AmbientScene],
    ) -> Option<&'a AmbientScene> {
        self.get(id).or_else(|| custom.iter().find(|scene| scene.id == id))
    }

    pub fn all(&self) -> impl Iterator<Item = &AmbientScene> {
        self.scenes.values()
    }

    /// Scenes with `mood`, built-ins first, then custom scenes in list order
    pub fn by_mood<'a>(
        &'a self,
        mood: SceneMood,
        custom: &'a [AmbientScene],
    ) -> impl Iterator<Item = &'a AmbientScene> {
        self.scenes
            .values()
            .chain(custom.iter())
            .filter(move |scene| scene.mood == mood)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Default for SceneCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(id: &str, mood: SceneMood) -> AmbientScene {
        AmbientScene {
            id: id.to_string(),
            name: id.to_string(),
            mood,
            is_custom: true,
            ..ScenePreset::ZenMinimal.scene()
        }
    }

    #[test]
    fn catalog_has_every_preset() {
        let catalog = SceneCatalog::builtin();
        assert_eq!(catalog.len(), 8);
        for &preset in ScenePreset::all() {
            let scene = catalog.get(preset.id()).unwrap();
            assert!(!scene.is_custom);
            assert!((0.0..=1.0).contains(&scene.overlay_opacity));
        }
    }

    #[test]
    fn resolve_checks_catalog_before_custom_list() {
        let catalog = SceneCatalog::builtin();
        let shadow = custom("ocean-waves", SceneMood::Energize);
        let mine = custom("my-room", SceneMood::Relax);
        let customs = vec![shadow, mine];

        let ocean = catalog.resolve("ocean-waves", &customs).unwrap();
        assert!(!ocean.is_custom);
        assert!(catalog.resolve("my-room", &customs).unwrap().is_custom);
        assert!(catalog.resolve("deleted", &customs).is_none());
    }

    #[test]
    fn by_mood_lists_builtins_first() {
        let catalog = SceneCatalog::builtin();
        let customs = vec![custom("my-room", SceneMood::Relax)];
        let ids: Vec<&str> = catalog
            .by_mood(SceneMood::Relax, &customs)
            .map(|scene| scene.id.as_str())
            .collect();
        assert_eq!(ids, vec!["forest-calm", "ocean-waves", "my-room"]);
    }
}
