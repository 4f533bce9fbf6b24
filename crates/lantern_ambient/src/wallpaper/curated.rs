//! Curated wallpaper collection

use super::{DynamicSpeed, DynamicStyle, PatternKind, Wallpaper};
use lantern_paint::{Color, Gradient, GradientDirection, GradientStop};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Mood grouping for curated wallpapers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperMood {
    Serene,
    Vibrant,
    Minimal,
    Cosmic,
    Nature,
    Sunset,
    Ocean,
    Aurora,
    Midnight,
    Cinematic,
    Romantic,
    Mysterious,
    Epic,
    Dreamy,
}

impl WallpaperMood {
    pub fn all() -> &'static [WallpaperMood] {
        const MOODS: [WallpaperMood; 14] = [
            WallpaperMood::Serene,
            WallpaperMood::Vibrant,
            WallpaperMood::Minimal,
            WallpaperMood::Cosmic,
            WallpaperMood::Nature,
            WallpaperMood::Sunset,
            WallpaperMood::Ocean,
            WallpaperMood::Aurora,
            WallpaperMood::Midnight,
            WallpaperMood::Cinematic,
            WallpaperMood::Romantic,
            WallpaperMood::Mysterious,
            WallpaperMood::Epic,
            WallpaperMood::Dreamy,
        ];
        &MOODS
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Serene => "Soft, calming colors",
            Self::Vibrant => "Bold, energetic palettes",
            Self::Minimal => "Clean, distraction-free",
            Self::Cosmic => "Deep space vibes",
            Self::Nature => "Earthy, organic tones",
            Self::Sunset => "Warm golden hours",
            Self::Ocean => "Cool aquatic hues",
            Self::Aurora => "Magical light shows",
            Self::Midnight => "Dark, elegant themes",
            Self::Cinematic => "Hollywood movie magic",
            Self::Romantic => "Warm, intimate vibes",
            Self::Mysterious => "Intriguing atmospheres",
            Self::Epic => "Grand, sweeping visuals",
            Self::Dreamy => "Surreal, ethereal worlds",
        }
    }
}

/// A named wallpaper from the built-in collection
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CuratedWallpaper {
    pub id: &'static str,
    pub name: &'static str,
    pub mood: WallpaperMood,
    pub wallpaper: Wallpaper,
}

static COLLECTION: OnceLock<Vec<CuratedWallpaper>> = OnceLock::new();

/// Every curated wallpaper, gradients first
pub fn all() -> &'static [CuratedWallpaper] {
    COLLECTION.get_or_init(collection)
}

pub fn by_id(id: &str) -> Option<&'static CuratedWallpaper> {
    all().iter().find(|entry| entry.id == id)
}

pub fn by_mood(mood: WallpaperMood) -> impl Iterator<Item = &'static CuratedWallpaper> {
    all().iter().filter(move |entry| entry.mood == mood)
}

fn entry(
    id: &'static str,
    name: &'static str,
    mood: WallpaperMood,
    wallpaper: Wallpaper,
) -> CuratedWallpaper {
    CuratedWallpaper {
        id,
        name,
        mood,
        wallpaper,
    }
}

fn gradient(
    id: &'static str,
    name: &'static str,
    mood: WallpaperMood,
    direction: GradientDirection,
    stops: &[(u32, u8)],
) -> CuratedWallpaper {
    let stops = stops
        .iter()
        .map(|&(hex, percent)| {
            GradientStop::new(f32::from(percent) / 100.0, Color::from_hex(hex))
        })
        .collect();
    entry(id, name, mood, Wallpaper::Gradient(Gradient::new(direction, stops)))
}

fn mesh(
    id: &'static str,
    name: &'static str,
    mood: WallpaperMood,
    colors: &[u32],
) -> CuratedWallpaper {
    let colors: Vec<Color> = colors.iter().copied().map(Color::from_hex).collect();
    entry(id, name, mood, Wallpaper::mesh_from_colors(&colors))
}

fn solid(id: &'static str, name: &'static str, mood: WallpaperMood, hex: u32) -> CuratedWallpaper {
    entry(id, name, mood, Wallpaper::solid(Color::from_hex(hex)))
}

fn pattern(
    id: &'static str,
    name: &'static str,
    mood: WallpaperMood,
    kind: PatternKind,
    base: u32,
    foreground: u32,
    opacity: f32,
) -> CuratedWallpaper {
    let wallpaper = Wallpaper::Pattern {
        pattern: kind,
        base_color: Color::from_hex(base),
        pattern_color: Color::from_hex(foreground),
        opacity,
    };
    entry(id, name, mood, wallpaper)
}

fn dynamic(
    id: &'static str,
    name: &'static str,
    mood: WallpaperMood,
    style: DynamicStyle,
    speed: DynamicSpeed,
    colors: &[u32],
) -> CuratedWallpaper {
    let wallpaper = Wallpaper::Dynamic {
        style,
        colors: colors.iter().copied().map(Color::from_hex).collect(),
        speed,
    };
    entry(id, name, mood, wallpaper)
}

#[rustfmt::skip]
fn collection() -> Vec<CuratedWallpaper> {
    vec![
        // Gradients
        gradient("blade-runner-neon", "Blade Runner Neon", WallpaperMood::Cinematic, GradientDirection::ToBottomRight, &[(0x0d1b2a, 0), (0x1b263b, 25), (0x2d1b4e, 50), (0xd90429, 75), (0x00d4ff, 100)]),
        gradient("blade-runner-rain", "Blade Runner Rain", WallpaperMood::Cinematic, GradientDirection::ToBottom, &[(0x000000, 0), (0x0a1628, 30), (0x1a0a2e, 60), (0xff0054, 100)]),
        gradient("matrix-code", "Matrix Code", WallpaperMood::Cinematic, GradientDirection::ToBottom, &[(0x000000, 0), (0x001a00, 30), (0x003300, 60), (0x00ff00, 100)]),
        gradient("interstellar-wormhole", "Interstellar Wormhole", WallpaperMood::Epic, GradientDirection::Radial, &[(0xf5e6d3, 0), (0xd4a574, 25), (0x3d2914, 50), (0x1a1a2e, 75), (0x0a0a0a, 100)]),
        gradient("interstellar-dust", "Interstellar Dust", WallpaperMood::Epic, GradientDirection::ToBottomRight, &[(0x0d0d0d, 0), (0x1a1a2e, 40), (0x8b7355, 70), (0xd4a574, 100)]),
        gradient("tron-grid", "Tron Grid", WallpaperMood::Cinematic, GradientDirection::ToBottom, &[(0x000000, 0), (0x0a0a0a, 40), (0x001a33, 70), (0x00d4ff, 100)]),
        gradient("tron-orange", "Tron Uprising", WallpaperMood::Cinematic, GradientDirection::ToBottomRight, &[(0x000000, 0), (0x1a0a00, 40), (0x331a00, 70), (0xff6b00, 100)]),
        gradient("dune-desert", "Dune Desert", WallpaperMood::Epic, GradientDirection::ToTop, &[(0x1a120a, 0), (0x3d2914, 30), (0x8b6914, 60), (0xd4a574, 80), (0xf5e6d3, 100)]),
        gradient("dune-spice", "Dune Spice", WallpaperMood::Epic, GradientDirection::Radial, &[(0xff6b00, 0), (0xcc5500, 30), (0x663300, 60), (0x1a0d00, 100)]),
        gradient("pandora-glow", "Pandora Glow", WallpaperMood::Dreamy, GradientDirection::ToBottomRight, &[(0x0a1929, 0), (0x0d3b4a, 30), (0x00bcd4, 60), (0x9c27b0, 100)]),
        gradient("avatar-forest", "Pandora Forest", WallpaperMood::Dreamy, GradientDirection::ToBottom, &[(0x001a1a, 0), (0x003333, 30), (0x006666, 55), (0x00cccc, 75), (0xcc00ff, 100)]),
        gradient("inception-dream", "Inception Dream", WallpaperMood::Dreamy, GradientDirection::ToBottomRight, &[(0x1a1a2e, 0), (0x16213e, 30), (0x0f3460, 55), (0x4a69bd, 75), (0xe58e26, 100)]),
        gradient("inception-limbo", "Inception Limbo", WallpaperMood::Dreamy, GradientDirection::Radial, &[(0xf5e6d3, 0), (0xd4a574, 30), (0x666666, 60), (0x333333, 100)]),
        gradient("fury-road", "Fury Road", WallpaperMood::Epic, GradientDirection::ToTop, &[(0x1a0a00, 0), (0x3d1a00, 25), (0x802200, 45), (0xff6600, 65), (0xffcc00, 85), (0xffffff, 100)]),
        gradient("budapest-pink", "Budapest Pink", WallpaperMood::Romantic, GradientDirection::ToBottomRight, &[(0xf8c8c8, 0), (0xe8a4a4, 40), (0xd4a574, 70), (0xf5e6d3, 100)]),
        gradient("wes-anderson", "Wes Anderson", WallpaperMood::Romantic, GradientDirection::ToRight, &[(0xf4a7b9, 0), (0xf7d9c4, 25), (0x98d1d1, 50), (0xf9e07f, 75), (0xdda0dd, 100)]),
        gradient("la-la-twilight", "La La Twilight", WallpaperMood::Romantic, GradientDirection::ToTop, &[(0x1a1a2e, 0), (0x4a3478, 30), (0x7b68ee, 55), (0xffc107, 75), (0xff8c00, 100)]),
        gradient("joker-stairs", "Joker Stairs", WallpaperMood::Mysterious, GradientDirection::ToBottomRight, &[(0x0a1f0a, 0), (0x1a3d1a, 30), (0x2e8b2e, 55), (0x9b59b6, 80), (0x663399, 100)]),
        gradient("texas-desert", "Texas Desert", WallpaperMood::Minimal, GradientDirection::ToTop, &[(0x1a1510, 0), (0x3d3020, 30), (0x8b7355, 60), (0xd4c4a8, 85), (0xf5f0e6, 100)]),
        gradient("space-odyssey", "Space Odyssey", WallpaperMood::Epic, GradientDirection::Radial, &[(0xff0000, 0), (0x990000, 20), (0x330000, 40), (0x000000, 100)]),
        gradient("drive-neon", "Drive Neon", WallpaperMood::Cinematic, GradientDirection::ToBottomRight, &[(0x0d0d0d, 0), (0x1a0a1a, 30), (0x330033, 55), (0xff1493, 80), (0xff69b4, 100)]),
        gradient("amelie-paris", "Amelie Paris", WallpaperMood::Romantic, GradientDirection::ToBottomRight, &[(0x1a3d1a, 0), (0x2d5a27, 30), (0xb8860b, 60), (0xdaa520, 80), (0xffd700, 100)]),
        gradient("gravity-earth", "Gravity Earth", WallpaperMood::Epic, GradientDirection::Radial, &[(0x1e90ff, 0), (0x4169e1, 25), (0x0d0d0d, 50), (0x000000, 100)]),
        gradient("her-warmth", "Her Warmth", WallpaperMood::Romantic, GradientDirection::ToBottomRight, &[(0xfff0e6, 0), (0xffd4b8, 30), (0xff9966, 60), (0xff6633, 100)]),
        gradient("arrival-fog", "Arrival Fog", WallpaperMood::Mysterious, GradientDirection::ToBottom, &[(0xf5f5f5, 0), (0xcccccc, 30), (0x808080, 60), (0x333333, 100)]),
        gradient("soft-dawn", "Soft Dawn", WallpaperMood::Serene, GradientDirection::ToBottomRight, &[(0xfef3c7, 0), (0xfde68a, 30), (0xfcd34d, 60), (0xf59e0b, 100)]),
        gradient("lavender-dream", "Lavender Dream", WallpaperMood::Serene, GradientDirection::ToBottomRight, &[(0xe9d5ff, 0), (0xd8b4fe, 40), (0xc084fc, 70), (0xa855f7, 100)]),
        gradient("morning-mist", "Morning Mist", WallpaperMood::Serene, GradientDirection::ToBottom, &[(0xf0f9ff, 0), (0xe0f2fe, 40), (0xbae6fd, 70), (0x7dd3fc, 100)]),
        gradient("rose-quartz", "Rose Quartz", WallpaperMood::Serene, GradientDirection::ToBottomRight, &[(0xfdf2f8, 0), (0xfce7f3, 30), (0xfbcfe8, 60), (0xf9a8d4, 100)]),
        gradient("electric-violet", "Electric Violet", WallpaperMood::Vibrant, GradientDirection::ToRight, &[(0x7c3aed, 0), (0xa855f7, 30), (0xec4899, 70), (0xf43f5e, 100)]),
        gradient("neon-nights", "Neon Nights", WallpaperMood::Vibrant, GradientDirection::ToBottomRight, &[(0x0f172a, 0), (0x1e1b4b, 30), (0x5b21b6, 60), (0x7c3aed, 80), (0xa855f7, 100)]),
        gradient("tropical-fusion", "Tropical Fusion", WallpaperMood::Vibrant, GradientDirection::ToTopRight, &[(0xf97316, 0), (0xfb923c, 30), (0xfbbf24, 60), (0x84cc16, 100)]),
        gradient("cotton-candy", "Cotton Candy", WallpaperMood::Vibrant, GradientDirection::ToRight, &[(0xff6b9d, 0), (0xc44cff, 50), (0x6666ff, 100)]),
        gradient("subtle-gray", "Subtle Gray", WallpaperMood::Minimal, GradientDirection::ToBottom, &[(0xfafafa, 0), (0xf4f4f5, 50), (0xe4e4e7, 100)]),
        gradient("warm-paper", "Warm Paper", WallpaperMood::Minimal, GradientDirection::ToBottomRight, &[(0xfefce8, 0), (0xfef9c3, 50), (0xfef08a, 100)]),
        gradient("cool-slate", "Cool Slate", WallpaperMood::Minimal, GradientDirection::ToBottom, &[(0xf8fafc, 0), (0xf1f5f9, 50), (0xe2e8f0, 100)]),
        gradient("pure-white", "Pure White", WallpaperMood::Minimal, GradientDirection::Radial, &[(0xffffff, 0), (0xfafafa, 50), (0xf5f5f5, 100)]),
        gradient("deep-space", "Deep Space", WallpaperMood::Cosmic, GradientDirection::Radial, &[(0x1e1b4b, 0), (0x0f0a2e, 40), (0x0a0618, 70), (0x030014, 100)]),
        gradient("nebula", "Nebula", WallpaperMood::Cosmic, GradientDirection::ToBottomRight, &[(0x0c0a20, 0), (0x1a1040, 25), (0x3b0764, 50), (0x701a75, 75), (0xbe185d, 100)]),
        gradient("starfield", "Starfield", WallpaperMood::Cosmic, GradientDirection::Radial, &[(0x1e3a5f, 0), (0x0f172a, 50), (0x020617, 100)]),
        gradient("galaxy-swirl", "Galaxy Swirl", WallpaperMood::Cosmic, GradientDirection::Conic, &[(0x1e1b4b, 0), (0x5b21b6, 25), (0xec4899, 50), (0x06b6d4, 75), (0x1e1b4b, 100)]),
        gradient("forest-canopy", "Forest Canopy", WallpaperMood::Nature, GradientDirection::ToBottom, &[(0x166534, 0), (0x14532d, 40), (0x052e16, 70), (0x022c22, 100)]),
        gradient("spring-meadow", "Spring Meadow", WallpaperMood::Nature, GradientDirection::ToBottomRight, &[(0xd9f99d, 0), (0xa3e635, 40), (0x84cc16, 70), (0x65a30d, 100)]),
        gradient("moss-stone", "Moss Stone", WallpaperMood::Nature, GradientDirection::ToBottom, &[(0x365314, 0), (0x3f6212, 50), (0x4d7c0f, 100)]),
        gradient("golden-hour", "Golden Hour", WallpaperMood::Sunset, GradientDirection::ToTop, &[(0x7c2d12, 0), (0xc2410c, 25), (0xea580c, 50), (0xfb923c, 75), (0xfdba74, 100)]),
        gradient("desert-dusk", "Desert Dusk", WallpaperMood::Sunset, GradientDirection::ToTop, &[(0x1c1917, 0), (0x44403c, 30), (0x78716c, 50), (0xf97316, 75), (0xfbbf24, 100)]),
        gradient("twilight", "Twilight", WallpaperMood::Sunset, GradientDirection::ToTop, &[(0x0f172a, 0), (0x312e81, 30), (0x6366f1, 55), (0xf472b6, 75), (0xfda4af, 90), (0xfef3c7, 100)]),
        gradient("california-sunset", "California Sunset", WallpaperMood::Sunset, GradientDirection::ToTop, &[(0x0f172a, 0), (0x581c87, 20), (0xdc2626, 40), (0xf97316, 60), (0xfbbf24, 80), (0xfef3c7, 100)]),
        gradient("deep-ocean", "Deep Ocean", WallpaperMood::Ocean, GradientDirection::ToBottom, &[(0x164e63, 0), (0x155e75, 40), (0x0e7490, 70), (0x0891b2, 100)]),
        gradient("coral-reef", "Coral Reef", WallpaperMood::Ocean, GradientDirection::ToBottomRight, &[(0x0d9488, 0), (0x14b8a6, 40), (0x2dd4bf, 70), (0x5eead4, 100)]),
        gradient("arctic-ice", "Arctic Ice", WallpaperMood::Ocean, GradientDirection::Radial, &[(0xecfeff, 0), (0xcffafe, 30), (0xa5f3fc, 60), (0x67e8f9, 100)]),
        gradient("northern-lights", "Northern Lights", WallpaperMood::Aurora, GradientDirection::ToTopRight, &[(0x0f172a, 0), (0x134e4a, 30), (0x0d9488, 50), (0x2dd4bf, 70), (0xa7f3d0, 100)]),
        gradient("borealis", "Borealis", WallpaperMood::Aurora, GradientDirection::ToRight, &[(0x312e81, 0), (0x4f46e5, 25), (0x06b6d4, 50), (0x10b981, 75), (0x84cc16, 100)]),
        gradient("midnight-blue", "Midnight Blue", WallpaperMood::Midnight, GradientDirection::ToBottom, &[(0x020617, 0), (0x0f172a, 50), (0x1e293b, 100)]),
        gradient("obsidian", "Obsidian", WallpaperMood::Midnight, GradientDirection::Radial, &[(0x18181b, 0), (0x0f0f11, 50), (0x09090b, 100)]),
        gradient("dark-matter", "Dark Matter", WallpaperMood::Midnight, GradientDirection::ToBottomRight, &[(0x0a0a0a, 0), (0x171717, 40), (0x262626, 70), (0x171717, 100)]),
        gradient("void", "Void", WallpaperMood::Midnight, GradientDirection::Radial, &[(0x000000, 0), (0x030303, 50), (0x0a0a0a, 100)]),

        // Mesh gradients
        mesh("mesh-candy", "Candy Mesh", WallpaperMood::Vibrant, &[0xff9a9e, 0xfad0c4, 0xffecd2, 0xfcb69f]),
        mesh("mesh-ocean", "Ocean Mesh", WallpaperMood::Cosmic, &[0x667eea, 0x764ba2, 0x6b8dd6, 0x8e37d7]),
        mesh("mesh-forest", "Forest Mesh", WallpaperMood::Nature, &[0x134e5e, 0x71b280, 0x2d5a27, 0x5da13c]),
        mesh("mesh-sunset", "Sunset Mesh", WallpaperMood::Sunset, &[0xff6b6b, 0xfeca57, 0xff9ff3, 0x48dbfb]),
        mesh("mesh-aurora", "Aurora Mesh", WallpaperMood::Aurora, &[0x00d2ff, 0x3a7bd5, 0xf857a6, 0xff5858]),
        mesh("mesh-minimal", "Minimal Mesh", WallpaperMood::Minimal, &[0xf5f7fa, 0xc3cfe2, 0xe8eef5, 0xdfe6ef]),
        mesh("mesh-dark", "Dark Mesh", WallpaperMood::Midnight, &[0x0f0c29, 0x302b63, 0x24243e, 0x1a1a2e]),
        mesh("mesh-dreamy", "Dreamy Mesh", WallpaperMood::Serene, &[0xa8edea, 0xfed6e3, 0xd299c2, 0xfef9d7]),
        mesh("mesh-blade-runner", "Blade Runner Mesh", WallpaperMood::Cinematic, &[0x0d1b2a, 0xff0054, 0x00d4ff, 0x1b263b]),
        mesh("mesh-matrix", "Matrix Mesh", WallpaperMood::Cinematic, &[0x000000, 0x003300, 0x00ff00, 0x001a00]),
        mesh("mesh-tron", "Tron Mesh", WallpaperMood::Cinematic, &[0x000000, 0x00d4ff, 0xff6b00, 0x001a33]),
        mesh("mesh-dune", "Dune Mesh", WallpaperMood::Epic, &[0x1a120a, 0xd4a574, 0x8b6914, 0xf5e6d3]),

        // Solid colors
        solid("solid-black", "Pure Black", WallpaperMood::Midnight, 0x000000),
        solid("solid-white", "Pure White", WallpaperMood::Minimal, 0xffffff),
        solid("solid-snow", "Snow", WallpaperMood::Minimal, 0xf8fafc),
        solid("solid-paper", "Paper", WallpaperMood::Minimal, 0xfafaf9),
        solid("solid-stone", "Stone", WallpaperMood::Minimal, 0x78716c),
        solid("solid-slate", "Slate", WallpaperMood::Minimal, 0x475569),
        solid("solid-graphite", "Graphite", WallpaperMood::Midnight, 0x374151),
        solid("solid-charcoal", "Charcoal", WallpaperMood::Midnight, 0x1e293b),
        solid("solid-obsidian", "Obsidian", WallpaperMood::Midnight, 0x0f172a),
        solid("solid-void", "Void", WallpaperMood::Midnight, 0x030712),
        solid("solid-baby-blue", "Baby Blue", WallpaperMood::Serene, 0xbfdbfe),
        solid("solid-sky", "Sky", WallpaperMood::Serene, 0x7dd3fc),
        solid("solid-azure", "Azure", WallpaperMood::Vibrant, 0x3b82f6),
        solid("solid-royal", "Royal Blue", WallpaperMood::Vibrant, 0x2563eb),
        solid("solid-navy", "Navy", WallpaperMood::Cosmic, 0x1e3a8a),
        solid("solid-ocean", "Ocean", WallpaperMood::Ocean, 0x0891b2),
        solid("solid-teal", "Teal", WallpaperMood::Ocean, 0x0d9488),
        solid("solid-cyan", "Cyan", WallpaperMood::Vibrant, 0x06b6d4),
        solid("solid-mint", "Mint", WallpaperMood::Serene, 0xa7f3d0),
        solid("solid-emerald", "Emerald", WallpaperMood::Nature, 0x10b981),
        solid("solid-forest", "Forest", WallpaperMood::Nature, 0x166534),
        solid("solid-sage", "Sage", WallpaperMood::Nature, 0x84cc16),
        solid("solid-olive", "Olive", WallpaperMood::Nature, 0x4d7c0f),
        solid("solid-matrix-green", "Matrix Green", WallpaperMood::Cinematic, 0x00ff00),
        solid("solid-lavender", "Lavender", WallpaperMood::Serene, 0xc4b5fd),
        solid("solid-violet", "Violet", WallpaperMood::Vibrant, 0x8b5cf6),
        solid("solid-purple", "Purple", WallpaperMood::Cosmic, 0x7c3aed),
        solid("solid-grape", "Grape", WallpaperMood::Cosmic, 0x5b21b6),
        solid("solid-plum", "Plum", WallpaperMood::Vibrant, 0x9333ea),
        solid("solid-indigo", "Indigo", WallpaperMood::Cosmic, 0x4f46e5),
        solid("solid-blush", "Blush", WallpaperMood::Serene, 0xfce7f3),
        solid("solid-rose", "Rose", WallpaperMood::Romantic, 0xfda4af),
        solid("solid-pink", "Pink", WallpaperMood::Vibrant, 0xec4899),
        solid("solid-hot-pink", "Hot Pink", WallpaperMood::Vibrant, 0xf472b6),
        solid("solid-coral", "Coral", WallpaperMood::Sunset, 0xfb7185),
        solid("solid-crimson", "Crimson", WallpaperMood::Vibrant, 0xdc2626),
        solid("solid-ruby", "Ruby", WallpaperMood::Vibrant, 0xbe123c),
        solid("solid-neon-red", "Neon Red", WallpaperMood::Cinematic, 0xff0054),
        solid("solid-peach", "Peach", WallpaperMood::Sunset, 0xfdba74),
        solid("solid-tangerine", "Tangerine", WallpaperMood::Vibrant, 0xf97316),
        solid("solid-orange", "Orange", WallpaperMood::Vibrant, 0xea580c),
        solid("solid-amber", "Amber", WallpaperMood::Sunset, 0xf59e0b),
        solid("solid-gold", "Gold", WallpaperMood::Vibrant, 0xeab308),
        solid("solid-cream", "Cream", WallpaperMood::Serene, 0xfef3c7),
        solid("solid-yellow", "Yellow", WallpaperMood::Vibrant, 0xfbbf24),
        solid("solid-sunshine", "Sunshine", WallpaperMood::Vibrant, 0xfacc15),
        solid("solid-sand", "Sand", WallpaperMood::Nature, 0xd4a574),
        solid("solid-caramel", "Caramel", WallpaperMood::Nature, 0xb45309),
        solid("solid-chocolate", "Chocolate", WallpaperMood::Nature, 0x78350f),
        solid("solid-espresso", "Espresso", WallpaperMood::Midnight, 0x451a03),
        solid("solid-tron-blue", "Tron Blue", WallpaperMood::Cinematic, 0x00d4ff),
        solid("solid-tron-orange", "Tron Orange", WallpaperMood::Cinematic, 0xff6b00),
        solid("solid-blade-runner", "Blade Runner Pink", WallpaperMood::Cinematic, 0xd90429),

        // Patterns
        pattern("pattern-dots-light", "Subtle Dots", WallpaperMood::Minimal, PatternKind::Dots, 0xfafafa, 0xe4e4e7, 0.5),
        pattern("pattern-dots-dark", "Dark Dots", WallpaperMood::Midnight, PatternKind::Dots, 0x18181b, 0x3f3f46, 0.3),
        pattern("pattern-grid-light", "Light Grid", WallpaperMood::Minimal, PatternKind::Grid, 0xffffff, 0xe2e8f0, 0.6),
        pattern("pattern-grid-dark", "Dark Grid", WallpaperMood::Midnight, PatternKind::Grid, 0x0f172a, 0x334155, 0.4),
        pattern("pattern-noise", "Film Grain", WallpaperMood::Midnight, PatternKind::Noise, 0x1c1917, 0x44403c, 0.15),
        pattern("pattern-topo", "Topography", WallpaperMood::Nature, PatternKind::Topography, 0xf0fdf4, 0x86efac, 0.3),
        pattern("pattern-waves", "Ocean Waves", WallpaperMood::Ocean, PatternKind::Waves, 0x0c4a6e, 0x0ea5e9, 0.2),
        pattern("pattern-geometric", "Geometric", WallpaperMood::Cosmic, PatternKind::Geometric, 0xfaf5ff, 0xc084fc, 0.15),
        pattern("pattern-circuit", "Circuit Board", WallpaperMood::Cinematic, PatternKind::Circuit, 0x000000, 0x00ff00, 0.2),
        pattern("pattern-hexagon", "Hexagon", WallpaperMood::Cinematic, PatternKind::Hexagon, 0x0a0a0a, 0x00d4ff, 0.25),
        pattern("pattern-grid-tron", "Tron Grid", WallpaperMood::Cinematic, PatternKind::Grid, 0x000000, 0x00d4ff, 0.5),

        // Animated
        dynamic("dynamic-aurora", "Living Aurora", WallpaperMood::Aurora, DynamicStyle::Aurora, DynamicSpeed::Slow, &[0x3b82f6, 0x10b981, 0x8b5cf6, 0x06b6d4]),
        dynamic("dynamic-waves", "Gentle Waves", WallpaperMood::Ocean, DynamicStyle::Waves, DynamicSpeed::Slow, &[0x0891b2, 0x06b6d4, 0x22d3ee, 0x67e8f9]),
        dynamic("dynamic-particles", "Stardust", WallpaperMood::Cosmic, DynamicStyle::Particles, DynamicSpeed::Slow, &[0xf8fafc, 0xe2e8f0, 0xfef3c7, 0xfde68a]),
        dynamic("dynamic-morph", "Morphing Colors", WallpaperMood::Vibrant, DynamicStyle::Morph, DynamicSpeed::Medium, &[0xec4899, 0x8b5cf6, 0x3b82f6, 0x06b6d4]),
        dynamic("dynamic-glow", "Soft Glow", WallpaperMood::Serene, DynamicStyle::Glow, DynamicSpeed::Slow, &[0xfef3c7, 0xfde68a, 0xfcd34d]),
        dynamic("dynamic-rain", "Blade Runner Rain", WallpaperMood::Cinematic, DynamicStyle::Rain, DynamicSpeed::Medium, &[0x00d4ff, 0xff0054, 0x1b263b]),
        dynamic("dynamic-matrix", "Matrix Rain", WallpaperMood::Cinematic, DynamicStyle::Matrix, DynamicSpeed::Fast, &[0x00ff00, 0x003300, 0x000000]),
        dynamic("dynamic-holographic", "Holographic", WallpaperMood::Cinematic, DynamicStyle::Holographic, DynamicSpeed::Medium, &[0x00d4ff, 0xff6b00, 0xff0054, 0x00ff00]),
        dynamic("dynamic-nebula", "Nebula Flow", WallpaperMood::Cosmic, DynamicStyle::Nebula, DynamicSpeed::Slow, &[0x5b21b6, 0xbe185d, 0x06b6d4, 0x1e1b4b]),
    ]
}
