//! Wallpaper descriptors
//!
//! [`Wallpaper`] is a tagged union: each variant carries exactly the
//! parameters its kind needs. [`WallpaperGenerator`] turns a wallpaper into a
//! renderer-facing [`StyleSpec`], and [`curated`] holds the built-in
//! collection.

pub mod curated;
mod style;

pub use curated::{CuratedWallpaper, WallpaperMood};
pub use style::{ImageFilter, MeshBlob, StyleSpec, WallpaperGenerator};

use lantern_paint::{Color, Gradient};
use serde::{Deserialize, Serialize};

/// Pattern drawn over a base color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Dots,
    Grid,
    Waves,
    Noise,
    Grain,
    Geometric,
    Topography,
    Circuit,
    Hexagon,
}

impl PatternKind {
    /// Repeat size in pixels for tiled patterns
    pub fn tile_size(self) -> Option<f32> {
        match self {
            Self::Dots => Some(20.0),
            Self::Grid => Some(40.0),
            Self::Circuit => Some(60.0),
            Self::Hexagon => Some(50.0),
            _ => None,
        }
    }
}

/// Animated wallpaper styles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicStyle {
    Aurora,
    Waves,
    Particles,
    Morph,
    Glow,
    Rain,
    Matrix,
    Holographic,
    Nebula,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicSpeed {
    #[default]
    Slow,
    Medium,
    Fast,
}

impl DynamicSpeed {
    /// Length of one animation cycle in seconds
    pub fn cycle_secs(self) -> f32 {
        match self {
            Self::Slow => 30.0,
            Self::Medium => 15.0,
            Self::Fast => 8.0,
        }
    }
}

/// One radial blob of a mesh gradient
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshPoint {
    /// Horizontal anchor, percent of width
    pub x: f32,
    /// Vertical anchor, percent of height
    pub y: f32,
    pub color: Color,
}

/// Tint applied over an image
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayTint {
    /// Black in dark mode, white in light mode
    #[default]
    Theme,
    Dark,
    Light,
    Custom(Color),
}

/// Image overlay: a tint and its strength in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageOverlay {
    pub tint: OverlayTint,
    pub opacity: f32,
}

impl Default for ImageOverlay {
    fn default() -> Self {
        Self {
            tint: OverlayTint::Theme,
            opacity: 0.4,
        }
    }
}

/// Focal point of an image, in percent
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagePosition {
    pub x: f32,
    pub y: f32,
}

impl Default for ImagePosition {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

/// Photo wallpaper and its presentation adjustments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageWallpaper {
    pub url: String,
    pub position: ImagePosition,
    pub overlay: ImageOverlay,
    /// Blur radius in pixels, `0..=20`
    pub blur: f32,
    /// Percent, `50..=150`
    pub brightness: f32,
    /// Percent, `0..=200`
    pub saturation: f32,
}

impl ImageWallpaper {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_overlay(mut self, tint: OverlayTint, opacity: f32) -> Self {
        self.overlay = ImageOverlay { tint, opacity };
        self
    }
}

impl Default for ImageWallpaper {
    fn default() -> Self {
        Self {
            url: String::new(),
            position: ImagePosition::default(),
            overlay: ImageOverlay::default(),
            blur: 0.0,
            brightness: 100.0,
            saturation: 100.0,
        }
    }
}

/// Background descriptor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Wallpaper {
    Gradient(Gradient),
    Solid {
        color: Color,
    },
    Mesh {
        points: Vec<MeshPoint>,
    },
    Image(ImageWallpaper),
    Dynamic {
        style: DynamicStyle,
        colors: Vec<Color>,
        speed: DynamicSpeed,
    },
    Pattern {
        pattern: PatternKind,
        base_color: Color,
        pattern_color: Color,
        opacity: f32,
    },
}

/// Anchor points for a colors-only mesh, with the index of the color each uses
const MESH_ANCHORS: [(f32, f32, usize); 7] = [
    (40.0, 20.0, 0),
    (80.0, 0.0, 1),
    (0.0, 50.0, 2),
    (80.0, 50.0, 3),
    (0.0, 100.0, 0),
    (80.0, 100.0, 1),
    (0.0, 0.0, 2),
];

impl Wallpaper {
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    /// Lay `colors` out over the fixed seven-point mesh, cycling if short
    pub fn mesh_from_colors(colors: &[Color]) -> Self {
        let points = if colors.is_empty() {
            Vec::new()
        } else {
            MESH_ANCHORS
                .iter()
                .map(|&(x, y, index)| MeshPoint {
                    x,
                    y,
                    color: colors[index % colors.len()],
                })
                .collect()
        };
        Self::Mesh { points }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Gradient(_) => "gradient",
            Self::Solid { .. } => "solid",
            Self::Mesh { .. } => "mesh",
            Self::Image(_) => "image",
            Self::Dynamic { .. } => "dynamic",
            Self::Pattern { .. } => "pattern",
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Dynamic { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_paint::GradientDirection;

    #[test]
    fn mesh_cycles_four_colors_over_seven_anchors() {
        let colors = [
            Color::from_hex(0xff0000),
            Color::from_hex(0x00ff00),
            Color::from_hex(0x0000ff),
            Color::WHITE,
        ];
        let Wallpaper::Mesh { points } = Wallpaper::mesh_from_colors(&colors) else {
            panic!("expected mesh");
        };
        assert_eq!(points.len(), 7);
        assert_eq!((points[0].x, points[0].y), (40.0, 20.0));
        assert_eq!(points[4].color, colors[0]);
        assert_eq!(points[6].color, colors[2]);
    }

    #[test]
    fn mesh_from_two_colors_wraps() {
        let colors = [Color::BLACK, Color::WHITE];
        let Wallpaper::Mesh { points } = Wallpaper::mesh_from_colors(&colors) else {
            panic!("expected mesh");
        };
        assert_eq!(points[2].color, Color::BLACK);
        assert_eq!(points[3].color, Color::WHITE);
    }

    #[test]
    fn variants_serialize_with_type_tag() {
        let gradient = Wallpaper::Gradient(Gradient::simple(
            GradientDirection::ToBottomRight,
            Color::BLACK,
            Color::WHITE,
        ));
        let json = serde_json::to_value(&gradient).unwrap();
        assert_eq!(json["type"], "gradient");
        assert_eq!(json["direction"], "to-br");

        let pattern: Wallpaper = serde_json::from_str(
            r##"{"type":"pattern","pattern":"grid","base_color":"#000000","pattern_color":"#ffffff","opacity":0.5}"##,
        )
        .unwrap();
        assert_eq!(pattern.kind(), "pattern");
    }
}
