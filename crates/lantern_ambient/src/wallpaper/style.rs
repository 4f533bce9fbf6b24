//! Wallpaper to style conversion

use super::{
    DynamicStyle, ImageOverlay, ImagePosition, ImageWallpaper, MeshPoint, OverlayTint, PatternKind,
    Wallpaper,
};
use lantern_paint::{Color, Gradient, GradientDirection, GradientStop, GradientStops};
use lantern_theme::ColorScheme;
use serde::Serialize;

/// Radius of every mesh blob, percent of the larger dimension
const MESH_BLOB_RADIUS: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MeshBlob {
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub radius: f32,
}

/// Image adjustments, already clamped to their ranges
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ImageFilter {
    pub blur: f32,
    pub brightness: f32,
    pub saturation: f32,
}

impl ImageFilter {
    /// CSS `filter` value
    pub fn to_css(&self) -> String {
        format!(
            "blur({}px) brightness({}%) saturate({}%)",
            self.blur, self.brightness, self.saturation
        )
    }
}

/// What the renderer draws for a wallpaper
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StyleSpec {
    Solid {
        color: Color,
    },
    Gradient(Gradient),
    Mesh {
        blobs: Vec<MeshBlob>,
    },
    Image {
        url: String,
        position: ImagePosition,
        filter: ImageFilter,
        overlay: Gradient,
    },
    Animated {
        style: DynamicStyle,
        colors: Vec<Color>,
        cycle_secs: f32,
    },
    Pattern {
        pattern: PatternKind,
        base: Color,
        foreground: Color,
        tile: Option<f32>,
    },
}

impl StyleSpec {
    /// CSS `background` shorthand for this style
    ///
    /// Animated styles render their first frame.
    pub fn css_background(&self) -> String {
        match self {
            Self::Solid { color } => color.to_css(),
            Self::Gradient(gradient) => gradient.to_css(),
            Self::Mesh { blobs } => blobs
                .iter()
                .map(|blob| {
                    format!(
                        "radial-gradient(at {}% {}%, {} 0px, transparent {}%)",
                        blob.x,
                        blob.y,
                        blob.color.to_css(),
                        blob.radius
                    )
                })
                .collect::<Vec<_>>()
                .join(", "),
            Self::Image {
                url,
                position,
                overlay,
                ..
            } => format!(
                "{}, url(\"{}\") {}% {}% / cover no-repeat",
                overlay.to_css(),
                url,
                position.x,
                position.y
            ),
            Self::Animated { colors, .. } => {
                Gradient::even(GradientDirection::ToBottomRight, colors).to_css()
            }
            Self::Pattern {
                pattern,
                base,
                foreground,
                tile,
            } => {
                let fg = foreground.to_css();
                match (pattern, tile) {
                    (PatternKind::Dots, Some(size)) => format!(
                        "radial-gradient({fg} 1px, transparent 1px) 0 0 / {size}px {size}px, {}",
                        base.to_css()
                    ),
                    (PatternKind::Grid, Some(size)) => format!(
                        "linear-gradient({fg} 1px, transparent 1px) 0 0 / {size}px {size}px, \
                         linear-gradient(90deg, {fg} 1px, transparent 1px) 0 0 / {size}px {size}px, {}",
                        base.to_css()
                    ),
                    _ => base.to_css(),
                }
            }
        }
    }
}

/// Converts wallpapers into [`StyleSpec`]s
///
/// Pure: the output depends only on the wallpaper and the generator's
/// settings. Malformed wallpapers produce [`WallpaperGenerator::neutral`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallpaperGenerator {
    scheme: ColorScheme,
    animate: bool,
}

impl WallpaperGenerator {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            animate: true,
        }
    }

    /// When `false`, dynamic wallpapers are frozen to a static gradient
    pub fn with_motion(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Fallback fill for malformed wallpapers
    pub fn neutral(&self) -> StyleSpec {
        let color = match self.scheme {
            ColorScheme::Light => Color::from_hex(0xf4f4f5),
            ColorScheme::Dark => Color::from_hex(0x18181b),
        };
        StyleSpec::Solid { color }
    }

    pub fn style_for(&self, wallpaper: &Wallpaper) -> StyleSpec {
        let spec = match wallpaper {
            Wallpaper::Gradient(gradient) => self.gradient(gradient),
            Wallpaper::Solid { color } => color
                .is_valid()
                .then_some(StyleSpec::Solid { color: *color }),
            Wallpaper::Mesh { points } => self.mesh(points),
            Wallpaper::Image(image) => self.image(image),
            Wallpaper::Dynamic {
                style,
                colors,
                speed,
            } => {
                let colors: Vec<Color> = colors.iter().copied().filter(Color::is_valid).collect();
                if colors.is_empty() {
                    None
                } else if self.animate {
                    Some(StyleSpec::Animated {
                        style: *style,
                        colors,
                        cycle_secs: speed.cycle_secs(),
                    })
                } else {
                    Some(static_fill(&colors, GradientDirection::ToBottomRight))
                }
            }
            Wallpaper::Pattern {
                pattern,
                base_color,
                pattern_color,
                opacity,
            } => self.pattern(*pattern, *base_color, *pattern_color, *opacity),
        };

        spec.unwrap_or_else(|| {
            tracing::warn!(kind = wallpaper.kind(), "malformed wallpaper, using neutral fill");
            self.neutral()
        })
    }

    fn gradient(&self, gradient: &Gradient) -> Option<StyleSpec> {
        let mut stops: GradientStops = gradient
            .stops
            .iter()
            .filter(|stop| stop.color.is_valid() && stop.offset.is_finite())
            .map(|stop| GradientStop::new(stop.offset.clamp(0.0, 1.0), stop.color))
            .collect();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));

        match stops.len() {
            0 => None,
            1 => Some(StyleSpec::Solid {
                color: stops[0].color,
            }),
            _ => Some(StyleSpec::Gradient(Gradient::new(gradient.direction, stops))),
        }
    }

    fn mesh(&self, points: &[MeshPoint]) -> Option<StyleSpec> {
        let blobs: Vec<MeshBlob> = points
            .iter()
            .filter(|p| p.color.is_valid() && p.x.is_finite() && p.y.is_finite())
            .map(|p| MeshBlob {
                x: p.x.clamp(0.0, 100.0),
                y: p.y.clamp(0.0, 100.0),
                color: p.color,
                radius: MESH_BLOB_RADIUS,
            })
            .collect();
        (!blobs.is_empty()).then_some(StyleSpec::Mesh { blobs })
    }

    fn image(&self, image: &ImageWallpaper) -> Option<StyleSpec> {
        let url = image.url.trim();
        if url.is_empty() {
            return None;
        }
        Some(StyleSpec::Image {
            url: url.to_string(),
            position: ImagePosition {
                x: clamp_or(image.position.x, 0.0, 100.0, 50.0),
                y: clamp_or(image.position.y, 0.0, 100.0, 50.0),
            },
            filter: ImageFilter {
                blur: clamp_or(image.blur, 0.0, 20.0, 0.0),
                brightness: clamp_or(image.brightness, 50.0, 150.0, 100.0),
                saturation: clamp_or(image.saturation, 0.0, 200.0, 100.0),
            },
            overlay: self.overlay(image.overlay),
        })
    }

    /// Top-to-bottom overlay gradient for an image
    pub fn overlay(&self, overlay: ImageOverlay) -> Gradient {
        let alpha = clamp_or(overlay.opacity, 0.0, 1.0, 0.0);
        let (base, from, to) = match overlay.tint {
            OverlayTint::Theme => {
                let base = if self.scheme.is_dark() {
                    Color::BLACK
                } else {
                    Color::WHITE
                };
                (base, 0.6, 0.9)
            }
            OverlayTint::Dark => (Color::BLACK, 0.8, 1.0),
            OverlayTint::Light => (Color::WHITE, 0.8, 1.0),
            OverlayTint::Custom(color) if color.is_valid() => (color, 0.8, 1.0),
            OverlayTint::Custom(_) => {
                return self.overlay(ImageOverlay {
                    tint: OverlayTint::Theme,
                    ..overlay
                });
            }
        };
        Gradient::simple(
            GradientDirection::ToBottom,
            base.with_alpha(alpha * from),
            base.with_alpha(alpha * to),
        )
    }

    fn pattern(
        &self,
        pattern: PatternKind,
        base: Color,
        foreground: Color,
        opacity: f32,
    ) -> Option<StyleSpec> {
        if !base.is_valid() {
            return None;
        }
        if !foreground.is_valid() {
            return Some(StyleSpec::Solid { color: base });
        }
        let opacity = clamp_or(opacity, 0.0, 1.0, 1.0);
        Some(StyleSpec::Pattern {
            pattern,
            base,
            foreground: foreground.with_alpha(foreground.a * opacity),
            tile: pattern.tile_size(),
        })
    }
}

fn static_fill(colors: &[Color], direction: GradientDirection) -> StyleSpec {
    match colors {
        [only] => StyleSpec::Solid { color: *only },
        _ => StyleSpec::Gradient(Gradient::even(direction, colors)),
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}
