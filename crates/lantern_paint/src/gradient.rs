//! Gradient fills

use crate::color::Color;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Stop list; most gradients have four stops or fewer
pub type GradientStops = SmallVec<[GradientStop; 4]>;

/// Direction of a gradient fill
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientDirection {
    #[serde(rename = "to-t")]
    ToTop,
    #[serde(rename = "to-tr")]
    ToTopRight,
    #[serde(rename = "to-r")]
    ToRight,
    #[serde(rename = "to-br")]
    ToBottomRight,
    #[default]
    #[serde(rename = "to-b")]
    ToBottom,
    #[serde(rename = "to-bl")]
    ToBottomLeft,
    #[serde(rename = "to-l")]
    ToLeft,
    #[serde(rename = "to-tl")]
    ToTopLeft,
    #[serde(rename = "radial")]
    Radial,
    #[serde(rename = "conic")]
    Conic,
}

impl GradientDirection {
    fn css_head(self) -> &'static str {
        match self {
            Self::ToTop => "linear-gradient(to top",
            Self::ToTopRight => "linear-gradient(to top right",
            Self::ToRight => "linear-gradient(to right",
            Self::ToBottomRight => "linear-gradient(to bottom right",
            Self::ToBottom => "linear-gradient(to bottom",
            Self::ToBottomLeft => "linear-gradient(to bottom left",
            Self::ToLeft => "linear-gradient(to left",
            Self::ToTopLeft => "linear-gradient(to top left",
            Self::Radial => "radial-gradient(ellipse at center",
            Self::Conic => "conic-gradient(from 0deg at 50% 50%",
        }
    }
}

/// A directional gradient with ordered stops
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub direction: GradientDirection,
    pub stops: GradientStops,
}

impl Gradient {
    pub fn new(direction: GradientDirection, stops: GradientStops) -> Self {
        Self { direction, stops }
    }

    /// Create a simple two-color gradient
    pub fn simple(direction: GradientDirection, from: Color, to: Color) -> Self {
        let mut stops = GradientStops::new();
        stops.push(GradientStop::new(0.0, from));
        stops.push(GradientStop::new(1.0, to));
        Self { direction, stops }
    }

    /// Spread colors evenly from offset 0.0 to 1.0
    pub fn even(direction: GradientDirection, colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, color)| GradientStop::new(i as f32 / last, *color))
            .collect();
        Self { direction, stops }
    }

    /// CSS `*-gradient(...)` expression
    pub fn to_css(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color.to_css(), (s.offset * 100.0).round()))
            .collect();
        format!("{}, {})", self.direction.css_head(), stops.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_spreads_offsets() {
        let g = Gradient::even(
            GradientDirection::ToRight,
            &[Color::BLACK, Color::WHITE, Color::BLACK],
        );
        let offsets: Vec<f32> = g.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn css_matches_direction() {
        let g = Gradient::simple(GradientDirection::Radial, Color::BLACK, Color::WHITE);
        assert_eq!(
            g.to_css(),
            "radial-gradient(ellipse at center, #000000 0%, #ffffff 100%)"
        );
    }
}
