//! Color types and utilities

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Failure to read a CSS-style color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    #[error("invalid hsl color `{0}`")]
    InvalidHsl(String),

    #[error("invalid rgb color `{0}`")]
    InvalidRgb(String),

    #[error("unrecognized color format `{0}`")]
    Unrecognized(String),
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            // 0xRRGGBBAA format
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            // 0xRRGGBB format
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Create from hue (degrees), saturation and lightness (percent)
    ///
    /// Matches the `H S% L%` triples the palettes are authored in.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = (s / 100.0).clamp(0.0, 1.0);
        let l = (l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::rgb(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::rgb(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Format as a CSS color: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        if self.a < 1.0 {
            format!("rgba({},{},{},{})", r, g, b, round_alpha(self.a))
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }

    /// Whether every component is a finite number in 0.0..=1.0
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// Parse a CSS-style color.
    ///
    /// Accepted forms: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`,
    /// `hsl(..)`, `hsla(..)`, a bare `H S% L%` triple and `transparent`.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let lower = s.to_ascii_lowercase();

        if lower == "transparent" {
            return Ok(Color::TRANSPARENT);
        }
        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }
        if let Some(body) = function_body(&lower, &["hsla", "hsl"]) {
            return parse_hsl(body).ok_or_else(|| ColorParseError::InvalidHsl(s.to_string()));
        }
        if let Some(body) = function_body(&lower, &["rgba", "rgb"]) {
            return parse_rgb(body).ok_or_else(|| ColorParseError::InvalidRgb(s.to_string()));
        }
        if lower.contains('%') {
            return parse_hsl(&lower).ok_or_else(|| ColorParseError::InvalidHsl(s.to_string()));
        }

        Err(ColorParseError::Unrecognized(s.to_string()))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    let c = if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    };
    c.clamp(0.0, 1.0)
}

fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn round_alpha(a: f32) -> f32 {
    (a * 1000.0).round() / 1000.0
}

fn function_body<'a>(s: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        s.strip_prefix(name)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
    })
}

/// Split `a, b, c / d` or `a b c d` into numeric-ish parts
fn split_args(body: &str) -> Vec<&str> {
    body.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    if expanded.len() == 8 {
        Some(Color::from_rgba8(
            ((value >> 24) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    } else {
        Some(Color::from_hex(value))
    }
}

fn parse_alpha(part: Option<&&str>) -> Option<f32> {
    match part {
        None => Some(1.0),
        Some(raw) => {
            let alpha = match raw.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().ok()? / 100.0,
                None => raw.parse::<f32>().ok()?,
            };
            (alpha.is_finite() && (0.0..=1.0).contains(&alpha)).then_some(alpha)
        }
    }
}

fn parse_hsl(body: &str) -> Option<Color> {
    let parts = split_args(body);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let h = parts[0].trim_end_matches("deg").parse::<f32>().ok()?;
    let s = parts[1].strip_suffix('%')?.parse::<f32>().ok()?;
    let l = parts[2].strip_suffix('%')?.parse::<f32>().ok()?;
    if !(h.is_finite() && (0.0..=100.0).contains(&s) && (0.0..=100.0).contains(&l)) {
        return None;
    }
    let alpha = parse_alpha(parts.get(3))?;
    Some(Color::from_hsl(h, s, l).with_alpha(alpha))
}

fn parse_rgb(body: &str) -> Option<Color> {
    let parts = split_args(body);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let mut channels = [0u8; 3];
    for (slot, raw) in channels.iter_mut().zip(&parts[..3]) {
        *slot = raw.parse::<u8>().ok()?;
    }
    let alpha = parse_alpha(parts.get(3))?;
    Some(Color::from_rgba8(channels[0], channels[1], channels[2], 255).with_alpha(alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse("#ffffff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("#a855f7").unwrap(), Color::from_hex(0xA855F7));
        assert_eq!(Color::parse("#00000000").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn parses_hsl_forms() {
        let bare = Color::parse("38 95% 55%").unwrap();
        let func = Color::parse("hsl(38 95% 55%)").unwrap();
        let commas = Color::parse("hsl(38, 95%, 55%)").unwrap();
        assert_eq!(bare, func);
        assert_eq!(func, commas);
        assert_eq!(Color::parse("hsl(0 0% 100%)").unwrap().to_css(), "#ffffff");
        assert_eq!(Color::parse("hsl(0, 100%, 50%)").unwrap().to_css(), "#ff0000");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::parse("  "), Err(ColorParseError::Empty));
        assert!(matches!(
            Color::parse("#12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::parse("hsl(10 200% 50%)"),
            Err(ColorParseError::InvalidHsl(_))
        ));
        assert!(matches!(
            Color::parse("neon"),
            Err(ColorParseError::Unrecognized(_))
        ));
    }

    #[test]
    fn css_output_uses_rgba_for_translucent_colors() {
        let c = Color::from_hex(0x7C3AED).with_alpha(0.5);
        assert_eq!(c.to_css(), "rgba(124,58,237,0.5)");
        assert_eq!(Color::parse(&c.to_css()).unwrap().to_css(), c.to_css());
    }

    #[test]
    fn serde_uses_css_strings() {
        let json = serde_json::to_string(&Color::from_hex(0x7C3AED)).unwrap();
        assert_eq!(json, "\"#7c3aed\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_css(), "#7c3aed");
    }
}
