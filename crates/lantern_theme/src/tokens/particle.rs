//! Particle system defaults

use lantern_paint::Color;
use serde::{Deserialize, Serialize};

/// Visual style of ambient particles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleVariant {
    /// No particles are drawn
    #[default]
    None,
    Fireflies,
    Orbs,
    Bubbles,
    Stars,
    Snow,
    Leaves,
    Sparks,
    Aurora,
}

impl ParticleVariant {
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleSpeed {
    #[default]
    Slow,
    Medium,
    Fast,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleSize {
    #[default]
    Small,
    Medium,
    Large,
}

/// Particle layer description
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleConfig {
    pub variant: ParticleVariant,
    pub count: u32,
    pub base_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Color>,
    pub speed: ParticleSpeed,
    pub size: ParticleSize,
}

impl ParticleConfig {
    /// The no-op configuration used whenever motion is suppressed
    pub const fn none() -> Self {
        Self {
            variant: ParticleVariant::None,
            count: 0,
            base_color: Color::TRANSPARENT,
            secondary_color: None,
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Small,
        }
    }

    pub fn is_none(&self) -> bool {
        self.variant.is_none() || self.count == 0
    }

    /// Scale the particle count, rounding to the nearest whole particle
    pub fn scaled(mut self, factor: f32) -> Self {
        self.count = (self.count as f32 * factor.max(0.0)).round() as u32;
        self
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self::none()
    }
}
