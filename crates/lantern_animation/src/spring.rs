//! Spring physics presets

use serde::{Deserialize, Serialize};

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Slow, soft settle
    pub const fn gentle() -> Self {
        Self::new(100.0, 15.0, 1.0)
    }

    /// Overshoots slightly before settling
    pub const fn bouncy() -> Self {
        Self::new(300.0, 20.0, 0.8)
    }

    /// Quick response with little overshoot
    pub const fn snappy() -> Self {
        Self::new(400.0, 25.0, 0.5)
    }

    /// Heavy and floaty
    pub const fn dreamy() -> Self {
        Self::new(50.0, 10.0, 1.5)
    }

    /// Damping ratio (1.0 = critically damped)
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

/// Named spring preset referenced by theme animation defaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpringPreset {
    #[default]
    Gentle,
    Bouncy,
    Snappy,
    Dreamy,
}

impl SpringPreset {
    pub fn config(self) -> SpringConfig {
        match self {
            Self::Gentle => SpringConfig::gentle(),
            Self::Bouncy => SpringConfig::bouncy(),
            Self::Snappy => SpringConfig::snappy(),
            Self::Dreamy => SpringConfig::dreamy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_underdamped() {
        for preset in [
            SpringPreset::Gentle,
            SpringPreset::Bouncy,
            SpringPreset::Snappy,
            SpringPreset::Dreamy,
        ] {
            let ratio = preset.config().damping_ratio();
            assert!(ratio > 0.0 && ratio < 1.0, "{preset:?} ratio {ratio}");
        }
    }

    #[test]
    fn preset_serializes_lowercase() {
        let json = serde_json::to_string(&SpringPreset::Dreamy).unwrap();
        assert_eq!(json, "\"dreamy\"");
    }
}
