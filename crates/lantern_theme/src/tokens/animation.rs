//! Animation defaults

use lantern_animation::SpringPreset;
use serde::Serialize;

/// Per-theme motion defaults
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThemeAnimation {
    pub spring: SpringPreset,
    /// Glow strength in `[0, 1]`
    pub glow_intensity: f32,
    /// Float distance in pixels at normal intensity
    pub float_amplitude: f32,
}

impl Default for ThemeAnimation {
    fn default() -> Self {
        Self {
            spring: SpringPreset::Gentle,
            glow_intensity: 0.7,
            float_amplitude: 10.0,
        }
    }
}
