//! Lantern, the default warm amber companion theme

use super::hsl;
use crate::theme::{Theme, ThemeCategory};
use crate::tokens::{
    ColorTokens, ParticleConfig, ParticleSize, ParticleSpeed, ParticleVariant, ThemeAnimation,
};
use lantern_animation::SpringPreset;

/// Warm, comforting glow like a guiding light through university life
pub fn lantern() -> Theme {
    Theme {
        id: "lantern",
        name: "Lantern",
        description: "Warm, comforting glow like a guiding light through university life",
        category: ThemeCategory::Default,
        light: lantern_light(),
        dark: lantern_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Fireflies,
            count: 15,
            base_color: hsl(38.0, 95.0, 55.0),
            secondary_color: None,
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Gentle,
            glow_intensity: 0.7,
            float_amplitude: 10.0,
        },
    }
}

fn lantern_light() -> ColorTokens {
    ColorTokens {
        background: hsl(240.0, 4.0, 95.0),
        foreground: hsl(240.0, 5.0, 10.0),
        card: hsl(0.0, 0.0, 98.0),
        card_foreground: hsl(240.0, 5.0, 10.0),
        primary: hsl(258.0, 89.0, 66.0),
        primary_foreground: hsl(250.0, 100.0, 97.0),
        secondary: hsl(240.0, 5.0, 33.0),
        secondary_foreground: hsl(0.0, 0.0, 98.0),
        accent: hsl(269.0, 100.0, 98.0),
        accent_foreground: hsl(270.0, 91.0, 65.0),
        muted: hsl(240.0, 4.0, 83.0),
        muted_foreground: hsl(240.0, 5.0, 35.0),
        border: hsl(240.0, 4.0, 83.0),
        input: hsl(240.0, 4.0, 83.0),
        ring: hsl(258.0, 89.0, 66.0),
        glow: hsl(38.0, 95.0, 55.0),
        glow_soft: hsl(38.0, 90.0, 75.0),
        particle: hsl(38.0, 95.0, 55.0),
        orb_1: hsl(38.0, 95.0, 55.0),
        orb_2: hsl(258.0, 89.0, 66.0),
    }
}

fn lantern_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(240.0, 5.0, 10.0),
        foreground: hsl(0.0, 0.0, 98.0),
        card: hsl(240.0, 4.0, 14.0),
        card_foreground: hsl(0.0, 0.0, 98.0),
        primary: hsl(255.0, 91.0, 76.0),
        primary_foreground: hsl(261.0, 72.0, 22.0),
        secondary: hsl(240.0, 3.0, 46.0),
        secondary_foreground: hsl(0.0, 0.0, 98.0),
        accent: hsl(273.0, 86.0, 20.0),
        accent_foreground: hsl(269.0, 100.0, 95.0),
        muted: hsl(240.0, 4.0, 20.0),
        muted_foreground: hsl(240.0, 4.0, 65.0),
        border: hsl(240.0, 4.0, 20.0),
        input: hsl(240.0, 4.0, 20.0),
        ring: hsl(255.0, 91.0, 76.0),
        glow: hsl(38.0, 95.0, 55.0),
        glow_soft: hsl(38.0, 90.0, 65.0),
        particle: hsl(38.0, 95.0, 60.0),
        orb_1: hsl(38.0, 95.0, 55.0),
        orb_2: hsl(255.0, 91.0, 76.0),
    }
}
