//! Sports themes

use super::hsl;
use crate::theme::{Theme, ThemeCategory};
use crate::tokens::{
    ColorTokens, ParticleConfig, ParticleSize, ParticleSpeed, ParticleVariant, ThemeAnimation,
};
use lantern_animation::SpringPreset;

/// Court energy and game time excitement
pub fn basketball() -> Theme {
    Theme {
        id: "basketball",
        name: "Basketball",
        description: "Court energy and game time excitement",
        category: ThemeCategory::Sports,
        light: basketball_light(),
        dark: basketball_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Sparks,
            count: 10,
            base_color: hsl(25.0, 95.0, 55.0),
            secondary_color: None,
            speed: ParticleSpeed::Fast,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Bouncy,
            glow_intensity: 0.8,
            float_amplitude: 8.0,
        },
    }
}

fn basketball_light() -> ColorTokens {
    ColorTokens {
        background: hsl(30.0, 20.0, 96.0),
        foreground: hsl(0.0, 0.0, 10.0),
        card: hsl(30.0, 15.0, 98.0),
        card_foreground: hsl(0.0, 0.0, 10.0),
        primary: hsl(25.0, 95.0, 50.0),
        primary_foreground: hsl(0.0, 0.0, 100.0),
        secondary: hsl(0.0, 0.0, 15.0),
        secondary_foreground: hsl(0.0, 0.0, 98.0),
        accent: hsl(25.0, 85.0, 92.0),
        accent_foreground: hsl(25.0, 95.0, 40.0),
        muted: hsl(30.0, 15.0, 88.0),
        muted_foreground: hsl(0.0, 0.0, 40.0),
        border: hsl(30.0, 15.0, 85.0),
        input: hsl(30.0, 15.0, 85.0),
        ring: hsl(25.0, 95.0, 50.0),
        glow: hsl(25.0, 100.0, 55.0),
        glow_soft: hsl(25.0, 90.0, 70.0),
        particle: hsl(25.0, 95.0, 55.0),
        orb_1: hsl(25.0, 95.0, 50.0),
        orb_2: hsl(0.0, 0.0, 20.0),
    }
}

fn basketball_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(0.0, 0.0, 6.0),
        foreground: hsl(30.0, 15.0, 95.0),
        card: hsl(0.0, 0.0, 10.0),
        card_foreground: hsl(30.0, 15.0, 95.0),
        primary: hsl(25.0, 95.0, 55.0),
        primary_foreground: hsl(0.0, 0.0, 5.0),
        secondary: hsl(0.0, 0.0, 25.0),
        secondary_foreground: hsl(0.0, 0.0, 95.0),
        accent: hsl(25.0, 70.0, 18.0),
        accent_foreground: hsl(25.0, 95.0, 70.0),
        muted: hsl(0.0, 0.0, 16.0),
        muted_foreground: hsl(30.0, 10.0, 60.0),
        border: hsl(0.0, 0.0, 16.0),
        input: hsl(0.0, 0.0, 16.0),
        ring: hsl(25.0, 95.0, 55.0),
        glow: hsl(25.0, 100.0, 50.0),
        glow_soft: hsl(25.0, 90.0, 60.0),
        particle: hsl(25.0, 95.0, 55.0),
        orb_1: hsl(25.0, 95.0, 55.0),
        orb_2: hsl(0.0, 0.0, 30.0),
    }
}

/// Fresh grass and stadium atmosphere
pub fn soccer() -> Theme {
    Theme {
        id: "soccer",
        name: "Soccer",
        description: "Fresh grass and stadium atmosphere",
        category: ThemeCategory::Sports,
        light: soccer_light(),
        dark: soccer_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Leaves,
            count: 15,
            base_color: hsl(120.0, 65.0, 50.0),
            secondary_color: Some(hsl(120.0, 40.0, 35.0)),
            speed: ParticleSpeed::Medium,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Bouncy,
            glow_intensity: 0.6,
            float_amplitude: 10.0,
        },
    }
}

fn soccer_light() -> ColorTokens {
    ColorTokens {
        background: hsl(120.0, 20.0, 96.0),
        foreground: hsl(120.0, 30.0, 10.0),
        card: hsl(120.0, 15.0, 98.0),
        card_foreground: hsl(120.0, 30.0, 10.0),
        primary: hsl(120.0, 60.0, 40.0),
        primary_foreground: hsl(0.0, 0.0, 100.0),
        secondary: hsl(0.0, 0.0, 98.0),
        secondary_foreground: hsl(0.0, 0.0, 10.0),
        accent: hsl(120.0, 50.0, 92.0),
        accent_foreground: hsl(120.0, 60.0, 30.0),
        muted: hsl(120.0, 15.0, 88.0),
        muted_foreground: hsl(120.0, 20.0, 40.0),
        border: hsl(120.0, 15.0, 85.0),
        input: hsl(120.0, 15.0, 85.0),
        ring: hsl(120.0, 60.0, 40.0),
        glow: hsl(120.0, 70.0, 45.0),
        glow_soft: hsl(120.0, 60.0, 65.0),
        particle: hsl(120.0, 65.0, 50.0),
        orb_1: hsl(120.0, 60.0, 40.0),
        orb_2: hsl(0.0, 0.0, 95.0),
    }
}

fn soccer_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(120.0, 25.0, 6.0),
        foreground: hsl(120.0, 15.0, 95.0),
        card: hsl(120.0, 20.0, 10.0),
        card_foreground: hsl(120.0, 15.0, 95.0),
        primary: hsl(120.0, 65.0, 45.0),
        primary_foreground: hsl(120.0, 25.0, 8.0),
        secondary: hsl(0.0, 0.0, 90.0),
        secondary_foreground: hsl(0.0, 0.0, 10.0),
        accent: hsl(120.0, 45.0, 16.0),
        accent_foreground: hsl(120.0, 65.0, 60.0),
        muted: hsl(120.0, 20.0, 16.0),
        muted_foreground: hsl(120.0, 15.0, 55.0),
        border: hsl(120.0, 20.0, 16.0),
        input: hsl(120.0, 20.0, 16.0),
        ring: hsl(120.0, 65.0, 45.0),
        glow: hsl(120.0, 75.0, 40.0),
        glow_soft: hsl(120.0, 65.0, 50.0),
        particle: hsl(120.0, 70.0, 45.0),
        orb_1: hsl(120.0, 65.0, 45.0),
        orb_2: hsl(0.0, 0.0, 85.0),
    }
}

/// Ice cool intensity and arena lights
pub fn hockey() -> Theme {
    Theme {
        id: "hockey",
        name: "Hockey",
        description: "Ice cool intensity and arena lights",
        category: ThemeCategory::Sports,
        light: hockey_light(),
        dark: hockey_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Snow,
            count: 40,
            base_color: hsl(200.0, 30.0, 95.0),
            secondary_color: None,
            speed: ParticleSpeed::Medium,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Snappy,
            glow_intensity: 0.7,
            float_amplitude: 6.0,
        },
    }
}

fn hockey_light() -> ColorTokens {
    ColorTokens {
        background: hsl(200.0, 30.0, 97.0),
        foreground: hsl(200.0, 40.0, 10.0),
        card: hsl(200.0, 25.0, 99.0),
        card_foreground: hsl(200.0, 40.0, 10.0),
        primary: hsl(200.0, 90.0, 50.0),
        primary_foreground: hsl(200.0, 25.0, 98.0),
        secondary: hsl(0.0, 80.0, 50.0),
        secondary_foreground: hsl(0.0, 10.0, 98.0),
        accent: hsl(200.0, 80.0, 94.0),
        accent_foreground: hsl(200.0, 90.0, 40.0),
        muted: hsl(200.0, 20.0, 90.0),
        muted_foreground: hsl(200.0, 25.0, 40.0),
        border: hsl(200.0, 20.0, 88.0),
        input: hsl(200.0, 20.0, 88.0),
        ring: hsl(200.0, 90.0, 50.0),
        glow: hsl(200.0, 85.0, 60.0),
        glow_soft: hsl(200.0, 75.0, 80.0),
        particle: hsl(200.0, 30.0, 95.0),
        orb_1: hsl(200.0, 90.0, 50.0),
        orb_2: hsl(0.0, 80.0, 50.0),
    }
}

fn hockey_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(200.0, 35.0, 6.0),
        foreground: hsl(200.0, 15.0, 95.0),
        card: hsl(200.0, 30.0, 10.0),
        card_foreground: hsl(200.0, 15.0, 95.0),
        primary: hsl(200.0, 90.0, 55.0),
        primary_foreground: hsl(200.0, 35.0, 8.0),
        secondary: hsl(0.0, 85.0, 55.0),
        secondary_foreground: hsl(0.0, 10.0, 95.0),
        accent: hsl(200.0, 60.0, 16.0),
        accent_foreground: hsl(200.0, 90.0, 70.0),
        muted: hsl(200.0, 25.0, 16.0),
        muted_foreground: hsl(200.0, 15.0, 55.0),
        border: hsl(200.0, 25.0, 16.0),
        input: hsl(200.0, 25.0, 16.0),
        ring: hsl(200.0, 90.0, 55.0),
        glow: hsl(200.0, 85.0, 50.0),
        glow_soft: hsl(200.0, 75.0, 60.0),
        particle: hsl(200.0, 30.0, 90.0),
        orb_1: hsl(200.0, 90.0, 55.0),
        orb_2: hsl(0.0, 85.0, 55.0),
    }
}
