//! Lifestyle themes

use super::hsl;
use crate::theme::{Theme, ThemeCategory};
use crate::tokens::{
    ColorTokens, ParticleConfig, ParticleSize, ParticleSpeed, ParticleVariant, ThemeAnimation,
};
use lantern_animation::SpringPreset;

/// Neon-soaked digital future
pub fn cyberpunk() -> Theme {
    Theme {
        id: "cyberpunk",
        name: "Cyberpunk",
        description: "Neon-soaked digital future",
        category: ThemeCategory::Lifestyle,
        light: cyberpunk_light(),
        dark: cyberpunk_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Sparks,
            count: 20,
            base_color: hsl(320.0, 100.0, 60.0),
            secondary_color: Some(hsl(180.0, 100.0, 50.0)),
            speed: ParticleSpeed::Fast,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Snappy,
            glow_intensity: 1.0,
            float_amplitude: 3.0,
        },
    }
}

fn cyberpunk_light() -> ColorTokens {
    ColorTokens {
        background: hsl(280.0, 20.0, 96.0),
        foreground: hsl(280.0, 40.0, 10.0),
        card: hsl(280.0, 15.0, 98.0),
        card_foreground: hsl(280.0, 40.0, 10.0),
        primary: hsl(320.0, 100.0, 60.0),
        primary_foreground: hsl(320.0, 20.0, 10.0),
        secondary: hsl(180.0, 100.0, 50.0),
        secondary_foreground: hsl(180.0, 20.0, 10.0),
        accent: hsl(320.0, 90.0, 92.0),
        accent_foreground: hsl(320.0, 100.0, 50.0),
        muted: hsl(280.0, 15.0, 88.0),
        muted_foreground: hsl(280.0, 20.0, 40.0),
        border: hsl(280.0, 15.0, 85.0),
        input: hsl(280.0, 15.0, 85.0),
        ring: hsl(320.0, 100.0, 60.0),
        glow: hsl(320.0, 100.0, 65.0),
        glow_soft: hsl(320.0, 90.0, 80.0),
        particle: hsl(320.0, 100.0, 60.0),
        orb_1: hsl(320.0, 100.0, 60.0),
        orb_2: hsl(180.0, 100.0, 50.0),
    }
}

fn cyberpunk_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(260.0, 30.0, 5.0),
        foreground: hsl(280.0, 15.0, 95.0),
        card: hsl(260.0, 25.0, 8.0),
        card_foreground: hsl(280.0, 15.0, 95.0),
        primary: hsl(320.0, 100.0, 60.0),
        primary_foreground: hsl(260.0, 30.0, 8.0),
        secondary: hsl(180.0, 100.0, 50.0),
        secondary_foreground: hsl(180.0, 15.0, 10.0),
        accent: hsl(320.0, 70.0, 16.0),
        accent_foreground: hsl(320.0, 100.0, 70.0),
        muted: hsl(260.0, 25.0, 14.0),
        muted_foreground: hsl(280.0, 15.0, 55.0),
        border: hsl(260.0, 25.0, 14.0),
        input: hsl(260.0, 25.0, 14.0),
        ring: hsl(320.0, 100.0, 60.0),
        glow: hsl(320.0, 100.0, 55.0),
        glow_soft: hsl(320.0, 90.0, 65.0),
        particle: hsl(320.0, 100.0, 60.0),
        orb_1: hsl(320.0, 100.0, 60.0),
        orb_2: hsl(180.0, 100.0, 50.0),
    }
}

/// Clean, focused simplicity
pub fn minimal() -> Theme {
    Theme {
        id: "minimal",
        name: "Minimal",
        description: "Clean, focused simplicity",
        category: ThemeCategory::Lifestyle,
        light: minimal_light(),
        dark: minimal_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Orbs,
            count: 3,
            base_color: hsl(0.0, 0.0, 80.0),
            secondary_color: None,
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Large,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Gentle,
            glow_intensity: 0.2,
            float_amplitude: 5.0,
        },
    }
}

fn minimal_light() -> ColorTokens {
    ColorTokens {
        background: hsl(0.0, 0.0, 98.0),
        foreground: hsl(0.0, 0.0, 10.0),
        card: hsl(0.0, 0.0, 100.0),
        card_foreground: hsl(0.0, 0.0, 10.0),
        primary: hsl(0.0, 0.0, 15.0),
        primary_foreground: hsl(0.0, 0.0, 98.0),
        secondary: hsl(0.0, 0.0, 45.0),
        secondary_foreground: hsl(0.0, 0.0, 98.0),
        accent: hsl(0.0, 0.0, 94.0),
        accent_foreground: hsl(0.0, 0.0, 15.0),
        muted: hsl(0.0, 0.0, 92.0),
        muted_foreground: hsl(0.0, 0.0, 45.0),
        border: hsl(0.0, 0.0, 88.0),
        input: hsl(0.0, 0.0, 88.0),
        ring: hsl(0.0, 0.0, 15.0),
        glow: hsl(0.0, 0.0, 50.0),
        glow_soft: hsl(0.0, 0.0, 70.0),
        particle: hsl(0.0, 0.0, 80.0),
        orb_1: hsl(0.0, 0.0, 60.0),
        orb_2: hsl(0.0, 0.0, 40.0),
    }
}

fn minimal_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(0.0, 0.0, 6.0),
        foreground: hsl(0.0, 0.0, 95.0),
        card: hsl(0.0, 0.0, 9.0),
        card_foreground: hsl(0.0, 0.0, 95.0),
        primary: hsl(0.0, 0.0, 90.0),
        primary_foreground: hsl(0.0, 0.0, 8.0),
        secondary: hsl(0.0, 0.0, 55.0),
        secondary_foreground: hsl(0.0, 0.0, 95.0),
        accent: hsl(0.0, 0.0, 14.0),
        accent_foreground: hsl(0.0, 0.0, 85.0),
        muted: hsl(0.0, 0.0, 14.0),
        muted_foreground: hsl(0.0, 0.0, 55.0),
        border: hsl(0.0, 0.0, 14.0),
        input: hsl(0.0, 0.0, 14.0),
        ring: hsl(0.0, 0.0, 90.0),
        glow: hsl(0.0, 0.0, 45.0),
        glow_soft: hsl(0.0, 0.0, 55.0),
        particle: hsl(0.0, 0.0, 70.0),
        orb_1: hsl(0.0, 0.0, 50.0),
        orb_2: hsl(0.0, 0.0, 30.0),
    }
}

/// Warm blanket comfort and relaxation
pub fn cozy() -> Theme {
    Theme {
        id: "cozy",
        name: "Cozy",
        description: "Warm blanket comfort and relaxation",
        category: ThemeCategory::Lifestyle,
        light: cozy_light(),
        dark: cozy_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Fireflies,
            count: 10,
            base_color: hsl(30.0, 70.0, 55.0),
            secondary_color: None,
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Medium,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Gentle,
            glow_intensity: 0.55,
            float_amplitude: 8.0,
        },
    }
}

fn cozy_light() -> ColorTokens {
    ColorTokens {
        background: hsl(30.0, 30.0, 96.0),
        foreground: hsl(25.0, 35.0, 12.0),
        card: hsl(30.0, 25.0, 98.0),
        card_foreground: hsl(25.0, 35.0, 12.0),
        primary: hsl(25.0, 60.0, 45.0),
        primary_foreground: hsl(30.0, 25.0, 98.0),
        secondary: hsl(15.0, 50.0, 55.0),
        secondary_foreground: hsl(15.0, 10.0, 98.0),
        accent: hsl(30.0, 50.0, 92.0),
        accent_foreground: hsl(25.0, 60.0, 35.0),
        muted: hsl(30.0, 22.0, 88.0),
        muted_foreground: hsl(25.0, 25.0, 42.0),
        border: hsl(30.0, 22.0, 85.0),
        input: hsl(30.0, 22.0, 85.0),
        ring: hsl(25.0, 60.0, 45.0),
        glow: hsl(30.0, 70.0, 50.0),
        glow_soft: hsl(30.0, 60.0, 70.0),
        particle: hsl(30.0, 70.0, 55.0),
        orb_1: hsl(25.0, 60.0, 45.0),
        orb_2: hsl(15.0, 50.0, 55.0),
    }
}

fn cozy_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(25.0, 30.0, 8.0),
        foreground: hsl(30.0, 20.0, 95.0),
        card: hsl(25.0, 25.0, 12.0),
        card_foreground: hsl(30.0, 20.0, 95.0),
        primary: hsl(25.0, 65.0, 50.0),
        primary_foreground: hsl(25.0, 30.0, 10.0),
        secondary: hsl(15.0, 55.0, 45.0),
        secondary_foreground: hsl(15.0, 10.0, 95.0),
        accent: hsl(25.0, 45.0, 18.0),
        accent_foreground: hsl(25.0, 65.0, 65.0),
        muted: hsl(25.0, 25.0, 18.0),
        muted_foreground: hsl(30.0, 18.0, 55.0),
        border: hsl(25.0, 25.0, 18.0),
        input: hsl(25.0, 25.0, 18.0),
        ring: hsl(25.0, 65.0, 50.0),
        glow: hsl(30.0, 75.0, 45.0),
        glow_soft: hsl(30.0, 65.0, 55.0),
        particle: hsl(30.0, 75.0, 50.0),
        orb_1: hsl(25.0, 65.0, 50.0),
        orb_2: hsl(15.0, 55.0, 45.0),
    }
}
