//! Superhero themes

use super::hsl;
use crate::theme::{Theme, ThemeCategory};
use crate::tokens::{
    ColorTokens, ParticleConfig, ParticleSize, ParticleSpeed, ParticleVariant, ThemeAnimation,
};
use lantern_animation::SpringPreset;

/// Galactic power and stellar energy
pub fn cosmic() -> Theme {
    Theme {
        id: "cosmic",
        name: "Cosmic",
        description: "Galactic power and stellar energy",
        category: ThemeCategory::Superheroes,
        light: cosmic_light(),
        dark: cosmic_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Stars,
            count: 50,
            base_color: hsl(0.0, 0.0, 100.0),
            secondary_color: Some(hsl(270.0, 100.0, 70.0)),
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Dreamy,
            glow_intensity: 0.9,
            float_amplitude: 12.0,
        },
    }
}

fn cosmic_light() -> ColorTokens {
    ColorTokens {
        background: hsl(260.0, 25.0, 96.0),
        foreground: hsl(260.0, 40.0, 10.0),
        card: hsl(260.0, 20.0, 98.0),
        card_foreground: hsl(260.0, 40.0, 10.0),
        primary: hsl(280.0, 90.0, 60.0),
        primary_foreground: hsl(280.0, 20.0, 98.0),
        secondary: hsl(200.0, 100.0, 60.0),
        secondary_foreground: hsl(200.0, 20.0, 10.0),
        accent: hsl(280.0, 80.0, 92.0),
        accent_foreground: hsl(280.0, 90.0, 50.0),
        muted: hsl(260.0, 18.0, 88.0),
        muted_foreground: hsl(260.0, 25.0, 40.0),
        border: hsl(260.0, 18.0, 85.0),
        input: hsl(260.0, 18.0, 85.0),
        ring: hsl(280.0, 90.0, 60.0),
        glow: hsl(270.0, 100.0, 65.0),
        glow_soft: hsl(270.0, 90.0, 80.0),
        particle: hsl(0.0, 0.0, 100.0),
        orb_1: hsl(280.0, 90.0, 60.0),
        orb_2: hsl(200.0, 100.0, 60.0),
    }
}

fn cosmic_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(260.0, 40.0, 5.0),
        foreground: hsl(260.0, 15.0, 95.0),
        card: hsl(260.0, 35.0, 8.0),
        card_foreground: hsl(260.0, 15.0, 95.0),
        primary: hsl(280.0, 90.0, 65.0),
        primary_foreground: hsl(260.0, 40.0, 8.0),
        secondary: hsl(200.0, 100.0, 55.0),
        secondary_foreground: hsl(200.0, 15.0, 95.0),
        accent: hsl(280.0, 60.0, 16.0),
        accent_foreground: hsl(280.0, 90.0, 75.0),
        muted: hsl(260.0, 30.0, 14.0),
        muted_foreground: hsl(260.0, 15.0, 55.0),
        border: hsl(260.0, 30.0, 14.0),
        input: hsl(260.0, 30.0, 14.0),
        ring: hsl(280.0, 90.0, 65.0),
        glow: hsl(270.0, 100.0, 60.0),
        glow_soft: hsl(270.0, 90.0, 70.0),
        particle: hsl(0.0, 0.0, 100.0),
        orb_1: hsl(280.0, 90.0, 65.0),
        orb_2: hsl(200.0, 100.0, 55.0),
    }
}

/// Bold heroic energy and classic strength
pub fn hero() -> Theme {
    Theme {
        id: "hero",
        name: "Hero",
        description: "Bold heroic energy and classic strength",
        category: ThemeCategory::Superheroes,
        light: hero_light(),
        dark: hero_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Sparks,
            count: 15,
            base_color: hsl(220.0, 90.0, 55.0),
            secondary_color: Some(hsl(45.0, 95.0, 55.0)),
            speed: ParticleSpeed::Medium,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Bouncy,
            glow_intensity: 0.85,
            float_amplitude: 6.0,
        },
    }
}

fn hero_light() -> ColorTokens {
    ColorTokens {
        background: hsl(220.0, 25.0, 96.0),
        foreground: hsl(220.0, 40.0, 10.0),
        card: hsl(220.0, 20.0, 98.0),
        card_foreground: hsl(220.0, 40.0, 10.0),
        primary: hsl(220.0, 90.0, 50.0),
        primary_foreground: hsl(220.0, 20.0, 98.0),
        secondary: hsl(0.0, 85.0, 55.0),
        secondary_foreground: hsl(0.0, 10.0, 98.0),
        accent: hsl(220.0, 80.0, 92.0),
        accent_foreground: hsl(220.0, 90.0, 40.0),
        muted: hsl(220.0, 18.0, 88.0),
        muted_foreground: hsl(220.0, 25.0, 40.0),
        border: hsl(220.0, 18.0, 85.0),
        input: hsl(220.0, 18.0, 85.0),
        ring: hsl(220.0, 90.0, 50.0),
        glow: hsl(220.0, 95.0, 55.0),
        glow_soft: hsl(220.0, 85.0, 75.0),
        particle: hsl(220.0, 90.0, 55.0),
        orb_1: hsl(220.0, 90.0, 50.0),
        orb_2: hsl(0.0, 85.0, 55.0),
    }
}

fn hero_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(220.0, 35.0, 6.0),
        foreground: hsl(220.0, 15.0, 95.0),
        card: hsl(220.0, 30.0, 10.0),
        card_foreground: hsl(220.0, 15.0, 95.0),
        primary: hsl(220.0, 90.0, 55.0),
        primary_foreground: hsl(220.0, 35.0, 8.0),
        secondary: hsl(0.0, 90.0, 50.0),
        secondary_foreground: hsl(0.0, 10.0, 95.0),
        accent: hsl(220.0, 60.0, 16.0),
        accent_foreground: hsl(220.0, 90.0, 70.0),
        muted: hsl(220.0, 28.0, 14.0),
        muted_foreground: hsl(220.0, 15.0, 55.0),
        border: hsl(220.0, 28.0, 14.0),
        input: hsl(220.0, 28.0, 14.0),
        ring: hsl(220.0, 90.0, 55.0),
        glow: hsl(220.0, 95.0, 50.0),
        glow_soft: hsl(220.0, 85.0, 60.0),
        particle: hsl(220.0, 90.0, 55.0),
        orb_1: hsl(220.0, 90.0, 55.0),
        orb_2: hsl(0.0, 90.0, 50.0),
    }
}

/// Dark vigilante mystique and shadows
pub fn night_guardian() -> Theme {
    Theme {
        id: "night-guardian",
        name: "Night Guardian",
        description: "Dark vigilante mystique and shadows",
        category: ThemeCategory::Superheroes,
        light: night_guardian_light(),
        dark: night_guardian_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Fireflies,
            count: 8,
            base_color: hsl(45.0, 90.0, 50.0),
            secondary_color: None,
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Gentle,
            glow_intensity: 0.6,
            float_amplitude: 5.0,
        },
    }
}

fn night_guardian_light() -> ColorTokens {
    ColorTokens {
        background: hsl(240.0, 15.0, 94.0),
        foreground: hsl(240.0, 30.0, 10.0),
        card: hsl(240.0, 10.0, 96.0),
        card_foreground: hsl(240.0, 30.0, 10.0),
        primary: hsl(240.0, 15.0, 25.0),
        primary_foreground: hsl(45.0, 90.0, 50.0),
        secondary: hsl(45.0, 90.0, 50.0),
        secondary_foreground: hsl(240.0, 20.0, 10.0),
        accent: hsl(240.0, 15.0, 88.0),
        accent_foreground: hsl(240.0, 15.0, 20.0),
        muted: hsl(240.0, 12.0, 86.0),
        muted_foreground: hsl(240.0, 15.0, 45.0),
        border: hsl(240.0, 12.0, 82.0),
        input: hsl(240.0, 12.0, 82.0),
        ring: hsl(45.0, 90.0, 50.0),
        glow: hsl(45.0, 85.0, 45.0),
        glow_soft: hsl(45.0, 75.0, 65.0),
        particle: hsl(45.0, 90.0, 50.0),
        orb_1: hsl(45.0, 90.0, 50.0),
        orb_2: hsl(240.0, 15.0, 25.0),
    }
}

fn night_guardian_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(240.0, 20.0, 4.0),
        foreground: hsl(240.0, 10.0, 95.0),
        card: hsl(240.0, 18.0, 7.0),
        card_foreground: hsl(240.0, 10.0, 95.0),
        primary: hsl(45.0, 90.0, 50.0),
        primary_foreground: hsl(240.0, 20.0, 6.0),
        secondary: hsl(240.0, 15.0, 20.0),
        secondary_foreground: hsl(240.0, 10.0, 90.0),
        accent: hsl(240.0, 15.0, 12.0),
        accent_foreground: hsl(45.0, 90.0, 55.0),
        muted: hsl(240.0, 16.0, 12.0),
        muted_foreground: hsl(240.0, 10.0, 50.0),
        border: hsl(240.0, 16.0, 12.0),
        input: hsl(240.0, 16.0, 12.0),
        ring: hsl(45.0, 90.0, 50.0),
        glow: hsl(45.0, 85.0, 40.0),
        glow_soft: hsl(45.0, 75.0, 50.0),
        particle: hsl(45.0, 90.0, 50.0),
        orb_1: hsl(45.0, 90.0, 50.0),
        orb_2: hsl(240.0, 15.0, 15.0),
    }
}
