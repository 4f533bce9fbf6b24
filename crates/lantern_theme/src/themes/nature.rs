//! Nature themes

use super::hsl;
use crate::theme::{Theme, ThemeCategory};
use crate::tokens::{
    ColorTokens, ParticleConfig, ParticleSize, ParticleSpeed, ParticleVariant, ThemeAnimation,
};
use lantern_animation::SpringPreset;

/// Deep woodland tranquility and ancient tree wisdom
pub fn forest() -> Theme {
    Theme {
        id: "forest",
        name: "Forest",
        description: "Deep woodland tranquility and ancient tree wisdom",
        category: ThemeCategory::Nature,
        light: forest_light(),
        dark: forest_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Leaves,
            count: 20,
            base_color: hsl(95.0, 40.0, 50.0),
            secondary_color: Some(hsl(152.0, 45.0, 35.0)),
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Medium,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Dreamy,
            glow_intensity: 0.5,
            float_amplitude: 15.0,
        },
    }
}

fn forest_light() -> ColorTokens {
    ColorTokens {
        background: hsl(150.0, 20.0, 96.0),
        foreground: hsl(150.0, 30.0, 10.0),
        card: hsl(150.0, 15.0, 98.0),
        card_foreground: hsl(150.0, 30.0, 10.0),
        primary: hsl(152.0, 45.0, 35.0),
        primary_foreground: hsl(150.0, 20.0, 98.0),
        secondary: hsl(95.0, 30.0, 45.0),
        secondary_foreground: hsl(95.0, 10.0, 98.0),
        accent: hsl(152.0, 35.0, 92.0),
        accent_foreground: hsl(152.0, 45.0, 30.0),
        muted: hsl(150.0, 15.0, 88.0),
        muted_foreground: hsl(150.0, 20.0, 40.0),
        border: hsl(150.0, 15.0, 85.0),
        input: hsl(150.0, 15.0, 85.0),
        ring: hsl(152.0, 45.0, 35.0),
        glow: hsl(152.0, 50.0, 45.0),
        glow_soft: hsl(152.0, 40.0, 65.0),
        particle: hsl(95.0, 40.0, 50.0),
        orb_1: hsl(152.0, 45.0, 35.0),
        orb_2: hsl(95.0, 30.0, 45.0),
    }
}

fn forest_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(150.0, 25.0, 8.0),
        foreground: hsl(150.0, 15.0, 95.0),
        card: hsl(150.0, 20.0, 12.0),
        card_foreground: hsl(150.0, 15.0, 95.0),
        primary: hsl(152.0, 55.0, 45.0),
        primary_foreground: hsl(150.0, 25.0, 10.0),
        secondary: hsl(95.0, 35.0, 40.0),
        secondary_foreground: hsl(95.0, 10.0, 95.0),
        accent: hsl(152.0, 40.0, 18.0),
        accent_foreground: hsl(152.0, 50.0, 70.0),
        muted: hsl(150.0, 20.0, 18.0),
        muted_foreground: hsl(150.0, 15.0, 60.0),
        border: hsl(150.0, 20.0, 18.0),
        input: hsl(150.0, 20.0, 18.0),
        ring: hsl(152.0, 55.0, 45.0),
        glow: hsl(152.0, 60.0, 40.0),
        glow_soft: hsl(152.0, 50.0, 55.0),
        particle: hsl(95.0, 45.0, 45.0),
        orb_1: hsl(152.0, 55.0, 45.0),
        orb_2: hsl(95.0, 35.0, 40.0),
    }
}

/// Calming waves and deep sea serenity
pub fn ocean() -> Theme {
    Theme {
        id: "ocean",
        name: "Ocean",
        description: "Calming waves and deep sea serenity",
        category: ThemeCategory::Nature,
        light: ocean_light(),
        dark: ocean_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Bubbles,
            count: 25,
            base_color: hsl(200.0, 70.0, 60.0),
            secondary_color: Some(hsl(180.0, 60.0, 50.0)),
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Gentle,
            glow_intensity: 0.6,
            float_amplitude: 12.0,
        },
    }
}

fn ocean_light() -> ColorTokens {
    ColorTokens {
        background: hsl(200.0, 30.0, 96.0),
        foreground: hsl(210.0, 50.0, 10.0),
        card: hsl(200.0, 25.0, 98.0),
        card_foreground: hsl(210.0, 50.0, 10.0),
        primary: hsl(200.0, 80.0, 50.0),
        primary_foreground: hsl(200.0, 20.0, 98.0),
        secondary: hsl(180.0, 60.0, 45.0),
        secondary_foreground: hsl(180.0, 10.0, 98.0),
        accent: hsl(200.0, 70.0, 92.0),
        accent_foreground: hsl(200.0, 80.0, 40.0),
        muted: hsl(200.0, 20.0, 88.0),
        muted_foreground: hsl(200.0, 30.0, 40.0),
        border: hsl(200.0, 20.0, 85.0),
        input: hsl(200.0, 20.0, 85.0),
        ring: hsl(200.0, 80.0, 50.0),
        glow: hsl(195.0, 90.0, 55.0),
        glow_soft: hsl(195.0, 80.0, 70.0),
        particle: hsl(200.0, 70.0, 60.0),
        orb_1: hsl(200.0, 80.0, 50.0),
        orb_2: hsl(180.0, 60.0, 45.0),
    }
}

fn ocean_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(210.0, 50.0, 8.0),
        foreground: hsl(200.0, 20.0, 95.0),
        card: hsl(210.0, 45.0, 12.0),
        card_foreground: hsl(200.0, 20.0, 95.0),
        primary: hsl(200.0, 85.0, 55.0),
        primary_foreground: hsl(210.0, 50.0, 10.0),
        secondary: hsl(180.0, 65.0, 40.0),
        secondary_foreground: hsl(180.0, 10.0, 95.0),
        accent: hsl(200.0, 60.0, 18.0),
        accent_foreground: hsl(200.0, 80.0, 70.0),
        muted: hsl(210.0, 40.0, 18.0),
        muted_foreground: hsl(200.0, 20.0, 60.0),
        border: hsl(210.0, 40.0, 18.0),
        input: hsl(210.0, 40.0, 18.0),
        ring: hsl(200.0, 85.0, 55.0),
        glow: hsl(195.0, 80.0, 45.0),
        glow_soft: hsl(195.0, 70.0, 55.0),
        particle: hsl(200.0, 75.0, 55.0),
        orb_1: hsl(200.0, 85.0, 55.0),
        orb_2: hsl(180.0, 65.0, 40.0),
    }
}

/// Dancing northern lights across the sky
pub fn aurora() -> Theme {
    Theme {
        id: "aurora",
        name: "Aurora",
        description: "Dancing northern lights across the sky",
        category: ThemeCategory::Nature,
        light: aurora_light(),
        dark: aurora_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Aurora,
            count: 8,
            base_color: hsl(280.0, 70.0, 60.0),
            secondary_color: Some(hsl(160.0, 70.0, 50.0)),
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Large,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Dreamy,
            glow_intensity: 0.8,
            float_amplitude: 20.0,
        },
    }
}

fn aurora_light() -> ColorTokens {
    ColorTokens {
        background: hsl(260.0, 20.0, 96.0),
        foreground: hsl(260.0, 30.0, 10.0),
        card: hsl(260.0, 15.0, 98.0),
        card_foreground: hsl(260.0, 30.0, 10.0),
        primary: hsl(280.0, 70.0, 60.0),
        primary_foreground: hsl(280.0, 20.0, 98.0),
        secondary: hsl(160.0, 70.0, 50.0),
        secondary_foreground: hsl(160.0, 10.0, 98.0),
        accent: hsl(280.0, 60.0, 92.0),
        accent_foreground: hsl(280.0, 70.0, 50.0),
        muted: hsl(260.0, 15.0, 88.0),
        muted_foreground: hsl(260.0, 20.0, 40.0),
        border: hsl(260.0, 15.0, 85.0),
        input: hsl(260.0, 15.0, 85.0),
        ring: hsl(280.0, 70.0, 60.0),
        glow: hsl(270.0, 80.0, 65.0),
        glow_soft: hsl(270.0, 70.0, 80.0),
        particle: hsl(280.0, 70.0, 60.0),
        orb_1: hsl(280.0, 70.0, 60.0),
        orb_2: hsl(160.0, 70.0, 50.0),
    }
}

fn aurora_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(240.0, 30.0, 6.0),
        foreground: hsl(260.0, 15.0, 95.0),
        card: hsl(240.0, 25.0, 10.0),
        card_foreground: hsl(260.0, 15.0, 95.0),
        primary: hsl(280.0, 75.0, 65.0),
        primary_foreground: hsl(240.0, 30.0, 10.0),
        secondary: hsl(160.0, 75.0, 45.0),
        secondary_foreground: hsl(160.0, 10.0, 95.0),
        accent: hsl(280.0, 50.0, 18.0),
        accent_foreground: hsl(280.0, 75.0, 75.0),
        muted: hsl(240.0, 25.0, 16.0),
        muted_foreground: hsl(260.0, 15.0, 60.0),
        border: hsl(240.0, 25.0, 16.0),
        input: hsl(240.0, 25.0, 16.0),
        ring: hsl(280.0, 75.0, 65.0),
        glow: hsl(270.0, 85.0, 60.0),
        glow_soft: hsl(270.0, 75.0, 70.0),
        particle: hsl(280.0, 75.0, 65.0),
        orb_1: hsl(280.0, 75.0, 65.0),
        orb_2: hsl(160.0, 75.0, 45.0),
    }
}

/// Golden hour warmth painting the sky
pub fn sunset() -> Theme {
    Theme {
        id: "sunset",
        name: "Sunset",
        description: "Golden hour warmth painting the sky",
        category: ThemeCategory::Nature,
        light: sunset_light(),
        dark: sunset_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Sparks,
            count: 12,
            base_color: hsl(30.0, 100.0, 55.0),
            secondary_color: Some(hsl(350.0, 80.0, 60.0)),
            speed: ParticleSpeed::Medium,
            size: ParticleSize::Small,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Gentle,
            glow_intensity: 0.75,
            float_amplitude: 8.0,
        },
    }
}

fn sunset_light() -> ColorTokens {
    ColorTokens {
        background: hsl(30.0, 30.0, 96.0),
        foreground: hsl(25.0, 40.0, 10.0),
        card: hsl(30.0, 25.0, 98.0),
        card_foreground: hsl(25.0, 40.0, 10.0),
        primary: hsl(25.0, 95.0, 55.0),
        primary_foreground: hsl(25.0, 20.0, 98.0),
        secondary: hsl(350.0, 80.0, 60.0),
        secondary_foreground: hsl(350.0, 10.0, 98.0),
        accent: hsl(25.0, 85.0, 92.0),
        accent_foreground: hsl(25.0, 95.0, 45.0),
        muted: hsl(30.0, 20.0, 88.0),
        muted_foreground: hsl(30.0, 25.0, 40.0),
        border: hsl(30.0, 20.0, 85.0),
        input: hsl(30.0, 20.0, 85.0),
        ring: hsl(25.0, 95.0, 55.0),
        glow: hsl(30.0, 100.0, 50.0),
        glow_soft: hsl(30.0, 90.0, 70.0),
        particle: hsl(30.0, 100.0, 55.0),
        orb_1: hsl(25.0, 95.0, 55.0),
        orb_2: hsl(350.0, 80.0, 60.0),
    }
}

fn sunset_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(25.0, 35.0, 8.0),
        foreground: hsl(30.0, 20.0, 95.0),
        card: hsl(25.0, 30.0, 12.0),
        card_foreground: hsl(30.0, 20.0, 95.0),
        primary: hsl(25.0, 95.0, 60.0),
        primary_foreground: hsl(25.0, 35.0, 10.0),
        secondary: hsl(350.0, 85.0, 55.0),
        secondary_foreground: hsl(350.0, 10.0, 95.0),
        accent: hsl(25.0, 70.0, 18.0),
        accent_foreground: hsl(25.0, 95.0, 70.0),
        muted: hsl(25.0, 30.0, 18.0),
        muted_foreground: hsl(30.0, 20.0, 60.0),
        border: hsl(25.0, 30.0, 18.0),
        input: hsl(25.0, 30.0, 18.0),
        ring: hsl(25.0, 95.0, 60.0),
        glow: hsl(30.0, 100.0, 45.0),
        glow_soft: hsl(30.0, 90.0, 55.0),
        particle: hsl(30.0, 100.0, 50.0),
        orb_1: hsl(25.0, 95.0, 60.0),
        orb_2: hsl(350.0, 85.0, 55.0),
    }
}

/// Delicate spring petals floating gently
pub fn cherry_blossom() -> Theme {
    Theme {
        id: "cherry-blossom",
        name: "Cherry Blossom",
        description: "Delicate spring petals floating gently",
        category: ThemeCategory::Nature,
        light: cherry_blossom_light(),
        dark: cherry_blossom_dark(),
        particles: ParticleConfig {
            variant: ParticleVariant::Leaves,
            count: 30,
            base_color: hsl(350.0, 75.0, 80.0),
            secondary_color: Some(hsl(0.0, 0.0, 100.0)),
            speed: ParticleSpeed::Slow,
            size: ParticleSize::Medium,
        },
        animation: ThemeAnimation {
            spring: SpringPreset::Dreamy,
            glow_intensity: 0.4,
            float_amplitude: 18.0,
        },
    }
}

fn cherry_blossom_light() -> ColorTokens {
    ColorTokens {
        background: hsl(350.0, 30.0, 97.0),
        foreground: hsl(350.0, 30.0, 10.0),
        card: hsl(350.0, 25.0, 99.0),
        card_foreground: hsl(350.0, 30.0, 10.0),
        primary: hsl(350.0, 75.0, 70.0),
        primary_foreground: hsl(350.0, 20.0, 15.0),
        secondary: hsl(340.0, 60.0, 80.0),
        secondary_foreground: hsl(340.0, 40.0, 20.0),
        accent: hsl(350.0, 65.0, 94.0),
        accent_foreground: hsl(350.0, 75.0, 55.0),
        muted: hsl(350.0, 20.0, 90.0),
        muted_foreground: hsl(350.0, 20.0, 45.0),
        border: hsl(350.0, 20.0, 88.0),
        input: hsl(350.0, 20.0, 88.0),
        ring: hsl(350.0, 75.0, 70.0),
        glow: hsl(350.0, 80.0, 75.0),
        glow_soft: hsl(350.0, 70.0, 85.0),
        particle: hsl(350.0, 75.0, 80.0),
        orb_1: hsl(350.0, 75.0, 70.0),
        orb_2: hsl(340.0, 60.0, 80.0),
    }
}

fn cherry_blossom_dark() -> ColorTokens {
    ColorTokens {
        background: hsl(350.0, 25.0, 8.0),
        foreground: hsl(350.0, 15.0, 95.0),
        card: hsl(350.0, 20.0, 12.0),
        card_foreground: hsl(350.0, 15.0, 95.0),
        primary: hsl(350.0, 80.0, 65.0),
        primary_foreground: hsl(350.0, 25.0, 10.0),
        secondary: hsl(340.0, 65.0, 70.0),
        secondary_foreground: hsl(340.0, 10.0, 95.0),
        accent: hsl(350.0, 55.0, 18.0),
        accent_foreground: hsl(350.0, 80.0, 75.0),
        muted: hsl(350.0, 20.0, 18.0),
        muted_foreground: hsl(350.0, 15.0, 60.0),
        border: hsl(350.0, 20.0, 18.0),
        input: hsl(350.0, 20.0, 18.0),
        ring: hsl(350.0, 80.0, 65.0),
        glow: hsl(350.0, 85.0, 60.0),
        glow_soft: hsl(350.0, 75.0, 70.0),
        particle: hsl(350.0, 80.0, 70.0),
        orb_1: hsl(350.0, 80.0, 65.0),
        orb_2: hsl(340.0, 65.0, 70.0),
    }
}
