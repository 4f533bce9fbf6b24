//! Color tokens for theming

use lantern_paint::Color;
use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    // Surfaces
    Background,
    Foreground,
    Card,
    CardForeground,

    // Brand colors
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Accent,
    AccentForeground,
    Muted,
    MutedForeground,

    // Form chrome
    Border,
    Input,
    Ring,

    // Ambient effects
    Glow,
    GlowSoft,
    Particle,
    #[serde(rename = "orb-1")]
    Orb1,
    #[serde(rename = "orb-2")]
    Orb2,
}

impl ColorToken {
    /// Every token, in palette order
    pub const ALL: [ColorToken; 20] = [
        Self::Background,
        Self::Foreground,
        Self::Card,
        Self::CardForeground,
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Muted,
        Self::MutedForeground,
        Self::Border,
        Self::Input,
        Self::Ring,
        Self::Glow,
        Self::GlowSoft,
        Self::Particle,
        Self::Orb1,
        Self::Orb2,
    ];

    /// The token a custom accent color replaces
    pub const PRIMARY_ACCENT: ColorToken = ColorToken::Primary;

    /// CSS custom-property style name (`card-foreground`, `orb-1`)
    pub fn id(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "card-foreground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
            Self::Glow => "glow",
            Self::GlowSoft => "glow-soft",
            Self::Particle => "particle",
            Self::Orb1 => "orb-1",
            Self::Orb2 => "orb-2",
        }
    }
}

/// Complete palette for one color scheme
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColorTokens {
    pub background: Color,
    pub foreground: Color,
    pub card: Color,
    pub card_foreground: Color,

    pub primary: Color,
    pub primary_foreground: Color,
    pub secondary: Color,
    pub secondary_foreground: Color,
    pub accent: Color,
    pub accent_foreground: Color,
    pub muted: Color,
    pub muted_foreground: Color,

    pub border: Color,
    pub input: Color,
    pub ring: Color,

    pub glow: Color,
    pub glow_soft: Color,
    pub particle: Color,
    #[serde(rename = "orb-1")]
    pub orb_1: Color,
    #[serde(rename = "orb-2")]
    pub orb_2: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Foreground => self.foreground,
            ColorToken::Card => self.card,
            ColorToken::CardForeground => self.card_foreground,
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryForeground => self.primary_foreground,
            ColorToken::Secondary => self.secondary,
            ColorToken::SecondaryForeground => self.secondary_foreground,
            ColorToken::Accent => self.accent,
            ColorToken::AccentForeground => self.accent_foreground,
            ColorToken::Muted => self.muted,
            ColorToken::MutedForeground => self.muted_foreground,
            ColorToken::Border => self.border,
            ColorToken::Input => self.input,
            ColorToken::Ring => self.ring,
            ColorToken::Glow => self.glow,
            ColorToken::GlowSoft => self.glow_soft,
            ColorToken::Particle => self.particle,
            ColorToken::Orb1 => self.orb_1,
            ColorToken::Orb2 => self.orb_2,
        }
    }

    fn slot_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::Background => &mut self.background,
            ColorToken::Foreground => &mut self.foreground,
            ColorToken::Card => &mut self.card,
            ColorToken::CardForeground => &mut self.card_foreground,
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryForeground => &mut self.primary_foreground,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::SecondaryForeground => &mut self.secondary_foreground,
            ColorToken::Accent => &mut self.accent,
            ColorToken::AccentForeground => &mut self.accent_foreground,
            ColorToken::Muted => &mut self.muted,
            ColorToken::MutedForeground => &mut self.muted_foreground,
            ColorToken::Border => &mut self.border,
            ColorToken::Input => &mut self.input,
            ColorToken::Ring => &mut self.ring,
            ColorToken::Glow => &mut self.glow,
            ColorToken::GlowSoft => &mut self.glow_soft,
            ColorToken::Particle => &mut self.particle,
            ColorToken::Orb1 => &mut self.orb_1,
            ColorToken::Orb2 => &mut self.orb_2,
        }
    }

    /// Copy of this palette with a single token replaced
    pub fn with_override(mut self, token: ColorToken, color: Color) -> Self {
        *self.slot_mut(token) = color;
        self
    }

    /// Iterate `(token, color)` pairs in palette order
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, Color)> + '_ {
        ColorToken::ALL.iter().map(move |&token| (token, self.get(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ColorTokens {
        let mut tokens = ColorTokens {
            background: Color::BLACK,
            foreground: Color::BLACK,
            card: Color::BLACK,
            card_foreground: Color::BLACK,
            primary: Color::BLACK,
            primary_foreground: Color::BLACK,
            secondary: Color::BLACK,
            secondary_foreground: Color::BLACK,
            accent: Color::BLACK,
            accent_foreground: Color::BLACK,
            muted: Color::BLACK,
            muted_foreground: Color::BLACK,
            border: Color::BLACK,
            input: Color::BLACK,
            ring: Color::BLACK,
            glow: Color::BLACK,
            glow_soft: Color::BLACK,
            particle: Color::BLACK,
            orb_1: Color::BLACK,
            orb_2: Color::BLACK,
        };
        // Give each slot a distinct value so get/slot_mut mix-ups show up
        for (i, token) in ColorToken::ALL.iter().enumerate() {
            *tokens.slot_mut(*token) = Color::from_rgba8(i as u8, 0, 0, 255);
        }
        tokens
    }

    #[test]
    fn get_and_slot_agree() {
        let tokens = sample();
        for (i, (_, color)) in tokens.iter().enumerate() {
            assert_eq!(color.to_rgba8()[0], i as u8);
        }
    }

    #[test]
    fn override_touches_one_token() {
        let base = sample();
        let overridden = base.with_override(ColorToken::Primary, Color::WHITE);
        for token in ColorToken::ALL {
            if token == ColorToken::Primary {
                assert_eq!(overridden.get(token), Color::WHITE);
            } else {
                assert_eq!(overridden.get(token), base.get(token), "{token:?}");
            }
        }
    }

    #[test]
    fn token_ids_match_serde_names() {
        for token in ColorToken::ALL {
            let json = serde_json::to_string(&token).unwrap();
            assert_eq!(json, format!("\"{}\"", token.id()));
        }
    }
}
