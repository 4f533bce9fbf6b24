//! Theme definitions and color-scheme vocabulary

use crate::tokens::{ColorTokens, ParticleConfig, ThemeAnimation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Light or dark rendering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// The user's color mode preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    /// Follow the platform preference
    #[default]
    System,
}

impl ColorMode {
    /// Concrete scheme for this mode given the platform preference
    pub fn scheme(self, system: ColorScheme) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System => system,
        }
    }
}

impl From<ColorScheme> for ColorMode {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::Light,
            ColorScheme::Dark => Self::Dark,
        }
    }
}

/// Theme grouping shown in pickers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeCategory {
    Default,
    Nature,
    Sports,
    Superheroes,
    Lifestyle,
}

impl ThemeCategory {
    pub fn all() -> &'static [ThemeCategory] {
        const CATEGORIES: [ThemeCategory; 5] = [
            ThemeCategory::Default,
            ThemeCategory::Nature,
            ThemeCategory::Sports,
            ThemeCategory::Superheroes,
            ThemeCategory::Lifestyle,
        ];
        &CATEGORIES
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Nature => "nature",
            Self::Sports => "sports",
            Self::Superheroes => "superheroes",
            Self::Lifestyle => "lifestyle",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Nature => "Nature",
            Self::Sports => "Sports",
            Self::Superheroes => "Superheroes",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An immutable catalog entry
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ThemeCategory,
    pub light: ColorTokens,
    pub dark: ColorTokens,
    pub particles: ParticleConfig,
    pub animation: ThemeAnimation,
}

impl Theme {
    /// Palette for a concrete scheme
    pub fn palette(&self, scheme: ColorScheme) -> &ColorTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_mode_follows_platform() {
        assert_eq!(ColorMode::System.scheme(ColorScheme::Dark), ColorScheme::Dark);
        assert_eq!(ColorMode::System.scheme(ColorScheme::Light), ColorScheme::Light);
        assert_eq!(ColorMode::Light.scheme(ColorScheme::Dark), ColorScheme::Light);
    }

    #[test]
    fn toggle_flips_scheme() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorMode::from(ColorScheme::Dark.toggle()), ColorMode::Light);
    }
}
