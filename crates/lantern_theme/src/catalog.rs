//! Built-in theme catalog
//!
//! [`ThemePreset`] enumerates every built-in theme; [`ThemeCatalog`] is the
//! id-keyed registry built from it once per process. Unknown ids are rejected
//! at [`ThemeCatalog::get`] and substituted at [`ThemeCatalog::resolve`].

use crate::theme::{Theme, ThemeCategory};
use crate::themes;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

/// Id of the theme used when a persisted id no longer exists
pub const DEFAULT_THEME_ID: &str = "lantern";

/// Built-in theme catalog entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Lantern,
    Forest,
    Ocean,
    Aurora,
    Sunset,
    CherryBlossom,
    Basketball,
    Soccer,
    Hockey,
    Cosmic,
    Hero,
    NightGuardian,
    Cyberpunk,
    Minimal,
    Cozy,
}

impl ThemePreset {
    /// Stable id used in persisted settings
    pub fn id(self) -> &'static str {
        match self {
            Self::Lantern => "lantern",
            Self::Forest => "forest",
            Self::Ocean => "ocean",
            Self::Aurora => "aurora",
            Self::Sunset => "sunset",
            Self::CherryBlossom => "cherry-blossom",
            Self::Basketball => "basketball",
            Self::Soccer => "soccer",
            Self::Hockey => "hockey",
            Self::Cosmic => "cosmic",
            Self::Hero => "hero",
            Self::NightGuardian => "night-guardian",
            Self::Cyberpunk => "cyberpunk",
            Self::Minimal => "minimal",
            Self::Cozy => "cozy",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    /// Full preset list in catalog order
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 15] = [
            ThemePreset::Lantern,
            ThemePreset::Forest,
            ThemePreset::Ocean,
            ThemePreset::Aurora,
            ThemePreset::Sunset,
            ThemePreset::CherryBlossom,
            ThemePreset::Basketball,
            ThemePreset::Soccer,
            ThemePreset::Hockey,
            ThemePreset::Cosmic,
            ThemePreset::Hero,
            ThemePreset::NightGuardian,
            ThemePreset::Cyberpunk,
            ThemePreset::Minimal,
            ThemePreset::Cozy,
        ];
        &PRESETS
    }

    /// Build the full theme definition
    pub fn theme(self) -> Theme {
        match self {
            Self::Lantern => themes::lantern(),
            Self::Forest => themes::forest(),
            Self::Ocean => themes::ocean(),
            Self::Aurora => themes::aurora(),
            Self::Sunset => themes::sunset(),
            Self::CherryBlossom => themes::cherry_blossom(),
            Self::Basketball => themes::basketball(),
            Self::Soccer => themes::soccer(),
            Self::Hockey => themes::hockey(),
            Self::Cosmic => themes::cosmic(),
            Self::Hero => themes::hero(),
            Self::NightGuardian => themes::night_guardian(),
            Self::Cyberpunk => themes::cyberpunk(),
            Self::Minimal => themes::minimal(),
            Self::Cozy => themes::cozy(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Read-only registry of themes keyed by id, in catalog order
#[derive(Debug)]
pub struct ThemeCatalog {
    themes: IndexMap<&'static str, Theme, FxBuildHasher>,
}

static CATALOG: OnceLock<ThemeCatalog> = OnceLock::new();

impl ThemeCatalog {
    /// Build a catalog containing every built-in preset
    pub fn builtin() -> Self {
        let mut themes =
            IndexMap::with_capacity_and_hasher(ThemePreset::all().len(), FxBuildHasher);
        for preset in ThemePreset::all() {
            let theme = preset.theme();
            themes.insert(theme.id, theme);
        }
        tracing::debug!(count = themes.len(), "theme catalog built");
        Self { themes }
    }

    /// Process-wide catalog, built on first use
    pub fn global() -> &'static ThemeCatalog {
        CATALOG.get_or_init(Self::builtin)
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    /// Look up `id`, substituting the default theme when it is unknown
    pub fn resolve(&self, id: &str) -> &Theme {
        match self.get(id) {
            Some(theme) => theme,
            None => {
                tracing::warn!(theme_id = id, "unknown theme id, using default");
                self.default_theme()
            }
        }
    }

    pub fn default_theme(&self) -> &Theme {
        // The builtin constructor always inserts the default preset
        &self.themes[DEFAULT_THEME_ID]
    }

    pub fn all(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    /// Themes in one category, preserving catalog order
    pub fn by_category(&self, category: ThemeCategory) -> impl Iterator<Item = &Theme> {
        self.themes
            .values()
            .filter(move |theme| theme.category == category)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_ids_round_trip() {
        for &preset in ThemePreset::all() {
            assert_eq!(ThemePreset::from_id(preset.id()), Some(preset));
            assert_eq!(preset.theme().id, preset.id());
        }
        assert_eq!(ThemePreset::from_id("vaporwave"), None);
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.resolve("does-not-exist").id, DEFAULT_THEME_ID);
        assert_eq!(catalog.resolve("ocean").id, "ocean");
    }
}
