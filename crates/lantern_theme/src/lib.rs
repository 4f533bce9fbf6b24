//! Lantern Theme Catalog
//!
//! Built-in visual themes for the personalization engine. Each theme carries a
//! light and a dark palette of twenty color tokens, a default particle layer
//! and default motion settings.
//!
//! # Quick Start
//!
//! ```rust
//! use lantern_theme::{ColorScheme, ThemeCatalog, ThemeCategory};
//!
//! let catalog = ThemeCatalog::global();
//! let forest = catalog.resolve("forest");
//! let background = forest.palette(ColorScheme::Dark).background;
//! assert!(background.is_valid());
//!
//! let nature: Vec<_> = catalog.by_category(ThemeCategory::Nature).collect();
//! assert_eq!(nature[0].id, "forest");
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: surfaces, brand colors, form chrome and ambient effect colors
//! - [`ParticleConfig`]: particle variant, count, colors, speed and size
//! - [`ThemeAnimation`]: spring preset, glow intensity and float amplitude

pub mod catalog;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use catalog::{ThemeCatalog, ThemePreset, DEFAULT_THEME_ID};
pub use theme::{ColorMode, ColorScheme, Theme, ThemeCategory};
pub use tokens::{
    ColorToken, ColorTokens, ParticleConfig, ParticleSize, ParticleSpeed, ParticleVariant,
    ThemeAnimation,
};
