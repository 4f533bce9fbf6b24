//! Lantern Ambient Composition
//!
//! Scenes, wallpapers, weather tone and the resolver that merges them with
//! the user's settings into a single [`ResolvedPresentation`].
//!
//! # Example
//!
//! ```rust
//! use lantern_ambient::{
//!     AccessibilitySignal, PreferenceResolver, SceneSettings, SeasonalContext, ThemeSettings,
//! };
//! use lantern_animation::AnimationIntensity;
//!
//! let settings = ThemeSettings {
//!     theme_id: "ocean".into(),
//!     ..ThemeSettings::default()
//! };
//! let reduced = AccessibilitySignal {
//!     prefers_reduced_motion: true,
//!     ..AccessibilitySignal::default()
//! };
//!
//! let resolved = PreferenceResolver::default().resolve(
//!     &settings,
//!     &SceneSettings::default(),
//!     &reduced,
//!     &SeasonalContext::default(),
//! );
//! assert_eq!(resolved.theme_id, "ocean");
//! assert_eq!(resolved.intensity, AnimationIntensity::None);
//! assert!(resolved.particles.is_none());
//! ```

pub mod resolver;
pub mod scene;
pub mod settings;
pub mod tone;
pub mod wallpaper;

pub use resolver::{AccessibilitySignal, PreferenceResolver, ResolvedPresentation};
pub use scene::{
    daily_inspiration, AmbientScene, ImageStyle, Inspiration, SceneCatalog, SceneMood,
    ScenePreset,
};
pub use settings::{
    BackgroundStyle, ColorSettings, SceneSettings, ThemeSettings, WidgetConfig, WidgetSize,
    WidgetType,
};
pub use tone::{tone_for, SeasonalContext, Tone, ToneConfig, WeatherSignal, WeatherTag};
pub use wallpaper::{StyleSpec, Wallpaper, WallpaperGenerator};
