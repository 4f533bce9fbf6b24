//! Design tokens carried by every theme

mod animation;
mod color;
mod particle;

pub use animation::ThemeAnimation;
pub use color::{ColorToken, ColorTokens};
pub use particle::{ParticleConfig, ParticleSize, ParticleSpeed, ParticleVariant};
