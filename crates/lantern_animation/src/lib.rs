//! Lantern Motion System
//!
//! Motion settings shared by themes, scenes and the resolver.
//!
//! # Features
//!
//! - **Spring presets**: stiffness/damping/mass tuples named by feel
//! - **Animation intensity**: the user's motion preference and its scale factor
//! - **Accessibility**: the reduced-motion cap and its signal delivery

pub mod accessibility;
pub mod intensity;
pub mod spring;

pub use accessibility::{motion_cap, ReducedMotion, ReducedMotionSource};
pub use intensity::AnimationIntensity;
pub use spring::{SpringConfig, SpringPreset};
