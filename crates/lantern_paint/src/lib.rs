//! Lantern Paint Primitives
//!
//! Shared color vocabulary for the personalization engine.
//!
//! # Features
//!
//! - RGBA colors with f32 components
//! - CSS color parsing (`#hex`, `rgb()`, `hsl()`, bare `H S% L%` triples)
//! - Gradient stops and directions

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use gradient::{Gradient, GradientDirection, GradientStop, GradientStops};
