//! Built-in theme definitions, one module per category

mod lantern;
mod lifestyle;
mod nature;
mod sports;
mod superheroes;

pub use lantern::lantern;
pub use lifestyle::{cozy, cyberpunk, minimal};
pub use nature::{aurora, cherry_blossom, forest, ocean, sunset};
pub use sports::{basketball, hockey, soccer};
pub use superheroes::{cosmic, hero, night_guardian};

use lantern_paint::Color;

/// Shorthand for the `H S% L%` triples the palettes are written in
fn hsl(h: f32, s: f32, l: f32) -> Color {
    Color::from_hsl(h, s, l)
}
