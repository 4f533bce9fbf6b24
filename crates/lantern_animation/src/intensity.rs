//! User-selected animation intensity

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much motion the user wants
///
/// Variants are ordered from least to most motion, so `min` picks the calmer
/// of two settings.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationIntensity {
    None,
    Subtle,
    #[default]
    Normal,
    Energetic,
}

impl AnimationIntensity {
    pub fn all() -> &'static [AnimationIntensity] {
        &[Self::None, Self::Subtle, Self::Normal, Self::Energetic]
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Subtle => "subtle",
            Self::Normal => "normal",
            Self::Energetic => "energetic",
        }
    }

    /// Scale applied to particle counts and float amplitudes
    pub fn multiplier(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Subtle => 0.5,
            Self::Normal => 1.0,
            Self::Energetic => 1.5,
        }
    }

    pub fn is_animated(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for AnimationIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_from_still_to_energetic() {
        let mut sorted = AnimationIntensity::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, AnimationIntensity::all());
        assert_eq!(
            AnimationIntensity::Energetic.min(AnimationIntensity::Subtle),
            AnimationIntensity::Subtle
        );
    }

    #[test]
    fn multipliers() {
        assert_eq!(AnimationIntensity::None.multiplier(), 0.0);
        assert_eq!(AnimationIntensity::Subtle.multiplier(), 0.5);
        assert_eq!(AnimationIntensity::Normal.multiplier(), 1.0);
        assert_eq!(AnimationIntensity::Energetic.multiplier(), 1.5);
    }

    #[test]
    fn rejects_unknown_ids() {
        let parsed: Result<AnimationIntensity, _> = serde_json::from_str("\"wild\"");
        assert!(parsed.is_err());
        let parsed: AnimationIntensity = serde_json::from_str("\"subtle\"").unwrap();
        assert_eq!(parsed, AnimationIntensity::Subtle);
    }
}
