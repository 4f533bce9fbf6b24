//! Reduced-motion policy
//!
//! [`motion_cap`] is the whole policy: a reduced-motion request always wins.
//! [`ReducedMotion`] hides how the platform delivers that request, either by
//! being asked (a polled [`ReducedMotionSource`]) or by telling us (pushed
//! values from a media-query listener or similar).

use crate::intensity::AnimationIntensity;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cap `setting` by the reduced-motion preference
pub fn motion_cap(prefers_reduced_motion: bool, setting: AnimationIntensity) -> AnimationIntensity {
    if prefers_reduced_motion {
        AnimationIntensity::None
    } else {
        setting
    }
}

/// A platform signal that can be asked for the current preference
pub trait ReducedMotionSource: Send + Sync {
    fn prefers_reduced_motion(&self) -> bool;
}

impl<F> ReducedMotionSource for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn prefers_reduced_motion(&self) -> bool {
        self()
    }
}

enum Delivery {
    Pushed(AtomicBool),
    Polled(Box<dyn ReducedMotionSource>),
}

/// Single boolean view over a polled or pushed reduced-motion signal
pub struct ReducedMotion {
    delivery: Delivery,
}

impl ReducedMotion {
    /// Signal that is updated with [`ReducedMotion::push`]
    pub fn pushed(initial: bool) -> Self {
        Self {
            delivery: Delivery::Pushed(AtomicBool::new(initial)),
        }
    }

    /// Signal that asks `source` every time it is read
    pub fn polled(source: impl ReducedMotionSource + 'static) -> Self {
        Self {
            delivery: Delivery::Polled(Box::new(source)),
        }
    }

    /// Record a new pushed value
    ///
    /// Ignored for polled signals, which always report their source.
    pub fn push(&self, prefers_reduced_motion: bool) {
        match &self.delivery {
            Delivery::Pushed(value) => {
                let previous = value.swap(prefers_reduced_motion, Ordering::AcqRel);
                if previous != prefers_reduced_motion {
                    tracing::debug!(prefers_reduced_motion, "reduced-motion preference changed");
                }
            }
            Delivery::Polled(_) => {
                tracing::warn!("push ignored on a polled reduced-motion signal");
            }
        }
    }

    pub fn get(&self) -> bool {
        match &self.delivery {
            Delivery::Pushed(value) => value.load(Ordering::Acquire),
            Delivery::Polled(source) => source.prefers_reduced_motion(),
        }
    }

    /// Cap `setting` by the current preference
    pub fn cap(&self, setting: AnimationIntensity) -> AnimationIntensity {
        motion_cap(self.get(), setting)
    }
}

impl Default for ReducedMotion {
    fn default() -> Self {
        Self::pushed(false)
    }
}

impl std::fmt::Debug for ReducedMotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.delivery {
            Delivery::Pushed(_) => "pushed",
            Delivery::Polled(_) => "polled",
        };
        f.debug_struct("ReducedMotion")
            .field("delivery", &kind)
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn reduced_motion_always_wins() {
        for &setting in AnimationIntensity::all() {
            assert_eq!(motion_cap(true, setting), AnimationIntensity::None);
            assert_eq!(motion_cap(false, setting), setting);
        }
    }

    #[test]
    fn pushed_signal_tracks_latest_value() {
        let signal = ReducedMotion::pushed(false);
        assert_eq!(signal.cap(AnimationIntensity::Energetic), AnimationIntensity::Energetic);

        signal.push(true);
        assert!(signal.get());
        assert_eq!(signal.cap(AnimationIntensity::Energetic), AnimationIntensity::None);
    }

    #[test]
    fn polled_signal_reads_source_each_time() {
        let flag = Arc::new(AtomicBool::new(false));
        let source_flag = Arc::clone(&flag);
        let signal = ReducedMotion::polled(move || source_flag.load(Ordering::SeqCst));

        assert!(!signal.get());
        flag.store(true, Ordering::SeqCst);
        assert!(signal.get());

        // Pushes don't override a polled source
        signal.push(false);
        assert!(signal.get());
    }
}
