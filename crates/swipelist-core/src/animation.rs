#![forbid(unsafe_code)]

//! Animation values for the two-phase row dismissal.
//!
//! The host owns the actual frame clock. The engine describes each animation
//! as a [`Tween`] and the host reports interpolated values back.
//!
//! # Phases
//!
//! 1. [`DismissPhase::SlideOut`]: translate to `±width` and fade to zero.
//! 2. [`DismissPhase::Collapse`]: shrink the row height to
//!    [`COLLAPSED_HEIGHT`]. Starts only once phase 1 has completed.
//!
//! # Invariants
//!
//! 1. `value_at` is clamped to the `[from, to]` segment.
//! 2. A zero duration completes immediately (fraction 1.0).
//! 3. The collapse target is never zero.

use web_time::Duration;

/// Height a collapsed row ends at. Non-zero so downstream code never divides
/// by a zero row height.
pub const COLLAPSED_HEIGHT: f32 = 1.0;

/// Default duration for slide, spring-back and collapse animations.
pub const DEFAULT_ANIMATION_TIME: Duration = Duration::from_millis(200);

/// Which half of a dismissal an animation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissPhase {
    /// Horizontal slide with fade-out.
    SlideOut,
    /// Height collapse.
    Collapse,
}

/// Linear interpolation between two values over a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Start value.
    pub from: f32,
    /// End value.
    pub to: f32,
    /// Total duration.
    pub duration: Duration,
}

impl Tween {
    /// Create a tween.
    #[must_use]
    pub const fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// Unit progress tween `0.0 → 1.0`.
    #[must_use]
    pub const fn progress(duration: Duration) -> Self {
        Self::new(0.0, 1.0, duration)
    }

    /// Completed fraction at `elapsed`, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Value at a completed fraction `t`.
    #[must_use]
    pub fn value_at_fraction(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    /// Value at `elapsed`.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        self.value_at_fraction(self.fraction(elapsed))
    }

    /// Whether the tween has finished at `elapsed`.
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Horizontal offset a row slides out to.
#[must_use]
pub fn slide_out_offset(width: f32, to_right: bool) -> f32 {
    if to_right { width } else { -width }
}

/// Interpolate a slide (offset and opacity together) from a starting visual
/// state towards `(target_offset, target_opacity)` at progress `t`.
#[must_use]
pub fn blend(
    start_offset: f32,
    start_opacity: f32,
    target_offset: f32,
    target_opacity: f32,
    t: f32,
) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    (
        start_offset + (target_offset - start_offset) * t,
        start_opacity + (target_opacity - start_opacity) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn tween_interpolates_linearly() {
        let tw = Tween::new(48.0, COLLAPSED_HEIGHT, Duration::from_millis(200));
        assert_eq!(tw.value_at(Duration::ZERO), 48.0);
        assert!((tw.value_at(MS_100) - 24.5).abs() < 1e-4);
        assert_eq!(tw.value_at(Duration::from_millis(200)), COLLAPSED_HEIGHT);
        assert_eq!(tw.value_at(Duration::from_secs(5)), COLLAPSED_HEIGHT);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tw = Tween::new(0.0, 10.0, Duration::ZERO);
        assert_eq!(tw.fraction(Duration::ZERO), 1.0);
        assert_eq!(tw.value_at(Duration::ZERO), 10.0);
        assert!(tw.is_complete(Duration::ZERO));
    }

    #[test]
    fn slide_target_sign() {
        assert_eq!(slide_out_offset(320.0, true), 320.0);
        assert_eq!(slide_out_offset(320.0, false), -320.0);
    }

    #[test]
    fn blend_from_partial_swipe() {
        let (offset, opacity) = blend(100.0, 0.5, 400.0, 0.0, 0.5);
        assert_eq!(offset, 250.0);
        assert_eq!(opacity, 0.25);
        assert_eq!(blend(100.0, 0.5, 0.0, 1.0, 2.0), (0.0, 1.0));
    }
}
