#![forbid(unsafe_code)]

//! Pointer velocity estimation.
//!
//! [`VelocityTracker`] keeps the recent pointer samples of one interaction and
//! estimates the release velocity from the samples inside a short horizon.
//!
//! # Invariants
//!
//! 1. Samples are stored in arrival order; at most [`MAX_SAMPLES`] are kept.
//! 2. Velocity is measured between the oldest and newest sample that lie
//!    within `horizon` of the newest sample.
//! 3. Fewer than two usable samples, or zero elapsed time, yield zero velocity.
//!
//! # Failure Modes
//!
//! - Out-of-order timestamps: samples older than the newest one are still
//!   stored but a negative span is treated as zero elapsed time.

use std::collections::VecDeque;

use web_time::{Duration, Instant};

/// Upper bound on retained samples.
pub const MAX_SAMPLES: usize = 20;

/// Default look-back window for velocity estimation.
pub const DEFAULT_HORIZON: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f32,
    y: f32,
    time: Instant,
}

/// Velocity in pixels per second along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    /// Horizontal velocity (positive to the right).
    pub x: f32,
    /// Vertical velocity (positive downwards).
    pub y: f32,
}

/// Tracks pointer samples for one interaction.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
    horizon: Duration,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON)
    }
}

impl VelocityTracker {
    /// Create a tracker with the given look-back horizon.
    #[must_use]
    pub fn new(horizon: Duration) -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            horizon,
        }
    }

    /// Record a pointer sample.
    pub fn add(&mut self, x: f32, y: f32, time: Instant) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { x, y, time });
    }

    /// Drop all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of retained samples.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are retained.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Estimate the current velocity.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        let Some(newest) = self.samples.back() else {
            return Velocity::default();
        };
        let oldest = self
            .samples
            .iter()
            .find(|s| newest.time.saturating_duration_since(s.time) <= self.horizon)
            .unwrap_or(newest);

        let elapsed = newest.time.saturating_duration_since(oldest.time);
        if elapsed.is_zero() {
            return Velocity::default();
        }
        let secs = elapsed.as_secs_f32();
        Velocity {
            x: (newest.x - oldest.x) / secs,
            y: (newest.y - oldest.y) / secs,
        }
    }
}
