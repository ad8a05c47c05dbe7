#![forbid(unsafe_code)]

//! Generation-counted auto-hide for the undo popup.
//!
//! Scheduled hides are never cancelled through a handle. Each one captures
//! the generation current at scheduling time in a [`HideToken`]; any later
//! [`invalidate`](AutoHideTimer::invalidate) makes it stale, and a stale
//! token is ignored when it fires. Lost or reordered cancellations are
//! therefore harmless.
//!
//! # Invariants
//!
//! 1. The generation only grows (wrapping after `u64::MAX` bumps).
//! 2. [`fire`](AutoHideTimer::fire) accepts a token iff its generation equals
//!    the current one.
//! 3. At most one touch-armed token is issued per generation.

use web_time::Duration;

/// Default delay before the undo popup hides itself.
pub const DEFAULT_UNDO_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// Opaque ticket handed to the host's scheduler and returned on expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HideToken {
    generation: u64,
}

impl HideToken {
    /// Generation captured when the hide was scheduled.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Auto-hide generation counter and policy.
#[derive(Debug, Clone)]
pub struct AutoHideTimer {
    generation: u64,
    delay: Duration,
    require_touch: bool,
    armed_for: Option<u64>,
}

impl Default for AutoHideTimer {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_HIDE_DELAY, true)
    }
}

impl AutoHideTimer {
    /// Create a timer.
    ///
    /// With `require_touch` set, a committed batch does not start the
    /// countdown; the first touch while the popup is visible does.
    #[must_use]
    pub const fn new(delay: Duration, require_touch: bool) -> Self {
        Self {
            generation: 0,
            delay,
            require_touch,
            armed_for: None,
        }
    }

    /// Make every outstanding token stale.
    pub fn invalidate(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        tracing::trace!(message = "auto_hide.invalidate", generation = self.generation);
        self.generation
    }

    /// Issue a token for the current generation.
    pub fn arm(&mut self) -> HideToken {
        self.armed_for = Some(self.generation);
        tracing::debug!(
            message = "auto_hide.arm",
            generation = self.generation,
            delay_ms = self.delay.as_millis() as u64
        );
        HideToken {
            generation: self.generation,
        }
    }

    /// Issue a token unless one was already issued for this generation.
    pub fn arm_if_idle(&mut self) -> Option<HideToken> {
        if self.armed_for == Some(self.generation) {
            return None;
        }
        Some(self.arm())
    }

    /// Consume a fired token. Returns whether the hide should happen.
    pub fn fire(&mut self, token: HideToken) -> bool {
        if token.generation != self.generation {
            tracing::trace!(
                message = "auto_hide.stale",
                token = token.generation,
                generation = self.generation
            );
            return false;
        }
        self.armed_for = None;
        tracing::debug!(message = "auto_hide.fire", generation = self.generation);
        true
    }

    /// Current generation.
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Delay between arming and expiry.
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay. Already scheduled hides keep their old delay.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Whether the countdown waits for a touch.
    #[inline]
    #[must_use]
    pub const fn require_touch(&self) -> bool {
        self.require_touch
    }

    /// Change whether the countdown waits for a touch.
    pub fn set_require_touch(&mut self, require_touch: bool) {
        self.require_touch = require_touch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let t = AutoHideTimer::default();
        assert_eq!(t.delay(), Duration::from_millis(5000));
        assert!(t.require_touch());
        assert_eq!(t.generation(), 0);
    }

    // --- Generation ---

    #[test]
    fn fresh_token_fires() {
        let mut t = AutoHideTimer::new(DEFAULT_UNDO_HIDE_DELAY, false);
        let token = t.arm();
        assert!(t.fire(token));
    }

    #[test]
    fn invalidated_token_is_stale() {
        let mut t = AutoHideTimer::new(DEFAULT_UNDO_HIDE_DELAY, false);
        let old = t.arm();
        t.invalidate();
        let new = t.arm();
        assert!(!t.fire(old));
        assert!(t.fire(new));
        assert_eq!(new.generation(), old.generation() + 1);
    }

    #[test]
    fn generation_wraps() {
        let mut t = AutoHideTimer::default();
        t.generation = u64::MAX;
        assert_eq!(t.invalidate(), 0);
    }

    // --- Touch arming ---

    #[test]
    fn arm_if_idle_issues_one_token_per_generation() {
        let mut t = AutoHideTimer::default();
        let first = t.arm_if_idle().expect("first touch arms");
        assert!(t.arm_if_idle().is_none());
        t.invalidate();
        let second = t.arm_if_idle().expect("new generation arms");
        assert_ne!(first, second);
    }

    #[test]
    fn firing_allows_rearming() {
        let mut t = AutoHideTimer::default();
        let token = t.arm_if_idle().expect("arms");
        assert!(t.fire(token));
        assert!(t.arm_if_idle().is_some());
    }
}
