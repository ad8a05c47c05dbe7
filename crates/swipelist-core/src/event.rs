#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The host translates its native touch stream into [`PointerEvent`]s before
//! handing them to the engine. Coordinates are in list space (origin at the
//! list's top-left corner, device pixels).
//!
//! # Design Notes
//!
//! - Only the primary pointer is modelled; secondary pointers are the host's
//!   business.
//! - `time` is a monotonic timestamp used for velocity tracking, never wall
//!   clock time.

use web_time::Instant;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Finger or button went down.
    Down,
    /// Pointer moved while down.
    Move,
    /// Finger or button released.
    Up,
    /// The platform aborted the interaction (e.g. a parent stole the touch).
    Cancel,
}

/// A single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Interaction phase.
    pub kind: PointerKind,
    /// Horizontal position in list space.
    pub x: f32,
    /// Vertical position in list space.
    pub y: f32,
    /// Monotonic timestamp of the sample.
    pub time: Instant,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerKind, x: f32, y: f32, time: Instant) -> Self {
        Self { kind, x, y, time }
    }

    /// Shorthand for a [`PointerKind::Down`] event.
    #[must_use]
    pub const fn down(x: f32, y: f32, time: Instant) -> Self {
        Self::new(PointerKind::Down, x, y, time)
    }

    /// Shorthand for a [`PointerKind::Move`] event.
    #[must_use]
    pub const fn moved(x: f32, y: f32, time: Instant) -> Self {
        Self::new(PointerKind::Move, x, y, time)
    }

    /// Shorthand for a [`PointerKind::Up`] event.
    #[must_use]
    pub const fn up(x: f32, y: f32, time: Instant) -> Self {
        Self::new(PointerKind::Up, x, y, time)
    }

    /// Shorthand for a [`PointerKind::Cancel`] event.
    #[must_use]
    pub const fn cancel(x: f32, y: f32, time: Instant) -> Self {
        Self::new(PointerKind::Cancel, x, y, time)
    }

    /// Same sample, re-labelled as a cancel.
    ///
    /// Sent to the underlying list once a swipe claims the pointer so that
    /// pressed/highlighted state is dropped.
    #[must_use]
    pub const fn as_cancel(self) -> Self {
        Self {
            kind: PointerKind::Cancel,
            ..self
        }
    }

    /// Whether this event ends the interaction (up or cancel).
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, PointerKind::Up | PointerKind::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_cancel_keeps_position_and_time() {
        let t = Instant::now();
        let ev = PointerEvent::moved(12.5, 40.0, t).as_cancel();
        assert_eq!(ev.kind, PointerKind::Cancel);
        assert_eq!(ev.x, 12.5);
        assert_eq!(ev.y, 40.0);
        assert_eq!(ev.time, t);
    }

    #[test]
    fn terminal_kinds() {
        let t = Instant::now();
        assert!(PointerEvent::up(0.0, 0.0, t).is_terminal());
        assert!(PointerEvent::cancel(0.0, 0.0, t).is_terminal());
        assert!(!PointerEvent::down(0.0, 0.0, t).is_terminal());
        assert!(!PointerEvent::moved(0.0, 0.0, t).is_terminal());
    }
}
