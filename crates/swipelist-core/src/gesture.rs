#![forbid(unsafe_code)]

//! Swipe gesture recognition: turns a pointer stream into a dismiss decision.
//!
//! [`SwipeTracker`] follows one pointer interaction on one row. The engine
//! performs hit testing and vetoes, then calls [`SwipeTracker::begin`]; every
//! subsequent move and the final release are interpreted here.
//!
//! # State Machine
//!
//! ```text
//!            begin             |dx| > slop
//!   Idle ───────────► Tracking ───────────► Swiping
//!    ▲                   │                     │
//!    │     up / cancel   │        up / cancel  │
//!    └───────────────────┴─────────────────────┘
//!              (Release: Dismiss | SpringBack | NotSwiped)
//! ```
//!
//! Committing, spring-back and cancellation are not resting states: they are
//! reported as the [`Decision`] of the release and the tracker is `Idle`
//! again when the call returns.
//!
//! # Invariants
//!
//! 1. At most one interaction is tracked at a time.
//! 2. While `|dx| <= slop` no visual offset is reported.
//! 3. A move in a disallowed direction re-anchors the down position at the
//!    current x, so reversals never accumulate stale distance.
//! 4. A release dismisses iff `|dx| > width / 2`, or the fling conditions
//!    of [`decide`] hold. The 50% and 20% thresholds are intentionally
//!    asymmetric.
//! 5. After `reset()` or any release the tracker is `Idle`.
//!
//! # Failure Modes
//!
//! - A zero list width is clamped to one pixel to keep the opacity and
//!   threshold arithmetic finite.
//! - Moves and releases without a preceding `begin` are ignored.

use web_time::Duration;

use crate::direction::{LayoutDirection, SwipeDirection};
use crate::event::PointerEvent;
use crate::velocity::{DEFAULT_HORIZON, Velocity, VelocityTracker};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Fraction of the list width that dismisses regardless of velocity.
pub const DISTANCE_DISMISS_FRACTION: f32 = 0.5;

/// Minimum fraction of the list width a fling must have travelled.
pub const FLING_MIN_DISTANCE_FRACTION: f32 = 0.2;

/// Thresholds for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Horizontal distance before a touch becomes a swipe (default: 16.0).
    pub slop: f32,
    /// Slowest release that still counts as a fling, px/s (default: 50.0).
    pub min_fling_velocity: f32,
    /// Fastest release that still counts as a fling, px/s (default: 8000.0).
    pub max_fling_velocity: f32,
    /// Look-back window for velocity estimation (default: 100ms).
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub velocity_horizon: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            slop: 16.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8000.0,
            velocity_horizon: DEFAULT_HORIZON,
        }
    }
}

#[cfg(feature = "serde")]
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use web_time::Duration;

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

/// Geometry of the list the gesture happens in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSurface {
    /// Width of the list in pixels.
    pub width: f32,
    /// Layout direction of the list.
    pub layout: LayoutDirection,
}

impl SwipeSurface {
    /// Create a surface description.
    #[must_use]
    pub const fn new(width: f32, layout: LayoutDirection) -> Self {
        Self { width, layout }
    }

    /// Width clamped to at least one pixel.
    #[inline]
    #[must_use]
    pub fn effective_width(&self) -> f32 {
        self.width.max(1.0)
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Externally visible phase of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No interaction is being tracked.
    #[default]
    Idle,
    /// Pointer is down on a row but has not passed the slop.
    Tracking,
    /// The interaction is a horizontal swipe and owns the pointer.
    Swiping,
}

/// Visual state of the swiped row for one move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeFrame {
    /// Horizontal translation of the row.
    pub offset: f32,
    /// Row opacity in `[0, 1]`.
    pub opacity: f32,
}

impl SwipeFrame {
    /// A row at rest: no offset, fully opaque.
    pub const REST: Self = Self {
        offset: 0.0,
        opacity: 1.0,
    };

    /// Frame for a displacement `dx` on a list of `width` pixels.
    #[must_use]
    pub fn at(dx: f32, width: f32) -> Self {
        Self {
            offset: dx,
            opacity: swipe_opacity(dx, width),
        }
    }
}

/// Result of interpreting a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No interaction is tracked; the event belongs to the list.
    Ignored,
    /// Still below the slop.
    ///
    /// `direction_valid` reports whether the move pointed in an allowed
    /// direction, in which case ancestors should stop intercepting.
    Tracking {
        /// Whether the move pointed in an allowed direction.
        direction_valid: bool,
    },
    /// This move crossed the slop: the swipe now owns the pointer.
    Started(SwipeFrame),
    /// A move during an established swipe.
    Swiping(SwipeFrame),
}

impl MoveOutcome {
    /// Frame to apply to the row, if the move was consumed by a swipe.
    #[must_use]
    pub fn frame(&self) -> Option<SwipeFrame> {
        match *self {
            Self::Started(frame) | Self::Swiping(frame) => Some(frame),
            Self::Ignored | Self::Tracking { .. } => None,
        }
    }
}

/// What to do with a row when its interaction ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Slide the row out and dismiss it.
    Dismiss {
        /// Slide towards the right edge.
        to_right: bool,
    },
    /// Animate the row back to rest.
    SpringBack,
    /// The interaction never became a swipe; nothing to animate.
    NotSwiped,
}

impl Decision {
    /// Whether the row should be dismissed.
    #[inline]
    #[must_use]
    pub const fn is_dismiss(self) -> bool {
        matches!(self, Self::Dismiss { .. })
    }
}

/// End of a tracked interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Release<T> {
    /// Target handed to [`SwipeTracker::begin`].
    pub target: T,
    /// Final decision.
    pub decision: Decision,
    /// Horizontal displacement at release.
    pub dx: f32,
}

/// Row opacity for a displacement: `clamp(1 - 2|dx|/width, 0, 1)`.
#[must_use]
pub fn swipe_opacity(dx: f32, width: f32) -> f32 {
    (1.0 - 2.0 * dx.abs() / width.max(1.0)).clamp(0.0, 1.0)
}

/// Decide the fate of a released swipe.
///
/// Dismisses iff the swipe is established and either
/// - `|dx| > width / 2` (distance path, velocity irrelevant), or
/// - `min_fling <= |vx| <= max_fling`, `|vy| < |vx|`, `vx` points in an
///   allowed direction and `|dx| >= 0.2 * width` (fling path).
///
/// The dismissal side follows `dx` on the distance path and `vx` on the
/// fling path.
#[must_use]
pub fn decide(
    swiping: bool,
    dx: f32,
    velocity: Velocity,
    config: &GestureConfig,
    direction: SwipeDirection,
    surface: SwipeSurface,
) -> Decision {
    if !swiping {
        return Decision::NotSwiped;
    }
    let width = surface.effective_width();
    if dx.abs() > width * DISTANCE_DISMISS_FRACTION {
        return Decision::Dismiss { to_right: dx > 0.0 };
    }

    let vx = velocity.x.abs();
    let vy = velocity.y.abs();
    let fling = config.min_fling_velocity <= vx
        && vx <= config.max_fling_velocity
        && vy < vx
        && direction.is_valid(velocity.x, surface.layout)
        && dx.abs() >= width * FLING_MIN_DISTANCE_FRACTION;
    if fling {
        Decision::Dismiss {
            to_right: velocity.x > 0.0,
        }
    } else {
        Decision::SpringBack
    }
}

// ---------------------------------------------------------------------------
// SwipeTracker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct ActiveSwipe<T> {
    target: T,
    down_x: f32,
    last_dx: f32,
    swiping: bool,
}

/// Stateful recognizer for a single swipe interaction.
///
/// `T` is whatever the caller needs back at release time (typically the
/// row handles and adapter position).
#[derive(Debug, Clone)]
pub struct SwipeTracker<T> {
    config: GestureConfig,
    direction: SwipeDirection,
    active: Option<ActiveSwipe<T>>,
    velocity: VelocityTracker,
}

impl<T> Default for SwipeTracker<T> {
    fn default() -> Self {
        Self::new(GestureConfig::default(), SwipeDirection::default())
    }
}

impl<T> SwipeTracker<T> {
    /// Create a tracker with the given thresholds and allowed direction.
    #[must_use]
    pub fn new(config: GestureConfig, direction: SwipeDirection) -> Self {
        Self {
            config,
            direction,
            active: None,
            velocity: VelocityTracker::new(config.velocity_horizon),
        }
    }

    /// Start tracking an interaction that went down on `target`.
    ///
    /// Any interaction still tracked is silently dropped.
    pub fn begin(&mut self, target: T, event: &PointerEvent) {
        self.velocity.clear();
        self.velocity.add(event.x, event.y, event.time);
        self.active = Some(ActiveSwipe {
            target,
            down_x: event.x,
            last_dx: 0.0,
            swiping: false,
        });
    }

    /// Interpret a move.
    pub fn on_move(&mut self, event: &PointerEvent, surface: SwipeSurface) -> MoveOutcome {
        let Some(active) = self.active.as_mut() else {
            return MoveOutcome::Ignored;
        };
        self.velocity.add(event.x, event.y, event.time);

        let mut dx = event.x - active.down_x;
        let direction_valid = self.direction.is_valid(dx, surface.layout);
        let mut started = false;
        if direction_valid {
            if !active.swiping && dx.abs() > self.config.slop {
                active.swiping = true;
                started = true;
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "gesture.swipe_start", dx, slop = self.config.slop);
            }
        } else {
            // Treat the current point as the new down point.
            active.down_x = event.x;
            dx = 0.0;
        }
        active.last_dx = dx;

        if !active.swiping {
            return MoveOutcome::Tracking { direction_valid };
        }
        let frame = SwipeFrame::at(dx, surface.effective_width());
        if started {
            MoveOutcome::Started(frame)
        } else {
            MoveOutcome::Swiping(frame)
        }
    }

    /// Finish the interaction on pointer up.
    ///
    /// Returns `None` if nothing was being tracked.
    pub fn on_up(&mut self, event: &PointerEvent, surface: SwipeSurface) -> Option<Release<T>> {
        let active = self.active.take()?;
        self.velocity.add(event.x, event.y, event.time);
        let velocity = self.velocity.velocity();
        self.velocity.clear();

        let dx = event.x - active.down_x;
        let decision = decide(
            active.swiping,
            dx,
            velocity,
            &self.config,
            self.direction,
            surface,
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "gesture.release",
            dx,
            vx = velocity.x,
            vy = velocity.y,
            swiping = active.swiping,
            decision = ?decision
        );
        Some(Release {
            target: active.target,
            decision,
            dx,
        })
    }

    /// Abort the interaction (pointer cancel).
    ///
    /// An established swipe springs back; anything else is simply dropped.
    pub fn cancel(&mut self) -> Option<Release<T>> {
        let active = self.active.take()?;
        self.velocity.clear();
        let decision = if active.swiping {
            Decision::SpringBack
        } else {
            Decision::NotSwiped
        };
        Some(Release {
            target: active.target,
            decision,
            dx: active.last_dx,
        })
    }

    /// Forget any tracked interaction without reporting it.
    pub fn reset(&mut self) {
        self.active = None;
        self.velocity.clear();
    }

    /// Current phase.
    #[must_use]
    pub fn state(&self) -> GestureState {
        match &self.active {
            None => GestureState::Idle,
            Some(a) if a.swiping => GestureState::Swiping,
            Some(_) => GestureState::Tracking,
        }
    }

    /// Whether a swipe currently owns the pointer.
    #[inline]
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.swiping)
    }

    /// Target of the tracked interaction.
    #[must_use]
    pub fn target(&self) -> Option<&T> {
        self.active.as_ref().map(|a| &a.target)
    }

    /// Current thresholds.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replace the thresholds.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
        self.velocity = VelocityTracker::new(config.velocity_horizon);
    }

    /// Allowed swipe direction.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Change the allowed swipe direction.
    pub fn set_direction(&mut self, direction: SwipeDirection) {
        self.direction = direction;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use web_time::Instant;

    const WIDTH: f32 = 400.0;

    fn ltr() -> SwipeSurface {
        SwipeSurface::new(WIDTH, LayoutDirection::Ltr)
    }

    fn rtl() -> SwipeSurface {
        SwipeSurface::new(WIDTH, LayoutDirection::Rtl)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn tracker(direction: SwipeDirection) -> SwipeTracker<u32> {
        SwipeTracker::new(GestureConfig::default(), direction)
    }

    /// Run a full interaction through `points` = (x, millis) and return the
    /// release.
    fn swipe(
        tr: &mut SwipeTracker<u32>,
        surface: SwipeSurface,
        points: &[(f32, u64)],
    ) -> Release<u32> {
        let t = Instant::now();
        let (x0, t0) = points[0];
        tr.begin(7, &PointerEvent::down(x0, 50.0, t + ms(t0)));
        for &(x, at) in &points[1..points.len() - 1] {
            tr.on_move(&PointerEvent::moved(x, 50.0, t + ms(at)), surface);
        }
        let (xn, tn) = points[points.len() - 1];
        tr.on_up(&PointerEvent::up(xn, 50.0, t + ms(tn)), surface)
            .expect("interaction was tracked")
    }

    // --- Slop ---

    #[test]
    fn below_slop_stays_tracking() {
        let mut tr = tracker(SwipeDirection::Both);
        let t = Instant::now();
        tr.begin(1, &PointerEvent::down(100.0, 10.0, t));
        let out = tr.on_move(&PointerEvent::moved(116.0, 10.0, t + ms(10)), ltr());
        assert_eq!(
            out,
            MoveOutcome::Tracking {
                direction_valid: true
            }
        );
        assert!(out.frame().is_none());
        assert_eq!(tr.state(), GestureState::Tracking);
    }

    #[test]
    fn crossing_slop_starts_swipe_once() {
        let mut tr = tracker(SwipeDirection::Both);
        let t = Instant::now();
        tr.begin(1, &PointerEvent::down(100.0, 10.0, t));
        let first = tr.on_move(&PointerEvent::moved(117.0, 10.0, t + ms(10)), ltr());
        assert!(matches!(first, MoveOutcome::Started(f) if f.offset == 17.0));
        let second = tr.on_move(&PointerEvent::moved(140.0, 10.0, t + ms(20)), ltr());
        assert!(matches!(second, MoveOutcome::Swiping(f) if f.offset == 40.0));
        assert_eq!(tr.state(), GestureState::Swiping);
    }

    #[test]
    fn opacity_follows_distance() {
        assert_eq!(swipe_opacity(0.0, WIDTH), 1.0);
        assert!((swipe_opacity(100.0, WIDTH) - 0.5).abs() < f32::EPSILON);
        assert!((swipe_opacity(-100.0, WIDTH) - 0.5).abs() < f32::EPSILON);
        assert_eq!(swipe_opacity(250.0, WIDTH), 0.0);
    }

    #[test]
    fn tap_is_not_swiped() {
        let mut tr = tracker(SwipeDirection::Both);
        let rel = swipe(&mut tr, ltr(), &[(100.0, 0), (102.0, 50), (103.0, 80)]);
        assert_eq!(rel.decision, Decision::NotSwiped);
        assert_eq!(tr.state(), GestureState::Idle);
    }

    // --- Distance path ---

    #[test]
    fn past_half_width_dismisses_even_when_slow() {
        let mut tr = tracker(SwipeDirection::Both);
        // 210px over two seconds: far below fling speed.
        let rel = swipe(
            &mut tr,
            ltr(),
            &[(10.0, 0), (100.0, 1000), (220.0, 1990), (220.0, 2000)],
        );
        assert_eq!(rel.decision, Decision::Dismiss { to_right: true });
    }

    #[test]
    fn past_half_width_to_the_left() {
        let mut tr = tracker(SwipeDirection::Both);
        let rel = swipe(
            &mut tr,
            ltr(),
            &[(390.0, 0), (300.0, 500), (150.0, 1990), (150.0, 2000)],
        );
        assert_eq!(rel.decision, Decision::Dismiss { to_right: false });
    }

    #[test]
    fn exactly_half_width_is_not_enough_without_fling() {
        let mut tr = tracker(SwipeDirection::Both);
        let rel = swipe(
            &mut tr,
            ltr(),
            &[(0.0, 0), (100.0, 1000), (200.0, 1990), (200.0, 2000)],
        );
        assert_eq!(rel.decision, Decision::SpringBack);
    }

    // --- Fling path ---

    #[test]
    fn fling_past_twenty_percent_dismisses() {
        let mut tr = tracker(SwipeDirection::Both);
        // 100px (25%) in 50ms = 2000 px/s.
        let rel = swipe(
            &mut tr,
            ltr(),
            &[(50.0, 0), (80.0, 15), (120.0, 30), (150.0, 50)],
        );
        assert_eq!(rel.decision, Decision::Dismiss { to_right: true });
    }

    #[test]
    fn fast_fling_below_twenty_percent_springs_back() {
        let mut tr = tracker(SwipeDirection::Both);
        // 60px (15%) in 20ms.
        let rel = swipe(&mut tr, ltr(), &[(50.0, 0), (80.0, 10), (110.0, 20)]);
        assert_eq!(rel.decision, Decision::SpringBack);
    }

    #[test]
    fn fling_faster_than_max_springs_back() {
        let cfg = GestureConfig {
            max_fling_velocity: 1000.0,
            ..GestureConfig::default()
        };
        let mut tr: SwipeTracker<u32> = SwipeTracker::new(cfg, SwipeDirection::Both);
        // 100px in 20ms = 5000 px/s.
        let rel = swipe(&mut tr, ltr(), &[(0.0, 0), (50.0, 10), (100.0, 20)]);
        assert_eq!(rel.decision, Decision::SpringBack);
    }

    #[test]
    fn vertical_dominant_fling_springs_back() {
        let surface = ltr();
        let mut tr = tracker(SwipeDirection::Both);
        let t = Instant::now();
        tr.begin(3, &PointerEvent::down(0.0, 0.0, t));
        tr.on_move(&PointerEvent::moved(50.0, 80.0, t + ms(20)), surface);
        let rel = tr
            .on_up(&PointerEvent::up(100.0, 300.0, t + ms(40)), surface)
            .expect("tracked");
        assert_eq!(rel.decision, Decision::SpringBack);
    }

    #[test]
    fn decide_is_pure_and_reproduces_two_paths() {
        let cfg = GestureConfig::default();
        let s = ltr();
        let slow = Velocity { x: 10.0, y: 0.0 };
        let fast = Velocity { x: 1500.0, y: 100.0 };
        assert_eq!(
            decide(true, 201.0, slow, &cfg, SwipeDirection::Both, s),
            Decision::Dismiss { to_right: true }
        );
        assert_eq!(
            decide(true, 80.0, fast, &cfg, SwipeDirection::Both, s),
            Decision::Dismiss { to_right: true }
        );
        assert_eq!(
            decide(true, 79.0, fast, &cfg, SwipeDirection::Both, s),
            Decision::SpringBack
        );
        assert_eq!(
            decide(false, 300.0, fast, &cfg, SwipeDirection::Both, s),
            Decision::NotSwiped
        );
    }

    #[test]
    fn fling_against_allowed_direction_springs_back() {
        let cfg = GestureConfig::default();
        let back = Velocity { x: -1500.0, y: 0.0 };
        assert_eq!(
            decide(true, 120.0, back, &cfg, SwipeDirection::End, ltr()),
            Decision::SpringBack
        );
        assert_eq!(
            decide(true, -120.0, back, &cfg, SwipeDirection::End, rtl()),
            Decision::Dismiss { to_right: false }
        );
    }

    // --- Direction policy ---

    #[test]
    fn reversal_reanchors_down_position() {
        let surface = ltr();
        let mut tr = tracker(SwipeDirection::End);
        let t = Instant::now();
        tr.begin(1, &PointerEvent::down(200.0, 0.0, t));
        // Wrong way: anchor follows the finger.
        let out = tr.on_move(&PointerEvent::moved(150.0, 0.0, t + ms(10)), surface);
        assert_eq!(
            out,
            MoveOutcome::Tracking {
                direction_valid: false
            }
        );
        // 20px to the right of the *new* anchor crosses the slop.
        let out = tr.on_move(&PointerEvent::moved(170.0, 0.0, t + ms(20)), surface);
        assert!(matches!(out, MoveOutcome::Started(f) if f.offset == 20.0));
    }

    #[test]
    fn reversal_during_swipe_snaps_offset_to_zero() {
        let surface = ltr();
        let mut tr = tracker(SwipeDirection::End);
        let t = Instant::now();
        tr.begin(1, &PointerEvent::down(100.0, 0.0, t));
        tr.on_move(&PointerEvent::moved(140.0, 0.0, t + ms(10)), surface);
        let out = tr.on_move(&PointerEvent::moved(90.0, 0.0, t + ms(20)), surface);
        assert_eq!(
            out,
            MoveOutcome::Swiping(SwipeFrame {
                offset: 0.0,
                opacity: 1.0
            })
        );
    }

    #[test]
    fn start_only_under_rtl_moves_right() {
        let mut tr = tracker(SwipeDirection::Start);
        let rel = swipe(
            &mut tr,
            rtl(),
            &[(10.0, 0), (100.0, 500), (250.0, 1990), (250.0, 2000)],
        );
        assert_eq!(rel.decision, Decision::Dismiss { to_right: true });
    }

    // --- Cancel / reset ---

    #[test]
    fn cancel_during_swipe_springs_back() {
        let mut tr = tracker(SwipeDirection::Both);
        let t = Instant::now();
        tr.begin(9, &PointerEvent::down(0.0, 0.0, t));
        tr.on_move(&PointerEvent::moved(60.0, 0.0, t + ms(10)), ltr());
        let rel = tr.cancel().expect("tracked");
        assert_eq!(rel.target, 9);
        assert_eq!(rel.decision, Decision::SpringBack);
        assert_eq!(rel.dx, 60.0);
        assert_eq!(tr.state(), GestureState::Idle);
        assert!(tr.cancel().is_none());
    }

    #[test]
    fn cancel_before_slop_is_not_swiped() {
        let mut tr = tracker(SwipeDirection::Both);
        tr.begin(9, &PointerEvent::down(0.0, 0.0, Instant::now()));
        assert_eq!(tr.cancel().map(|r| r.decision), Some(Decision::NotSwiped));
    }

    #[test]
    fn events_without_begin_are_ignored() {
        let mut tr = tracker(SwipeDirection::Both);
        let t = Instant::now();
        assert_eq!(
            tr.on_move(&PointerEvent::moved(10.0, 0.0, t), ltr()),
            MoveOutcome::Ignored
        );
        assert!(tr.on_up(&PointerEvent::up(10.0, 0.0, t), ltr()).is_none());
    }

    #[test]
    fn reset_drops_interaction() {
        let mut tr = tracker(SwipeDirection::Both);
        tr.begin(1, &PointerEvent::down(0.0, 0.0, Instant::now()));
        tr.reset();
        assert_eq!(tr.state(), GestureState::Idle);
        assert!(tr.target().is_none());
    }

    #[test]
    fn zero_width_surface_is_clamped() {
        let surface = SwipeSurface::new(0.0, LayoutDirection::Ltr);
        assert_eq!(surface.effective_width(), 1.0);
        let frame = SwipeFrame::at(30.0, surface.effective_width());
        assert_eq!(frame.opacity, 0.0);
    }

    #[test]
    fn default_config_values() {
        let cfg = GestureConfig::default();
        assert_eq!(cfg.slop, 16.0);
        assert_eq!(cfg.min_fling_velocity, 50.0);
        assert_eq!(cfg.max_fling_velocity, 8000.0);
        assert_eq!(cfg.velocity_horizon, Duration::from_millis(100));
    }
}
