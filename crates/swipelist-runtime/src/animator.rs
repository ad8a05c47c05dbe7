#![forbid(unsafe_code)]

//! Bookkeeping for in-flight row animations.
//!
//! The host runs the clock; [`DismissAnimator`] remembers what each
//! [`AnimationId`] is animating and translates reported tween values into
//! visual updates. A dismissal is two animations in sequence: a
//! [`SlideOut`](AnimationKind::SlideOut) followed, once it has finished, by a
//! [`Collapse`](AnimationKind::Collapse). Rows that were swiped but not
//! dismissed get a [`SpringBack`](AnimationKind::SpringBack).
//!
//! # Invariants
//!
//! 1. Ids are never reused.
//! 2. A finished or cancelled id produces no further updates.
//! 3. At most one spring-back per view is live.

use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashMap;
use swipelist_core::animation::{
    COLLAPSED_HEIGHT, DEFAULT_ANIMATION_TIME, DismissPhase, Tween, blend,
};
use swipelist_core::gesture::SwipeFrame;
use web_time::Duration;

/// Host-facing handle for one running animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    /// Raw id value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// What an animation is doing to which views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind<R> {
    /// Phase 1 of a dismissal: translate out and fade.
    SlideOut {
        view: R,
        row_view: R,
        position: usize,
        from: SwipeFrame,
        target_offset: f32,
    },
    /// Phase 2 of a dismissal: shrink the row height.
    Collapse { view: R, row_view: R },
    /// Return a swiped view to rest.
    SpringBack { view: R, from: SwipeFrame },
}

impl<R> AnimationKind<R> {
    /// Dismiss phase this animation belongs to; `None` for spring-backs.
    #[must_use]
    pub fn phase(&self) -> Option<DismissPhase> {
        match self {
            Self::SlideOut { .. } => Some(DismissPhase::SlideOut),
            Self::Collapse { .. } => Some(DismissPhase::Collapse),
            Self::SpringBack { .. } => None,
        }
    }
}

/// Visual change derived from an animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameUpdate<R> {
    /// New horizontal offset and opacity for a view.
    Slide { view: R, offset: f32, opacity: f32 },
    /// New height for a row.
    Height { row_view: R, height: f32 },
}

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Finished<R> {
    /// Slide-out done; the collapse should start.
    SlidOut {
        view: R,
        row_view: R,
        position: usize,
        offset: f32,
    },
    /// Collapse done; the row can be counted out of the barrier.
    Collapsed { view: R, row_view: R },
    /// Spring-back done.
    SprungBack { view: R },
}

/// Table of running animations.
#[derive(Debug, Clone)]
pub struct DismissAnimator<R> {
    duration: Duration,
    next_id: u64,
    running: AHashMap<AnimationId, AnimationKind<R>>,
}

impl<R: Copy + Eq + Hash + Debug> Default for DismissAnimator<R> {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_TIME)
    }
}

impl<R: Copy + Eq + Hash + Debug> DismissAnimator<R> {
    /// Create an animator whose animations last `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            next_id: 0,
            running: AHashMap::new(),
        }
    }

    fn start(&mut self, kind: AnimationKind<R>) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.running.insert(id, kind);
        id
    }

    /// Start phase 1 of a dismissal from the view's current `from` frame.
    ///
    /// The returned tween runs the progress `0.0 → 1.0`.
    pub fn slide_out(
        &mut self,
        view: R,
        row_view: R,
        position: usize,
        from: SwipeFrame,
        target_offset: f32,
    ) -> (AnimationId, Tween) {
        let id = self.start(AnimationKind::SlideOut {
            view,
            row_view,
            position,
            from,
            target_offset,
        });
        (id, Tween::progress(self.duration))
    }

    /// Start phase 2 of a dismissal. The tween runs the row height from
    /// `height` down to [`COLLAPSED_HEIGHT`].
    pub fn collapse(&mut self, view: R, row_view: R, height: f32) -> (AnimationId, Tween) {
        let id = self.start(AnimationKind::Collapse { view, row_view });
        (id, Tween::new(height, COLLAPSED_HEIGHT, self.duration))
    }

    /// Animate `view` back to rest from `from`, replacing any spring-back
    /// already running on it.
    pub fn spring_back(&mut self, view: R, from: SwipeFrame) -> (AnimationId, Tween) {
        self.cancel_spring_back(view);
        let id = self.start(AnimationKind::SpringBack { view, from });
        (id, Tween::progress(self.duration))
    }

    /// Drop a running spring-back on `view`. Returns whether one was running.
    pub fn cancel_spring_back(&mut self, view: R) -> bool {
        let before = self.running.len();
        self.running
            .retain(|_, kind| !matches!(kind, AnimationKind::SpringBack { view: v, .. } if *v == view));
        before != self.running.len()
    }

    /// Translate a reported tween value into a visual update.
    ///
    /// Unknown ids (finished or cancelled) yield `None`.
    #[must_use]
    pub fn frame(&self, id: AnimationId, value: f32) -> Option<FrameUpdate<R>> {
        match *self.running.get(&id)? {
            AnimationKind::SlideOut {
                view,
                from,
                target_offset,
                ..
            } => {
                let (offset, opacity) = blend(from.offset, from.opacity, target_offset, 0.0, value);
                Some(FrameUpdate::Slide {
                    view,
                    offset,
                    opacity,
                })
            }
            AnimationKind::Collapse { row_view, .. } => Some(FrameUpdate::Height {
                row_view,
                height: value.max(COLLAPSED_HEIGHT),
            }),
            AnimationKind::SpringBack { view, from } => {
                let (offset, opacity) = blend(from.offset, from.opacity, 0.0, 1.0, value);
                Some(FrameUpdate::Slide {
                    view,
                    offset,
                    opacity,
                })
            }
        }
    }

    /// Retire `id` and report how it ended.
    pub fn finish(&mut self, id: AnimationId) -> Option<Finished<R>> {
        let finished = match self.running.remove(&id)? {
            AnimationKind::SlideOut {
                view,
                row_view,
                position,
                target_offset,
                ..
            } => Finished::SlidOut {
                view,
                row_view,
                position,
                offset: target_offset,
            },
            AnimationKind::Collapse { view, row_view } => Finished::Collapsed { view, row_view },
            AnimationKind::SpringBack { view, .. } => Finished::SprungBack { view },
        };
        Some(finished)
    }

    /// Kind of a running animation.
    #[must_use]
    pub fn kind(&self, id: AnimationId) -> Option<&AnimationKind<R>> {
        self.running.get(&id)
    }

    /// Number of running animations.
    #[inline]
    #[must_use]
    pub fn running(&self) -> usize {
        self.running.len()
    }

    /// Duration of newly started animations.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the duration of animations started from now on.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}
