#![forbid(unsafe_code)]

//! The swipe-to-dismiss engine.
//!
//! [`SwipeList`] owns a [`ListHost`] and everything needed to turn its pointer
//! stream into dismissals:
//!
//! ```text
//!  pointer events ──► SwipeTracker ──dismiss──► DismissAnimator (slide out)
//!                                                   │ on_animation_end
//!                                                   ▼
//!                                           DismissAnimator (collapse)
//!                                                   │ on_animation_end
//!                                                   ▼
//!                       DismissBarrier ──last row──► dismiss callback ×N
//!                                                   │
//!                                                   ▼
//!                                   UndoStack ──► popup ──► AutoHideTimer
//! ```
//!
//! # Invariants
//!
//! 1. The undo popup is visible iff the undo stack is non-empty, at every
//!    point where control returns to the host.
//! 2. A row in its dismiss animation cannot start a new gesture or a second
//!    dismissal.
//! 3. The dismiss callback runs only from a drained batch, in descending
//!    position order.
//! 4. Dropping the engine discards every pending undoable.
//!
//! # Failure Modes
//!
//! - `delete` and `enable_swipe` without a dismiss callback fail with
//!   [`SwipeListError::MissingDismissCallback`].
//! - `delete` outside `[0, row_count)` fails with
//!   [`SwipeListError::PositionOutOfRange`] and changes nothing.
//! - Stale animation ids and stale hide tokens are ignored.

use std::fmt;

use swipelist_core::animation::{COLLAPSED_HEIGHT, DismissPhase, slide_out_offset};
use swipelist_core::direction::SwipeDirection;
use swipelist_core::event::{PointerEvent, PointerKind};
use swipelist_core::gesture::{
    Decision, GestureConfig, GestureState, MoveOutcome, SwipeFrame, SwipeSurface, SwipeTracker,
};
use web_time::Duration;

use crate::animator::{AnimationId, AnimationKind, DismissAnimator, Finished, FrameUpdate};
use crate::auto_hide::{AutoHideTimer, HideToken};
use crate::barrier::{DismissBarrier, PendingDismiss};
use crate::config::SwipeListConfig;
use crate::error::{Result, SwipeListError};
use crate::host::{ListHost, SwipeTargetId};
use crate::undo::{PopupUpdate, UndoLabels, UndoStack, UndoStyle, Undoable};

/// Called once per dismissed row with its position; returns the undoable for
/// the deletion, if it can be taken back.
pub type DismissCallback = Box<dyn FnMut(usize) -> Option<Box<dyn Undoable>>>;

/// Veto over starting a swipe on a position.
pub type ShouldSwipeCallback = Box<dyn FnMut(usize) -> bool>;

/// The view a gesture or dismissal acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Touched<R> {
    view: R,
    row_view: R,
    position: usize,
}

/// Swipe-to-dismiss controller for one list.
pub struct SwipeList<H: ListHost> {
    host: H,
    tracker: SwipeTracker<Touched<H::Row>>,
    animator: DismissAnimator<H::Row>,
    barrier: DismissBarrier<H::Row>,
    undo: UndoStack,
    auto_hide: AutoHideTimer,
    swipe_target: Option<SwipeTargetId>,
    swipe_enabled: bool,
    swipe_paused: bool,
    on_dismiss: Option<DismissCallback>,
    should_swipe: Option<ShouldSwipeCallback>,
}

impl<H: ListHost + fmt::Debug> fmt::Debug for SwipeList<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeList")
            .field("host", &self.host)
            .field("gesture", &self.tracker.state())
            .field("in_flight", &self.barrier.in_flight())
            .field("undo", &self.undo)
            .field("generation", &self.auto_hide.generation())
            .field("swipe_enabled", &self.swipe_enabled)
            .field("swipe_paused", &self.swipe_paused)
            .finish()
    }
}

impl<H: ListHost> SwipeList<H> {
    /// Attach an engine to `host`.
    ///
    /// Swiping starts disabled; register a dismiss callback and call
    /// [`enable_swipe`](Self::enable_swipe).
    #[must_use]
    pub fn new(host: H, config: SwipeListConfig) -> Self {
        Self {
            host,
            tracker: SwipeTracker::new(config.gesture, config.swipe_direction),
            animator: DismissAnimator::new(config.animation_time),
            barrier: DismissBarrier::new(),
            undo: UndoStack::new(config.undo_style, config.labels),
            auto_hide: AutoHideTimer::new(
                config.undo_hide_delay,
                config.require_touch_before_dismiss,
            ),
            swipe_target: config.swipe_target,
            swipe_enabled: false,
            swipe_paused: false,
            on_dismiss: None,
            should_swipe: None,
        }
    }

    // ========================================================================
    // Callbacks and switches
    // ========================================================================

    /// Register the callback that performs deletions.
    pub fn set_dismiss_callback<F>(&mut self, callback: F)
    where
        F: FnMut(usize) -> Option<Box<dyn Undoable>> + 'static,
    {
        self.on_dismiss = Some(Box::new(callback));
    }

    /// Register a veto over which positions may be swiped.
    pub fn set_should_swipe_callback<F>(&mut self, callback: F)
    where
        F: FnMut(usize) -> bool + 'static,
    {
        self.should_swipe = Some(Box::new(callback));
    }

    /// Remove the swipe veto; every row is swipeable again.
    pub fn clear_should_swipe_callback(&mut self) {
        self.should_swipe = None;
    }

    /// Turn swipe-to-dismiss on.
    pub fn enable_swipe(&mut self) -> Result<()> {
        if self.on_dismiss.is_none() {
            tracing::warn!(message = "swipelist.config_error", operation = "enable_swipe");
            return Err(SwipeListError::MissingDismissCallback {
                operation: "enable_swipe",
            });
        }
        self.swipe_enabled = true;
        Ok(())
    }

    /// Turn swipe-to-dismiss off. A swipe in progress springs back.
    ///
    /// Programmatic [`delete`](Self::delete) keeps working.
    pub fn disable_swipe(&mut self) {
        self.swipe_enabled = false;
        if let Some(release) = self.tracker.cancel() {
            self.settle(release.target, release.decision, release.dx);
        }
    }

    /// Whether swipe-to-dismiss is on.
    #[must_use]
    pub fn is_swipe_enabled(&self) -> bool {
        self.swipe_enabled
    }

    /// Report whether the list is being scrolled by touch. While paused, no
    /// swipe starts and moves are left to the list.
    pub fn set_swipe_paused(&mut self, paused: bool) {
        self.swipe_paused = paused;
    }

    /// Whether swiping is paused for scrolling.
    #[must_use]
    pub fn is_swipe_paused(&self) -> bool {
        self.swipe_paused
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Change the undo policy. Pending undoables are kept and a visible
    /// popup is refreshed.
    pub fn set_undo_style(&mut self, style: UndoStyle) {
        self.undo.set_style(style);
        if let Some(content) = self.undo.content() {
            self.host.show_popup(&content.text, &content.button);
        }
    }

    /// Current undo policy.
    #[must_use]
    pub fn undo_style(&self) -> UndoStyle {
        self.undo.style()
    }

    /// Change the allowed swipe direction.
    pub fn set_swipe_direction(&mut self, direction: SwipeDirection) {
        self.tracker.set_direction(direction);
    }

    /// Allowed swipe direction.
    #[must_use]
    pub fn swipe_direction(&self) -> SwipeDirection {
        self.tracker.direction()
    }

    /// Change the auto-hide delay. Already scheduled hides are unaffected.
    pub fn set_undo_hide_delay(&mut self, delay: Duration) {
        self.auto_hide.set_delay(delay);
    }

    /// Auto-hide delay.
    #[must_use]
    pub fn undo_hide_delay(&self) -> Duration {
        self.auto_hide.delay()
    }

    /// Change whether the auto-hide countdown waits for a touch.
    pub fn set_require_touch_before_dismiss(&mut self, require: bool) {
        self.auto_hide.set_require_touch(require);
    }

    /// Whether the auto-hide countdown waits for a touch.
    #[must_use]
    pub fn require_touch_before_dismiss(&self) -> bool {
        self.auto_hide.require_touch()
    }

    /// Swipe a sub-view of each row instead of the whole row.
    pub fn set_swipe_target(&mut self, target: Option<SwipeTargetId>) {
        self.swipe_target = target;
    }

    /// Current swipe target.
    #[must_use]
    pub fn swipe_target(&self) -> Option<SwipeTargetId> {
        self.swipe_target
    }

    /// Change the duration of animations started from now on.
    pub fn set_animation_time(&mut self, duration: Duration) {
        self.animator.set_duration(duration);
    }

    /// Replace the gesture thresholds.
    pub fn set_gesture_config(&mut self, config: GestureConfig) {
        self.tracker.set_config(config);
    }

    /// Replace the popup strings. A visible popup is refreshed.
    pub fn set_labels(&mut self, labels: UndoLabels) {
        self.undo.set_labels(labels);
        if let Some(content) = self.undo.content() {
            self.host.show_popup(&content.text, &content.button);
        }
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Feed one pointer event. Returns whether it was consumed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.arm_on_touch();
        if !self.swipe_enabled {
            return self.host.forward_to_list(&event);
        }
        match event.kind {
            PointerKind::Down => self.pointer_down(event),
            PointerKind::Move => self.pointer_move(event),
            PointerKind::Up => self.pointer_up(event),
            PointerKind::Cancel => self.pointer_cancel(event),
        }
    }

    /// Feed a pointer-down.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, time: web_time::Instant) -> bool {
        self.handle_pointer(PointerEvent::down(x, y, time))
    }

    /// Feed a pointer-move.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32, time: web_time::Instant) -> bool {
        self.handle_pointer(PointerEvent::moved(x, y, time))
    }

    /// Feed a pointer-up.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32, time: web_time::Instant) -> bool {
        self.handle_pointer(PointerEvent::up(x, y, time))
    }

    /// Feed a pointer-cancel.
    pub fn handle_pointer_cancel(&mut self, x: f32, y: f32, time: web_time::Instant) -> bool {
        self.handle_pointer(PointerEvent::cancel(x, y, time))
    }

    fn pointer_down(&mut self, event: PointerEvent) -> bool {
        // One gesture per control: a live one is abandoned and springs back.
        if let Some(release) = self.tracker.cancel() {
            tracing::debug!(
                message = "swipelist.superseded",
                position = release.target.position,
                decision = ?release.decision
            );
            self.settle(release.target, release.decision, release.dx);
        }
        if self.swipe_paused {
            return self.host.forward_to_list(&event);
        }
        if let Some(touched) = self.touch_target(event.x, event.y) {
            if self.animator.cancel_spring_back(touched.view) {
                self.apply_frame(touched.view, SwipeFrame::REST);
            }
            tracing::trace!(
                message = "swipelist.track",
                position = touched.position,
                view = ?touched.view
            );
            self.tracker.begin(touched, &event);
        }
        self.host.forward_to_list(&event);
        true
    }

    fn pointer_move(&mut self, event: PointerEvent) -> bool {
        if self.swipe_paused {
            return self.host.forward_to_list(&event);
        }
        let surface = self.surface();
        match self.tracker.on_move(&event, surface) {
            MoveOutcome::Ignored => self.host.forward_to_list(&event),
            MoveOutcome::Tracking { direction_valid } => {
                if direction_valid {
                    self.host.claim_pointer();
                }
                self.host.forward_to_list(&event)
            }
            MoveOutcome::Started(frame) => {
                self.host.claim_pointer();
                // The list must drop its own press/scroll for this pointer.
                self.host.forward_to_list(&event.as_cancel());
                if let Some(touched) = self.tracker.target().copied() {
                    tracing::debug!(message = "swipelist.claim", position = touched.position);
                    self.apply_swipe_frame(touched.view, frame);
                }
                true
            }
            MoveOutcome::Swiping(frame) => {
                self.host.claim_pointer();
                if let Some(touched) = self.tracker.target().copied() {
                    self.apply_swipe_frame(touched.view, frame);
                }
                true
            }
        }
    }

    fn pointer_up(&mut self, event: PointerEvent) -> bool {
        let surface = self.surface();
        if let Some(release) = self.tracker.on_up(&event, surface) {
            tracing::debug!(
                message = "swipelist.release",
                position = release.target.position,
                dx = release.dx,
                decision = ?release.decision
            );
            self.settle(release.target, release.decision, release.dx);
        }
        self.host.forward_to_list(&event)
    }

    fn pointer_cancel(&mut self, event: PointerEvent) -> bool {
        if let Some(release) = self.tracker.cancel() {
            tracing::debug!(
                message = "swipelist.cancel",
                position = release.target.position,
                decision = ?release.decision
            );
            self.settle(release.target, release.decision, release.dx);
        }
        self.host.forward_to_list(&event)
    }

    /// Animate a released row according to `decision`.
    fn settle(&mut self, touched: Touched<H::Row>, decision: Decision, dx: f32) {
        let from = SwipeFrame::at(dx, self.surface().effective_width());
        match decision {
            Decision::Dismiss { to_right } => self.slide_out(touched, from, to_right),
            Decision::SpringBack if self.barrier.is_animating(&touched.view) => {}
            Decision::SpringBack => {
                let (id, tween) = self.animator.spring_back(touched.view, from);
                self.host.run_animation(id, tween);
            }
            Decision::NotSwiped => {}
        }
    }

    /// Resolve the swipeable view under a point, honoring the animation
    /// guard and the veto callback.
    fn touch_target(&mut self, x: f32, y: f32) -> Option<Touched<H::Row>> {
        let row_view = self.host.hit_test(x, y)?;
        let view = self.swipe_view_of(row_view);
        if self.barrier.is_animating(&view) {
            tracing::trace!(message = "swipelist.busy_row", view = ?view);
            return None;
        }
        let position = self.host.position_of(row_view)?;
        if let Some(should_swipe) = self.should_swipe.as_mut() {
            if !should_swipe(position) {
                return None;
            }
        }
        Some(Touched {
            view,
            row_view,
            position,
        })
    }

    fn swipe_view_of(&self, row_view: H::Row) -> H::Row {
        self.swipe_target
            .and_then(|target| self.host.swipe_view(row_view, target))
            .unwrap_or(row_view)
    }

    fn surface(&self) -> SwipeSurface {
        SwipeSurface::new(self.host.width(), self.host.layout_direction())
    }

    /// Finger-driven frame; rows already being dismissed belong to the
    /// animator.
    fn apply_swipe_frame(&mut self, view: H::Row, frame: SwipeFrame) {
        if !self.barrier.is_animating(&view) {
            self.apply_frame(view, frame);
        }
    }

    fn apply_frame(&mut self, view: H::Row, frame: SwipeFrame) {
        self.host.set_visual_offset(view, frame.offset);
        self.host.set_opacity(view, frame.opacity);
    }

    // ========================================================================
    // Dismissal
    // ========================================================================

    /// Dismiss the item at `position` with the same animation as a swipe to
    /// the right.
    ///
    /// Deleting a row that is already being dismissed does nothing.
    pub fn delete(&mut self, position: isize) -> Result<()> {
        if self.on_dismiss.is_none() {
            tracing::warn!(message = "swipelist.config_error", operation = "delete");
            return Err(SwipeListError::MissingDismissCallback {
                operation: "delete",
            });
        }
        let len = self.host.row_count();
        let index = usize::try_from(position)
            .ok()
            .filter(|&index| index < len)
            .ok_or(SwipeListError::PositionOutOfRange { position, len })?;
        let row_view = self
            .host
            .row_at(index)
            .ok_or(SwipeListError::RowNotLaidOut { position: index })?;
        let touched = Touched {
            view: self.swipe_view_of(row_view),
            row_view,
            position: index,
        };
        self.slide_out(touched, SwipeFrame::REST, true);
        Ok(())
    }

    fn slide_out(&mut self, touched: Touched<H::Row>, from: SwipeFrame, to_right: bool) {
        if !self.barrier.enter(touched.view) {
            return;
        }
        self.animator.cancel_spring_back(touched.view);
        let target = slide_out_offset(self.surface().effective_width(), to_right);
        let (id, tween) = self.animator.slide_out(
            touched.view,
            touched.row_view,
            touched.position,
            from,
            target,
        );
        tracing::debug!(
            message = "swipelist.slide_out",
            position = touched.position,
            to_right,
            in_flight = self.barrier.in_flight()
        );
        self.host.run_animation(id, tween);
    }

    /// Report an interpolated value for a running animation.
    pub fn on_animation_frame(&mut self, id: AnimationId, value: f32) {
        match self.animator.frame(id, value) {
            Some(FrameUpdate::Slide {
                view,
                offset,
                opacity,
            }) => self.apply_frame(view, SwipeFrame { offset, opacity }),
            Some(FrameUpdate::Height { row_view, height }) => {
                self.host.set_height(row_view, height);
            }
            None => {}
        }
    }

    /// Report that an animation has finished.
    pub fn on_animation_end(&mut self, id: AnimationId) {
        match self.animator.finish(id) {
            Some(Finished::SlidOut {
                view,
                row_view,
                position,
                offset,
            }) => {
                self.apply_frame(
                    view,
                    SwipeFrame {
                        offset,
                        opacity: 0.0,
                    },
                );
                let original_height = self.host.height(row_view);
                self.barrier.stage(PendingDismiss {
                    position,
                    view,
                    row_view,
                    original_height,
                });
                let (id, tween) = self.animator.collapse(view, row_view, original_height);
                self.host.run_animation(id, tween);
            }
            Some(Finished::Collapsed { view, row_view }) => {
                self.host.set_height(row_view, COLLAPSED_HEIGHT);
                if let Some(batch) = self.barrier.complete(view) {
                    self.commit_batch(batch);
                }
            }
            Some(Finished::SprungBack { view }) => self.apply_frame(view, SwipeFrame::REST),
            None => tracing::trace!(message = "swipelist.stale_animation", id = id.get()),
        }
    }

    /// Hand a drained batch to the dismiss callback, highest position first.
    fn commit_batch(&mut self, batch: Vec<PendingDismiss<H::Row>>) {
        for pending in &batch {
            match self.on_dismiss.as_mut() {
                Some(on_dismiss) => self.undo.record_with(|| on_dismiss(pending.position)),
                None => tracing::warn!(
                    message = "swipelist.no_dismiss_callback",
                    position = pending.position
                ),
            }
            self.auto_hide.invalidate();
        }
        tracing::debug!(
            message = "swipelist.commit",
            batch = batch.len(),
            pending = self.undo.len(),
            generation = self.auto_hide.generation()
        );

        match self.undo.content() {
            Some(content) => {
                self.host.show_popup(&content.text, &content.button);
                if !self.auto_hide.require_touch() {
                    self.schedule_hide();
                }
            }
            None => self.hide_popup(),
        }

        for pending in &batch {
            self.apply_frame(pending.view, SwipeFrame::REST);
            self.host
                .restore_height(pending.row_view, pending.original_height);
        }
    }

    // ========================================================================
    // Undo popup
    // ========================================================================

    /// The user touched the popup. Outstanding auto-hides become stale.
    pub fn on_popup_touch(&mut self) {
        self.auto_hide.invalidate();
    }

    /// The user clicked the undo button.
    pub fn on_undo_clicked(&mut self) {
        match self.undo.click_undo() {
            PopupUpdate::Hide => self.hide_popup(),
            PopupUpdate::Refresh(content) => self.host.show_popup(&content.text, &content.button),
        }
        self.auto_hide.invalidate();
    }

    /// Deliver a hide token scheduled through the host.
    pub fn on_hide_timer(&mut self, token: HideToken) {
        if self.auto_hide.fire(token) {
            self.undo.expire();
            self.hide_popup();
        }
    }

    /// Discard every pending undoable and hide the popup immediately.
    ///
    /// Call this when the host goes away for good (or stops being visible).
    pub fn discard_all_pending(&mut self) {
        self.undo.discard_all();
        self.auto_hide.invalidate();
        self.hide_popup();
    }

    /// The enclosing container became invisible.
    pub fn on_host_hidden(&mut self) {
        self.discard_all_pending();
    }

    fn arm_on_touch(&mut self) {
        if self.auto_hide.require_touch() && self.host.is_popup_visible() {
            if let Some(token) = self.auto_hide.arm_if_idle() {
                self.host.schedule_delayed(self.auto_hide.delay(), token);
            }
        }
    }

    fn schedule_hide(&mut self) {
        let token = self.auto_hide.arm();
        self.host.schedule_delayed(self.auto_hide.delay(), token);
    }

    fn hide_popup(&mut self) {
        if self.host.is_popup_visible() {
            self.host.hide_popup();
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Phase of the current gesture.
    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.tracker.state()
    }

    /// Number of deletions that can still be undone.
    #[must_use]
    pub fn pending_undo_count(&self) -> usize {
        self.undo.len()
    }

    /// Dismiss phase of a running animation, or `None` for spring-backs and
    /// unknown ids. Hosts may use it to pick an interpolator per phase.
    #[must_use]
    pub fn animation_phase(&self, id: AnimationId) -> Option<DismissPhase> {
        self.animator.kind(id).and_then(AnimationKind::phase)
    }

    /// Number of rows in their dismiss animation.
    #[must_use]
    pub fn in_flight_dismissals(&self) -> usize {
        self.barrier.in_flight()
    }

    /// Current auto-hide generation.
    #[must_use]
    pub fn auto_hide_generation(&self) -> u64 {
        self.auto_hide.generation()
    }
}

impl<H: ListHost> Drop for SwipeList<H> {
    fn drop(&mut self) {
        self.discard_all_pending();
    }
}
