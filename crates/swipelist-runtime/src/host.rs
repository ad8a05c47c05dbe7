#![forbid(unsafe_code)]

//! Capabilities the engine needs from the list it is attached to.
//!
//! The engine never touches a widget tree. It asks the host, through the
//! narrow traits below, to hit-test rows, move and fade them, run tweens,
//! schedule delayed callbacks and show the undo popup. Completions come back
//! into the engine as events (`on_animation_frame`, `on_animation_end`,
//! `on_hide_timer`), so every mutation happens on the owner's `&mut`.
//!
//! Implement all six traits on one type; [`ListHost`] is then provided by a
//! blanket impl.
//!
//! # Row handles
//!
//! `Row` identifies a laid-out view: a whole row, or the swipe target inside
//! it. It only needs to be a small `Copy` key. Hosts that recycle views may
//! hand out the same handle for different items over time; the engine holds
//! on to a handle only while that view is animating.

use std::fmt::Debug;
use std::hash::Hash;

use swipelist_core::animation::Tween;
use swipelist_core::direction::LayoutDirection;
use swipelist_core::event::PointerEvent;
use web_time::Duration;

use crate::animator::AnimationId;
use crate::auto_hide::HideToken;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Identifies the sub-view of a row that moves during a swipe.
///
/// Rows without such a sub-view are swiped as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(transparent))]
pub struct SwipeTargetId(pub u32);

/// Row lookup and list geometry.
pub trait RowGeometry {
    /// Handle of a laid-out view.
    type Row: Copy + Eq + Hash + Debug;

    /// Row under the point, in list coordinates. Header rows never match.
    fn hit_test(&self, x: f32, y: f32) -> Option<Self::Row>;

    /// Number of swipeable items (headers excluded).
    fn row_count(&self) -> usize;

    /// Laid-out row for an item position, or `None` if it is off screen.
    fn row_at(&self, position: usize) -> Option<Self::Row>;

    /// Item position of a laid-out row.
    fn position_of(&self, row: Self::Row) -> Option<usize>;

    /// Sub-view of `row` registered under `target`.
    fn swipe_view(&self, row: Self::Row, target: SwipeTargetId) -> Option<Self::Row> {
        let _ = (row, target);
        None
    }

    /// List width in pixels.
    fn width(&self) -> f32;

    /// Layout direction of the list.
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }
}

/// Visual properties of laid-out views.
pub trait RowVisuals: RowGeometry {
    /// Horizontal translation of a view.
    fn set_visual_offset(&mut self, view: Self::Row, dx: f32);

    /// Opacity of a view, in `[0, 1]`.
    fn set_opacity(&mut self, view: Self::Row, alpha: f32);

    /// Height of a row.
    fn set_height(&mut self, row: Self::Row, height: f32);

    /// Current height of a row.
    fn height(&self, row: Self::Row) -> f32;

    /// Put a collapsed row back to its natural height.
    ///
    /// Hosts with content-sized rows override this to drop the fixed height
    /// instead of pinning `original`.
    fn restore_height(&mut self, row: Self::Row, original: f32) {
        self.set_height(row, original);
    }
}

/// Frame clock.
pub trait AnimationDriver {
    /// Start animating `tween`.
    ///
    /// Report interpolated values through `SwipeList::on_animation_frame` and
    /// completion through `SwipeList::on_animation_end`, with the same `id`.
    fn run_animation(&mut self, id: AnimationId, tween: Tween);
}

/// Delayed callbacks.
pub trait DelayedScheduler {
    /// Deliver `token` to `SwipeList::on_hide_timer` after `delay`.
    ///
    /// There is no cancellation; stale tokens are ignored on delivery.
    fn schedule_delayed(&mut self, delay: Duration, token: HideToken);
}

/// The undo popup.
pub trait UndoPopup {
    /// Show the popup, or update it in place if already visible.
    fn show_popup(&mut self, text: &str, button: &str);

    /// Hide the popup.
    fn hide_popup(&mut self);

    /// Whether the popup is visible.
    fn is_popup_visible(&self) -> bool;
}

/// The list's own touch handling (scrolling, clicks).
pub trait TouchPassthrough {
    /// Let the underlying list handle `event`. Returns whether it consumed it.
    fn forward_to_list(&mut self, event: &PointerEvent) -> bool;

    /// Stop ancestors from intercepting the current pointer stream.
    fn claim_pointer(&mut self) {}
}

/// Everything the engine needs from its host.
pub trait ListHost:
    RowVisuals + AnimationDriver + DelayedScheduler + UndoPopup + TouchPassthrough
{
}

impl<T> ListHost for T where
    T: RowVisuals + AnimationDriver + DelayedScheduler + UndoPopup + TouchPassthrough
{
}
