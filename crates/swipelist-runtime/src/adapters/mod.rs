#![forbid(unsafe_code)]

//! Geometry adapters for the two list flavors.
//!
//! Hosts describe what is currently laid out as a run of [`ChildSlot`]s, and
//! an adapter answers the [`RowGeometry`](crate::host::RowGeometry) queries
//! from that snapshot:
//!
//! - [`HeaderedList`]: a plain list whose first rows may be headers. Headers
//!   are never hit and item positions exclude them.
//! - [`RecyclerList`]: a recycling list without headers.
//!
//! Both map between laid-out children and item positions through the
//! position of the first laid-out child.

pub mod list;
pub mod recycler;

pub use list::HeaderedList;
pub use recycler::RecyclerList;

use swipelist_core::geometry::Rect;

use crate::host::SwipeTargetId;

/// One laid-out child of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildSlot<R> {
    /// Handle of the whole row.
    pub row: R,
    /// Row bounds in list coordinates.
    pub bounds: Rect,
    /// Registered sub-views that can be swiped instead of the whole row.
    pub swipe_views: Vec<(SwipeTargetId, R)>,
}

impl<R> ChildSlot<R> {
    /// A child without swipe sub-views.
    #[must_use]
    pub fn new(row: R, bounds: Rect) -> Self {
        Self {
            row,
            bounds,
            swipe_views: Vec::new(),
        }
    }

    /// Register a swipeable sub-view.
    #[must_use]
    pub fn with_swipe_view(mut self, target: SwipeTargetId, view: R) -> Self {
        self.swipe_views.push((target, view));
        self
    }
}

/// Laid-out children starting at a given list position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VisibleChildren<R> {
    first_position: usize,
    children: Vec<ChildSlot<R>>,
}

impl<R> Default for VisibleChildren<R> {
    fn default() -> Self {
        Self {
            first_position: 0,
            children: Vec::new(),
        }
    }
}

impl<R: Copy + PartialEq> VisibleChildren<R> {
    pub(crate) fn replace(&mut self, first_position: usize, children: Vec<ChildSlot<R>>) {
        self.first_position = first_position;
        self.children = children;
    }

    pub(crate) fn len(&self) -> usize {
        self.children.len()
    }

    /// First child at list position `>= min_position` containing the point.
    pub(crate) fn hit(&self, x: f32, y: f32, min_position: usize) -> Option<R> {
        let skip = min_position.saturating_sub(self.first_position);
        self.children
            .iter()
            .skip(skip)
            .find(|child| child.bounds.contains(x, y))
            .map(|child| child.row)
    }

    /// Row laid out at list position `position`.
    pub(crate) fn at(&self, position: usize) -> Option<R> {
        let index = position.checked_sub(self.first_position)?;
        self.children.get(index).map(|child| child.row)
    }

    /// List position of `row`, which may be a whole row or one of its
    /// swipe sub-views.
    pub(crate) fn position_of(&self, row: R) -> Option<usize> {
        self.children
            .iter()
            .position(|child| {
                child.row == row || child.swipe_views.iter().any(|&(_, view)| view == row)
            })
            .map(|index| self.first_position + index)
    }

    pub(crate) fn swipe_view(&self, row: R, target: SwipeTargetId) -> Option<R> {
        self.children
            .iter()
            .find(|child| child.row == row)?
            .swipe_views
            .iter()
            .find(|&&(id, _)| id == target)
            .map(|&(_, view)| view)
    }
}
