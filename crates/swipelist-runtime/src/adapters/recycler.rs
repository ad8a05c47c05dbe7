#![forbid(unsafe_code)]

//! Recycling list: no headers, children rebound as the list scrolls.

use std::fmt::Debug;
use std::hash::Hash;

use swipelist_core::direction::LayoutDirection;

use super::{ChildSlot, VisibleChildren};
use crate::host::{RowGeometry, SwipeTargetId};

/// Geometry of a recycling list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecyclerList<R> {
    width: f32,
    layout: LayoutDirection,
    item_count: usize,
    visible: VisibleChildren<R>,
}

impl<R: Copy + PartialEq> RecyclerList<R> {
    /// An empty list of the given width.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            width,
            layout: LayoutDirection::Ltr,
            item_count: 0,
            visible: VisibleChildren::default(),
        }
    }

    /// Set the layout direction.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutDirection) -> Self {
        self.layout = layout;
        self
    }

    /// Set the number of items.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Rebind the laid-out children; `children[0]` shows item
    /// `first_position`.
    pub fn layout_children(&mut self, first_position: usize, children: Vec<ChildSlot<R>>) {
        self.visible.replace(first_position, children);
    }
}

impl<R: Copy + Eq + Hash + Debug> RowGeometry for RecyclerList<R> {
    type Row = R;

    fn hit_test(&self, x: f32, y: f32) -> Option<R> {
        self.visible.hit(x, y, 0)
    }

    fn row_count(&self) -> usize {
        self.item_count
    }

    fn row_at(&self, position: usize) -> Option<R> {
        if position >= self.item_count {
            return None;
        }
        self.visible.at(position)
    }

    fn position_of(&self, row: R) -> Option<usize> {
        self.visible
            .position_of(row)
            .filter(|&position| position < self.item_count)
    }

    fn swipe_view(&self, row: R, target: SwipeTargetId) -> Option<R> {
        self.visible.swipe_view(row, target)
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.layout
    }
}
