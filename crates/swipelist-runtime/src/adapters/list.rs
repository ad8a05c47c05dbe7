#![forbid(unsafe_code)]

//! Plain list with optional header rows.

use std::fmt::Debug;
use std::hash::Hash;

use swipelist_core::direction::LayoutDirection;

use super::{ChildSlot, VisibleChildren};
use crate::host::{RowGeometry, SwipeTargetId};

/// Geometry of a list whose first `header_count` rows are headers.
///
/// List positions count headers; item positions (what the engine and the
/// dismiss callback see) do not.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderedList<R> {
    width: f32,
    layout: LayoutDirection,
    header_count: usize,
    item_count: usize,
    visible: VisibleChildren<R>,
}

impl<R: Copy + PartialEq> HeaderedList<R> {
    /// An empty list of the given width, without headers.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            width,
            layout: LayoutDirection::Ltr,
            header_count: 0,
            item_count: 0,
            visible: VisibleChildren::default(),
        }
    }

    /// Set the number of header rows.
    #[must_use]
    pub fn with_headers(mut self, header_count: usize) -> Self {
        self.header_count = header_count;
        self
    }

    /// Set the layout direction.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutDirection) -> Self {
        self.layout = layout;
        self
    }

    /// Set the number of items (headers excluded).
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Replace the laid-out children. `first_list_position` is the list
    /// position (headers counted) of `children[0]`.
    pub fn layout_children(&mut self, first_list_position: usize, children: Vec<ChildSlot<R>>) {
        self.visible.replace(first_list_position, children);
    }

    /// Number of header rows.
    #[must_use]
    pub fn header_count(&self) -> usize {
        self.header_count
    }

    /// Number of laid-out children, headers included.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.visible.len()
    }
}

impl<R: Copy + Eq + Hash + Debug> RowGeometry for HeaderedList<R> {
    type Row = R;

    fn hit_test(&self, x: f32, y: f32) -> Option<R> {
        self.visible.hit(x, y, self.header_count)
    }

    fn row_count(&self) -> usize {
        self.item_count
    }

    fn row_at(&self, position: usize) -> Option<R> {
        if position >= self.item_count {
            return None;
        }
        self.visible.at(position + self.header_count)
    }

    fn position_of(&self, row: R) -> Option<usize> {
        self.visible
            .position_of(row)?
            .checked_sub(self.header_count)
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

#[cfg(test)]
mod tests {
    use super::*;
    use swipelist_core::geometry::Rect;

    const ROW: f32 = 48.0;

    /// Lay out `count` children from `first` (list position), each `ROW` tall.
    fn list(headers: usize, items: usize, first: usize, count: usize) -> HeaderedList<u32> {
        let mut l = HeaderedList::new(320.0).with_headers(headers);
        l.set_item_count(items);
        let children = (0..count)
            .map(|i| {
                let id = (first + i) as u32;
                ChildSlot::new(id, Rect::new(0.0, i as f32 * ROW, 320.0, ROW))
                    .with_swipe_view(SwipeTargetId(1), id + 100)
            })
            .collect();
        l.layout_children(first, children);
        l
    }

    // --- Headers ---

    #[test]
    fn headers_are_never_hit() {
        let l = list(2, 5, 0, 7);
        assert_eq!(l.hit_test(10.0, 10.0), None);
        assert_eq!(l.hit_test(10.0, ROW + 1.0), None);
        assert_eq!(l.hit_test(10.0, 2.0 * ROW + 1.0), Some(2));
    }

    #[test]
    fn positions_exclude_headers() {
        let l = list(2, 5, 0, 7);
        assert_eq!(l.position_of(2), Some(0));
        assert_eq!(l.position_of(6), Some(4));
        assert_eq!(l.position_of(0), None);
        assert_eq!(l.row_at(0), Some(2));
        assert_eq!(l.row_at(5), None);
        assert_eq!(l.row_count(), 5);
    }

    // --- Scrolling ---

    #[test]
    fn scrolled_past_headers() {
        let l = list(1, 20, 6, 4);
        assert_eq!(l.hit_test(0.0, 0.0), Some(6));
        assert_eq!(l.position_of(6), Some(5));
        assert_eq!(l.row_at(5), Some(6));
        assert_eq!(l.row_at(0), None);
    }

    // --- Swipe views ---

    #[test]
    fn swipe_view_lookup() {
        let l = list(0, 3, 0, 3);
        assert_eq!(l.swipe_view(1, SwipeTargetId(1)), Some(101));
        assert_eq!(l.swipe_view(1, SwipeTargetId(2)), None);
        assert_eq!(l.position_of(101), Some(1));
    }
}
