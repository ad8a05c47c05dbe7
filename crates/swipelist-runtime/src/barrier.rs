#![forbid(unsafe_code)]

//! Completion barrier for concurrently dismissing rows.
//!
//! Rows dismissed at nearly the same time animate independently and finish
//! in any order. [`DismissBarrier`] counts them in and out, and only when the
//! last one finishes does it release the accumulated batch, sorted by
//! descending position, so removing each entry from the host's collection
//! never shifts the index of an entry still waiting in the same batch.
//!
//! # Invariants
//!
//! 1. `in_flight() == animating.len()` at all times.
//! 2. A view is counted at most once ([`enter`](DismissBarrier::enter)
//!    rejects a view already animating).
//! 3. A batch is released exactly once per quiet period (the transition of
//!    `in_flight` from 1 to 0), and the staging area is empty afterwards.
//! 4. Released batches are sorted by descending position; equal positions
//!    keep staging order.
//!
//! # Failure Modes
//!
//! - A completion for a view that never entered (or already completed) is
//!   ignored and logged; it neither decrements the count nor releases.

use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashSet;

/// A row whose slide-out finished and which is waiting for its batch to
/// commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDismiss<R> {
    /// Adapter position handed to the dismiss callback.
    pub position: usize,
    /// The view that slid out (the swipe target, or the row itself).
    pub view: R,
    /// The whole row, whose height collapsed.
    pub row_view: R,
    /// Row height before the collapse, restored after the commit.
    pub original_height: f32,
}

/// Reference-counted set of rows in their dismiss animation.
#[derive(Debug, Clone)]
pub struct DismissBarrier<R> {
    animating: AHashSet<R>,
    pending: Vec<PendingDismiss<R>>,
}

impl<R> Default for DismissBarrier<R> {
    fn default() -> Self {
        Self {
            animating: AHashSet::new(),
            pending: Vec::new(),
        }
    }
}

impl<R: Copy + Eq + Hash + Debug> DismissBarrier<R> {
    /// Create an empty barrier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `view` in.
    ///
    /// Returns `false` (and changes nothing) if the view is already animating.
    pub fn enter(&mut self, view: R) -> bool {
        if !self.animating.insert(view) {
            tracing::trace!(message = "barrier.ignore", view = ?view);
            return false;
        }
        tracing::trace!(
            message = "barrier.enter",
            view = ?view,
            in_flight = self.animating.len()
        );
        true
    }

    /// Stage a row whose slide-out completed.
    pub fn stage(&mut self, pending: PendingDismiss<R>) {
        self.pending.push(pending);
    }

    /// Count `view` out.
    ///
    /// Returns the batch when this was the last animating view, sorted by
    /// descending position. Returns `None` while other views are still
    /// animating, or when `view` was not counted in.
    pub fn complete(&mut self, view: R) -> Option<Vec<PendingDismiss<R>>> {
        if !self.animating.remove(&view) {
            tracing::warn!(message = "barrier.spurious_complete", view = ?view);
            return None;
        }
        if !self.animating.is_empty() {
            tracing::trace!(
                message = "barrier.complete",
                view = ?view,
                in_flight = self.animating.len()
            );
            return None;
        }
        let mut batch = std::mem::take(&mut self.pending);
        batch.sort_by(|a, b| b.position.cmp(&a.position));
        tracing::debug!(message = "barrier.drain", batch = batch.len());
        Some(batch)
    }

    /// Whether `view` is in its dismiss animation.
    #[inline]
    #[must_use]
    pub fn is_animating(&self, view: &R) -> bool {
        self.animating.contains(view)
    }

    /// Number of views still animating.
    #[inline]
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.animating.len()
    }

    /// Number of rows staged for the next batch.
    #[inline]
    #[must_use]
    pub fn staged(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(position: usize, view: u32) -> PendingDismiss<u32> {
        PendingDismiss {
            position,
            view,
            row_view: view,
            original_height: 48.0,
        }
    }

    /// Enter, slide and collapse every view, completing in `finish_order`.
    fn run(
        barrier: &mut DismissBarrier<u32>,
        rows: &[(usize, u32)],
        finish_order: &[u32],
    ) -> Vec<usize> {
        for &(_, view) in rows {
            assert!(barrier.enter(view));
        }
        for &(position, view) in rows {
            barrier.stage(pending(position, view));
        }
        let mut released = None;
        for &view in finish_order {
            if let Some(batch) = barrier.complete(view) {
                assert!(released.is_none(), "released twice");
                released = Some(batch);
            }
        }
        released
            .expect("batch released")
            .iter()
            .map(|p| p.position)
            .collect()
    }

    // --- Counting ---

    #[test]
    fn double_enter_is_ignored() {
        let mut b = DismissBarrier::new();
        assert!(b.enter(7u32));
        assert!(!b.enter(7));
        assert_eq!(b.in_flight(), 1);
        assert!(b.is_animating(&7));
    }

    #[test]
    fn single_row_releases_on_complete() {
        let mut b = DismissBarrier::new();
        assert_eq!(run(&mut b, &[(2, 1)], &[1]), vec![2]);
        assert_eq!(b.in_flight(), 0);
        assert_eq!(b.staged(), 0);
    }

    #[test]
    fn spurious_complete_is_ignored() {
        let mut b = DismissBarrier::<u32>::new();
        assert!(b.complete(3).is_none());
        b.enter(1);
        b.stage(pending(0, 1));
        assert!(b.complete(3).is_none());
        assert_eq!(b.in_flight(), 1);
        assert!(b.complete(1).is_some());
        assert!(b.complete(1).is_none());
    }

    // --- Ordering ---

    #[test]
    fn batch_is_sorted_descending_regardless_of_finish_order() {
        let mut b = DismissBarrier::new();
        let rows = [(5, 10), (1, 11), (3, 12)];
        assert_eq!(run(&mut b, &rows, &[11, 10, 12]), vec![5, 3, 1]);
    }

    #[test]
    fn duplicate_positions_are_kept() {
        let mut b = DismissBarrier::new();
        let rows = [(2, 1), (2, 2), (0, 3)];
        assert_eq!(run(&mut b, &rows, &[3, 2, 1]), vec![2, 2, 0]);
    }

    #[test]
    fn next_quiet_period_starts_empty() {
        let mut b = DismissBarrier::new();
        assert_eq!(run(&mut b, &[(4, 1), (9, 2)], &[1, 2]), vec![9, 4]);
        assert_eq!(run(&mut b, &[(0, 1)], &[1]), vec![0]);
    }
}
