//! Property-based invariant tests for the dismiss barrier and undo stack.
//!
//! 1. A batch is released exactly once, on the last completion.
//! 2. Released batches are sorted by descending position and lose nothing.
//! 3. Spurious completions never release or change the count.
//! 4. Every recorded undoable is undone xor discarded exactly once.
//! 5. `SinglePopup` never holds more than one entry.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use proptest::prelude::*;
use swipelist_runtime::{
    DismissBarrier, PendingDismiss, PopupUpdate, UndoAction, UndoLabels, UndoStack, UndoStyle,
};

// ── Strategies ────────────────────────────────────────────────────────────

/// Positions of simultaneously dismissed rows plus an arbitrary completion
/// order (indices into the position list).
fn batch_strategy() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    proptest::collection::vec(0usize..64, 1..16).prop_flat_map(|positions| {
        let order: Vec<usize> = (0..positions.len()).collect();
        (Just(positions), Just(order).prop_shuffle())
    })
}

#[derive(Debug, Clone)]
enum UndoOp {
    Record(bool),
    Click,
    Expire,
    DiscardAll,
}

fn undo_op() -> impl Strategy<Value = UndoOp> {
    prop_oneof![
        4 => any::<bool>().prop_map(UndoOp::Record),
        2 => Just(UndoOp::Click),
        1 => Just(UndoOp::Expire),
        1 => Just(UndoOp::DiscardAll),
    ]
}

fn style() -> impl Strategy<Value = UndoStyle> {
    prop_oneof![
        Just(UndoStyle::SinglePopup),
        Just(UndoStyle::MultilevelPopup),
        Just(UndoStyle::CollapsedPopup),
    ]
}

#[derive(Debug, Default)]
struct Fate {
    undone: u32,
    discarded: u32,
}

// ═════════════════════════════════════════════════════════════════════════
// Barrier
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn batch_released_once_sorted_descending((positions, order) in batch_strategy()) {
        let mut barrier = DismissBarrier::new();
        for view in 0..positions.len() {
            prop_assert!(barrier.enter(view));
        }
        for (view, &position) in positions.iter().enumerate() {
            barrier.stage(PendingDismiss {
                position,
                view,
                row_view: view,
                original_height: 48.0,
            });
        }

        let mut released = Vec::new();
        for (i, &view) in order.iter().enumerate() {
            let batch = barrier.complete(view);
            if i + 1 < order.len() {
                prop_assert!(batch.is_none(), "released early at completion {}", i);
            } else {
                released = batch.expect("last completion releases");
            }
        }

        prop_assert_eq!(barrier.in_flight(), 0);
        prop_assert_eq!(barrier.staged(), 0);
        let got: Vec<usize> = released.iter().map(|p| p.position).collect();
        prop_assert!(got.windows(2).all(|w| w[0] >= w[1]), "not descending: {:?}", got);
        let mut want = positions.clone();
        want.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(got, want);
    }

    #[test]
    fn spurious_completions_are_inert(
        (positions, order) in batch_strategy(),
        strays in proptest::collection::vec(100usize..200, 0..8),
    ) {
        let mut barrier = DismissBarrier::new();
        for view in 0..positions.len() {
            barrier.enter(view);
            barrier.stage(PendingDismiss {
                position: positions[view],
                view,
                row_view: view,
                original_height: 1.0,
            });
        }
        for &stray in &strays {
            prop_assert!(barrier.complete(stray).is_none());
            prop_assert_eq!(barrier.in_flight(), positions.len());
        }
        let releases = order
            .iter()
            .filter_map(|&view| barrier.complete(view))
            .count();
        prop_assert_eq!(releases, 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Undo stack
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn every_undoable_meets_exactly_one_fate(
        style in style(),
        ops in proptest::collection::vec(undo_op(), 0..40),
    ) {
        let fates: Rc<RefCell<HashMap<usize, Fate>>> = Rc::default();
        let mut stack = UndoStack::new(style, UndoLabels::default());
        let mut recorded = 0usize;

        for op in ops {
            match op {
                UndoOp::Record(undoable) => {
                    if undoable {
                        let id = recorded;
                        recorded += 1;
                        let (u, d) = (Rc::clone(&fates), Rc::clone(&fates));
                        stack.record(Some(
                            UndoAction::new(move || u.borrow_mut().entry(id).or_default().undone += 1)
                                .with_discard(move || {
                                    d.borrow_mut().entry(id).or_default().discarded += 1;
                                })
                                .boxed(),
                        ));
                    } else {
                        stack.record(None);
                    }
                }
                UndoOp::Click => {
                    let update = stack.click_undo();
                    prop_assert_eq!(update == PopupUpdate::Hide, stack.is_empty());
                }
                UndoOp::Expire => {
                    stack.expire();
                    prop_assert!(stack.is_empty());
                }
                UndoOp::DiscardAll => {
                    stack.discard_all();
                }
            }
            if style == UndoStyle::SinglePopup {
                prop_assert!(stack.len() <= 1);
            }
            prop_assert_eq!(stack.content().is_some(), stack.has_pending());
        }
        stack.discard_all();

        let fates = fates.borrow();
        prop_assert_eq!(fates.len(), recorded);
        for (id, fate) in fates.iter() {
            prop_assert_eq!(fate.undone + fate.discarded, 1, "undoable {} fate {:?}", id, fate);
        }
    }
}
