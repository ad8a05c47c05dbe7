#![forbid(unsafe_code)]

//! Undoables that log their fate.

use std::cell::RefCell;
use std::rc::Rc;

use swipelist_runtime::undo::{UndoAction, Undoable};

/// Something that happened to an item or its undoable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoEvent {
    /// The dismiss callback ran for `label` at `position`.
    Dismissed { position: usize, label: String },
    /// The deletion of `label` was undone.
    Undone { label: String },
    /// The deletion of `label` became final.
    Discarded { label: String },
}

/// Shared event log and factory for logging undoables.
#[derive(Debug, Clone, Default)]
pub struct UndoProbe {
    log: Rc<RefCell<Vec<UndoEvent>>>,
}

impl UndoProbe {
    /// Create an empty probe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event.
    pub fn push(&self, event: UndoEvent) {
        self.log.borrow_mut().push(event);
    }

    /// An undoable for `label` that only logs.
    #[must_use]
    pub fn action(&self, label: &str) -> Box<dyn Undoable> {
        self.action_with(label, || {})
    }

    /// An undoable for `label` that runs `on_undo` and logs.
    pub fn action_with(&self, label: &str, on_undo: impl FnOnce() + 'static) -> Box<dyn Undoable> {
        let (undo_log, discard_log) = (Rc::clone(&self.log), Rc::clone(&self.log));
        let (undo_label, discard_label) = (label.to_owned(), label.to_owned());
        UndoAction::new(move || {
            on_undo();
            undo_log.borrow_mut().push(UndoEvent::Undone { label: undo_label });
        })
        .with_discard(move || {
            discard_log.borrow_mut().push(UndoEvent::Discarded {
                label: discard_label,
            });
        })
        .with_title(format!("Deleted {label}"))
        .boxed()
    }

    /// Snapshot of the log.
    #[must_use]
    pub fn events(&self) -> Vec<UndoEvent> {
        self.log.borrow().clone()
    }

    /// Drain the log.
    pub fn take(&self) -> Vec<UndoEvent> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    /// Labels passed to the dismiss callback, in call order.
    #[must_use]
    pub fn dismissed(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                UndoEvent::Dismissed { label, .. } => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    /// Positions passed to the dismiss callback, in call order.
    #[must_use]
    pub fn dismissed_positions(&self) -> Vec<usize> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                UndoEvent::Dismissed { position, .. } => Some(*position),
                _ => None,
            })
            .collect()
    }

    /// How often `label` was undone.
    #[must_use]
    pub fn undo_count(&self, label: &str) -> usize {
        self.count(|e| matches!(e, UndoEvent::Undone { label: l } if l == label))
    }

    /// How often `label` was discarded.
    #[must_use]
    pub fn discard_count(&self, label: &str) -> usize {
        self.count(|e| matches!(e, UndoEvent::Discarded { label: l } if l == label))
    }

    /// Undo events across all labels.
    #[must_use]
    pub fn undone_total(&self) -> usize {
        self.count(|e| matches!(e, UndoEvent::Undone { .. }))
    }

    /// Discard events across all labels.
    #[must_use]
    pub fn discarded_total(&self) -> usize {
        self.count(|e| matches!(e, UndoEvent::Discarded { .. }))
    }

    fn count(&self, pred: impl Fn(&UndoEvent) -> bool) -> usize {
        self.log.borrow().iter().filter(|e| pred(e)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_logs_undo_and_discard() {
        let probe = UndoProbe::new();
        probe.action("a").undo();
        probe.action("b").discard();
        assert_eq!(probe.undo_count("a"), 1);
        assert_eq!(probe.discard_count("a"), 0);
        assert_eq!(probe.discard_count("b"), 1);
        assert_eq!(probe.undone_total(), 1);
        assert_eq!(probe.discarded_total(), 1);
        assert_eq!(probe.take().len(), 2);
        assert!(probe.events().is_empty());
    }

    #[test]
    fn action_title_names_the_item() {
        let probe = UndoProbe::new();
        assert_eq!(probe.action("Item 3").title(), Some("Deleted Item 3"));
    }
}
