#![forbid(unsafe_code)]

//! Host-supplied reversible deletions.
//!
//! The dismiss callback returns an [`Undoable`] for every deletion the user
//! may take back. The engine owns it until it is either undone or discarded;
//! both consume the value, so each happens at most once.
//!
//! # Invariants
//!
//! - Every recorded undoable is eventually undone xor discarded, exactly once
//!   (the engine discards leftovers when it is dropped).
//! - `title()` is only read for display; it must not have side effects.

use std::fmt;

/// A reversible deletion.
///
/// Only [`undo`](Undoable::undo) is mandatory. Implement
/// [`discard`](Undoable::discard) to finalize the deletion (for example to
/// remove the record from permanent storage) once it can no longer be undone.
pub trait Undoable {
    /// Reverse the deletion, re-inserting the item into the host's data.
    fn undo(self: Box<Self>);

    /// Finalize the deletion. The default does nothing.
    fn discard(self: Box<Self>) {}

    /// Display text for the undo popup when this is the only pending entry.
    ///
    /// `None` selects the generic "item deleted" label.
    fn title(&self) -> Option<&str> {
        None
    }
}

type Action = Box<dyn FnOnce()>;

/// Closure-backed [`Undoable`].
///
/// ```
/// use swipelist_runtime::undo::UndoAction;
///
/// let action = UndoAction::new(|| { /* put the item back */ })
///     .with_discard(|| { /* delete it from storage */ })
///     .with_title("Deleted \"Groceries\"");
/// # let _ = action;
/// ```
pub struct UndoAction {
    undo: Action,
    discard: Option<Action>,
    title: Option<String>,
}

impl fmt::Debug for UndoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoAction")
            .field("title", &self.title)
            .field("has_discard", &self.discard.is_some())
            .finish()
    }
}

impl UndoAction {
    /// Create an action that runs `undo` when the user takes the deletion back.
    #[must_use]
    pub fn new(undo: impl FnOnce() + 'static) -> Self {
        Self {
            undo: Box::new(undo),
            discard: None,
            title: None,
        }
    }

    /// Run `discard` when the deletion becomes final.
    #[must_use]
    pub fn with_discard(mut self, discard: impl FnOnce() + 'static) -> Self {
        self.discard = Some(Box::new(discard));
        self
    }

    /// Set the popup title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Box the action for returning from a dismiss callback.
    #[must_use]
    pub fn boxed(self) -> Box<dyn Undoable> {
        Box::new(self)
    }
}

impl Undoable for UndoAction {
    fn undo(self: Box<Self>) {
        (self.undo)();
    }

    fn discard(self: Box<Self>) {
        if let Some(discard) = self.discard {
            discard();
        }
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn undo_runs_only_the_undo_closure() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&log), Rc::clone(&log));
        let action = UndoAction::new(move || a.borrow_mut().push("undo"))
            .with_discard(move || b.borrow_mut().push("discard"))
            .boxed();
        action.undo();
        assert_eq!(*log.borrow(), vec!["undo"]);
    }

    #[test]
    fn discard_without_closure_is_a_no_op() {
        let log = Rc::new(RefCell::new(Vec::<&str>::new()));
        let a = Rc::clone(&log);
        let action = UndoAction::new(move || a.borrow_mut().push("undo")).boxed();
        action.discard();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn title_defaults_to_none() {
        let action = UndoAction::new(|| {});
        assert_eq!(action.title(), None);
        let action = action.with_title("Deleted Item 3");
        assert_eq!(action.title(), Some("Deleted Item 3"));
    }
}
