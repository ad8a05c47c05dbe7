#![forbid(unsafe_code)]

//! Pending reversible deletions and the three undo policies.
//!
//! [`UndoStack`] holds every [`Undoable`] the user can still take back, in
//! insertion order, and applies the configured [`UndoStyle`]:
//!
//! | Style | New deletion | Undo click |
//! |-------|--------------|------------|
//! | `SinglePopup` | discards everything pending first | undoes the only entry |
//! | `MultilevelPopup` | appends | undoes the newest entry only |
//! | `CollapsedPopup` | appends | undoes all, newest first |
//!
//! # Invariants
//!
//! 1. Entries are kept in insertion order.
//! 2. Under `SinglePopup` the stack never holds more than one entry.
//! 3. Every entry leaves the stack through exactly one of `undo` or
//!    `discard`.
//! 4. [`expire`](UndoStack::expire) discards, never undoes.
//!
//! The engine keeps the popup visible iff the stack is non-empty; the stack
//! itself only derives the popup text via [`UndoStack::content`].

use std::fmt;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use super::Undoable;

/// How deletions accumulate and what the undo button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum UndoStyle {
    /// Only the most recent deletion can be undone.
    #[default]
    SinglePopup,
    /// Deletions stack; each click undoes the most recent one.
    MultilevelPopup,
    /// Deletions stack; one click undoes all of them.
    CollapsedPopup,
}

/// Placeholder replaced by the pending count in
/// [`UndoLabels::n_items_deleted`].
pub const COUNT_PLACEHOLDER: &str = "{n}";

/// Display strings for the undo popup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct UndoLabels {
    /// Text when several deletions are pending; `{n}` is the count.
    pub n_items_deleted: String,
    /// Text for a single untitled deletion.
    pub item_deleted: String,
    /// Button label.
    pub undo: String,
    /// Button label for collapsed multi-undo.
    pub undo_all: String,
}

impl Default for UndoLabels {
    fn default() -> Self {
        Self {
            n_items_deleted: "{n} items deleted".to_owned(),
            item_deleted: "Item deleted".to_owned(),
            undo: "Undo".to_owned(),
            undo_all: "Undo all".to_owned(),
        }
    }
}

/// Text and button label to show in the undo popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupContent {
    /// Message text.
    pub text: String,
    /// Button label.
    pub button: String,
}

/// What the popup should do after an undo click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupUpdate {
    /// Nothing left to undo: hide the popup.
    Hide,
    /// Entries remain: refresh the popup with this content.
    Refresh(PopupContent),
}

/// Ordered pending deletions under one [`UndoStyle`].
pub struct UndoStack {
    entries: Vec<Box<dyn Undoable>>,
    style: UndoStyle,
    labels: UndoLabels,
}

impl fmt::Debug for UndoStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoStack")
            .field("len", &self.entries.len())
            .field("style", &self.style)
            .finish()
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(UndoStyle::default(), UndoLabels::default())
    }
}

impl UndoStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new(style: UndoStyle, labels: UndoLabels) -> Self {
        Self {
            entries: Vec::new(),
            style,
            labels,
        }
    }

    // ========================================================================
    // Recording
    // ========================================================================

    /// Record the outcome of one dismissal.
    ///
    /// Under [`UndoStyle::SinglePopup`] everything pending is discarded first,
    /// even when `undoable` is `None`.
    pub fn record(&mut self, undoable: Option<Box<dyn Undoable>>) {
        self.record_with(|| undoable);
    }

    /// Like [`record`](Self::record), but the undoable is produced by `dismiss`
    /// *after* the single-popup discard has run.
    ///
    /// The engine passes the host's dismiss callback here so that old
    /// undoables are discarded before the new deletion happens.
    pub fn record_with<F>(&mut self, dismiss: F)
    where
        F: FnOnce() -> Option<Box<dyn Undoable>>,
    {
        if self.style == UndoStyle::SinglePopup {
            self.discard_all();
        }
        if let Some(undoable) = dismiss() {
            self.entries.push(undoable);
            tracing::trace!(
                message = "undo.record",
                style = ?self.style,
                pending = self.entries.len()
            );
        }
    }

    // ========================================================================
    // Draining
    // ========================================================================

    /// Apply an undo click according to the style.
    pub fn click_undo(&mut self) -> PopupUpdate {
        match self.style {
            UndoStyle::SinglePopup => {
                let mut drained = self.entries.drain(..);
                if let Some(first) = drained.next() {
                    first.undo();
                }
                // Only reachable if the style changed while entries were pending.
                drained.for_each(Undoable::discard);
            }
            UndoStyle::CollapsedPopup => {
                while let Some(entry) = self.entries.pop() {
                    entry.undo();
                }
            }
            UndoStyle::MultilevelPopup => {
                if let Some(last) = self.entries.pop() {
                    last.undo();
                }
            }
        }
        tracing::debug!(
            message = "undo.click",
            style = ?self.style,
            remaining = self.entries.len()
        );
        match self.content() {
            Some(content) => PopupUpdate::Refresh(content),
            None => PopupUpdate::Hide,
        }
    }

    /// Discard every pending entry in insertion order and clear the stack.
    ///
    /// Returns how many entries were discarded.
    pub fn discard_all(&mut self) -> usize {
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            entry.discard();
        }
        if count > 0 {
            tracing::debug!(message = "undo.discard", count);
        }
        count
    }

    /// Auto-hide expiry: discard everything (never undo).
    pub fn expire(&mut self) -> usize {
        self.discard_all()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether anything can be undone.
    #[inline]
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of pending entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current style.
    #[inline]
    #[must_use]
    pub fn style(&self) -> UndoStyle {
        self.style
    }

    /// Change the style. Pending entries are kept.
    pub fn set_style(&mut self, style: UndoStyle) {
        self.style = style;
    }

    /// Current labels.
    #[must_use]
    pub fn labels(&self) -> &UndoLabels {
        &self.labels
    }

    /// Replace the labels.
    pub fn set_labels(&mut self, labels: UndoLabels) {
        self.labels = labels;
    }

    /// Popup text for the current state, or `None` if nothing is pending.
    ///
    /// - more than one entry: `n_items_deleted` with the count;
    /// - one entry: its title, or `item_deleted` when untitled.
    ///
    /// The button reads `undo_all` only for `CollapsedPopup` with more than
    /// one entry.
    #[must_use]
    pub fn content(&self) -> Option<PopupContent> {
        let last = self.entries.last()?;
        let count = self.entries.len();
        let text = if count > 1 {
            self.labels
                .n_items_deleted
                .replace(COUNT_PLACEHOLDER, &count.to_string())
        } else {
            last.title()
                .map_or_else(|| self.labels.item_deleted.clone(), str::to_owned)
        };
        let button = if count > 1 && self.style == UndoStyle::CollapsedPopup {
            self.labels.undo_all.clone()
        } else {
            self.labels.undo.clone()
        };
        Some(PopupContent { text, button })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::undo::UndoAction;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn probe(log: &Log, name: &str) -> Box<dyn Undoable> {
        let (u, d) = (Rc::clone(log), Rc::clone(log));
        let (nu, nd) = (format!("undo {name}"), format!("discard {name}"));
        UndoAction::new(move || u.borrow_mut().push(nu))
            .with_discard(move || d.borrow_mut().push(nd))
            .with_title(format!("Deleted {name}"))
            .boxed()
    }

    fn untitled(log: &Log, name: &str) -> Box<dyn Undoable> {
        let u = Rc::clone(log);
        let nu = format!("undo {name}");
        UndoAction::new(move || u.borrow_mut().push(nu)).boxed()
    }

    fn stack(style: UndoStyle) -> UndoStack {
        UndoStack::new(style, UndoLabels::default())
    }

    // --- SinglePopup ---

    #[test]
    fn single_discards_previous_on_record() {
        let log = Log::default();
        let mut s = stack(UndoStyle::SinglePopup);
        s.record(Some(probe(&log, "A")));
        s.record(Some(probe(&log, "B")));
        assert_eq!(s.len(), 1);
        assert_eq!(*log.borrow(), vec!["discard A"]);

        assert_eq!(s.click_undo(), PopupUpdate::Hide);
        assert_eq!(*log.borrow(), vec!["discard A", "undo B"]);
        assert!(s.is_empty());
    }

    #[test]
    fn single_discards_even_when_new_dismissal_is_not_undoable() {
        let log = Log::default();
        let mut s = stack(UndoStyle::SinglePopup);
        s.record(Some(probe(&log, "A")));
        s.record(None);
        assert!(s.is_empty());
        assert_eq!(*log.borrow(), vec!["discard A"]);
    }

    #[test]
    fn record_with_discards_before_producing() {
        let log = Log::default();
        let mut s = stack(UndoStyle::SinglePopup);
        s.record(Some(probe(&log, "A")));
        let seen = Rc::clone(&log);
        s.record_with(|| {
            seen.borrow_mut().push("dismiss B".to_owned());
            None
        });
        assert_eq!(*log.borrow(), vec!["discard A", "dismiss B"]);
    }

    // --- MultilevelPopup ---

    #[test]
    fn multilevel_undoes_newest_only() {
        let log = Log::default();
        let mut s = stack(UndoStyle::MultilevelPopup);
        s.record(Some(probe(&log, "A")));
        s.record(Some(probe(&log, "B")));

        let update = s.click_undo();
        assert_eq!(
            update,
            PopupUpdate::Refresh(PopupContent {
                text: "Deleted A".to_owned(),
                button: "Undo".to_owned(),
            })
        );
        assert_eq!(*log.borrow(), vec!["undo B"]);
        assert_eq!(s.click_undo(), PopupUpdate::Hide);
        assert_eq!(*log.borrow(), vec!["undo B", "undo A"]);
    }

    #[test]
    fn multilevel_round_trip_never_discards() {
        let log = Log::default();
        let mut s = stack(UndoStyle::MultilevelPopup);
        s.record(Some(probe(&log, "u")));
        s.click_undo();
        assert_eq!(*log.borrow(), vec!["undo u"]);
    }

    // --- CollapsedPopup ---

    #[test]
    fn collapsed_undoes_all_newest_first() {
        let log = Log::default();
        let mut s = stack(UndoStyle::CollapsedPopup);
        s.record(Some(probe(&log, "A")));
        s.record(Some(probe(&log, "B")));
        s.record(Some(probe(&log, "C")));
        assert_eq!(s.click_undo(), PopupUpdate::Hide);
        assert_eq!(*log.borrow(), vec!["undo C", "undo B", "undo A"]);
        assert!(s.is_empty());
    }

    // --- Expire / discard ---

    #[test]
    fn expire_discards_in_insertion_order() {
        let log = Log::default();
        let mut s = stack(UndoStyle::MultilevelPopup);
        s.record(Some(probe(&log, "A")));
        s.record(Some(probe(&log, "B")));
        assert_eq!(s.expire(), 2);
        assert_eq!(*log.borrow(), vec!["discard A", "discard B"]);
        assert_eq!(s.expire(), 0);
    }

    #[test]
    fn click_on_empty_stack_hides() {
        let mut s = stack(UndoStyle::CollapsedPopup);
        assert_eq!(s.click_undo(), PopupUpdate::Hide);
    }

    // --- Labels ---

    #[test]
    fn content_for_single_entry_uses_title_or_default() {
        let log = Log::default();
        let mut s = stack(UndoStyle::MultilevelPopup);
        assert!(s.content().is_none());

        s.record(Some(untitled(&log, "A")));
        let c = s.content().expect("pending");
        assert_eq!(c.text, "Item deleted");
        assert_eq!(c.button, "Undo");

        s.click_undo();
        s.record(Some(probe(&log, "B")));
        assert_eq!(s.content().map(|c| c.text).as_deref(), Some("Deleted B"));
    }

    #[test]
    fn content_for_many_entries_counts() {
        let log = Log::default();
        let mut s = stack(UndoStyle::MultilevelPopup);
        for name in ["A", "B", "C"] {
            s.record(Some(probe(&log, name)));
        }
        let c = s.content().expect("pending");
        assert_eq!(c.text, "3 items deleted");
        assert_eq!(c.button, "Undo");
    }

    #[test]
    fn undo_all_label_only_for_collapsed() {
        let log = Log::default();
        let mut s = stack(UndoStyle::CollapsedPopup);
        s.record(Some(probe(&log, "A")));
        assert_eq!(s.content().map(|c| c.button).as_deref(), Some("Undo"));
        s.record(Some(probe(&log, "B")));
        assert_eq!(s.content().map(|c| c.button).as_deref(), Some("Undo all"));
    }

    #[test]
    fn custom_labels() {
        let log = Log::default();
        let labels = UndoLabels {
            n_items_deleted: "{n} gelöscht".to_owned(),
            ..UndoLabels::default()
        };
        let mut s = UndoStack::new(UndoStyle::CollapsedPopup, labels);
        s.record(Some(probe(&log, "A")));
        s.record(Some(probe(&log, "B")));
        assert_eq!(s.content().map(|c| c.text).as_deref(), Some("2 gelöscht"));
    }
}
