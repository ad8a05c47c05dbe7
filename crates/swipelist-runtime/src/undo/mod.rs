#![forbid(unsafe_code)]

//! Reversible deletions.
//!
//! - [`undoable`]: the host-facing [`Undoable`] trait and the closure-backed
//!   [`UndoAction`].
//! - [`stack`]: [`UndoStack`], the pending deletions under one [`UndoStyle`],
//!   and the popup text contract.
//!
//! # Lifecycle
//!
//! ```text
//!  dismiss callback ──► Some(undoable) ──► UndoStack
//!                                            │
//!                    undo click ─────────────┼──► undo()     (per style)
//!                    auto-hide / teardown ───┴──► discard()  (all)
//! ```

pub mod stack;
pub mod undoable;

pub use stack::{PopupContent, PopupUpdate, UndoLabels, UndoStack, UndoStyle};
pub use undoable::{UndoAction, Undoable};
