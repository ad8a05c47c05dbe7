#![forbid(unsafe_code)]

//! Error types surfaced to the host.
//!
//! Only precondition violations reach the caller. Animation and timer races
//! (a second dismiss on an animating row, a stale auto-hide callback) are
//! part of normal operation and are resolved internally.

use thiserror::Error;

/// Errors returned by [`SwipeList`](crate::SwipeList) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwipeListError {
    /// A dismissal was requested before a dismiss callback was registered.
    #[error("a dismiss callback must be set before calling `{operation}`")]
    MissingDismissCallback {
        /// The rejected operation.
        operation: &'static str,
    },

    /// `delete` was called with a position outside `[0, len)`.
    #[error("tried to delete item {position}, but the list has {len} items")]
    PositionOutOfRange {
        /// Requested position.
        position: isize,
        /// Number of rows in the list.
        len: usize,
    },

    /// The row at a valid position has no view to animate (scrolled away).
    #[error("item {position} is not laid out and cannot be animated")]
    RowNotLaidOut {
        /// Requested position.
        position: usize,
    },
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, SwipeListError>;
