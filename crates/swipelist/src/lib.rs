#![forbid(unsafe_code)]

//! swipelist public facade crate.
//!
//! This crate provides the stable surface area for hosts embedding a
//! swipe-to-dismiss list. It re-exports the common types from the internal
//! crates and offers a prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use swipelist_core::animation::{DEFAULT_ANIMATION_TIME, Tween};
pub use swipelist_core::direction::{LayoutDirection, SwipeDirection};
pub use swipelist_core::event::{PointerEvent, PointerKind};
pub use swipelist_core::geometry::Rect;
pub use swipelist_core::gesture::{Decision, GestureConfig, GestureState};

// --- Runtime re-exports ----------------------------------------------------

pub use swipelist_runtime::adapters::{ChildSlot, HeaderedList, RecyclerList};
pub use swipelist_runtime::auto_hide::DEFAULT_UNDO_HIDE_DELAY;
pub use swipelist_runtime::{
    AnimationDriver, AnimationId, ConfigError, DelayedScheduler, HideToken, ListHost,
    PopupContent, RowGeometry, RowVisuals, SwipeList, SwipeListConfig, SwipeListError,
    SwipeTargetId, TouchPassthrough, UndoAction, UndoLabels, UndoPopup, UndoStyle, Undoable,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for swipelist hosts.
#[derive(Debug)]
pub enum Error {
    /// The engine rejected an operation.
    List(SwipeListError),
    /// Configuration could not be loaded or was invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::List(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<SwipeListError> for Error {
    fn from(err: SwipeListError) -> Self {
        Self::List(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for swipelist hosts.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, ListHost, PointerEvent, PointerKind, Result, SwipeDirection, SwipeList,
        SwipeListConfig, UndoAction, UndoStyle, Undoable,
    };

    pub use crate::{core, runtime};
}

pub use swipelist_core as core;
pub use swipelist_runtime as runtime;
