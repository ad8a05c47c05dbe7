#![forbid(unsafe_code)]

//! swipelist runtime
//!
//! This crate turns a host list into a swipe-to-dismiss list with reversible
//! deletes.
//!
//! # Key Components
//!
//! - [`SwipeList`] - The engine: pointer input, dismissals, undo popup
//! - [`ListHost`] - Capabilities the engine needs from the list
//! - [`DismissBarrier`] - Serializes concurrent dismissals into one batch
//! - [`UndoStack`] - Pending deletions under one [`UndoStyle`]
//! - [`AutoHideTimer`] - Generation-counted popup auto-hide
//! - [`SwipeListConfig`] - Every tunable, loadable from TOML/JSON
//!
//! # Role in swipelist
//! `swipelist-runtime` is the orchestrator. It consumes pointer events and
//! gesture decisions from `swipelist-core`, drives row animations through the
//! host, and owns the undo workflow.
//!
//! # Quick start
//!
//! ```rust,ignore
//! let mut list = SwipeList::new(host, SwipeListConfig::default());
//! list.set_dismiss_callback(move |position| {
//!     let item = items.borrow_mut().remove(position);
//!     let items = Rc::clone(&items);
//!     Some(UndoAction::new(move || items.borrow_mut().insert(position, item)).boxed())
//! });
//! list.enable_swipe()?;
//!
//! // From the host's event loop:
//! list.handle_pointer(event);
//! list.on_animation_frame(id, value);
//! list.on_animation_end(id);
//! list.on_hide_timer(token);
//! ```

pub mod adapters;
pub mod animator;
pub mod auto_hide;
pub mod barrier;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod undo;

pub use animator::{AnimationId, DismissAnimator};
pub use auto_hide::{AutoHideTimer, HideToken};
pub use barrier::{DismissBarrier, PendingDismiss};
pub use config::{ConfigError, SwipeListConfig};
pub use engine::{DismissCallback, ShouldSwipeCallback, SwipeList};
pub use error::{Result, SwipeListError};
pub use host::{
    AnimationDriver, DelayedScheduler, ListHost, RowGeometry, RowVisuals, SwipeTargetId,
    TouchPassthrough, UndoPopup,
};
pub use undo::{PopupContent, PopupUpdate, UndoAction, UndoLabels, UndoStack, UndoStyle, Undoable};
