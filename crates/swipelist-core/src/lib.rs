#![forbid(unsafe_code)]

//! Core: pointer events, swipe direction, velocity, and gesture recognition.
//!
//! # Role in swipelist
//! `swipelist-core` is the input layer. It owns the normalized pointer event
//! type, the swipe direction policy, velocity estimation, and the swipe
//! gesture recognizer that decides whether a released drag dismisses a row.
//!
//! # How it fits in the system
//! The runtime (`swipelist-runtime`) feeds host pointer events through
//! [`gesture::SwipeTracker`] and turns its decisions into animations, batched
//! dismissals, and undo bookkeeping. Nothing here knows about the host.

pub mod animation;
pub mod direction;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod velocity;

pub use direction::{LayoutDirection, SwipeDirection};
pub use event::{PointerEvent, PointerKind};
pub use gesture::{Decision, GestureConfig, GestureState, SwipeSurface, SwipeTracker};
