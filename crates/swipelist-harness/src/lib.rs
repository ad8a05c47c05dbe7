#![forbid(unsafe_code)]

//! Test harness for swipelist.
//!
//! - [`SimHost`]: an in-memory [`ListHost`](swipelist_runtime::ListHost) with
//!   a virtual clock, row layout, popup model and call log.
//! - [`Simulation`]: drives a [`SwipeList`](swipelist_runtime::SwipeList)
//!   over a `SimHost`, stepping animations frame by frame and firing delayed
//!   callbacks when they come due.
//! - [`UndoProbe`]: undoables that record what happened to them.
//!
//! Everything is deterministic: time only moves when the simulation is
//! advanced.

pub mod host;
pub mod probe;
pub mod simulation;

pub use host::{HostCall, ItemId, ListKind, SharedItems, SimHost, SimItem, SimView};
pub use probe::{UndoEvent, UndoProbe};
pub use simulation::{FRAME, Simulation, SimulationBuilder};
