//! # weekplan-placement
//!
//! Strategies that find where an event fits in a [`TimeGrid`].
//!
//! Finding and booking are separate steps:
//!
//! - [`PlacementStrategy::find_slot`] reads the grid and returns a start
//!   index, or `None` when nothing fits before the deadline.
//! - [`place`] runs a strategy and commits the result with
//!   [`TimeGrid::occupy_range`] under one exclusive borrow.
//!
//! # Invariants
//!
//! - A returned slot covers only free blocks
//! - A returned slot ends on or before the last block of `deadline_day`
//! - Strategies never mutate the grid and are deterministic
//! - Only `duration_blocks` and `deadline_day` influence the result
//!
//! # Sharing a grid
//!
//! The grid does no locking of its own. Callers that share one across threads
//! must hold a lock around the find-and-commit pair, e.g. by keeping the grid
//! in a `Mutex` and calling [`place`] while the guard is held.

mod error;
mod place;
mod strategy;

pub use error::PlacementError;
pub use place::{place, Placement};
pub use strategy::{EarliestDayFit, GlobalFirstFit, PlacementStrategy, StrategyKind};

pub use weekplan_events::Event;
pub use weekplan_grid::TimeGrid;
