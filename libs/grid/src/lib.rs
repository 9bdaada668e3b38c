//! # weekplan-grid
//!
//! Weekly occupancy grid for the weekplan scheduler.
//!
//! ## Design Principles
//!
//! - The grid is a plain value owned by its caller; there is no global state
//! - Its length is fixed by a [`GridShape`] for the grid's whole lifetime
//! - Cells are either free or occupied; nothing else is stored per block
//! - The grid knows nothing about events or placement strategies
//!
//! ## Indexing
//!
//! Every block has a global index `i` in `[0, total_blocks)`:
//!
//! ```text
//! i   = day * blocks_per_day + block_in_day
//! day = i / blocks_per_day,  block_in_day = i % blocks_per_day
//! ```
//!
//! Direct index access (`is_free`, `occupy`) panics out of range. Range
//! mutation (`occupy_range`, `free_range`) intersects the requested range with
//! the grid first and silently skips whatever falls outside.

mod error;
mod grid;
mod shape;

pub use error::GridError;
pub use grid::{Cell, TimeGrid};
pub use shape::GridShape;
