//! Find-and-commit helper.

use serde::Serialize;
use tracing::debug;
use weekplan_events::Event;
use weekplan_grid::TimeGrid;

use crate::PlacementStrategy;

/// A committed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Global index of the first block.
    pub start: usize,

    /// Day of the first block.
    pub day: usize,

    /// Block within `day` of the first block.
    pub block_in_day: usize,

    pub duration_blocks: usize,
}

impl Placement {
    /// One past the last occupied block.
    pub fn end(&self) -> usize {
        self.start + self.duration_blocks
    }
}

/// Finds a slot for `event` and marks it occupied.
///
/// Returns `None`, leaving the grid untouched, if the strategy finds nothing.
pub fn place(
    grid: &mut TimeGrid,
    event: &Event,
    strategy: &dyn PlacementStrategy,
) -> Option<Placement> {
    let Some(start) = strategy.find_slot(grid, event) else {
        debug!(
            event = %event.name,
            strategy = strategy.name(),
            duration_blocks = event.duration_blocks,
            deadline_day = event.deadline_day,
            "No feasible slot"
        );
        return None;
    };

    grid.occupy_range(start, event.duration_blocks);
    let (day, block_in_day) = grid.to_day_block(start);

    debug!(
        event = %event.name,
        strategy = strategy.name(),
        start,
        day,
        block_in_day,
        "Placed event"
    );

    Some(Placement {
        start,
        day,
        block_in_day,
        duration_blocks: event.duration_blocks,
    })
}
