//! Grid dimensions and index arithmetic.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::GridError;

/// Dimensions of a weekly grid.
///
/// A shape is always non-empty: both dimensions are at least one, so every
/// conversion below is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShape")]
pub struct GridShape {
    days_per_week: usize,
    blocks_per_day: usize,
}

#[derive(Deserialize)]
struct RawShape {
    days_per_week: usize,
    blocks_per_day: usize,
}

impl TryFrom<RawShape> for GridShape {
    type Error = GridError;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        GridShape::new(raw.days_per_week, raw.blocks_per_day)
    }
}

impl GridShape {
    /// Seven days of half-hour blocks.
    pub const HALF_HOUR_WEEK: Self = Self {
        days_per_week: 7,
        blocks_per_day: 48,
    };

    /// Upper bound on `days_per_week * blocks_per_day`.
    pub const MAX_TOTAL_BLOCKS: usize = 1 << 20;

    /// Creates a new shape, rejecting zero dimensions and oversized weeks.
    pub fn new(days_per_week: usize, blocks_per_day: usize) -> Result<Self, GridError> {
        if days_per_week == 0 || blocks_per_day == 0 {
            return Err(GridError::EmptyShape {
                days_per_week,
                blocks_per_day,
            });
        }
        match days_per_week.checked_mul(blocks_per_day) {
            Some(total) if total <= Self::MAX_TOTAL_BLOCKS => {}
            _ => {
                return Err(GridError::TooLarge {
                    days_per_week,
                    blocks_per_day,
                    max: Self::MAX_TOTAL_BLOCKS,
                })
            }
        }
        Ok(Self {
            days_per_week,
            blocks_per_day,
        })
    }

    #[must_use]
    pub const fn days_per_week(&self) -> usize {
        self.days_per_week
    }

    #[must_use]
    pub const fn blocks_per_day(&self) -> usize {
        self.blocks_per_day
    }

    /// Total number of blocks in the week.
    #[must_use]
    pub const fn total_blocks(&self) -> usize {
        self.days_per_week * self.blocks_per_day
    }

    /// Global index of `(day, block_in_day)`.
    ///
    /// No validation is performed; callers pass in-range values.
    #[must_use]
    pub const fn to_index(&self, day: usize, block_in_day: usize) -> usize {
        day * self.blocks_per_day + block_in_day
    }

    /// Global index of `(day, block_in_day)`, or `None` if either is out of range.
    #[must_use]
    pub const fn checked_index(&self, day: usize, block_in_day: usize) -> Option<usize> {
        if day < self.days_per_week && block_in_day < self.blocks_per_day {
            Some(self.to_index(day, block_in_day))
        } else {
            None
        }
    }

    /// `(day, block_in_day)` of a global index.
    #[must_use]
    pub const fn to_day_block(&self, index: usize) -> (usize, usize) {
        (index / self.blocks_per_day, index % self.blocks_per_day)
    }

    /// Block range `[day * B, (day + 1) * B)` covered by `day`.
    #[must_use]
    pub const fn day_range(&self, day: usize) -> Range<usize> {
        self.to_index(day, 0)..self.to_index(day + 1, 0)
    }

    /// The last valid day index.
    #[must_use]
    pub const fn last_day(&self) -> usize {
        self.days_per_week - 1
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::HALF_HOUR_WEEK
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.days_per_week, self.blocks_per_day)
    }
}
