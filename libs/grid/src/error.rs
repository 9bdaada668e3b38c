//! Error types for grid construction.

use thiserror::Error;

/// Errors that can occur when building a grid or its shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// One of the dimensions is zero.
    #[error("grid shape must be non-empty: {days_per_week} days x {blocks_per_day} blocks")]
    EmptyShape {
        days_per_week: usize,
        blocks_per_day: usize,
    },

    /// The block count overflows or exceeds [`GridShape::MAX_TOTAL_BLOCKS`].
    ///
    /// [`GridShape::MAX_TOTAL_BLOCKS`]: crate::GridShape::MAX_TOTAL_BLOCKS
    #[error("grid shape too large: {days_per_week} days x {blocks_per_day} blocks exceeds {max} blocks")]
    TooLarge {
        days_per_week: usize,
        blocks_per_day: usize,
        max: usize,
    },

    /// The occupancy vector does not match the shape's block count.
    #[error("occupancy length mismatch: expected {expected} blocks, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl GridError {
    /// Returns true if this error was caused by a zero dimension.
    pub fn is_empty_shape(&self) -> bool {
        matches!(self, GridError::EmptyShape { .. })
    }
}
