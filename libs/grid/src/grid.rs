//! The weekly occupancy grid.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{GridError, GridShape};

/// State of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Free,
    Occupied,
}

impl Cell {
    /// Returns true if the block is free.
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Returns true if the block is occupied.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied)
    }
}

impl From<bool> for Cell {
    /// `true` means occupied.
    fn from(occupied: bool) -> Self {
        if occupied {
            Self::Occupied
        } else {
            Self::Free
        }
    }
}

/// A week of blocks, each free or occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    shape: GridShape,
    cells: Vec<Cell>,
}

impl TimeGrid {
    /// Creates an all-free grid.
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            cells: vec![Cell::Free; shape.total_blocks()],
        }
    }

    /// Creates a grid from an existing occupancy vector.
    pub fn from_occupancy<I>(shape: GridShape, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        let cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        if cells.len() != shape.total_blocks() {
            return Err(GridError::LengthMismatch {
                expected: shape.total_blocks(),
                actual: cells.len(),
            });
        }
        Ok(Self { shape, cells })
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of blocks in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a shape has at least one block.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// State of block `index`, or `None` outside the grid.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns true if block `index` is free.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the grid.
    pub fn is_free(&self, index: usize) -> bool {
        self.checked(index).is_free()
    }

    /// Marks block `index` occupied. Occupying an occupied block is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the grid.
    pub fn occupy(&mut self, index: usize) {
        self.checked(index);
        self.cells[index] = Cell::Occupied;
    }

    /// Marks `[start, start + duration)` occupied, skipping blocks outside the grid.
    pub fn occupy_range(&mut self, start: usize, duration: usize) {
        self.fill(start, duration, Cell::Occupied);
    }

    /// Marks `[start, start + duration)` free, skipping blocks outside the grid.
    pub fn free_range(&mut self, start: usize, duration: usize) {
        self.fill(start, duration, Cell::Free);
    }

    /// See [`GridShape::to_index`].
    pub fn to_index(&self, day: usize, block_in_day: usize) -> usize {
        self.shape.to_index(day, block_in_day)
    }

    /// See [`GridShape::to_day_block`].
    pub fn to_day_block(&self, index: usize) -> (usize, usize) {
        self.shape.to_day_block(index)
    }

    /// Indices of all occupied blocks, ascending.
    ///
    /// The returned vector is a snapshot and does not track later mutations.
    pub fn occupied_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_occupied())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    pub fn free_count(&self) -> usize {
        self.len() - self.occupied_count()
    }

    fn checked(&self, index: usize) -> Cell {
        match self.cells.get(index) {
            Some(cell) => *cell,
            None => panic!(
                "block index {index} out of range for grid of {} blocks",
                self.cells.len()
            ),
        }
    }

    fn fill(&mut self, start: usize, duration: usize, value: Cell) {
        let range = self.clamp(start, duration);
        self.cells[range].fill(value);
    }

    /// Intersection of `[start, start + duration)` with `[0, len)`.
    fn clamp(&self, start: usize, duration: usize) -> Range<usize> {
        let len = self.cells.len();
        let end = start.saturating_add(duration).min(len);
        start.min(end)..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shape() -> GridShape {
        GridShape::new(7, 8).unwrap()
    }

    #[test]
    fn test_new_grid_is_free() {
        let grid = TimeGrid::new(shape());
        assert_eq!(grid.len(), 56);
        assert_eq!(grid.free_count(), 56);
        assert!(grid.occupied_indices().is_empty());
    }

    #[test]
    fn test_from_occupancy() {
        let mut cells = vec![false; 56];
        cells[3] = true;
        let grid = TimeGrid::from_occupancy(shape(), cells).unwrap();
        assert!(!grid.is_free(3));
        assert_eq!(grid.occupied_indices(), vec![3]);
    }

    #[test]
    fn test_from_occupancy_length_mismatch() {
        let result = TimeGrid::from_occupancy(shape(), vec![false; 55]);
        assert_eq!(
            result.unwrap_err(),
            GridError::LengthMismatch {
                expected: 56,
                actual: 55
            }
        );
    }

    #[test]
    fn test_occupy_is_idempotent() {
        let mut grid = TimeGrid::new(shape());
        grid.occupy(10);
        grid.occupy(10);
        assert_eq!(grid.occupied_indices(), vec![10]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_is_free_out_of_range_panics() {
        let grid = TimeGrid::new(shape());
        grid.is_free(56);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_occupy_out_of_range_panics() {
        let mut grid = TimeGrid::new(shape());
        grid.occupy(100);
    }

    #[test]
    fn test_cell_out_of_range_is_none() {
        let grid = TimeGrid::new(shape());
        assert_eq!(grid.cell(55), Some(Cell::Free));
        assert_eq!(grid.cell(56), None);
    }

    #[test]
    fn test_occupy_range_clamps_past_end() {
        let mut grid = TimeGrid::new(shape());
        grid.occupy_range(54, 10);
        assert_eq!(grid.occupied_indices(), vec![54, 55]);

        grid.occupy_range(200, 5);
        assert_eq!(grid.occupied_count(), 2);

        grid.occupy_range(usize::MAX - 1, 5);
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_free_range_clamps_past_end() {
        let mut grid = TimeGrid::from_occupancy(shape(), vec![true; 56]).unwrap();
        grid.free_range(50, 100);
        assert_eq!(grid.free_count(), 6);
        assert!(grid.is_free(50));
        assert!(!grid.is_free(49));
    }

    #[test]
    fn test_occupied_indices_is_snapshot() {
        let mut grid = TimeGrid::new(shape());
        grid.occupy_range(0, 2);
        let snapshot = grid.occupied_indices();
        grid.occupy_range(4, 2);
        assert_eq!(snapshot, vec![0, 1]);
        assert_eq!(grid.occupied_indices(), vec![0, 1, 4, 5]);
    }

    #[test]
    fn test_grid_conversions_delegate_to_shape() {
        let grid = TimeGrid::new(shape());
        assert_eq!(grid.to_index(2, 3), 19);
        assert_eq!(grid.to_day_block(19), (2, 3));
    }

    fn occupancy() -> impl Strategy<Value = Vec<bool>> {
        proptest::collection::vec(any::<bool>(), 56)
    }

    proptest! {
        #[test]
        fn prop_occupy_range_touches_only_range(
            cells in occupancy(),
            start in 0usize..70,
            duration in 0usize..30,
        ) {
            let before = TimeGrid::from_occupancy(shape(), cells).unwrap();
            let mut after = before.clone();
            after.occupy_range(start, duration);

            for i in 0..after.len() {
                if i >= start && i < start + duration {
                    prop_assert!(!after.is_free(i));
                } else {
                    prop_assert_eq!(after.cell(i), before.cell(i));
                }
            }
        }

        #[test]
        fn prop_occupy_then_free_restores_free_range(
            cells in occupancy(),
            start in 0usize..70,
            duration in 0usize..30,
        ) {
            let mut cleared = TimeGrid::from_occupancy(shape(), cells).unwrap();
            cleared.free_range(start, duration);

            let mut grid = cleared.clone();
            grid.occupy_range(start, duration);
            grid.free_range(start, duration);
            prop_assert_eq!(grid, cleared);
        }

        #[test]
        fn prop_free_range_touches_only_range(
            cells in occupancy(),
            start in 0usize..70,
            duration in 0usize..30,
        ) {
            let before = TimeGrid::from_occupancy(shape(), cells).unwrap();
            let mut after = before.clone();
            after.free_range(start, duration);

            for i in 0..after.len() {
                if i >= start && i < start + duration {
                    prop_assert!(after.is_free(i));
                } else {
                    prop_assert_eq!(after.cell(i), before.cell(i));
                }
            }
        }
    }
}
