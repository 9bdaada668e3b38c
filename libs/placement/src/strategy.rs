//! Slot-finding strategies.

use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use weekplan_events::Event;
use weekplan_grid::TimeGrid;

use crate::PlacementError;

/// Finds a start index for one event in the grid as it currently stands.
pub trait PlacementStrategy {
    /// Stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Returns the first feasible start index in this strategy's scan order,
    /// or `None` if the event cannot finish by its deadline.
    fn find_slot(&self, grid: &TimeGrid, event: &Event) -> Option<usize>;
}

/// Scans the whole week up to the deadline, block by block.
///
/// A slot may cross a day boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalFirstFit;

/// Scans day by day up to the deadline, keeping each slot inside one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EarliestDayFit;

impl PlacementStrategy for GlobalFirstFit {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn find_slot(&self, grid: &TimeGrid, event: &Event) -> Option<usize> {
        let horizon = horizon(grid, event);
        first_feasible(grid, 0..horizon, event.duration_blocks, horizon)
    }
}

impl PlacementStrategy for EarliestDayFit {
    fn name(&self) -> &'static str {
        "earliest-day"
    }

    fn find_slot(&self, grid: &TimeGrid, event: &Event) -> Option<usize> {
        let shape = grid.shape();
        let horizon = horizon(grid, event);
        (0..=last_day(grid, event)).find_map(|day| {
            first_feasible(grid, shape.day_range(day), event.duration_blocks, horizon)
        })
    }
}

/// Last day the event may occupy, clamped to the grid.
fn last_day(grid: &TimeGrid, event: &Event) -> usize {
    event.deadline_day.min(grid.shape().last_day())
}

/// One past the last block the event may occupy.
fn horizon(grid: &TimeGrid, event: &Event) -> usize {
    grid.shape().day_range(last_day(grid, event)).end
}

/// First start in `window` whose whole run fits inside `window` and passes
/// [`is_feasible`].
fn first_feasible(
    grid: &TimeGrid,
    window: Range<usize>,
    duration: usize,
    horizon: usize,
) -> Option<usize> {
    if duration == 0 || duration > window.len() {
        return None;
    }
    (window.start..=window.end - duration).find(|&start| is_feasible(grid, start, duration, horizon))
}

/// All of `[start, start + duration)` is free and ends by `horizon`.
fn is_feasible(grid: &TimeGrid, start: usize, duration: usize, horizon: usize) -> bool {
    let Some(end) = start.checked_add(duration) else {
        return false;
    };
    end <= horizon && (start..end).all(|i| grid.cell(i).is_some_and(|c| c.is_free()))
}

// =============================================================================
// Selection by name
// =============================================================================

static GLOBAL_FIRST_FIT: GlobalFirstFit = GlobalFirstFit;
static EARLIEST_DAY_FIT: EarliestDayFit = EarliestDayFit;

/// Named strategy selector for configuration and command-line use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// [`GlobalFirstFit`].
    #[default]
    FirstFit,
    /// [`EarliestDayFit`].
    EarliestDay,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::FirstFit, StrategyKind::EarliestDay];

    /// The strategy implementation for this kind.
    pub fn strategy(&self) -> &'static dyn PlacementStrategy {
        match self {
            Self::FirstFit => &GLOBAL_FIRST_FIT,
            Self::EarliestDay => &EARLIEST_DAY_FIT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.strategy().name()
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-fit" | "global-first-fit" | "first_fit" => Ok(Self::FirstFit),
            "earliest-day" | "earliest-day-fit" | "earliest_day_fit" => Ok(Self::EarliestDay),
            other => Err(PlacementError::UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekplan_grid::GridShape;

    fn grid() -> TimeGrid {
        TimeGrid::new(GridShape::new(7, 8).unwrap())
    }

    #[test]
    fn test_is_feasible_respects_horizon() {
        let grid = grid();
        assert!(is_feasible(&grid, 6, 2, 8));
        assert!(!is_feasible(&grid, 7, 2, 8));
    }

    #[test]
    fn test_is_feasible_rejects_occupied() {
        let mut grid = grid();
        grid.occupy(3);
        assert!(!is_feasible(&grid, 2, 2, 56));
        assert!(is_feasible(&grid, 4, 2, 56));
    }

    #[test]
    fn test_is_feasible_outside_grid() {
        let grid = grid();
        assert!(!is_feasible(&grid, 55, 2, 100));
        assert!(!is_feasible(&grid, usize::MAX, 2, usize::MAX));
    }

    #[test]
    fn test_first_feasible_window_too_small() {
        let grid = grid();
        assert_eq!(first_feasible(&grid, 0..8, 9, 56), None);
        assert_eq!(first_feasible(&grid, 0..8, 0, 56), None);
        assert_eq!(first_feasible(&grid, 0..8, 8, 56), Some(0));
    }

    #[test]
    fn test_deadline_past_grid_is_clamped() {
        let grid = grid();
        let event = Event::new("Far off", 2, 30);
        assert_eq!(horizon(&grid, &event), 56);
        assert_eq!(GlobalFirstFit.find_slot(&grid, &event), Some(0));
        assert_eq!(EarliestDayFit.find_slot(&grid, &event), Some(0));
    }

    #[test]
    fn test_zero_duration_never_fits() {
        let grid = grid();
        let event = Event::new("Empty", 0, 6);
        assert_eq!(GlobalFirstFit.find_slot(&grid, &event), None);
        assert_eq!(EarliestDayFit.find_slot(&grid, &event), None);
    }

    #[test]
    fn test_strategy_kind_parse() {
        assert_eq!("first-fit".parse::<StrategyKind>(), Ok(StrategyKind::FirstFit));
        assert_eq!(
            "Earliest-Day-Fit".parse::<StrategyKind>(),
            Ok(StrategyKind::EarliestDay)
        );
        assert_eq!(
            "random".parse::<StrategyKind>(),
            Err(PlacementError::UnknownStrategy("random".to_string()))
        );
    }

    #[test]
    fn test_strategy_kind_names_roundtrip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
            assert_eq!(kind.strategy().name(), kind.as_str());
        }
    }

    #[test]
    fn test_strategy_kind_serde() {
        let json = serde_json::to_string(&StrategyKind::EarliestDay).unwrap();
        assert_eq!(json, r#""earliest-day""#);
        let parsed: StrategyKind = serde_json::from_str(r#""first-fit""#).unwrap();
        assert_eq!(parsed, StrategyKind::FirstFit);
    }
}
