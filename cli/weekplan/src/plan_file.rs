//! Plan file parsing.
//!
//! A plan file is TOML with an optional `[grid]` table, `[[busy]]` ranges
//! that are occupied before any placement, and `[[events]]` placed in file
//! order.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use weekplan_events::Event;
use weekplan_grid::{GridShape, TimeGrid};

use crate::config::Config;
use crate::error::{CliError, PlanError};

/// A pre-occupied range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BusyRange {
    /// `start = 12, duration = 4`
    Index { start: usize, duration: usize },

    /// `day = 1, block = 4, duration = 4`
    DayBlock {
        day: usize,
        block: usize,
        duration: usize,
    },
}

impl BusyRange {
    /// Global start index and duration within `shape`.
    ///
    /// `None` if a `(day, block)` start lies outside the shape. An index
    /// start is passed through; the grid clips it when occupying.
    pub fn resolve(&self, shape: GridShape) -> Option<(usize, usize)> {
        match *self {
            Self::Index { start, duration } => Some((start, duration)),
            Self::DayBlock {
                day,
                block,
                duration,
            } => shape.checked_index(day, block).map(|start| (start, duration)),
        }
    }

    /// Checks a `(day, block)` start against `shape`.
    fn check(&self, index: usize, shape: GridShape) -> Result<(), PlanError> {
        let Self::DayBlock { day, block, .. } = *self else {
            return Ok(());
        };
        if day >= shape.days_per_week() {
            return Err(PlanError::BusyDayOutOfRange {
                index,
                day,
                days_per_week: shape.days_per_week(),
            });
        }
        if block >= shape.blocks_per_day() {
            return Err(PlanError::BusyBlockOutOfRange {
                index,
                block,
                blocks_per_day: shape.blocks_per_day(),
            });
        }
        Ok(())
    }
}

/// A parsed plan file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub grid: Option<GridShape>,

    #[serde(default)]
    pub busy: Vec<BusyRange>,

    #[serde(default)]
    pub events: Vec<Event>,
}

impl PlanFile {
    pub fn from_toml_str(contents: &str) -> Result<Self, CliError> {
        toml::from_str(contents).map_err(|e| CliError::InvalidPlan(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan file: {}", path.display()))?;
        Ok(Self::from_toml_str(&contents)?)
    }

    /// The plan's own shape, falling back to the configured one.
    pub fn shape(&self, config: &Config) -> Result<GridShape, CliError> {
        match self.grid {
            Some(shape) => Ok(shape),
            None => Ok(config.shape()?),
        }
    }

    /// Every invalid busy range, then every invalid event, in file order.
    pub fn errors(&self, shape: GridShape) -> Vec<PlanError> {
        let busy = self
            .busy
            .iter()
            .enumerate()
            .filter_map(|(index, range)| range.check(index, shape).err());
        let events = self
            .events
            .iter()
            .filter_map(|event| event.validate(shape.days_per_week()).err())
            .map(PlanError::from);
        busy.chain(events).collect()
    }

    /// Fails on the first invalid entry.
    pub fn validate(&self, shape: GridShape) -> Result<(), CliError> {
        match self.errors(shape).into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// A grid of `shape` with every busy range occupied.
    ///
    /// Busy ranges reaching past the end of the week are clipped. Ranges that
    /// fail [`PlanFile::validate`] are skipped.
    pub fn initial_grid(&self, shape: GridShape) -> TimeGrid {
        let mut grid = TimeGrid::new(shape);
        for (start, duration) in self.busy.iter().filter_map(|r| r.resolve(shape)) {
            grid.occupy_range(start, duration);
        }
        grid
    }
}
