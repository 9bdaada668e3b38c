//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use weekplan_events::EventError;
use weekplan_grid::GridError;
use weekplan_placement::PlacementError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid plan file: {0}")]
    InvalidPlan(String),

    #[error("invalid plan entry: {0}")]
    InvalidEntry(#[from] PlanError),

    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),

    #[error(transparent)]
    UnknownStrategy(#[from] PlacementError),
}

/// A single invalid entry in a plan file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error(transparent)]
    Event(#[from] EventError),

    #[error("busy range #{index}: day {day} is outside a {days_per_week}-day week")]
    BusyDayOutOfRange {
        index: usize,
        day: usize,
        days_per_week: usize,
    },

    #[error("busy range #{index}: block {block} is outside a {blocks_per_day}-block day")]
    BusyBlockOutOfRange {
        index: usize,
        block: usize,
        blocks_per_day: usize,
    },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::UnknownStrategy(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass --strategy first-fit or --strategy earliest-day.".yellow()
                );
            }
            CliError::InvalidEntry(PlanError::Event(EventError::DeadlineOutOfRange { .. })) => {
                eprintln!(
                    "\n{}",
                    "Hint: deadline_day is zero-based; check [grid].days_per_week.".yellow()
                );
            }
            CliError::InvalidEntry(
                PlanError::BusyDayOutOfRange { .. } | PlanError::BusyBlockOutOfRange { .. },
            ) => {
                eprintln!(
                    "\n{}",
                    "Hint: day and block are zero-based; use start = <index> to span days.".yellow()
                );
            }
            CliError::InvalidGrid(err) if err.is_empty_shape() => {
                eprintln!(
                    "\n{}",
                    "Hint: days_per_week and blocks_per_day must both be at least 1.".yellow()
                );
            }
            CliError::InvalidPlan(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `weekplan validate <FILE>` for details.".yellow()
                );
            }
            _ => {}
        }
    }
}
