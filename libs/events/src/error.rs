//! Error types for event validation.

use thiserror::Error;

/// Errors that can occur when validating an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The event has no name.
    #[error("event name cannot be empty")]
    EmptyName,

    /// The event needs at least one block.
    #[error("event '{name}' must span at least one block")]
    ZeroDuration { name: String },

    /// The deadline falls after the last day of the week.
    #[error("event '{name}' deadline day {deadline_day} is outside a {days_per_week}-day week")]
    DeadlineOutOfRange {
        name: String,
        deadline_day: usize,
        days_per_week: usize,
    },
}
