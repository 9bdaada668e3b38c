//! Error types for strategy selection.

use thiserror::Error;

/// Errors that can occur when selecting a strategy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The strategy name is not recognised.
    #[error("unknown placement strategy '{0}' (expected one of: first-fit, earliest-day)")]
    UnknownStrategy(String),
}
