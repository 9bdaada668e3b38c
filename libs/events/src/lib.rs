//! # weekplan-events
//!
//! Schedulable event records for the weekplan scheduler.
//!
//! An [`Event`] is a plain record: a duration in blocks, the last day it may
//! occupy, and advisory metadata. Placement strategies only read
//! `duration_blocks` and `deadline_day`; `priority`, `event_type` and
//! `preferred_time` are carried for reporting and are not consulted when
//! choosing a slot.

mod error;
mod types;

pub use error::EventError;
pub use types::*;
