//! # Error Types
//!
//! Failures are confined to construction (bad roster) and input
//! validation (bad load sample). Cycle evaluation itself cannot fail on
//! any finite, non-negative load.

use thiserror::Error;

/// Errors reported by the executive.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The load sample was NaN, infinite, or negative. The executive
    /// rejects these before touching any state: the cycle counter does
    /// not advance and no task activation changes.
    #[error("invalid load sample {0}: must be finite and non-negative")]
    InvalidLoadSample(f64),

    /// The roster contained no tasks.
    #[error("task roster is empty")]
    EmptyRoster,

    /// The roster exceeded the fixed task-table capacity.
    #[error("task roster exceeds capacity of {capacity} tasks")]
    RosterFull { capacity: usize },

    /// Two roster entries share a name. Names resolve to table indices
    /// at construction, so they must be unique.
    #[error("duplicate task name {0:?}")]
    DuplicateTask(String),

    /// Priorities start at 1 (lower = more critical); 0 is reserved.
    #[error("task {name:?} has priority 0; priorities start at 1")]
    InvalidPriority { name: String },
}
