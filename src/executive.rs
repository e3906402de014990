//! # Overload Executive
//!
//! The control core. Once per cycle the caller hands the executive a load
//! sample; the executive advances its cycle counter, updates the overload
//! debt, derives the system state, re-asserts task activation, and returns
//! a copy-out report for whatever sink the caller drives.
//!
//! ## Cycle Algorithm
//!
//! `evaluate_cycle` executes these steps in exactly this order:
//!
//! 1. Validate the sample (finite, non-negative). Rejection mutates nothing.
//! 2. `cycle += 1`.
//! 3. `overloaded = load > overload_threshold` (strict greater-than).
//! 4. Step the debt counter: +1 overloaded, -1 calm, floored at zero.
//! 5. Classify `SystemState` from `(overloaded, debt)`.
//! 6. Apply the activation policy for that state. The policy sees only the
//!    state and the priorities, never the raw load.
//! 7. Snapshot the roster into a [`CycleReport`].
//!
//! A cycle is atomic: there is no suspension point inside `evaluate_cycle`
//! and no I/O. The driving clock, whether a timer tick or a batch loop,
//! belongs to the caller.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{CRITICAL_PRIORITY, OVERLOAD_THRESHOLD};
use crate::error::Error;
use crate::policy::{self, SystemState};
use crate::task::{TaskStatus, TaskTable};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Executive tuning, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct ExecutiveConfig {
    /// Tasks with priority at or below this cutoff are never shed.
    pub critical_priority: u8,
    /// Load above this fraction of nominal capacity counts as overload.
    pub overload_threshold: f64,
}

impl Default for ExecutiveConfig {
    fn default() -> Self {
        Self {
            critical_priority: CRITICAL_PRIORITY,
            overload_threshold: OVERLOAD_THRESHOLD,
        }
    }
}

// ---------------------------------------------------------------------------
// Cycle report
// ---------------------------------------------------------------------------

/// Read-only snapshot of one evaluated cycle.
///
/// Owns all its data (copy-out semantics): a sink can hold, reorder, or
/// serialize the report without aliasing executive state. Tasks are listed
/// in priority order, most critical first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub load: f64,
    pub state: SystemState,
    pub tasks: Vec<TaskStatus>,
}

// ---------------------------------------------------------------------------
// Executive
// ---------------------------------------------------------------------------

/// Fixed-priority overload-shedding executive.
///
/// Holds the immutable task roster plus two words of control state: the
/// monotonic cycle counter and the overload debt counter. The system state
/// is derived fresh each cycle and never stored.
#[derive(Debug)]
pub struct Executive {
    config: ExecutiveConfig,
    table: TaskTable,
    cycle: u64,
    overload_count: u32,
}

impl Executive {
    /// Build an executive over the given `(name, priority)` roster.
    /// All tasks start active; the initial state reads as stable.
    pub fn new(config: ExecutiveConfig, roster: &[(&str, u8)]) -> Result<Self, Error> {
        Ok(Self {
            config,
            table: TaskTable::from_roster(roster)?,
            cycle: 0,
            overload_count: 0,
        })
    }

    /// Evaluate one control cycle against a load sample.
    ///
    /// `load_sample` is a dimensionless fraction of nominal capacity
    /// (1.0 = 100%). Values above the threshold are accepted as-is and
    /// simply count as overload; there is no upper bound. NaN, infinite,
    /// and negative samples are rejected with
    /// [`Error::InvalidLoadSample`] before any state changes.
    pub fn evaluate_cycle(&mut self, load_sample: f64) -> Result<CycleReport, Error> {
        if !load_sample.is_finite() || load_sample < 0.0 {
            return Err(Error::InvalidLoadSample(load_sample));
        }

        self.cycle += 1;
        let overloaded = load_sample > self.config.overload_threshold;
        self.overload_count = policy::step_counter(self.overload_count, overloaded);
        let state = policy::classify(overloaded, self.overload_count);

        match state {
            SystemState::Overload => {
                warn!(
                    cycle = self.cycle,
                    load = load_sample,
                    debt = self.overload_count,
                    "executive overflow: shedding non-critical tasks"
                );
            }
            SystemState::Cooldown => {
                debug!(
                    cycle = self.cycle,
                    debt = self.overload_count,
                    "cooling down, holding degraded task set"
                );
            }
            SystemState::Stable => {
                let suspended = self.table.iter().filter(|t| !t.is_active()).count();
                if suspended > 0 {
                    info!(
                        cycle = self.cycle,
                        resumed = suspended,
                        "overload debt drained, resuming suspended tasks"
                    );
                }
            }
        }

        policy::apply_activation(self.table.tasks_mut(), state, self.config.critical_priority);

        Ok(CycleReport {
            cycle: self.cycle,
            load: load_sample,
            state,
            tasks: self.table.snapshot_by_priority(),
        })
    }

    /// Cycles evaluated so far.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Current overload debt.
    pub fn overload_count(&self) -> u32 {
        self.overload_count
    }

    /// The task roster.
    pub fn tasks(&self) -> &TaskTable {
        &self.table
    }

    /// Executive tuning.
    pub fn config(&self) -> &ExecutiveConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
