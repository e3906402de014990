//! # State Machine & Activation Policy
//!
//! Pure decision logic for the executive: hysteresis counter stepping,
//! system-state classification, and the per-state activation policy. All
//! functions here are free of I/O and side effects beyond the task slice
//! they are handed, which keeps every branch unit-testable in isolation.
//!
//! ## State machine
//!
//! ```text
//!                 load > threshold
//!   ┌──────────┐ ────────────────────► ┌──────────┐
//!   │  STABLE  │                       │ OVERLOAD │ ◄─┐ load > threshold
//!   └──────────┘ ◄──────────────────── └──────────┘ ──┘ (debt keeps rising)
//!        ▲         debt drains to 0          │
//!        │                                   │ load ok, debt > 0
//!        │         debt drains to 0          ▼
//!        └──────────────────────────── ┌──────────┐
//!                                      │ COOLDOWN │ ◄─┐ load ok,
//!                                      └──────────┘ ──┘ debt > 0
//! ```
//!
//! The state is fully determined by `(overloaded, overload_count)` after
//! the counter update; it is derived every cycle, never stored.

use std::fmt;

use serde::Serialize;

use crate::task::Task;

// ---------------------------------------------------------------------------
// System state
// ---------------------------------------------------------------------------

/// Derived condition of the executive for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SystemState {
    /// Load in range and no residual overload debt: all tasks run.
    Stable,
    /// Load exceeded the threshold this cycle: shed degradable tasks.
    Overload,
    /// Load back in range but debt has not drained: hold activation as-is.
    Cooldown,
}

impl SystemState {
    /// Uppercase label as rendered by sinks.
    pub fn label(&self) -> &'static str {
        match self {
            SystemState::Stable => "STABLE",
            SystemState::Overload => "OVERLOAD",
            SystemState::Cooldown => "COOLDOWN",
        }
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Hysteresis counter
// ---------------------------------------------------------------------------

/// Step the overload debt counter for one cycle: +1 when overloaded,
/// -1 when calm, floored at zero.
pub fn step_counter(overload_count: u32, overloaded: bool) -> u32 {
    if overloaded {
        overload_count.saturating_add(1)
    } else {
        overload_count.saturating_sub(1)
    }
}

/// Classify the cycle from the overload flag and the already-stepped
/// counter. `Stable` is only reachable once the debt has fully drained,
/// which is the guard against resume/shed oscillation.
pub fn classify(overloaded: bool, overload_count: u32) -> SystemState {
    if overloaded {
        SystemState::Overload
    } else if overload_count == 0 {
        SystemState::Stable
    } else {
        SystemState::Cooldown
    }
}

// ---------------------------------------------------------------------------
// Activation policy
// ---------------------------------------------------------------------------

/// Apply the cycle's activation policy to the task set.
///
/// - `Overload`: every task's activation is re-derived from its priority
///   (`active = priority <= critical_priority`). Re-derivation rather than
///   toggling makes repeated overload cycles idempotent: an already-shed
///   task stays shed, an already-running critical task stays running.
/// - `Stable`: full resume, every task active.
/// - `Cooldown`: deliberate no-op; the degraded set from the most recent
///   overload cycle is held until the debt drains.
pub fn apply_activation(tasks: &mut [Task], state: SystemState, critical_priority: u8) {
    match state {
        SystemState::Overload => {
            for task in tasks {
                task.set_active(task.is_critical(critical_priority));
            }
        }
        SystemState::Stable => {
            for task in tasks {
                task.set_active(true);
            }
        }
        SystemState::Cooldown => {}
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
