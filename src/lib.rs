//! # loadshed — priority-scheduled overload-shedding executive
//!
//! A fixed-priority task executive that keeps the most critical work running
//! under fluctuating load, sheds non-critical work under pressure, and
//! restores it once pressure has drained, without oscillating.
//!
//! The design is a homage to the Apollo Guidance Computer's executive, whose
//! priority-scheduled restart logic famously shed low-priority jobs during
//! the 1201/1202 program alarms of the Apollo 11 landing.
//!
//! ## Overview
//!
//! Each control cycle the executive consumes one dimensionless load sample
//! (1.0 = 100% of nominal capacity), updates a hysteresis counter, derives
//! the system state, and re-asserts the activation of every task in its
//! fixed roster:
//!
//! - **STABLE**: no residual pressure, every task runs.
//! - **OVERLOAD**: the sample exceeded the threshold; only critical tasks
//!   (priority at or below the critical cutoff) stay active.
//! - **COOLDOWN**: the sample is back in range but accumulated overload
//!   debt has not drained yet; activation is frozen as-is.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │         Driving clock (timer tick / batch loop)        │
//! ├──────────────┬─────────────────────┬───────────────────┤
//! │  Load Source │     Executive       │ Presentation Sink │
//! │  load.rs     │     executive.rs    │ (caller-supplied) │
//! │  ─ sensor sim│     ─ evaluate_cycle│  ─ console / JSON │
//! │  ─ scripted  │     ─ cycle report  │                   │
//! ├──────────────┴─────────────────────┴───────────────────┤
//! │       State machine + activation policy (policy.rs)    │
//! │       STABLE · OVERLOAD · COOLDOWN                     │
//! ├────────────────────────────────────────────────────────┤
//! │       Task model + indexed roster (task.rs)            │
//! │       Task · TaskTable · priority permutation          │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Control flow per cycle: Load Source → Executive → Presentation Sink,
//! driven by an external clock. The executive itself never sleeps, waits,
//! or performs I/O; one call to [`executive::Executive::evaluate_cycle`]
//! is one atomic cycle.
//!
//! ## Hysteresis
//!
//! A controller that resumed tasks the instant load dropped below the
//! threshold would flap under noisy load near 1.0x. Instead the executive
//! counts overload "debt": +1 per overloaded cycle, -1 (floored at zero)
//! per calm cycle. Resume is granted only when the debt has fully drained,
//! which damps oscillation with O(1) state.
//!
//! ## Concurrency Model
//!
//! Single-threaded, synchronous, cooperative. The executive exposes no
//! internal locking; a caller that shares it across threads is responsible
//! for mutual exclusion. Cancellation is simply "stop driving cycles".

pub mod config;
pub mod error;
pub mod task;
pub mod policy;
pub mod executive;
pub mod load;
