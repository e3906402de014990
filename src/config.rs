//! # Executive Configuration
//!
//! Compile-time constants governing the executive and the demo harness.
//! All capacities are fixed: the roster is sized at startup and never
//! grows, so nothing here is runtime-mutable.

/// Maximum number of tasks the executive can manage. Bounds the task
/// table; roster construction fails beyond this.
pub const MAX_TASKS: usize = 8;

/// Critical-priority cutoff. Tasks with `priority <= CRITICAL_PRIORITY`
/// are critical and are never shed; everything above it is degradable.
pub const CRITICAL_PRIORITY: u8 = 2;

/// Overload threshold as a fraction of nominal capacity. A load sample
/// strictly greater than this marks the cycle as overloaded.
pub const OVERLOAD_THRESHOLD: f64 = 1.0;

/// Discrete load profile used by the simulated sensor. Emulates radar and
/// guidance contention spikes: values above 1.0x trigger shedding.
pub const LOAD_PROFILE: [f64; 7] = [0.6, 0.8, 1.0, 1.2, 1.5, 1.8, 2.0];

/// Default task roster, `(name, priority)` with lower = more critical.
/// Guidance and radar survive overload; telemetry and camera are shed.
pub const DEFAULT_ROSTER: [(&str, u8); 4] = [
    ("landing_guidance", 1),
    ("radar_tracking", 2),
    ("telemetry", 3),
    ("camera_recording", 4),
];

/// Default number of control cycles the demo driver runs.
pub const DEFAULT_CYCLES: u32 = 15;

/// Default milliseconds between demo cycles. The clock driving the
/// executive lives in the caller; the executive itself never sleeps.
pub const DEFAULT_INTERVAL_MS: u64 = 700;
