//! # loadshed Demo Console
//!
//! Drives the executive through a simulated mission: a load source feeds
//! one sample per tick, the executive sheds or resumes tasks, and a
//! console dashboard (or JSON stream) renders each cycle.
//!
//! | Task               | Priority | Under overload |
//! |--------------------|----------|----------------|
//! | `landing_guidance` | 1        | preserved      |
//! | `radar_tracking`   | 2        | preserved      |
//! | `telemetry`        | 3        | suspended      |
//! | `camera_recording` | 4        | suspended      |
//!
//! Typical runs:
//!
//! ```text
//! loadshed                          # 15 cycles of simulated sensor load
//! loadshed --seed 42 --cycles 30    # reproducible longer run
//! loadshed --load 1.5,1.5,0.5,0.5   # scripted trace, stops when exhausted
//! loadshed --json --interval-ms 0   # machine-readable batch output
//! ```
//!
//! The dashboard blink on suspended rows is purely cosmetic: it toggles on
//! the console's own frame clock and is derived from the activation flag,
//! not tracked by the executive.

use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use loadshed::config::{DEFAULT_CYCLES, DEFAULT_INTERVAL_MS, DEFAULT_ROSTER};
use loadshed::executive::{CycleReport, Executive, ExecutiveConfig};
use loadshed::load::{LoadSource, Script, SensorSim};
use loadshed::policy::SystemState;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "loadshed", version, about = "Priority-scheduled overload-shedding executive demo")]
struct Args {
    /// Number of control cycles to run (0 = run until the source exhausts).
    #[arg(long, default_value_t = DEFAULT_CYCLES)]
    cycles: u32,

    /// Milliseconds between cycles.
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Seed for the simulated sensor, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit one JSON object per cycle instead of the dashboard.
    #[arg(long)]
    json: bool,

    /// Comma-separated load samples to play back instead of the simulator.
    #[arg(long, value_delimiter = ',')]
    load: Option<Vec<f64>>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut source: Box<dyn LoadSource> = match args.load {
        Some(samples) => Box::new(Script::new(samples)),
        None => match args.seed {
            Some(seed) => Box::new(SensorSim::with_seed(seed)),
            None => Box::new(SensorSim::new()),
        },
    };

    let mut exec = Executive::new(ExecutiveConfig::default(), &DEFAULT_ROSTER)?;
    let mut console = Console::new();
    let mut ran = 0u32;

    while args.cycles == 0 || ran < args.cycles {
        let Some(load) = source.next_sample() else {
            break;
        };
        let report = exec.evaluate_cycle(load)?;

        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            console.render(&report);
        }

        ran += 1;
        let more = args.cycles == 0 || ran < args.cycles;
        if more && args.interval_ms > 0 {
            thread::sleep(Duration::from_millis(args.interval_ms));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Console dashboard sink
// ---------------------------------------------------------------------------

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Renders cycle reports as a per-cycle dashboard block. Keeps exactly one
/// piece of state: the blink phase for suspended rows, toggled on every
/// rendered frame.
struct Console {
    blink: bool,
}

impl Console {
    fn new() -> Self {
        Self { blink: false }
    }

    fn render(&mut self, report: &CycleReport) {
        self.blink = !self.blink;

        println!();
        println!(
            "cycle {:>3}  load [{}] {:.2}x  state {}",
            report.cycle,
            load_bar(report.load),
            report.load,
            state_cell(report.state),
        );
        println!("  {:<20} {:>8}  status", "task", "priority");
        for task in &report.tasks {
            let status = if task.active {
                format!("{GREEN}ACTIVE{RESET}")
            } else {
                // Alternate the highlight to draw the eye to shed tasks.
                let color = if self.blink { RED } else { YELLOW };
                format!("{color}SUSPENDED{RESET}")
            };
            println!("  {:<20} {:>8}  {}", task.name, task.priority, status);
        }
    }
}

/// 20-cell bar mapping 0.0..=2.0x; load beyond 2.0x pegs the bar.
fn load_bar(load: f64) -> String {
    const CELLS: usize = 20;
    let filled = ((load.clamp(0.0, 2.0) / 2.0) * CELLS as f64).round() as usize;
    let mut bar = String::with_capacity(CELLS * 3);
    for i in 0..CELLS {
        bar.push(if i < filled { '█' } else { '·' });
    }
    bar
}

fn state_cell(state: SystemState) -> String {
    let color = match state {
        SystemState::Stable => GREEN,
        SystemState::Overload => RED,
        SystemState::Cooldown => YELLOW,
    };
    format!("{color}{}{RESET}", state.label())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_bar_scales_and_pegs() {
        assert_eq!(load_bar(0.0), "····················");
        assert_eq!(load_bar(1.0), "██████████··········");
        assert_eq!(load_bar(2.0), "████████████████████");
        assert_eq!(load_bar(5.0), "████████████████████");
    }

    #[test]
    fn blink_phase_alternates_per_frame() {
        let mut console = Console::new();
        let report = CycleReport {
            cycle: 1,
            load: 1.5,
            state: SystemState::Overload,
            tasks: vec![],
        };
        console.render(&report);
        assert!(console.blink);
        console.render(&report);
        assert!(!console.blink);
    }
}
