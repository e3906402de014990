//! # Load Sources
//!
//! The executive's input boundary. A load source supplies one sample per
//! cycle; where the samples come from is deliberately pluggable so the
//! same executive can be driven by a simulated sensor, a scripted trace
//! in tests, or a real measurement feed.
//!
//! Randomness lives only here. The executive itself is deterministic.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::LOAD_PROFILE;

/// One load sample per cycle. `None` means the source is exhausted and
/// the driving loop should stop.
pub trait LoadSource {
    fn next_sample(&mut self) -> Option<f64>;
}

// ---------------------------------------------------------------------------
// Simulated sensor
// ---------------------------------------------------------------------------

/// Simulated sensor: uniform random choice from a discrete load profile,
/// emulating radar and guidance contention spikes. Never exhausts.
pub struct SensorSim {
    profile: Vec<f64>,
    rng: StdRng,
}

impl SensorSim {
    /// Simulator over the default profile with an OS-seeded generator.
    pub fn new() -> Self {
        Self {
            profile: LOAD_PROFILE.to_vec(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded simulator over the default profile, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            profile: LOAD_PROFILE.to_vec(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded simulator over a custom profile. An empty profile exhausts
    /// immediately.
    pub fn from_profile(profile: &[f64], seed: u64) -> Self {
        Self {
            profile: profile.to_vec(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SensorSim {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadSource for SensorSim {
    fn next_sample(&mut self) -> Option<f64> {
        self.profile.choose(&mut self.rng).copied()
    }
}

// ---------------------------------------------------------------------------
// Scripted trace
// ---------------------------------------------------------------------------

/// Plays back a fixed sample sequence, then exhausts. The deterministic
/// source for tests and batch runs.
pub struct Script {
    samples: VecDeque<f64>,
}

impl Script {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }
}

impl LoadSource for Script {
    fn next_sample(&mut self) -> Option<f64> {
        self.samples.pop_front()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_plays_back_then_exhausts() {
        let mut source = Script::new([1.5, 0.8]);
        assert_eq!(source.next_sample(), Some(1.5));
        assert_eq!(source.next_sample(), Some(0.8));
        assert_eq!(source.next_sample(), None);
        assert_eq!(source.next_sample(), None);
    }

    #[test]
    fn sensor_draws_from_the_profile() {
        let mut sim = SensorSim::with_seed(7);
        for _ in 0..100 {
            let sample = sim.next_sample().unwrap();
            assert!(LOAD_PROFILE.contains(&sample), "unexpected sample {sample}");
        }
    }

    #[test]
    fn seeded_sensor_is_reproducible() {
        let mut a = SensorSim::with_seed(42);
        let mut b = SensorSim::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn single_value_profile_is_constant() {
        let mut sim = SensorSim::from_profile(&[0.9], 1);
        assert_eq!(sim.next_sample(), Some(0.9));
        assert_eq!(sim.next_sample(), Some(0.9));
    }

    #[test]
    fn empty_profile_exhausts() {
        let mut sim = SensorSim::from_profile(&[], 1);
        assert_eq!(sim.next_sample(), None);
    }
}
