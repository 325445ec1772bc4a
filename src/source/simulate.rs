//! Synthetic sample source for demos and tests.

use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{SampleSource, SourceError};
use crate::data::Sample;

/// Synthetic latencies stay inside this band.
const FLOOR_MS: u64 = 25;
const CEILING_MS: u64 = 150;

/// Pause between synthetic samples, roughly one ping interval.
const PACING: Duration = Duration::from_millis(100);

/// Bounded random walk standing in for a real probe.
///
/// The first value is uniform in `[25, 150)`; each following value is
/// drawn within ±20% of the previous one, re-rolled until it lands back
/// inside the band.
#[derive(Debug)]
pub struct Simulator {
    rng: SmallRng,
    last: Option<u64>,
    pacing: Duration,
    description: String,
}

impl Simulator {
    pub fn new(target: &str) -> Self {
        Self::with_rng(SmallRng::from_os_rng(), target, PACING)
    }

    /// Deterministic variant without pacing, for tests.
    pub fn seeded(seed: u64, target: &str) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), target, Duration::ZERO)
    }

    fn with_rng(rng: SmallRng, target: &str, pacing: Duration) -> Self {
        Self { rng, last: None, pacing, description: format!("{} (simulated)", target) }
    }
}

impl SampleSource for Simulator {
    fn next_sample(&mut self) -> Result<Option<Sample>, SourceError> {
        if !self.pacing.is_zero() {
            thread::sleep(self.pacing);
        }
        let next = match self.last {
            None => self.rng.random_range(FLOOR_MS..CEILING_MS),
            Some(last) => {
                let spread = last / 5;
                loop {
                    let candidate =
                        self.rng.random_range(last.saturating_sub(spread)..=last + spread);
                    if (FLOOR_MS..CEILING_MS).contains(&candidate) {
                        break candidate;
                    }
                }
            }
        };
        self.last = Some(next);
        Ok(Some(Sample::Value(next)))
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_stay_inside_the_band() {
        let mut sim = Simulator::seeded(7, "test");
        for _ in 0..200 {
            let sample = sim.next_sample().unwrap().unwrap();
            let ms = sample.millis().unwrap();
            assert!((FLOOR_MS..CEILING_MS).contains(&ms), "{} out of band", ms);
        }
    }

    #[test]
    fn test_steps_stay_within_twenty_percent() {
        let mut sim = Simulator::seeded(42, "test");
        let mut last = sim.next_sample().unwrap().unwrap().millis().unwrap();
        for _ in 0..200 {
            let next = sim.next_sample().unwrap().unwrap().millis().unwrap();
            let spread = last / 5;
            assert!(next >= last.saturating_sub(spread) && next <= last + spread);
            last = next;
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut a = Simulator::seeded(9, "test");
        let mut b = Simulator::seeded(9, "test");
        for _ in 0..20 {
            assert_eq!(a.next_sample().unwrap(), b.next_sample().unwrap());
        }
    }
}
