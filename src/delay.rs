//! Random latency injected in front of every replication attempt.

use std::time::Duration;

use anyhow::{ensure, Result};
use rand::Rng;

/// Samples a delay uniformly from `[min, max]` milliseconds, inclusive.
///
/// Every replication task draws its own delay from the thread-local RNG, so
/// the (write, replica) samples stay independent; correlated delays would
/// flatten the tail-latency distribution the experiment measures.
#[derive(Debug, Clone, Copy)]
pub struct DelayInjector {
    min_ms: u64,
    max_ms: u64,
}

impl DelayInjector {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self> {
        ensure!(
            min_ms <= max_ms,
            "delay range inverted: min {min_ms}ms > max {max_ms}ms"
        );
        Ok(Self { min_ms, max_ms })
    }

    /// Draws one delay. A `[0, 0]` range always yields zero.
    pub fn sample(&self) -> Duration {
        Duration::from_millis(rand::thread_rng().gen_range(self.min_ms..=self.max_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_range() {
        assert!(DelayInjector::new(10, 5).is_err());
    }

    #[test]
    fn samples_stay_within_bounds() {
        let injector = DelayInjector::new(5, 25).expect("valid range");
        for _ in 0..200 {
            let delay = injector.sample();
            assert!(delay >= Duration::from_millis(5));
            assert!(delay <= Duration::from_millis(25));
        }
    }

    #[test]
    fn degenerate_range_is_constant() {
        let injector = DelayInjector::new(0, 0).expect("valid range");
        for _ in 0..10 {
            assert_eq!(injector.sample(), Duration::ZERO);
        }
    }
}
