//! DST environment deriving every source from one seed.

use std::fmt;

use crate::fault::{FaultConfig, FaultInjector};
use crate::random::DeterministicRng;

/// Complete DST environment.
///
/// Derives digit and fault RNGs from a single master seed. Given the
/// same seed and the same sequence of calls, all behavior is identical.
///
/// # Usage
///
/// ```rust
/// use ssn_core::Generator;
/// use ssn_dst::{DstEnv, FaultConfig};
///
/// let mut env = DstEnv::new(42);
/// let mut generator = Generator::new(env.source(FaultConfig::none()));
/// let first = generator.generate().unwrap();
///
/// let mut env = DstEnv::new(42);
/// let mut generator = Generator::new(env.source(FaultConfig::none()));
/// assert_eq!(generator.generate().unwrap(), first);
/// ```
pub struct DstEnv {
    seed: u64,
    master: DeterministicRng,
    sources_count: u64,
}

impl DstEnv {
    /// Create a new DST environment with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug_assert!(seed != 0, "Seed should not be zero");

        Self {
            seed,
            master: DeterministicRng::new(seed),
            sources_count: 0,
        }
    }

    /// Get the seed used to create this environment.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork a plain digit RNG.
    pub fn rng(&mut self) -> DeterministicRng {
        self.sources_count += 1;
        self.master.fork()
    }

    /// Fork a digit RNG wrapped in a fault injector.
    pub fn source(&mut self, fault_config: FaultConfig) -> FaultInjector<DeterministicRng> {
        let digits = self.rng();
        let faults = self.master.fork();
        FaultInjector::new(digits, faults, fault_config)
    }

    /// Format seed for error messages.
    ///
    /// Use this in test failures so the seed can be easily copied.
    #[must_use]
    pub fn format_seed(&self) -> String {
        format!("{}={}", crate::SEED_ENV_VAR, self.seed)
    }

    /// Get summary statistics.
    #[must_use]
    pub fn stats(&self) -> DstStats {
        DstStats {
            seed: self.seed,
            sources_count: self.sources_count,
            master_calls: self.master.calls_count(),
        }
    }
}

/// Statistics about DST execution.
#[derive(Debug, Clone, Copy)]
pub struct DstStats {
    /// Seed used for reproducibility
    pub seed: u64,
    /// Number of digit sources handed out
    pub sources_count: u64,
    /// Number of draws on the master RNG
    pub master_calls: u64,
}

impl fmt::Display for DstStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={} sources={} master_calls={}",
            crate::SEED_ENV_VAR,
            self.seed,
            self.sources_count,
            self.master_calls
        )
    }
}

#[cfg(test)]
mod tests {
    use ssn_core::DigitSource;

    use super::*;

    #[test]
    fn test_determinism() {
        let mut env1 = DstEnv::new(42);
        let mut env2 = DstEnv::new(42);
        let mut rng1 = env1.rng();
        let mut rng2 = env2.rng();

        for _ in 0..100 {
            assert_eq!(rng1.next_digit(), rng2.next_digit());
        }
    }

    #[test]
    fn test_sources_are_independent() {
        let mut env = DstEnv::new(42);
        let a = env.rng();
        let b = env.rng();
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn test_stats() {
        let mut env = DstEnv::new(12345);
        let _ = env.rng();
        let _ = env.source(FaultConfig::default());

        let stats = env.stats();
        assert_eq!(stats.seed, 12345);
        assert_eq!(stats.sources_count, 2);
        assert_eq!(stats.master_calls, 3);
        assert_eq!(stats.to_string(), "DST_SEED=12345 sources=2 master_calls=3");
    }

    #[test]
    fn test_format_seed() {
        let env = DstEnv::new(12345);
        assert_eq!(env.format_seed(), "DST_SEED=12345");
    }
}
