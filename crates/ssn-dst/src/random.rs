//! Deterministic random number generation.
//!
//! Uses a seeded PRNG (Xoshiro256**) that produces identical digit
//! sequences for identical seeds, enabling reproducible test runs.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use ssn_core::DigitSource;

/// Deterministic random number generator.
///
/// Given the same seed, always produces the same sequence, and so the
/// same generated results.
///
/// # Example
///
/// ```rust
/// use ssn_core::DigitSource;
/// use ssn_dst::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let a = rng.next_digit();
/// let b = rng.next_digit();
///
/// let mut rng2 = DeterministicRng::new(12345);
/// assert_eq!(rng2.next_digit(), a);
/// assert_eq!(rng2.next_digit(), b);
/// ```
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    seed: u64,
    rng: Xoshiro256StarStar,
    calls_count: u64,
}

/// Maximum number of RNG calls before warning.
const RNG_CALLS_WARNING_THRESHOLD: u64 = 1_000_000_000;

impl DeterministicRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug_assert!(seed != 0, "Seed should not be zero for better randomness");

        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            calls_count: 0,
        }
    }

    /// Get the seed used to create this RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get number of random values generated.
    #[must_use]
    pub fn calls_count(&self) -> u64 {
        self.calls_count
    }

    fn count_call(&mut self) {
        self.calls_count += 1;
        debug_assert!(
            self.calls_count < RNG_CALLS_WARNING_THRESHOLD,
            "Very high number of RNG calls - possible infinite loop"
        );
    }

    /// Generate a random u64.
    pub fn next_u64(&mut self) -> u64 {
        self.count_call();
        self.rng.gen()
    }

    /// Generate a random value in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.count_call();
        self.rng.gen_range(range)
    }

    /// Generate a boolean with the given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0.0, 1.0]"
        );
        self.count_call();
        self.rng.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        self.count_call();
        slice.choose(&mut self.rng)
    }

    /// Fork this RNG into a new one with a derived seed.
    ///
    /// Useful for giving each component its own deterministic RNG.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let new_seed = self.next_u64() | 1;
        Self::new(new_seed)
    }

    /// Reset to initial state (same seed).
    pub fn reset(&mut self) {
        self.rng = Xoshiro256StarStar::seed_from_u64(self.seed);
        self.calls_count = 0;
    }
}

impl DigitSource for DeterministicRng {
    fn next_digit(&mut self) -> u8 {
        self.gen_range(0..10)
    }
}
