//! Injected randomness for the generator.

use rand::rngs::ThreadRng;
use rand::{Rng, RngCore};

use crate::validator::SSN_DIGITS_COUNT;

/// A source of decimal digits.
///
/// The generator calls `fill_candidate` once per attempt, so a source
/// that wants to act on whole candidates (e.g. to force an excluded
/// pattern) overrides it rather than `next_digit`.
pub trait DigitSource {
    /// Draw one digit. Conforming sources return 0..=9, uniformly.
    fn next_digit(&mut self) -> u8;

    /// Draw a full candidate, replacing every position.
    fn fill_candidate(&mut self, candidate: &mut [u8; SSN_DIGITS_COUNT]) {
        for digit in candidate.iter_mut() {
            *digit = self.next_digit();
        }
    }
}

impl<S: DigitSource + ?Sized> DigitSource for &mut S {
    fn next_digit(&mut self) -> u8 {
        (**self).next_digit()
    }

    fn fill_candidate(&mut self, candidate: &mut [u8; SSN_DIGITS_COUNT]) {
        (**self).fill_candidate(candidate);
    }
}

impl<S: DigitSource + ?Sized> DigitSource for Box<S> {
    fn next_digit(&mut self) -> u8 {
        (**self).next_digit()
    }

    fn fill_candidate(&mut self, candidate: &mut [u8; SSN_DIGITS_COUNT]) {
        (**self).fill_candidate(candidate);
    }
}

/// Digits drawn uniformly from any `rand` generator.
#[derive(Debug, Clone)]
pub struct Entropy<R> {
    rng: R,
}

impl<R: RngCore> Entropy<R> {
    /// Wrap a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl Entropy<ThreadRng> {
    /// Unseeded thread-local entropy.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: RngCore> DigitSource for Entropy<R> {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..10)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    struct Counting(u8);

    impl DigitSource for Counting {
        fn next_digit(&mut self) -> u8 {
            let digit = self.0;
            self.0 = (self.0 + 1) % 10;
            digit
        }
    }

    #[test]
    fn test_fill_candidate_draws_every_position() {
        let mut source = Counting(3);
        let mut candidate = [0; SSN_DIGITS_COUNT];
        source.fill_candidate(&mut candidate);
        assert_eq!(candidate, [3, 4, 5, 6, 7, 8, 9, 0, 1]);

        // No reuse between candidates.
        source.fill_candidate(&mut candidate);
        assert_eq!(candidate, [2, 3, 4, 5, 6, 7, 8, 9, 0]);
    }

    #[test]
    fn test_forwarding_impls() {
        let mut source = Counting(0);
        assert_eq!((&mut source).next_digit(), 0);
        let mut boxed: Box<dyn DigitSource> = Box::new(source);
        assert_eq!(boxed.next_digit(), 1);
    }

    #[test]
    fn test_entropy_range() {
        let mut source = Entropy::thread();
        for _ in 0..1000 {
            assert!(source.next_digit() <= 9);
        }
    }

    #[test]
    fn test_entropy_wraps_any_rng() {
        let mut source = Entropy::new(StepRng::new(0, 1 << 40));
        for _ in 0..100 {
            assert!(source.next_digit() <= 9);
        }
    }
}
