//! Rejection-sampling generator.
//!
//! Draws 9 uniform digits, tests them with the format predicate, and
//! redraws all 9 on rejection. About 88.7% of uniform candidates are
//! accepted, so a working source almost always finishes in one or two
//! draws. The attempt cap only trips when the source is degenerate.

use std::fmt;

use tracing::{debug, trace};

use crate::digits::{DigitString, FormattedSsn};
use crate::error::GenerateError;
use crate::rules::{Fields, FormatRule};
use crate::source::{DigitSource, Entropy};
use crate::validator::SSN_DIGITS_COUNT;

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum number of candidates drawn before giving up. Zero is
    /// treated as one.
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1_000_000,
        }
    }
}

impl GeneratorConfig {
    /// Small cap, so degenerate sources fail fast in tests.
    #[must_use]
    pub fn quick() -> Self {
        Self { max_attempts: 64 }
    }

    /// Set the attempt cap.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Attempt cap actually applied: at least one candidate is drawn.
    #[must_use]
    pub fn attempts_cap(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Rejected candidates counted by the first rule they violated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionStats {
    counts: [u64; FormatRule::COUNT],
}

impl RejectionStats {
    /// Record one rejection.
    pub fn record(&mut self, rule: FormatRule) {
        self.counts[rule.index()] += 1;
    }

    /// Rejections attributed to `rule`.
    #[must_use]
    pub fn get(&self, rule: FormatRule) -> u64 {
        self.counts[rule.index()]
    }

    /// Total rejections.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Rules with at least one rejection, with counts.
    pub fn iter(&self) -> impl Iterator<Item = (FormatRule, u64)> + '_ {
        FormatRule::ALL
            .iter()
            .map(|&rule| (rule, self.get(rule)))
            .filter(|&(_, count)| count > 0)
    }
}

impl fmt::Display for RejectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejections={}", self.total())?;
        for (rule, count) in self.iter() {
            write!(f, " {rule}={count}")?;
        }
        Ok(())
    }
}

/// Result of one successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// The accepted, formatted result
    pub ssn: FormattedSsn,
    /// Candidates drawn, including the accepted one
    pub attempts: u32,
    /// Why the rejected candidates were rejected
    pub rejections: RejectionStats,
}

/// Rejection-sampling generator over an injected digit source.
///
/// # Example
///
/// ```rust
/// use ssn_core::{Entropy, Generator};
///
/// let mut generator = Generator::new(Entropy::thread());
/// let ssn = generator.generate().unwrap();
/// assert!(ssn.is_valid_format());
/// ```
pub struct Generator<S> {
    source: S,
    config: GeneratorConfig,
}

impl<S: DigitSource> Generator<S> {
    /// Create with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, GeneratorConfig::default())
    }

    /// Create with a custom configuration.
    pub fn with_config(source: S, config: GeneratorConfig) -> Self {
        Self { source, config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Access the digit source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume and return the digit source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Draw candidates until one passes the format predicate.
    pub fn generate(&mut self) -> Result<FormattedSsn, GenerateError> {
        self.generate_with_stats().map(|report| report.ssn)
    }

    /// Like [`generate`](Self::generate), also reporting attempts and
    /// rejection reasons.
    pub fn generate_with_stats(&mut self) -> Result<GenerationReport, GenerateError> {
        let mut rejections = RejectionStats::default();
        let mut candidate = [0u8; SSN_DIGITS_COUNT];

        let cap = self.config.attempts_cap();
        for attempt in 1..=cap {
            self.source.fill_candidate(&mut candidate);
            let fields = to_fields(&candidate)?;

            match FormatRule::STRUCTURAL
                .iter()
                .find(|rule| !rule.holds_on(&fields))
            {
                Some(&rule) => {
                    trace!(attempt, %rule, "candidate rejected");
                    rejections.record(rule);
                }
                None => {
                    let ssn = FormattedSsn::new(DigitString::from_fields(&fields));
                    debug_assert!(ssn.is_valid_format());
                    debug!(attempts = attempt, %rejections, "candidate accepted");
                    return Ok(GenerationReport {
                        ssn,
                        attempts: attempt,
                        rejections,
                    });
                }
            }
        }

        Err(GenerateError::AttemptsExhausted { attempts: cap })
    }
}

/// Convert digit values to characters, rejecting anything above 9.
fn to_fields(candidate: &[u8; SSN_DIGITS_COUNT]) -> Result<Fields, GenerateError> {
    let mut fields = ['0'; SSN_DIGITS_COUNT];
    for (slot, &digit) in fields.iter_mut().zip(candidate) {
        *slot = char::from_digit(u32::from(digit), 10)
            .ok_or(GenerateError::DigitOutOfRange { digit })?;
    }
    Ok(fields)
}

/// Generate one result from thread-local entropy.
///
/// # Panics
///
/// Panics if the attempt cap is exhausted, which means the thread RNG
/// itself is broken.
#[must_use]
pub fn generate() -> FormattedSsn {
    match Generator::new(Entropy::thread()).generate() {
        Ok(ssn) => ssn,
        Err(err) => panic!("SSN generation invariant violated: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed digit sequence, cycling.
    struct Script {
        digits: Vec<u8>,
        position: usize,
    }

    impl Script {
        fn new(candidates: &[&str]) -> Self {
            let digits = candidates
                .iter()
                .flat_map(|c| c.bytes().map(|b| b - b'0'))
                .collect();
            Self {
                digits,
                position: 0,
            }
        }
    }

    impl DigitSource for Script {
        fn next_digit(&mut self) -> u8 {
            let digit = self.digits[self.position % self.digits.len()];
            self.position += 1;
            digit
        }
    }

    #[test]
    fn test_accepts_first_valid_candidate() {
        let mut generator = Generator::new(Script::new(&["123456789"]));
        let report = generator.generate_with_stats().unwrap();
        assert_eq!(report.ssn.to_string(), "123-45-6789");
        assert_eq!(report.attempts, 1);
        assert_eq!(report.rejections.total(), 0);
    }

    #[test]
    fn test_redraws_after_rejection() {
        let mut generator = Generator::new(Script::new(&[
            "966123456",
            "666123456",
            "000123456",
            "123006789",
            "123450000",
            "234567890",
        ]));
        let report = generator.generate_with_stats().unwrap();
        assert_eq!(report.ssn.to_string(), "234-56-7890");
        assert_eq!(report.attempts, 6);
        assert_eq!(report.rejections.total(), 5);
        for rule in FormatRule::STRUCTURAL {
            assert_eq!(report.rejections.get(rule), 1, "{rule}");
        }
        assert_eq!(generator.source_mut().position, 54);
    }

    #[test]
    fn test_degenerate_source_exhausts() {
        let mut generator =
            Generator::with_config(Script::new(&["000000000"]), GeneratorConfig::quick());
        assert_eq!(
            generator.generate(),
            Err(GenerateError::AttemptsExhausted { attempts: 64 })
        );
    }

    #[test]
    fn test_digit_out_of_range() {
        struct Broken;
        impl DigitSource for Broken {
            fn next_digit(&mut self) -> u8 {
                11
            }
        }

        let mut generator = Generator::new(Broken);
        assert_eq!(
            generator.generate(),
            Err(GenerateError::DigitOutOfRange { digit: 11 })
        );
    }

    #[test]
    fn test_rejection_stats_display() {
        let mut stats = RejectionStats::default();
        stats.record(FormatRule::GroupZero);
        stats.record(FormatRule::GroupZero);
        stats.record(FormatRule::LeadingNine);
        assert_eq!(stats.to_string(), "rejections=3 LeadingNine=1 GroupZero=2");
    }

    #[test]
    fn test_free_generate_round_trip() {
        for _ in 0..1000 {
            let ssn = generate();
            let text = ssn.to_string();
            let bytes = text.as_bytes();
            assert_eq!(bytes.len(), 11);
            assert_eq!(bytes[3], b'-');
            assert_eq!(bytes[6], b'-');
            assert!(text
                .chars()
                .enumerate()
                .all(|(i, c)| i == 3 || i == 6 || c.is_ascii_digit()));
            assert!(crate::validate(&text.replace('-', "")));
        }
    }

    #[test]
    fn test_config() {
        assert_eq!(GeneratorConfig::default().max_attempts, 1_000_000);
        assert_eq!(GeneratorConfig::quick().with_max_attempts(3).max_attempts, 3);
    }

    #[test]
    fn test_zero_cap_still_draws_once() {
        let config = GeneratorConfig { max_attempts: 0 };
        assert_eq!(config.attempts_cap(), 1);

        let mut generator = Generator::with_config(Script::new(&["123456789"]), config.clone());
        assert_eq!(generator.generate().unwrap().to_string(), "123-45-6789");

        let mut generator = Generator::with_config(Script::new(&["000000000"]), config);
        assert_eq!(
            generator.generate(),
            Err(GenerateError::AttemptsExhausted { attempts: 1 })
        );
        assert_eq!(generator.source_mut().position, 9);
    }
}
