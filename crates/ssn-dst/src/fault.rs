//! Deterministic fault injection.
//!
//! Wraps a digit source and, with a configured probability, overwrites a
//! freshly drawn candidate with one of the excluded patterns:
//! - Leading 9
//! - Area 666 or 000
//! - Group 00
//! - Serial 0000

use ssn_core::{DigitSource, FormatRule, SSN_DIGITS_COUNT};

use crate::random::DeterministicRng;

/// A pattern the format predicate rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExcludedPattern {
    LeadingNine,
    AreaSixSixSix,
    AreaZero,
    GroupZero,
    SerialZero,
}

impl ExcludedPattern {
    /// All patterns.
    pub const ALL: [ExcludedPattern; 5] = [
        ExcludedPattern::LeadingNine,
        ExcludedPattern::AreaSixSixSix,
        ExcludedPattern::AreaZero,
        ExcludedPattern::GroupZero,
        ExcludedPattern::SerialZero,
    ];

    /// Rule this pattern violates.
    #[must_use]
    pub fn rule(self) -> FormatRule {
        match self {
            ExcludedPattern::LeadingNine => FormatRule::LeadingNine,
            ExcludedPattern::AreaSixSixSix => FormatRule::AreaSixSixSix,
            ExcludedPattern::AreaZero => FormatRule::AreaZero,
            ExcludedPattern::GroupZero => FormatRule::GroupZero,
            ExcludedPattern::SerialZero => FormatRule::SerialZero,
        }
    }

    /// Overwrite the affected positions of `candidate`.
    ///
    /// Other positions are left as drawn, so the candidate may also
    /// violate an earlier rule.
    pub fn apply(self, candidate: &mut [u8; SSN_DIGITS_COUNT]) {
        match self {
            ExcludedPattern::LeadingNine => candidate[0] = 9,
            ExcludedPattern::AreaSixSixSix => candidate[0..3].fill(6),
            ExcludedPattern::AreaZero => candidate[0..3].fill(0),
            ExcludedPattern::GroupZero => candidate[3..5].fill(0),
            ExcludedPattern::SerialZero => candidate[5..9].fill(0),
        }
    }
}

/// Configuration for fault injection.
#[derive(Debug, Clone)]
pub struct FaultConfig {
    /// Probability that a candidate is overwritten (0.0 to 1.0)
    pub fault_probability: f64,
    /// Patterns to choose from when injecting
    pub patterns: Vec<ExcludedPattern>,
    /// Whether fault injection is enabled
    pub enabled: bool,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            fault_probability: 0.25,
            patterns: ExcludedPattern::ALL.to_vec(),
            enabled: true,
        }
    }
}

impl FaultConfig {
    /// No faults - the wrapped source passes through unchanged.
    #[must_use]
    pub fn none() -> Self {
        Self {
            fault_probability: 0.0,
            patterns: Vec::new(),
            enabled: false,
        }
    }

    /// Aggressive faults for stress testing.
    #[must_use]
    pub fn aggressive() -> Self {
        Self {
            fault_probability: 0.9,
            ..Self::default()
        }
    }

    /// Every candidate is overwritten, making the source degenerate.
    #[must_use]
    pub fn always() -> Self {
        Self {
            fault_probability: 1.0,
            ..Self::default()
        }
    }

    /// Restrict injection to a single pattern.
    #[must_use]
    pub fn only(mut self, pattern: ExcludedPattern) -> Self {
        self.patterns = vec![pattern];
        self
    }
}

/// Statistics about injected faults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultStats {
    /// Candidates drawn through the injector
    pub candidates_count: u64,
    /// Candidates overwritten with an excluded pattern
    pub faults_count: u64,
}

/// Deterministic fault injector around a digit source.
///
/// Uses its own seeded RNG to decide when to inject, so the wrapped
/// source's sequence is unaffected by fault decisions.
pub struct FaultInjector<S> {
    source: S,
    rng: DeterministicRng,
    config: FaultConfig,
    candidates_count: u64,
    faults_injected_count: u64,
}

impl<S: DigitSource> FaultInjector<S> {
    /// Create a new fault injector with the given RNG and config.
    pub fn new(source: S, rng: DeterministicRng, config: FaultConfig) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&config.fault_probability),
            "Fault probability must be in [0.0, 1.0]"
        );
        debug_assert!(
            !config.enabled || !config.patterns.is_empty(),
            "Enabled fault injection needs at least one pattern"
        );

        Self {
            source,
            rng,
            config,
            candidates_count: 0,
            faults_injected_count: 0,
        }
    }

    /// Decide whether to overwrite the next candidate, and with what.
    fn next_fault(&mut self) -> Option<ExcludedPattern> {
        if !self.config.enabled || !self.rng.gen_bool(self.config.fault_probability) {
            return None;
        }
        self.rng.choose(&self.config.patterns).copied()
    }

    /// Get statistics about injected faults.
    #[must_use]
    pub fn stats(&self) -> FaultStats {
        FaultStats {
            candidates_count: self.candidates_count,
            faults_count: self.faults_injected_count,
        }
    }

    /// Access the wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: DigitSource> DigitSource for FaultInjector<S> {
    fn next_digit(&mut self) -> u8 {
        self.source.next_digit()
    }

    fn fill_candidate(&mut self, candidate: &mut [u8; SSN_DIGITS_COUNT]) {
        self.source.fill_candidate(candidate);
        self.candidates_count += 1;

        if let Some(pattern) = self.next_fault() {
            pattern.apply(candidate);
            self.faults_injected_count += 1;
        }
    }
}
