//! Scripted digit source for exact branch tests.

use ssn_core::DigitSource;

use crate::error::DstError;

/// Replays a fixed digit sequence, cycling back to the start when it
/// runs out.
///
/// ```rust
/// use ssn_core::Generator;
/// use ssn_dst::ScriptedSource;
///
/// let source = ScriptedSource::from_candidates(&["666123456", "123456789"]).unwrap();
/// let report = Generator::new(source).generate_with_stats().unwrap();
/// assert_eq!(report.ssn.to_string(), "123-45-6789");
/// assert_eq!(report.attempts, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    digits: Vec<u8>,
    position: usize,
}

impl ScriptedSource {
    /// Create from raw digit values. Values above 9 are passed through
    /// unchanged, to test how the generator handles broken sources.
    pub fn new(digits: Vec<u8>) -> Result<Self, DstError> {
        if digits.is_empty() {
            return Err(DstError::EmptyScript);
        }
        Ok(Self {
            digits,
            position: 0,
        })
    }

    /// Create from candidate strings, concatenated in order.
    pub fn from_candidates(candidates: &[&str]) -> Result<Self, DstError> {
        let mut digits = Vec::new();
        for candidate in candidates {
            for c in candidate.chars() {
                let digit = c.to_digit(10).ok_or_else(|| DstError::NonDigit {
                    candidate: (*candidate).to_string(),
                    found: c,
                })?;
                digits.push(digit as u8);
            }
        }
        Self::new(digits)
    }

    /// Number of digits drawn so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl DigitSource for ScriptedSource {
    fn next_digit(&mut self) -> u8 {
        let digit = self.digits[self.position % self.digits.len()];
        self.position += 1;
        digit
    }
}
