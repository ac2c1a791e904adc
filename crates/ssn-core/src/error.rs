//! Error types for parsing and generation.

use thiserror::Error;

/// Errors from parsing digit strings and formatted results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong number of digits.
    #[error("expected {expected} digits, got {actual}")]
    Length { expected: usize, actual: usize },

    /// A character that is not an ASCII decimal digit.
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { found: char, position: usize },

    /// Input is not laid out as DDD-DD-DDDD.
    #[error("expected DDD-DD-DDDD layout, got {input:?}")]
    Layout { input: String },
}

/// Errors from the generation loop.
///
/// Both variants mean the digit source or the validator is broken.
/// They are not retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// No candidate was accepted within the attempt cap.
    #[error("no valid candidate after {attempts} attempts (degenerate digit source?)")]
    AttemptsExhausted { attempts: u32 },

    /// The digit source produced a value outside 0..=9.
    #[error("digit source produced {digit}, expected 0..=9")]
    DigitOutOfRange { digit: u8 },
}
