//! Errors for deterministic sources.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DstError {
    /// Seed is not a nonzero u64.
    #[error("seed must be a nonzero u64, got {value:?}")]
    InvalidSeed { value: String },

    /// A scripted source needs at least one digit.
    #[error("digit script is empty")]
    EmptyScript,

    /// A scripted candidate contains a non-digit.
    #[error("script candidate {candidate:?} contains non-digit {found:?}")]
    NonDigit { candidate: String, found: char },
}
