//! # ssn-core
//!
//! Format predicate and rejection-sampling generator for
//! Social-Security-Number-shaped strings, for demo and teaching use.
//!
//! Nothing here models real SSA issuance rules. A candidate is accepted
//! when it passes five structural checks:
//!
//! | Rule | Field | Rejects |
//! |------|-------|---------|
//! | LeadingNine | digit 0 | `9` |
//! | AreaSixSixSix | digits 0..3 | `666` |
//! | AreaZero | digits 0..3 | `000` |
//! | GroupZero | digits 3..5 | `00` |
//! | SerialZero | digits 5..9 | `0000` |
//!
//! ## Usage
//!
//! ```rust
//! use ssn_core::{generate, validate};
//!
//! let ssn = generate();
//! assert!(validate(ssn.digits().as_str()));
//! assert_eq!(ssn.to_string().len(), 11);
//!
//! assert!(validate("123456789"));
//! assert!(!validate("666123456"));
//! ```
//!
//! ## Injected randomness
//!
//! ```rust
//! use ssn_core::{Entropy, Generator, GeneratorConfig};
//!
//! let mut generator = Generator::with_config(Entropy::thread(), GeneratorConfig::default());
//! let report = generator.generate_with_stats().unwrap();
//! assert!(report.attempts >= 1);
//! ```

pub mod digits;
pub mod error;
pub mod generator;
pub mod rules;
pub mod sink;
pub mod source;
pub mod validator;

pub use digits::{DigitString, FormattedSsn};
pub use error::{GenerateError, ParseError};
pub use generator::{generate, GenerationReport, Generator, GeneratorConfig, RejectionStats};
pub use rules::{FormatRule, RuleResult, RuleSummary};
pub use sink::{DisplaySink, Trigger};
pub use source::{DigitSource, Entropy};
pub use validator::{
    check_all, first_violation, is_valid_format, is_valid_format_bytes, validate, SSN_DIGITS_COUNT,
};
