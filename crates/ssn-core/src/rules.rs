//! Format rules with per-rule results.
//!
//! | Rule | Applies to | Fails when |
//! |------|------------|------------|
//! | Length | whole input | not exactly 9 characters |
//! | AsciiDigits | whole input | any character outside `0..=9` |
//! | LeadingNine | position 0 | `9` |
//! | AreaSixSixSix | positions 0..3 | `666` |
//! | AreaZero | positions 0..3 | `000` |
//! | GroupZero | positions 3..5 | `00` |
//! | SerialZero | positions 5..9 | `0000` |
//!
//! `is_valid_format` applies Length plus the five structural rules.
//! AsciiDigits is only reported by `check_all`, for hosts checking
//! user-entered text.

use std::fmt;

use crate::validator::SSN_DIGITS_COUNT;

/// A 9-character candidate split into individual characters.
pub(crate) type Fields = [char; SSN_DIGITS_COUNT];

/// One structural check on a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatRule {
    Length,
    AsciiDigits,
    LeadingNine,
    AreaSixSixSix,
    AreaZero,
    GroupZero,
    SerialZero,
}

impl FormatRule {
    /// Number of rules.
    pub const COUNT: usize = 7;

    /// All rules, in the order they are checked.
    pub const ALL: [FormatRule; Self::COUNT] = [
        FormatRule::Length,
        FormatRule::AsciiDigits,
        FormatRule::LeadingNine,
        FormatRule::AreaSixSixSix,
        FormatRule::AreaZero,
        FormatRule::GroupZero,
        FormatRule::SerialZero,
    ];

    /// Positional rules applied to a 9-character candidate.
    pub const STRUCTURAL: [FormatRule; 5] = [
        FormatRule::LeadingNine,
        FormatRule::AreaSixSixSix,
        FormatRule::AreaZero,
        FormatRule::GroupZero,
        FormatRule::SerialZero,
    ];

    /// Stable position of this rule in `ALL`.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short name used in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FormatRule::Length => "Length",
            FormatRule::AsciiDigits => "AsciiDigits",
            FormatRule::LeadingNine => "LeadingNine",
            FormatRule::AreaSixSixSix => "AreaSixSixSix",
            FormatRule::AreaZero => "AreaZero",
            FormatRule::GroupZero => "GroupZero",
            FormatRule::SerialZero => "SerialZero",
        }
    }

    /// What the rule requires.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            FormatRule::Length => "exactly 9 characters",
            FormatRule::AsciiDigits => "only decimal digits",
            FormatRule::LeadingNine => "first digit is not 9",
            FormatRule::AreaSixSixSix => "first three digits are not 666",
            FormatRule::AreaZero => "first three digits are not 000",
            FormatRule::GroupZero => "middle two digits are not 00",
            FormatRule::SerialZero => "last four digits are not 0000",
        }
    }

    /// Check this rule against a 9-character candidate.
    ///
    /// Length always holds here since `fields` is already 9 long.
    pub(crate) fn holds_on(self, fields: &Fields) -> bool {
        match self {
            FormatRule::Length => true,
            FormatRule::AsciiDigits => fields.iter().all(char::is_ascii_digit),
            FormatRule::LeadingNine => fields[0] != '9',
            FormatRule::AreaSixSixSix => fields[0..3] != ['6'; 3],
            FormatRule::AreaZero => fields[0..3] != ['0'; 3],
            FormatRule::GroupZero => fields[3..5] != ['0'; 2],
            FormatRule::SerialZero => fields[5..9] != ['0'; 4],
        }
    }

    /// Describe a violation of this rule by `fields`.
    pub(crate) fn violation_on(self, fields: &Fields) -> String {
        let area: String = fields[0..3].iter().collect();
        let group: String = fields[3..5].iter().collect();
        let serial: String = fields[5..9].iter().collect();
        match self {
            FormatRule::Length => "expected 9 characters".to_string(),
            FormatRule::AsciiDigits => "contains a non-digit character".to_string(),
            FormatRule::LeadingNine => format!("area {area} starts with 9"),
            FormatRule::AreaSixSixSix | FormatRule::AreaZero => format!("area {area} is excluded"),
            FormatRule::GroupZero => format!("group {group} is excluded"),
            FormatRule::SerialZero => format!("serial {serial} is excluded"),
        }
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of checking a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    /// Rule that was checked
    pub rule: FormatRule,
    /// Whether the rule holds
    pub holds: bool,
    /// Description of violation if the rule doesn't hold
    pub violation: Option<String>,
}

impl RuleResult {
    /// Create a passing result.
    #[must_use]
    pub fn pass(rule: FormatRule) -> Self {
        Self {
            rule,
            holds: true,
            violation: None,
        }
    }

    /// Create a failing result.
    #[must_use]
    pub fn fail(rule: FormatRule, violation: String) -> Self {
        debug_assert!(!violation.is_empty(), "Violation description must not be empty");

        Self {
            rule,
            holds: false,
            violation: Some(violation),
        }
    }

    /// Format as a single-line status for logging.
    #[must_use]
    pub fn format_status(&self) -> String {
        if self.holds {
            format!("[PASS] {} ({})", self.rule, self.rule.description())
        } else {
            format!(
                "[FAIL] {} ({}): {}",
                self.rule,
                self.rule.description(),
                self.violation.as_deref().unwrap_or("unknown")
            )
        }
    }
}

/// Summary of rule check results for one candidate.
///
/// Positional rules are only evaluated when the candidate is exactly
/// 9 characters long, so `total` is 2 for wrong-length input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
    /// Number of rules that passed
    pub passed: u64,
    /// Number of rules that failed
    pub failed: u64,
    /// Total number of rules checked
    pub total: u64,
    /// Individual results, in check order
    pub results: Vec<RuleResult>,
}

impl RuleSummary {
    /// Build a summary from individual results.
    #[must_use]
    pub fn from_results(results: Vec<RuleResult>) -> Self {
        let passed = results.iter().filter(|r| r.holds).count() as u64;
        let failed = results.iter().filter(|r| !r.holds).count() as u64;
        let total = results.len() as u64;

        debug_assert!(passed + failed == total);

        Self {
            passed,
            failed,
            total,
            results,
        }
    }

    /// Check if every evaluated rule holds.
    #[must_use]
    pub fn all_hold(&self) -> bool {
        self.failed == 0
    }

    /// First failing result, in check order.
    #[must_use]
    pub fn first_failure(&self) -> Option<&RuleResult> {
        self.results.iter().find(|r| !r.holds)
    }

    /// Format as a report string.
    #[must_use]
    pub fn format_report(&self) -> String {
        let mut report = format!("Format Check Summary: {}/{} passed\n", self.passed, self.total);

        for result in &self.results {
            report.push_str(&result.format_status());
            report.push('\n');
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(s: &str) -> Fields {
        let chars: Vec<char> = s.chars().collect();
        chars.try_into().unwrap()
    }

    #[test]
    fn test_all_is_indexed_in_order() {
        for (i, rule) in FormatRule::ALL.iter().enumerate() {
            assert_eq!(rule.index(), i);
        }
    }

    #[test]
    fn test_structural_rules() {
        let good = fields("123456789");
        for rule in FormatRule::STRUCTURAL {
            assert!(rule.holds_on(&good), "{rule} should hold");
        }

        assert!(!FormatRule::LeadingNine.holds_on(&fields("912345678")));
        assert!(!FormatRule::AreaSixSixSix.holds_on(&fields("666123456")));
        assert!(!FormatRule::AreaZero.holds_on(&fields("000123456")));
        assert!(!FormatRule::GroupZero.holds_on(&fields("123006789")));
        assert!(!FormatRule::SerialZero.holds_on(&fields("123450000")));
    }

    #[test]
    fn test_ascii_digits() {
        assert!(FormatRule::AsciiDigits.holds_on(&fields("000000000")));
        assert!(!FormatRule::AsciiDigits.holds_on(&fields("12345678x")));
        assert!(!FormatRule::AsciiDigits.holds_on(&fields("١٢٣٤٥٦٧٨٩")));
    }

    #[test]
    fn test_violation_messages() {
        let f = fields("123006789");
        assert_eq!(FormatRule::GroupZero.violation_on(&f), "group 00 is excluded");
        let f = fields("666123456");
        assert_eq!(FormatRule::AreaSixSixSix.violation_on(&f), "area 666 is excluded");
    }

    #[test]
    fn test_format_status() {
        let pass = RuleResult::pass(FormatRule::GroupZero);
        assert!(pass.format_status().starts_with("[PASS] GroupZero"));

        let fail = RuleResult::fail(FormatRule::GroupZero, "group 00 is excluded".to_string());
        assert_eq!(
            fail.format_status(),
            "[FAIL] GroupZero (middle two digits are not 00): group 00 is excluded"
        );
    }

    #[test]
    fn test_summary_counts() {
        let summary = RuleSummary::from_results(vec![
            RuleResult::pass(FormatRule::Length),
            RuleResult::fail(FormatRule::AsciiDigits, "bad".to_string()),
        ]);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total, 2);
        assert!(!summary.all_hold());
        assert_eq!(summary.first_failure().map(|r| r.rule), Some(FormatRule::AsciiDigits));
        assert!(summary.format_report().starts_with("Format Check Summary: 1/2 passed\n"));
    }
}
