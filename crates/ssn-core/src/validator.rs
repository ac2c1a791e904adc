//! The format predicate.
//!
//! `is_valid_format` is total: any input maps to a boolean and nothing
//! panics. Positions are counted in characters, so multi-byte input is
//! compared character by character and never sliced mid-codepoint.

use crate::rules::{Fields, FormatRule, RuleResult, RuleSummary};

/// Number of digits in an SSN-shaped string.
pub const SSN_DIGITS_COUNT: usize = 9;

/// Split a candidate into exactly 9 characters.
///
/// Returns `None` for any other length.
pub(crate) fn split_fields(candidate: &str) -> Option<Fields> {
    let mut fields = ['\0'; SSN_DIGITS_COUNT];
    let mut chars = candidate.chars();
    for slot in &mut fields {
        *slot = chars.next()?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(fields)
}

/// Check whether `candidate` passes the length check and the five
/// structural rules.
///
/// ```rust
/// use ssn_core::is_valid_format;
///
/// assert!(is_valid_format("123456789"));
/// assert!(!is_valid_format("923456789"));
/// assert!(!is_valid_format(""));
/// ```
#[must_use]
pub fn is_valid_format(candidate: &str) -> bool {
    split_fields(candidate).is_some_and(|fields| {
        FormatRule::STRUCTURAL
            .iter()
            .all(|rule| rule.holds_on(&fields))
    })
}

/// Same as [`is_valid_format`]. Input that is not UTF-8 is rejected.
#[must_use]
pub fn is_valid_format_bytes(candidate: &[u8]) -> bool {
    std::str::from_utf8(candidate).is_ok_and(is_valid_format)
}

/// Alias of [`is_valid_format`], the name hosts call.
#[must_use]
pub fn validate(candidate: &str) -> bool {
    is_valid_format(candidate)
}

/// Check every rule, including AsciiDigits, and report each result.
///
/// Positional rules are skipped when the length is wrong.
#[must_use]
pub fn check_all(candidate: &str) -> RuleSummary {
    let mut results = Vec::with_capacity(FormatRule::COUNT);

    let length = candidate.chars().count();
    if length == SSN_DIGITS_COUNT {
        results.push(RuleResult::pass(FormatRule::Length));
    } else {
        results.push(RuleResult::fail(
            FormatRule::Length,
            format!("expected {SSN_DIGITS_COUNT} characters, got {length}"),
        ));
    }

    match candidate
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        None => results.push(RuleResult::pass(FormatRule::AsciiDigits)),
        Some((position, found)) => results.push(RuleResult::fail(
            FormatRule::AsciiDigits,
            format!("non-digit {found:?} at position {position}"),
        )),
    }

    if let Some(fields) = split_fields(candidate) {
        for rule in FormatRule::STRUCTURAL {
            if rule.holds_on(&fields) {
                results.push(RuleResult::pass(rule));
            } else {
                results.push(RuleResult::fail(rule, rule.violation_on(&fields)));
            }
        }
    }

    RuleSummary::from_results(results)
}

/// First rule `candidate` violates, in check order.
#[must_use]
pub fn first_violation(candidate: &str) -> Option<FormatRule> {
    check_all(candidate).first_failure().map(|r| r.rule)
}
