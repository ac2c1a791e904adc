//! Digit strings and their `DDD-DD-DDDD` view.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::rules::Fields;
use crate::validator::{is_valid_format, SSN_DIGITS_COUNT};

/// Exactly 9 ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Build from digit values, each in 0..=9.
    pub fn from_digits(digits: [u8; SSN_DIGITS_COUNT]) -> Result<Self, ParseError> {
        let mut text = String::with_capacity(SSN_DIGITS_COUNT);
        for (position, &digit) in digits.iter().enumerate() {
            let c = char::from_digit(u32::from(digit), 10).ok_or(ParseError::NonDigit {
                found: char::from(digit),
                position,
            })?;
            text.push(c);
        }
        Ok(Self(text))
    }

    /// Build from characters already known to be ASCII digits.
    pub(crate) fn from_fields(fields: &Fields) -> Self {
        debug_assert!(fields.iter().all(char::is_ascii_digit));
        Self(fields.iter().collect())
    }

    /// The digits as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether these digits pass the format predicate.
    #[must_use]
    pub fn is_valid_format(&self) -> bool {
        is_valid_format(&self.0)
    }
}

impl FromStr for DigitString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != SSN_DIGITS_COUNT {
            return Err(ParseError::Length {
                expected: SSN_DIGITS_COUNT,
                actual,
            });
        }
        if let Some((position, found)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseError::NonDigit { found, position });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A digit string shown as `DDD-DD-DDDD`.
///
/// Holds no data of its own; it is a view of the underlying digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedSsn {
    digits: DigitString,
}

impl FormattedSsn {
    /// Wrap a digit string.
    #[must_use]
    pub fn new(digits: DigitString) -> Self {
        Self { digits }
    }

    /// The digits with hyphens stripped.
    #[must_use]
    pub fn digits(&self) -> &DigitString {
        &self.digits
    }

    /// Consume and return the digits.
    #[must_use]
    pub fn into_digits(self) -> DigitString {
        self.digits
    }

    /// First three digits.
    #[must_use]
    pub fn area(&self) -> &str {
        &self.digits.as_str()[0..3]
    }

    /// Middle two digits.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.digits.as_str()[3..5]
    }

    /// Last four digits.
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.digits.as_str()[5..9]
    }

    /// Whether the underlying digits pass the format predicate.
    #[must_use]
    pub fn is_valid_format(&self) -> bool {
        self.digits.is_valid_format()
    }
}

impl fmt::Display for FormattedSsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.area(), self.group(), self.serial())
    }
}

impl FromStr for FormattedSsn {
    type Err = ParseError;

    /// Parse `DDD-DD-DDDD`. Does not apply the format predicate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let layout_error = || ParseError::Layout {
            input: s.to_string(),
        };

        let mut parts = s.split('-');
        let (Some(area), Some(group), Some(serial), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(layout_error());
        };
        if area.chars().count() != 3 || group.chars().count() != 2 || serial.chars().count() != 4 {
            return Err(layout_error());
        }

        let digits: DigitString = format!("{area}{group}{serial}").parse()?;
        Ok(Self::new(digits))
    }
}

impl From<DigitString> for FormattedSsn {
    fn from(digits: DigitString) -> Self {
        Self::new(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digits() {
        let digits = DigitString::from_digits([1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(digits.as_str(), "123456789");
        assert!(digits.is_valid_format());
    }

    #[test]
    fn test_from_digits_out_of_range() {
        let err = DigitString::from_digits([1, 2, 3, 4, 10, 6, 7, 8, 9]).unwrap_err();
        assert!(matches!(err, ParseError::NonDigit { position: 4, .. }));
    }

    #[test]
    fn test_parse_digit_string() {
        assert!("123456789".parse::<DigitString>().is_ok());
        assert_eq!(
            "1234".parse::<DigitString>(),
            Err(ParseError::Length {
                expected: 9,
                actual: 4
            })
        );
        assert_eq!(
            "12345678x".parse::<DigitString>(),
            Err(ParseError::NonDigit {
                found: 'x',
                position: 8
            })
        );
    }

    #[test]
    fn test_formatting() {
        let ssn = FormattedSsn::new("123456789".parse().unwrap());
        assert_eq!(ssn.to_string(), "123-45-6789");
        assert_eq!(ssn.area(), "123");
        assert_eq!(ssn.group(), "45");
        assert_eq!(ssn.serial(), "6789");
    }

    #[test]
    fn test_digits_strip_hyphens() {
        let ssn = FormattedSsn::new("078051120".parse().unwrap());
        assert_eq!(ssn.digits().as_str(), ssn.to_string().replace('-', ""));
    }

    #[test]
    fn test_parse_formatted() {
        let ssn: FormattedSsn = "123-45-6789".parse().unwrap();
        assert_eq!(ssn.digits().as_str(), "123456789");
        assert!(ssn.is_valid_format());

        // Layout parses even when the predicate rejects it.
        let rejected: FormattedSsn = "666-45-6789".parse().unwrap();
        assert!(!rejected.is_valid_format());
    }

    #[test]
    fn test_parse_formatted_bad_layout() {
        for input in [
            "123456789",
            "12-345-6789",
            "123-45-678-9",
            "123-45-678",
            "",
            "1é-45-6789",
        ] {
            assert!(
                matches!(input.parse::<FormattedSsn>(), Err(ParseError::Layout { .. })),
                "{input:?} should be a layout error"
            );
        }
        assert!(matches!(
            "12a-45-6789".parse::<FormattedSsn>(),
            Err(ParseError::NonDigit { .. })
        ));
    }
}
