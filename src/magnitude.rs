//! Input values handed to the engine.
//!
//! This is the value-parser edge of the crate: it decides sign, splits
//! integer and fractional digits, rejects non-numeric text and clamps
//! currency amounts to two minor-unit digits. Everything past this module
//! assumes validated input and is total.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::api::Error;

/// A validated numeric magnitude: sign, arbitrary-precision integer part and
/// an optional fractional digit string (leading zeros preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magnitude {
    negative: bool,
    integer: BigUint,
    fraction: Option<String>,
}

impl Magnitude {
    /// Build a magnitude from parts. An empty `fraction` string means
    /// "absent"; non-digit characters in it are a wrong-value error.
    pub fn new(negative: bool, integer: BigUint, fraction: Option<&str>) -> Result<Self, Error> {
        let fraction = match fraction {
            None => None,
            Some("") => None,
            Some(digits) => {
                if !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::InvalidValue { input: digits.to_string(), reason: "fractional part must be decimal digits" });
                }
                Some(digits.to_string())
            }
        };
        Ok(Magnitude { negative, integer, fraction })
    }

    /// Parse a plain decimal string: optional `-`/`+` sign, integer digits,
    /// optional `.` and fractional digits.
    ///
    /// Wrong *type* (empty input, stray characters) is [`Error::NotANumber`];
    /// wrong *value* shapes (a lone `.`) are [`Error::InvalidValue`].
    pub fn parse(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::NotANumber(text.to_string()));
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits, None),
        };

        if int_part.is_empty() && frac_part.is_none_or(str::is_empty) {
            return Err(Error::InvalidValue { input: text.to_string(), reason: "no digits around the decimal point" });
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.unwrap_or("0").bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::NotANumber(text.to_string()));
        }

        let integer = if int_part.is_empty() {
            BigUint::zero()
        } else {
            // All bytes are ASCII digits at this point.
            BigUint::parse_bytes(int_part.as_bytes(), 10).expect("digit-checked integer part")
        };

        Magnitude::new(negative, integer, frac_part)
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub(crate) fn integer(&self) -> &BigUint {
        &self.integer
    }

    pub(crate) fn fraction(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// True when both the integer part and the fraction are zero or absent.
    pub(crate) fn is_zero(&self) -> bool {
        self.integer.is_zero() && self.fraction.is_none()
    }
}

impl From<u64> for Magnitude {
    fn from(n: u64) -> Self {
        Magnitude { negative: false, integer: BigUint::from(n), fraction: None }
    }
}

impl From<i64> for Magnitude {
    fn from(n: i64) -> Self {
        Magnitude { negative: n < 0, integer: BigUint::from(n.unsigned_abs()), fraction: None }
    }
}

impl From<u128> for Magnitude {
    fn from(n: u128) -> Self {
        Magnitude { negative: false, integer: BigUint::from(n), fraction: None }
    }
}

impl From<i128> for Magnitude {
    fn from(n: i128) -> Self {
        Magnitude { negative: n < 0, integer: BigUint::from(n.unsigned_abs()), fraction: None }
    }
}

impl From<BigUint> for Magnitude {
    fn from(integer: BigUint) -> Self {
        Magnitude { negative: false, integer, fraction: None }
    }
}

/// A monetary amount: sign, arbitrary-precision major units and minor units
/// already clamped to two digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    negative: bool,
    major: BigUint,
    minor: u8,
}

impl CurrencyAmount {
    /// Build an amount from parts. `minor` above 99 is a wrong-value error.
    pub fn new(negative: bool, major: BigUint, minor: u8) -> Result<Self, Error> {
        if minor > 99 {
            return Err(Error::InvalidValue { input: minor.to_string(), reason: "minor units must be 0..=99" });
        }
        Ok(CurrencyAmount { negative, major, minor })
    }

    /// Parse a decimal amount, truncating the fractional part to two
    /// minor-unit digits (`"1.509"` becomes 1 major, 50 minor).
    pub fn parse(text: &str) -> Result<Self, Error> {
        let m = Magnitude::parse(text)?;
        let minor = match m.fraction() {
            None => 0,
            Some(digits) => {
                let mut cents = [b'0'; 2];
                for (slot, b) in cents.iter_mut().zip(digits.bytes()) {
                    *slot = b;
                }
                (cents[0] - b'0') * 10 + (cents[1] - b'0')
            }
        };
        CurrencyAmount::new(m.negative, m.integer, minor)
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub(crate) fn major(&self) -> &BigUint {
        &self.major
    }

    pub(crate) fn minor(&self) -> u8 {
        self.minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        let m = Magnitude::parse("1234").unwrap();
        assert!(!m.is_negative());
        assert_eq!(m.integer(), &BigUint::from(1234u32));
        assert_eq!(m.fraction(), None);
    }

    #[test]
    fn parses_sign_and_fraction() {
        let m = Magnitude::parse("-12.050").unwrap();
        assert!(m.is_negative());
        assert_eq!(m.integer(), &BigUint::from(12u32));
        assert_eq!(m.fraction(), Some("050"));

        let m = Magnitude::parse("+7").unwrap();
        assert!(!m.is_negative());
    }

    #[test]
    fn empty_fraction_is_absent() {
        let m = Magnitude::new(false, BigUint::from(5u32), Some("")).unwrap();
        assert_eq!(m.fraction(), None);

        // "5." parses as integer five with no fraction.
        let m = Magnitude::parse("5.").unwrap();
        assert_eq!(m.fraction(), None);
        assert_eq!(m.integer(), &BigUint::from(5u32));
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(matches!(Magnitude::parse(""), Err(Error::NotANumber(_))));
        assert!(matches!(Magnitude::parse("abc"), Err(Error::NotANumber(_))));
        assert!(matches!(Magnitude::parse("1e5"), Err(Error::NotANumber(_))));
        assert!(matches!(Magnitude::parse("."), Err(Error::InvalidValue { .. })));
    }

    #[test]
    fn parses_arbitrary_precision() {
        let m = Magnitude::parse("123456789012345678901234567890").unwrap();
        assert_eq!(m.integer().to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn currency_truncates_to_two_digits() {
        let a = CurrencyAmount::parse("1.509").unwrap();
        assert_eq!(a.major(), &BigUint::from(1u32));
        assert_eq!(a.minor(), 50);

        let a = CurrencyAmount::parse("2.5").unwrap();
        assert_eq!(a.minor(), 50);

        let a = CurrencyAmount::parse("3").unwrap();
        assert_eq!(a.minor(), 0);
    }

    #[test]
    fn currency_rejects_out_of_range_minor() {
        assert!(CurrencyAmount::new(false, BigUint::zero(), 100).is_err());
    }
}
