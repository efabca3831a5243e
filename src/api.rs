use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::engine::{self, RenderOptions};
use crate::locales;
use crate::magnitude::{CurrencyAmount, Magnitude};
use crate::table::{LocaleFlags, RuleTable};
use crate::Gender;

/// Errors reported at the crate's edges.
///
/// The rendering core itself is total: once a [`Magnitude`] or
/// [`CurrencyAmount`] exists, cardinal and currency rendering cannot fail.
/// Errors come from locale lookup and from input validation, and distinguish
/// wrong *type* (not a number at all) from wrong *value* (a number the
/// operation rejects).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The locale code is not in the registry. No silent fallback.
    UnsupportedLocale(String),
    /// The input is not numeric text.
    NotANumber(String),
    /// The input is numeric but shaped wrongly for the operation.
    InvalidValue { input: String, reason: &'static str },
    /// Ordinal rendering requires a positive integer.
    OrdinalNotPositive,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedLocale(code) => write!(f, "unsupported locale '{code}'"),
            Error::NotANumber(input) => write!(f, "not a number: '{input}'"),
            Error::InvalidValue { input, reason } => write!(f, "invalid value '{input}': {reason}"),
            Error::OrdinalNotPositive => write!(f, "ordinal rendering requires a positive integer"),
        }
    }
}

impl std::error::Error for Error {}

/// Options for cardinal (and ordinal) rendering.
///
/// Unknown-to-the-locale options are ignored; each key only changes output
/// where the locale's grammar has the corresponding choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalOptions {
    /// Numeral gender, for locales whose numerals inflect.
    pub gender: Option<Gender>,
    /// Speak the locale's optional conjunction (Dutch "en").
    pub optional_and: bool,
    /// Use the locale's long-scale ladder where one exists (milliard at
    /// 10^9 instead of billion).
    pub long_scale: bool,
}

/// Options for currency rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyOptions {
    /// Override the numeral gender for both amount parts. By default each
    /// part agrees with its unit noun (Hebrew masculine shekels, feminine
    /// agorot).
    pub gender: Option<Gender>,
}

/// A handle on one locale's rule table.
///
/// Cheap to copy; all state is a `'static` borrow of the table. Tables are
/// immutable, so handles can be shared freely across threads.
#[derive(Clone, Copy)]
pub struct Locale {
    table: &'static RuleTable,
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale").field("code", &self.table.code).finish()
    }
}

/// Look up a locale by code.
///
/// # Example
/// ```
/// let en = verbanum::locale("en").unwrap();
/// assert_eq!(en.cardinal(&42i64.into(), &Default::default()), "forty-two");
/// assert!(verbanum::locale("tlh").is_err());
/// ```
pub fn locale(code: &str) -> Result<Locale, Error> {
    locales::registry()
        .get(code)
        .map(|table| Locale { table })
        .ok_or_else(|| Error::UnsupportedLocale(code.to_string()))
}

/// Codes of every registered locale, sorted.
pub fn available_locales() -> Vec<&'static str> {
    let mut codes: Vec<_> = locales::registry().keys().copied().collect();
    codes.sort_unstable();
    codes
}

impl Locale {
    /// The registry code ("en", "pt", "zh").
    pub fn code(&self) -> &'static str {
        self.table.code
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.table.name
    }

    /// True when this locale's large ordinals fall back to plain
    /// suffixation. The forms reproduce documented source behavior, not
    /// attested grammar; callers needing verified forms can screen on this.
    pub fn naive_large_ordinals(&self) -> bool {
        self.table.flags.contains(LocaleFlags::NAIVE_LARGE_ORDINALS)
    }

    /// Render a cardinal phrase ("one hundred and one").
    pub fn cardinal(&self, value: &Magnitude, options: &CardinalOptions) -> String {
        engine::cardinal::render(self.table, value, &render_options(options))
    }

    /// Render an ordinal phrase ("one hundred and first").
    ///
    /// Zero is rejected; negatives and fractions cannot reach this entry
    /// point (the argument is an unsigned integer).
    pub fn ordinal(&self, n: impl Into<BigUint>) -> Result<String, Error> {
        self.ordinal_with(n, &CardinalOptions::default())
    }

    /// [`Locale::ordinal`] with explicit options.
    pub fn ordinal_with(&self, n: impl Into<BigUint>, options: &CardinalOptions) -> Result<String, Error> {
        let n = n.into();
        if n.is_zero() {
            return Err(Error::OrdinalNotPositive);
        }
        Ok(engine::ordinal::render(self.table, &n, &render_options(options)))
    }

    /// Render a currency phrase ("one dollar and fifty cents").
    pub fn currency(&self, amount: &CurrencyAmount, options: &CurrencyOptions) -> String {
        let opts = RenderOptions { gender: options.gender, ..RenderOptions::default() };
        engine::currency::render(self.table, amount, &opts)
    }
}

fn render_options(options: &CardinalOptions) -> RenderOptions {
    RenderOptions { gender: options.gender, optional_and: options.optional_and, long_scale: options.long_scale }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_locale_is_a_typed_error() {
        match locale("xx") {
            Err(Error::UnsupportedLocale(code)) => assert_eq!(code, "xx"),
            other => panic!("expected UnsupportedLocale, got {other:?}"),
        }
    }

    #[test]
    fn registry_lists_every_locale_once() {
        let codes = available_locales();
        assert!(codes.len() >= 24, "expected dozens of locales, got {}", codes.len());
        let mut dedup = codes.clone();
        dedup.dedup();
        assert_eq!(codes, dedup);
        assert!(codes.contains(&"en"));
        assert!(codes.contains(&"zh"));
        assert!(codes.contains(&"hi"));
    }

    #[test]
    fn naive_large_ordinal_locales_are_flagged() {
        assert!(locale("tr").unwrap().naive_large_ordinals());
        assert!(locale("fi").unwrap().naive_large_ordinals());
        assert!(locale("no").unwrap().naive_large_ordinals());
        assert!(!locale("en").unwrap().naive_large_ordinals());
        assert!(!locale("pl").unwrap().naive_large_ordinals());
    }

    #[test]
    fn ordinal_rejects_zero() {
        let en = locale("en").unwrap();
        assert_eq!(en.ordinal(0u64), Err(Error::OrdinalNotPositive));
    }

    #[test]
    fn zero_law_holds_for_every_locale() {
        for code in available_locales() {
            let loc = locale(code).unwrap();
            let zero = loc.cardinal(&0i64.into(), &Default::default());
            assert!(!zero.is_empty(), "{code}: zero word missing");
            // -0 is the same magnitude; no sign word may leak in.
            let m = Magnitude::new(true, BigUint::zero(), None).unwrap();
            assert_eq!(loc.cardinal(&m, &Default::default()), zero, "{code}");
        }
    }

    #[test]
    fn sign_law_holds_for_every_locale() {
        for code in available_locales() {
            let loc = locale(code).unwrap();
            let positive = loc.cardinal(&472i64.into(), &Default::default());
            let negative = loc.cardinal(&(-472i64).into(), &Default::default());
            assert!(negative.ends_with(&positive), "{code}: '{negative}' vs '{positive}'");
            assert!(negative.len() > positive.len(), "{code}: sign word missing");
        }
    }

    #[test]
    fn determinism() {
        for code in available_locales() {
            let loc = locale(code).unwrap();
            let a = loc.cardinal(&987_654_321i64.into(), &Default::default());
            let b = loc.cardinal(&987_654_321i64.into(), &Default::default());
            assert_eq!(a, b, "{code}");
        }
    }
}
