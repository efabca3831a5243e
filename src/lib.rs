extern crate self as verbanum;

mod api;
mod engine;
mod locales;
mod magnitude;
mod table;

pub use api::{CardinalOptions, CurrencyOptions, Error, Locale, available_locales, locale};
pub use magnitude::{CurrencyAmount, Magnitude};

/// Re-exported so callers can hand arbitrary-precision integers to
/// [`Locale::ordinal`] without naming the dependency themselves.
pub use num_bigint::BigUint;

// --- Internal types ---------------------------------------------------------

/// Grammatical gender requested for a rendering.
///
/// Only meaningful for locales whose numerals inflect (Spanish, Russian,
/// Hebrew, ...); the rest ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// How a locale slices the integer magnitude into digit-groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Grouping {
    /// Western 3-digit groups (thousand, million, ...).
    Thousands,
    /// East Asian 4-digit groups (万, 億, ...).
    Myriad,
    /// South Asian 3-2-2 groups (thousand, lakh, crore, ...).
    SouthAsian,
}

impl Grouping {
    /// Exclusive upper bound of a group's value at `level`.
    pub fn ceiling(self, level: u32) -> u32 {
        match self {
            Grouping::Thousands => 1000,
            Grouping::Myriad => 10_000,
            Grouping::SouthAsian => {
                if level == 0 {
                    1000
                } else {
                    100
                }
            }
        }
    }

    /// Power of ten a group's value is multiplied by at `level`.
    pub fn exponent(self, level: u32) -> u32 {
        match self {
            Grouping::Thousands => 3 * level,
            Grouping::Myriad => 4 * level,
            Grouping::SouthAsian => {
                if level == 0 {
                    0
                } else {
                    3 + 2 * (level - 1)
                }
            }
        }
    }
}

/// One slice of the magnitude: `value * 10^exponent(level)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DigitGroup {
    pub value: u32,
    pub level: u32,
}

/// The rendering of one digit-group, with the metadata the assembler needs.
///
/// `has_hundred` is computed from the hundreds digit when the segment is
/// built; the assembler must never re-derive it from the phrase text.
#[derive(Debug, Clone)]
pub(crate) struct RenderedSegment {
    pub phrase: String,
    pub has_hundred: bool,
    /// The group renders as its scale word alone (omitted "one" numeral).
    pub scale_only: bool,
}

impl RenderedSegment {
    pub fn new(phrase: String, has_hundred: bool) -> Self {
        RenderedSegment { phrase, has_hundred, scale_only: false }
    }

    /// Segment consisting of a bare scale word.
    pub fn scale_only() -> Self {
        RenderedSegment { phrase: String::new(), has_hundred: false, scale_only: true }
    }
}

/// Word-form class selected by a [`table::PluralRule`] for a governing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PluralCategory {
    One,
    Two,
    Few,
    Many,
}

/// Context handed to a segment renderer alongside the group value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SegmentCtx {
    /// This is the lowest-order non-zero group; nothing follows it.
    pub final_group: bool,
    /// A scale word follows this group (its level is above zero).
    pub before_scale: bool,
    /// This is the most significant group of the whole number.
    pub leading: bool,
    /// Gender the group's numerals must agree with.
    pub gender: Gender,
}
