//! Per-locale rule tables.
//!
//! A [`RuleTable`] is pure configuration: vocabulary, a grouping strategy, a
//! scale-word ladder and a handful of behavior strategies selected once at
//! table construction time. Tables are `static`, immutable and shared
//! read-only across calls; the engine under `src/engine/` interprets them and
//! holds no state of its own.

use bitflags::bitflags;

use crate::{Gender, Grouping, PluralCategory, RenderedSegment, SegmentCtx};

bitflags! {
    /// Coarse per-locale behavior switches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct LocaleFlags: u8 {
        /// The conjunction is optional and off by default
        /// (`CardinalOptions::optional_and` turns it on).
        const OPTIONAL_AND = 1 << 0;
        /// Large ordinals fall back to plain suffixation; the forms are
        /// documented source behavior, not attested grammar.
        const NAIVE_LARGE_ORDINALS = 1 << 1;
    }
}

/// Immutable configuration for one locale.
pub(crate) struct RuleTable {
    /// BCP-47-ish lookup code ("en", "pt", "zh").
    pub code: &'static str,
    /// English name of the language, for listings.
    pub name: &'static str,
    pub zero: &'static str,
    pub negative: &'static str,
    /// Word spoken for the decimal mark ("point", "Komma", 点).
    pub decimal_mark: &'static str,
    /// Digit words used when reading a fractional part digit by digit.
    pub digits: [&'static str; 10],
    pub grouping: Grouping,
    pub default_gender: Gender,
    /// Pluralization class applied to scale words and currency nouns.
    pub plural: PluralRule,
    pub segment: SegmentRenderer,
    /// Scale-word ladder indexed by level - 1.
    pub scales: &'static [ScaleWord],
    /// Alternative ladder selected by `CardinalOptions::long_scale`.
    pub alt_scales: Option<&'static [ScaleWord]>,
    pub join: JoinRule,
    pub ordinal: OrdinalRule,
    pub currency: CurrencyRule,
    pub flags: LocaleFlags,
}

// --- Segment rendering strategies --------------------------------------------

/// Strategy for rendering one digit-group's value into words.
pub(crate) enum SegmentRenderer {
    /// Generic 0..999 builder driven by a [`TripletTable`].
    Triplet(&'static TripletTable),
    /// Generic 0..9999 builder for myriad-grouped locales.
    Myriad(&'static MyriadTable),
    /// The locale's segment grammar exceeds the generic tables.
    Custom(fn(u32, &SegmentCtx) -> RenderedSegment),
}

/// Vocabulary and composition rules for a 3-digit group.
pub(crate) struct TripletTable {
    /// Words for 0..=19. Index 0 is unused by the builder (zero groups are
    /// skipped); locales still fill it for clarity.
    pub ones: &'static [&'static str; 20],
    /// Feminine 0..=19 forms, where the locale inflects them.
    pub ones_feminine: Option<&'static [&'static str; 20]>,
    /// Words for 0, 10, 20, ..90; indices 0 and 1 unused.
    pub tens: &'static [&'static str; 10],
    pub hundreds: HundredsRule,
    pub compose: TensOnesJoin,
    /// Separator between the hundreds phrase and the remainder
    /// (" and " in British English, " " in most locales).
    pub hundred_rem_sep: &'static str,
    /// Word replacing the ones word when a final bare 1 closes the phrase
    /// (German "eins" against compound-internal "ein").
    pub standalone_one: Option<&'static str>,
}

pub(crate) enum HundredsRule {
    /// `<ones> <word>`; `omit_one` drops the multiplier for 100 exactly
    /// ("cento" vs "one hundred"), `joined` compounds them ("dreihundert").
    Multiplier { word: &'static str, omit_one: bool, joined: bool },
    /// Lexicalized forms indexed by the hundreds digit (Polish "dwieście").
    Lookup(&'static [&'static str; 10]),
}

pub(crate) enum TensOnesJoin {
    Space,
    Hyphen,
    Joined,
    /// `<ones><connector><tens>` (German "einundzwanzig").
    Inverted { connector: &'static str },
    /// Locale merge of the tens and ones words, in that argument order
    /// (Dutch diaeresis, Italian elision).
    Fuse(fn(&'static str, &'static str) -> String),
}

/// Vocabulary for a 4-digit myriad group.
pub(crate) struct MyriadTable {
    pub digits: [&'static str; 10],
    /// Position multipliers inside the group: ten, hundred, thousand.
    pub units: [&'static str; 3],
    /// Insert the zero digit word at internal positional gaps (一千零五).
    pub gap_zero: bool,
    /// Drop the "one" digit before ten/hundred/thousand positions
    /// (Japanese 百, Korean 백).
    pub omit_one_units: bool,
    /// Reduce a leading 一十 to 十 at the very front of the number
    /// (Mandarin 十六, but 一百一十六).
    pub reduce_leading_one_ten: bool,
}

// --- Scale words --------------------------------------------------------------

/// One rung of a locale's scale-word ladder.
pub(crate) struct ScaleWord {
    /// Power of ten this rung denotes (3 for thousand, 4 for 万).
    pub exponent: u32,
    pub forms: ScaleForms,
    /// How a governing value of exactly 1 is rendered.
    pub one: OneNumeral,
    /// Compound the scale word onto its numeral ("duemila").
    pub joined: bool,
    /// Gender the governing numeral agrees with (Russian feminine тысяча).
    pub gender: Gender,
}

impl ScaleWord {
    /// True when the governing numeral is left unspoken for `value`.
    pub fn omits_numeral(&self, value: u32) -> bool {
        match value {
            1 => matches!(self.one, OneNumeral::Omit),
            // Dual forms carry the "two" inside the word (Hebrew אלפיים).
            2 => matches!(self.forms, ScaleForms::Dual { .. }),
            _ => false,
        }
    }
}

/// Inflected forms of one scale word, selected by the locale's plural rule.
pub(crate) enum ScaleForms {
    Fixed(&'static str),
    Binary { one: &'static str, other: &'static str },
    Triple { one: &'static str, few: &'static str, many: &'static str },
    Dual { one: &'static str, two: &'static str, few: &'static str, many: &'static str },
}

impl ScaleForms {
    pub fn select(&self, rule: PluralRule, n: u64) -> &'static str {
        match self {
            ScaleForms::Fixed(w) => w,
            ScaleForms::Binary { one, other } => {
                if rule.category(n) == PluralCategory::One { one } else { other }
            }
            ScaleForms::Triple { one, few, many } => match rule.category(n) {
                PluralCategory::One => one,
                PluralCategory::Two | PluralCategory::Few => few,
                PluralCategory::Many => many,
            },
            ScaleForms::Dual { one, two, few, many } => match rule.category(n) {
                PluralCategory::One => one,
                PluralCategory::Two => two,
                PluralCategory::Few => few,
                PluralCategory::Many => many,
            },
        }
    }
}

/// Rendering of a governing value of exactly 1 before a scale word.
pub(crate) enum OneNumeral {
    /// Render the regular numeral ("one thousand").
    Keep,
    /// Omit it entirely (Turkish "bin", Finnish "tuhat").
    Omit,
    /// A dedicated word ("un milione", "ett hundre").
    Word(&'static str),
}

/// Locale pluralization class. Digit windows are fixed per variant; locales
/// differing in windows pick different variants rather than patching one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PluralRule {
    /// No inflection at all.
    Fixed,
    /// `one` iff n == 1.
    OneOther,
    /// `one` iff n % 10 == 1 and n % 100 != 11 (Latvian).
    LastOne,
    /// Russian school: teens are `many`; else last digit 1 is `one`,
    /// 2..=4 is `few`, the rest `many`.
    EastSlavic,
    /// Polish: `one` only for exactly 1; last digit 2..=4 outside teens is
    /// `few`; everything else `many`.
    WestSlavic,
    /// Czech/Slovak: `one` for 1, `few` for 2..=4 absolutely, else `many`.
    CzechSlovak,
    /// Lithuanian: teens are `many`; else last digit 1 is `one`, 2..=9 is
    /// `few`, and 0 `many`.
    Baltic,
    /// Semitic: 1 `one`, 2 `two`, 3..=10 (mod 100) `few`, else `many`.
    Semitic,
}

impl PluralRule {
    pub fn category(self, n: u64) -> PluralCategory {
        match self {
            PluralRule::Fixed => PluralCategory::One,
            PluralRule::OneOther => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::LastOne => {
                if n % 10 == 1 && n % 100 != 11 {
                    PluralCategory::One
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::EastSlavic => {
                let tail = n % 100;
                if (11..=14).contains(&tail) {
                    return PluralCategory::Many;
                }
                match n % 10 {
                    1 => PluralCategory::One,
                    2..=4 => PluralCategory::Few,
                    _ => PluralCategory::Many,
                }
            }
            PluralRule::WestSlavic => {
                if n == 1 {
                    return PluralCategory::One;
                }
                let tail = n % 100;
                if (12..=14).contains(&tail) {
                    return PluralCategory::Many;
                }
                match n % 10 {
                    2..=4 => PluralCategory::Few,
                    _ => PluralCategory::Many,
                }
            }
            PluralRule::CzechSlovak => match n {
                1 => PluralCategory::One,
                2..=4 => PluralCategory::Few,
                _ => PluralCategory::Many,
            },
            PluralRule::Baltic => {
                if (11..=19).contains(&(n % 100)) {
                    return PluralCategory::Many;
                }
                match n % 10 {
                    1 => PluralCategory::One,
                    2..=9 => PluralCategory::Few,
                    _ => PluralCategory::Many,
                }
            }
            PluralRule::Semitic => match n {
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                _ => match n % 100 {
                    3..=10 => PluralCategory::Few,
                    _ => PluralCategory::Many,
                },
            },
        }
    }
}

// --- Joining -------------------------------------------------------------------

/// How rendered groups and scale words are glued into the final phrase.
pub(crate) struct JoinRule {
    /// Separator between rendered groups.
    pub group_sep: &'static str,
    /// Separator between a group's numeral and its scale word.
    pub scale_sep: &'static str,
    /// Groups at scale levels below this compound without separators
    /// (German writes everything under a million as one word).
    pub compound_below: u32,
    pub conjunction: Option<Conjunction>,
    /// Zero word spoken at positional gaps (Mandarin 零).
    pub gap_zero: Option<&'static str>,
    /// Phonetic linker applied to a numeral phrase before its scale word
    /// (Filipino -ng / na).
    pub scale_link: Option<fn(&str) -> String>,
}

pub(crate) struct Conjunction {
    pub word: &'static str,
    pub rule: ConjunctionRule,
    /// Prefix the word directly onto the following group instead of spacing
    /// it on both sides.
    pub attached: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConjunctionRule {
    /// Before the final group when it lacks a hundred-component
    /// ("one thousand and one", but "one thousand one hundred").
    FinalNoHundred,
    /// Before the final group when it lacks a hundred-component or is an
    /// exact multiple of one hundred (Portuguese "e").
    FinalSmallOrRoundHundred,
    /// [`ConjunctionRule::FinalNoHundred`], applied only when the locale
    /// sets [`LocaleFlags::OPTIONAL_AND`] and the caller opts in
    /// (Dutch "en").
    Optional,
}

// --- Ordinals --------------------------------------------------------------------

pub(crate) struct OrdinalRule {
    /// Whole-number irregular forms, consulted before any transform.
    pub irregular: &'static [(u64, &'static str)],
    pub units: OrdinalUnits,
}

pub(crate) enum OrdinalUnits {
    /// Rewrite the final word of the cardinal phrase (English -th family,
    /// German -te/-ste, Turkish vowel harmony).
    FinalWord(fn(&str) -> String),
    /// Replace the lowest non-zero group with a table-driven ordinal;
    /// `scale` holds per-level ordinal scale words (Polish tysięczny).
    Composed { small: fn(u64) -> String, scale: &'static [&'static str] },
    /// Wrap the whole cardinal (Mandarin 第-, Japanese -番目, Indonesian ke-).
    Affix { prefix: &'static str, suffix: &'static str },
}

// --- Currency --------------------------------------------------------------------

pub(crate) struct CurrencyRule {
    pub major: UnitNoun,
    pub minor: UnitNoun,
    /// Separator between the major and minor phrases (" and ", " y ").
    pub joiner: &'static str,
    /// Gender the major-amount numerals agree with, when it differs from
    /// the cardinal default (Hebrew masculine shekels).
    pub major_gender: Option<Gender>,
    pub minor_gender: Option<Gender>,
}

/// Inflected unit-noun forms, selected through the locale's plural rule.
pub(crate) struct UnitNoun {
    pub forms: ScaleForms,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn east_slavic_windows() {
        let r = PluralRule::EastSlavic;
        assert_eq!(r.category(1), PluralCategory::One);
        assert_eq!(r.category(21), PluralCategory::One);
        assert_eq!(r.category(2), PluralCategory::Few);
        assert_eq!(r.category(4), PluralCategory::Few);
        assert_eq!(r.category(24), PluralCategory::Few);
        assert_eq!(r.category(5), PluralCategory::Many);
        assert_eq!(r.category(11), PluralCategory::Many);
        assert_eq!(r.category(12), PluralCategory::Many);
        assert_eq!(r.category(111), PluralCategory::Many);
    }

    #[test]
    fn west_slavic_excludes_compound_one() {
        let r = PluralRule::WestSlavic;
        assert_eq!(r.category(1), PluralCategory::One);
        assert_eq!(r.category(21), PluralCategory::Many);
        assert_eq!(r.category(22), PluralCategory::Few);
        assert_eq!(r.category(12), PluralCategory::Many);
        assert_eq!(r.category(5), PluralCategory::Many);
    }

    #[test]
    fn czech_few_is_absolute() {
        let r = PluralRule::CzechSlovak;
        assert_eq!(r.category(2), PluralCategory::Few);
        assert_eq!(r.category(4), PluralCategory::Few);
        assert_eq!(r.category(22), PluralCategory::Many);
    }

    #[test]
    fn latvian_last_one() {
        let r = PluralRule::LastOne;
        assert_eq!(r.category(1), PluralCategory::One);
        assert_eq!(r.category(21), PluralCategory::One);
        assert_eq!(r.category(11), PluralCategory::Many);
        assert_eq!(r.category(111), PluralCategory::Many);
    }

    #[test]
    fn baltic_wide_few() {
        let r = PluralRule::Baltic;
        assert_eq!(r.category(1), PluralCategory::One);
        assert_eq!(r.category(21), PluralCategory::One);
        assert_eq!(r.category(9), PluralCategory::Few);
        assert_eq!(r.category(32), PluralCategory::Few);
        assert_eq!(r.category(10), PluralCategory::Many);
        assert_eq!(r.category(11), PluralCategory::Many);
        assert_eq!(r.category(19), PluralCategory::Many);
    }

    #[test]
    fn semitic_dual() {
        let r = PluralRule::Semitic;
        assert_eq!(r.category(1), PluralCategory::One);
        assert_eq!(r.category(2), PluralCategory::Two);
        assert_eq!(r.category(3), PluralCategory::Few);
        assert_eq!(r.category(10), PluralCategory::Few);
        assert_eq!(r.category(11), PluralCategory::Many);
        assert_eq!(r.category(103), PluralCategory::Few);
    }
}
