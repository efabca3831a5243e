//! Korean (Sino-Korean numerals). Myriad grouping with spaced 만-blocks,
//! bare 만 for ten thousand, 제- ordinals.

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, MyriadTable, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping};

const DIGITS: [&str; 10] = ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

static MYRIAD: MyriadTable = MyriadTable {
    digits: DIGITS,
    units: ["십", "백", "천"],
    gap_zero: false,
    omit_one_units: true,
    reduce_leading_one_ten: false,
};

static SCALES: [ScaleWord; 3] = [
    ScaleWord {
        exponent: 4,
        forms: ScaleForms::Fixed("만"),
        one: OneNumeral::Omit,
        joined: true,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 8,
        forms: ScaleForms::Fixed("억"),
        one: OneNumeral::Keep,
        joined: true,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 12,
        forms: ScaleForms::Fixed("조"),
        one: OneNumeral::Keep,
        joined: true,
        gender: Gender::Masculine,
    },
];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "ko",
    name: "Korean",
    zero: "영",
    negative: "마이너스",
    decimal_mark: "점",
    digits: DIGITS,
    grouping: Grouping::Myriad,
    default_gender: Gender::Masculine,
    plural: PluralRule::Fixed,
    segment: SegmentRenderer::Myriad(&MYRIAD),
    scales: &SCALES,
    alt_scales: None,
    join: JoinRule {
        group_sep: " ",
        scale_sep: "",
        compound_below: 0,
        conjunction: None,
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule { irregular: &[], units: OrdinalUnits::Affix { prefix: "제", suffix: "" } },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("원") },
        minor: UnitNoun { forms: ScaleForms::Fixed("전") },
        joiner: " ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};
