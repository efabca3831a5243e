//! Japanese. Myriad grouping with bare position units (十六, 百五),
//! -番目 ordinals.

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, MyriadTable, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping};

const DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

static MYRIAD: MyriadTable = MyriadTable {
    digits: DIGITS,
    units: ["十", "百", "千"],
    gap_zero: false,
    omit_one_units: true,
    reduce_leading_one_ten: false,
};

const fn rung(exponent: u32, word: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Fixed(word),
        one: OneNumeral::Keep,
        joined: true,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 4] = [rung(4, "万"), rung(8, "億"), rung(12, "兆"), rung(16, "京")];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "ja",
    name: "Japanese",
    zero: "零",
    negative: "マイナス",
    decimal_mark: "点",
    digits: DIGITS,
    grouping: Grouping::Myriad,
    default_gender: Gender::Masculine,
    plural: PluralRule::Fixed,
    segment: SegmentRenderer::Myriad(&MYRIAD),
    scales: &SCALES,
    alt_scales: None,
    join: JoinRule {
        group_sep: "",
        scale_sep: "",
        compound_below: 0,
        conjunction: None,
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule { irregular: &[], units: OrdinalUnits::Affix { prefix: "", suffix: "番目" } },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("円") },
        minor: UnitNoun { forms: ScaleForms::Fixed("銭") },
        joiner: "",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};
