//! Mandarin Chinese. Myriad grouping, 零 at positional gaps, leading 一十
//! reduction, 第- ordinals.

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, MyriadTable, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping};

const DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

static MYRIAD: MyriadTable = MyriadTable {
    digits: DIGITS,
    units: ["十", "百", "千"],
    gap_zero: true,
    omit_one_units: false,
    reduce_leading_one_ten: true,
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

static SCALES: [ScaleWord; 3] = [rung(4, "万"), rung(8, "亿"), rung(12, "兆")];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "zh",
    name: "Mandarin Chinese",
    zero: "零",
    negative: "负",
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
        gap_zero: Some("零"),
        scale_link: None,
    },
    ordinal: OrdinalRule { irregular: &[], units: OrdinalUnits::Affix { prefix: "第", suffix: "" } },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("元") },
        minor: UnitNoun { forms: ScaleForms::Fixed("分") },
        joiner: "",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};

#[cfg(test)]
mod tests {
    use crate::locale;

    #[test]
    fn cardinals() {
        let zh = locale("zh").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("零", 0),
            ("十六", 16),
            ("二十一", 21),
            ("一百零五", 105),
            ("一百一十六", 116),
            ("一千二百三十四", 1_234),
            ("一万", 10_000),
            ("一万零五", 10_005),
            ("十万", 100_000),
            ("一亿", 100_000_000),
            ("一亿零五万", 100_050_000),
            ("一亿二千三百四十五万六千七百八十九", 123_456_789),
            ("负五", -5),
        ];
        for (expected, input) in cases {
            assert_eq!(zh.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn fractions() {
        let zh = locale("zh").unwrap();
        let m = crate::Magnitude::parse("3.14").unwrap();
        assert_eq!(zh.cardinal(&m, &Default::default()), "三点一四");
    }

    #[test]
    fn ordinals() {
        let zh = locale("zh").unwrap();
        assert_eq!(zh.ordinal(1u64).unwrap(), "第一");
        assert_eq!(zh.ordinal(21u64).unwrap(), "第二十一");
    }

    #[test]
    fn currency() {
        let zh = locale("zh").unwrap();
        let amount = crate::CurrencyAmount::parse("5.25").unwrap();
        assert_eq!(zh.currency(&amount, &Default::default()), "五元二十五分");
    }
}
