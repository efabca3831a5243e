//! Arabic (MSA, nominative, case endings simplified). Inverted compound
//! tens (واحد وعشرون), dual scale forms, the و conjunction carried by the
//! group separator itself.

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule, RuleTable,
    ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping, RenderedSegment, SegmentCtx};

static MASCULINE: [&str; 20] = [
    "صفر", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة", "عشرة",
    "أحد عشر", "اثنا عشر", "ثلاثة عشر", "أربعة عشر", "خمسة عشر", "ستة عشر", "سبعة عشر",
    "ثمانية عشر", "تسعة عشر",
];

static FEMININE: [&str; 20] = [
    "صفر", "واحدة", "اثنتان", "ثلاث", "أربع", "خمس", "ست", "سبع", "ثمان", "تسع", "عشر",
    "إحدى عشرة", "اثنتا عشرة", "ثلاث عشرة", "أربع عشرة", "خمس عشرة", "ست عشرة", "سبع عشرة",
    "ثمان عشرة", "تسع عشرة",
];

static TENS: [&str; 10] =
    ["", "", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون"];

static HUNDREDS: [&str; 10] = [
    "", "مئة", "مئتان", "ثلاثمئة", "أربعمئة", "خمسمئة", "ستمئة", "سبعمئة", "ثمانمئة", "تسعمئة",
];

fn unit_word(n: u32, ctx: &SegmentCtx) -> &'static str {
    if ctx.gender == Gender::Feminine {
        FEMININE[n as usize]
    } else {
        MASCULINE[n as usize]
    }
}

fn segment(value: u32, ctx: &SegmentCtx) -> RenderedSegment {
    let hundreds = value / 100;
    let rem = value % 100;

    let mut comps: Vec<String> = Vec::new();
    if hundreds > 0 {
        comps.push(HUNDREDS[hundreds as usize].to_string());
    }

    if (1..20).contains(&rem) {
        comps.push(unit_word(rem, ctx).to_string());
    } else if rem >= 20 {
        let tens = TENS[(rem / 10) as usize];
        if rem % 10 == 0 {
            comps.push(tens.to_string());
        } else {
            // Ones precede the tens: واحد وعشرون.
            comps.push(format!("{} و{tens}", unit_word(rem % 10, ctx)));
        }
    }

    RenderedSegment::new(comps.join(" و"), hundreds > 0)
}

const fn rung(one: &'static str, two: &'static str, few: &'static str, exponent: u32) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Dual { one, two, few, many: one },
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 4] = [
    rung("ألف", "ألفان", "آلاف", 3),
    rung("مليون", "مليونان", "ملايين", 6),
    rung("مليار", "ملياران", "مليارات", 9),
    rung("ترليون", "ترليونان", "ترليونات", 12),
];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "ar",
    name: "Arabic",
    zero: "صفر",
    negative: "سالب",
    decimal_mark: "فاصلة",
    digits: ["صفر", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::Semitic,
    segment: SegmentRenderer::Custom(segment),
    scales: &SCALES,
    alt_scales: None,
    join: JoinRule {
        // The group separator carries the conjunction: ألف ومئة.
        group_sep: " و",
        scale_sep: " ",
        compound_below: 0,
        conjunction: None,
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule {
        irregular: &[
            (1, "أول"),
            (2, "ثان"),
            (3, "ثالث"),
            (4, "رابع"),
            (5, "خامس"),
            (6, "سادس"),
            (7, "سابع"),
            (8, "ثامن"),
            (9, "تاسع"),
            (10, "عاشر"),
        ],
        units: OrdinalUnits::Affix { prefix: "", suffix: "" },
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Dual { one: "دينار", two: "ديناران", few: "دنانير", many: "دينار" } },
        minor: UnitNoun { forms: ScaleForms::Dual { one: "فلس", two: "فلسان", few: "فلوس", many: "فلس" } },
        joiner: " و",
        major_gender: Some(Gender::Masculine),
        minor_gender: Some(Gender::Masculine),
    },
    flags: LocaleFlags::empty(),
};

#[cfg(test)]
mod tests {
    use crate::{locale, CardinalOptions, Gender};

    #[test]
    fn cardinals() {
        let ar = locale("ar").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("صفر", 0),
            ("واحد", 1),
            ("اثنان", 2),
            ("أحد عشر", 11),
            ("عشرون", 20),
            ("واحد وعشرون", 21),
            ("مئة", 100),
            ("مئة وثلاثة وعشرون", 123),
            ("مئتان", 200),
            ("ألف", 1_000),
            ("ألف ومئة", 1_100),
            ("ألفان", 2_000),
            ("ثلاثة آلاف", 3_000),
            ("أحد عشر ألف", 11_000),
            ("مليون", 1_000_000),
            ("مليونان", 2_000_000),
            ("سالب خمسة", -5),
        ];
        for (expected, input) in cases {
            assert_eq!(ar.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn feminine_agreement() {
        let ar = locale("ar").unwrap();
        let opts = CardinalOptions { gender: Some(Gender::Feminine), ..Default::default() };
        assert_eq!(ar.cardinal(&1i128.into(), &opts), "واحدة");
        assert_eq!(ar.cardinal(&3i128.into(), &opts), "ثلاث");
        assert_eq!(ar.cardinal(&13i128.into(), &opts), "ثلاث عشرة");
    }

    #[test]
    fn ordinals() {
        let ar = locale("ar").unwrap();
        assert_eq!(ar.ordinal(1u64).unwrap(), "أول");
        assert_eq!(ar.ordinal(3u64).unwrap(), "ثالث");
        assert_eq!(ar.ordinal(20u64).unwrap(), "عشرون");
    }

    #[test]
    fn currency() {
        let ar = locale("ar").unwrap();
        let amount = crate::CurrencyAmount::parse("5.25").unwrap();
        assert_eq!(
            ar.currency(&amount, &Default::default()),
            "خمسة دنانير وخمسة وعشرون فلس"
        );
    }
}
