//! Hebrew. Feminine counting forms by default, masculine agreement before
//! scale nouns (construct state for 3..=10), dual אלפיים, and the ו
//! conjunction prefixed to the last component.

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule, RuleTable,
    ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping, RenderedSegment, SegmentCtx};

static FEMININE: [&str; 20] = [
    "אפס", "אחת", "שתיים", "שלוש", "ארבע", "חמש", "שש", "שבע", "שמונה", "תשע", "עשר",
    "אחת עשרה", "שתים עשרה", "שלוש עשרה", "ארבע עשרה", "חמש עשרה", "שש עשרה",
    "שבע עשרה", "שמונה עשרה", "תשע עשרה",
];

static MASCULINE: [&str; 20] = [
    "אפס", "אחד", "שניים", "שלושה", "ארבעה", "חמישה", "שישה", "שבעה", "שמונה", "תשעה", "עשרה",
    "אחד עשר", "שנים עשר", "שלושה עשר", "ארבעה עשר", "חמישה עשר", "שישה עשר",
    "שבעה עשר", "שמונה עשר", "תשעה עשר",
];

/// Construct-state masculine forms governing a scale noun (שלושת אלפים).
static CONSTRUCT: [&str; 11] =
    ["", "אחד", "שני", "שלושת", "ארבעת", "חמשת", "ששת", "שבעת", "שמונת", "תשעת", "עשרת"];

static TENS: [&str; 10] =
    ["", "", "עשרים", "שלושים", "ארבעים", "חמישים", "שישים", "שבעים", "שמונים", "תשעים"];

fn unit_word(n: u32, ctx: &SegmentCtx) -> &'static str {
    if ctx.gender == Gender::Masculine {
        if ctx.before_scale && (2..=10).contains(&n) {
            return CONSTRUCT[n as usize];
        }
        MASCULINE[n as usize]
    } else {
        FEMININE[n as usize]
    }
}

fn segment(value: u32, ctx: &SegmentCtx) -> RenderedSegment {
    let hundreds = value / 100;
    let rem = value % 100;

    let mut comps: Vec<String> = Vec::new();
    match hundreds {
        0 => {}
        1 => comps.push("מאה".to_string()),
        2 => comps.push("מאתיים".to_string()),
        h => comps.push(format!("{} מאות", FEMININE[h as usize])),
    }

    if rem >= 20 {
        comps.push(TENS[(rem / 10) as usize].to_string());
        if rem % 10 > 0 {
            comps.push(unit_word(rem % 10, ctx).to_string());
        }
    } else if rem > 0 {
        comps.push(unit_word(rem, ctx).to_string());
    }

    // ו before the last component of a compound, or before a lone
    // component continuing a larger number (אלף ומאה).
    match comps.len() {
        0 | 1 if ctx.leading => {}
        0 => {}
        n => comps[n - 1] = format!("ו{}", comps[n - 1]),
    }

    RenderedSegment::new(comps.join(" "), hundreds > 0)
}

static SCALES: [ScaleWord; 4] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Dual { one: "אלף", two: "אלפיים", few: "אלפים", many: "אלף" },
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 6,
        forms: ScaleForms::Dual { one: "מיליון", two: "שני מיליון", few: "מיליון", many: "מיליון" },
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 9,
        forms: ScaleForms::Dual { one: "מיליארד", two: "שני מיליארד", few: "מיליארד", many: "מיליארד" },
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 12,
        forms: ScaleForms::Dual { one: "טריליון", two: "שני טריליון", few: "טריליון", many: "טריליון" },
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "he",
    name: "Hebrew",
    zero: "אפס",
    negative: "מינוס",
    decimal_mark: "נקודה",
    digits: ["אפס", "אחת", "שתיים", "שלוש", "ארבע", "חמש", "שש", "שבע", "שמונה", "תשע"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Feminine,
    plural: PluralRule::Semitic,
    segment: SegmentRenderer::Custom(segment),
    scales: &SCALES,
    alt_scales: None,
    join: JoinRule {
        group_sep: " ",
        scale_sep: " ",
        compound_below: 0,
        conjunction: None,
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule {
        irregular: &[
            (1, "ראשון"),
            (2, "שני"),
            (3, "שלישי"),
            (4, "רביעי"),
            (5, "חמישי"),
            (6, "שישי"),
            (7, "שביעי"),
            (8, "שמיני"),
            (9, "תשיעי"),
            (10, "עשירי"),
        ],
        units: OrdinalUnits::Affix { prefix: "", suffix: "" },
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Dual { one: "שקל", two: "שקלים", few: "שקלים", many: "שקלים" } },
        minor: UnitNoun { forms: ScaleForms::Dual { one: "אגורה", two: "אגורות", few: "אגורות", many: "אגורות" } },
        joiner: " ו",
        major_gender: Some(Gender::Masculine),
        minor_gender: Some(Gender::Feminine),
    },
    flags: LocaleFlags::empty(),
};

#[cfg(test)]
mod tests {
    use crate::{locale, CardinalOptions, Gender};

    #[test]
    fn cardinals_feminine_default() {
        let he = locale("he").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("אפס", 0),
            ("אחת", 1),
            ("שתיים", 2),
            ("עשרים ואחת", 21),
            ("מאה", 100),
            ("מאה ואחת", 101),
            ("מאה עשרים ושלוש", 123),
            ("מאתיים", 200),
            ("שלוש מאות", 300),
            ("אלף", 1_000),
            ("אלף ומאה", 1_100),
            ("אלפיים", 2_000),
            ("שלושת אלפים", 3_000),
            ("אחד עשר אלף", 11_000),
            ("מיליון", 1_000_000),
            ("שני מיליון", 2_000_000),
            ("מינוס חמש", -5),
        ];
        for (expected, input) in cases {
            assert_eq!(he.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn masculine_agreement() {
        let he = locale("he").unwrap();
        let opts = CardinalOptions { gender: Some(Gender::Masculine), ..Default::default() };
        assert_eq!(he.cardinal(&1i128.into(), &opts), "אחד");
        assert_eq!(he.cardinal(&3i128.into(), &opts), "שלושה");
        assert_eq!(he.cardinal(&21i128.into(), &opts), "עשרים ואחד");
    }

    #[test]
    fn ordinals() {
        let he = locale("he").unwrap();
        assert_eq!(he.ordinal(1u64).unwrap(), "ראשון");
        assert_eq!(he.ordinal(5u64).unwrap(), "חמישי");
        assert_eq!(he.ordinal(11u64).unwrap(), "אחת עשרה");
    }

    #[test]
    fn currency() {
        let he = locale("he").unwrap();
        let amount = crate::CurrencyAmount::parse("2.50").unwrap();
        assert_eq!(he.currency(&amount, &Default::default()), "שניים שקלים וחמישים אגורות");
    }
}
