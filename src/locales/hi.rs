//! Hindi. Indian-system grouping (hazar, lakh, crore), a lexicalized
//! 0..=99 table, -वाँ ordinals.

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule, RuleTable,
    ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping, RenderedSegment, SegmentCtx};

// Every number under one hundred has its own word.
static WORDS: [&str; 100] = [
    "शून्य", "एक", "दो", "तीन", "चार", "पाँच", "छह", "सात", "आठ", "नौ",
    "दस", "ग्यारह", "बारह", "तेरह", "चौदह", "पंद्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
    "बीस", "इक्कीस", "बाईस", "तेईस", "चौबीस", "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाईस", "उनतीस",
    "तीस", "इकतीस", "बत्तीस", "तैंतीस", "चौंतीस", "पैंतीस", "छत्तीस", "सैंतीस", "अड़तीस", "उनतालीस",
    "चालीस", "इकतालीस", "बयालीस", "तैंतालीस", "चौवालीस", "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास",
    "पचास", "इक्यावन", "बावन", "तिरपन", "चौवन", "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ",
    "साठ", "इकसठ", "बासठ", "तिरसठ", "चौंसठ", "पैंसठ", "छियासठ", "सड़सठ", "अड़सठ", "उनहत्तर",
    "सत्तर", "इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर", "पचहत्तर", "छिहत्तर", "सतहत्तर", "अठहत्तर", "उन्यासी",
    "अस्सी", "इक्यासी", "बयासी", "तिरासी", "चौरासी", "पचासी", "छियासी", "सत्तासी", "अट्ठासी", "नवासी",
    "नब्बे", "इक्यानवे", "बानवे", "तिरानवे", "चौरानवे", "पचानवे", "छियानवे", "सत्तानवे", "अट्ठानवे", "निन्यानवे",
];

fn segment(value: u32, _ctx: &SegmentCtx) -> RenderedSegment {
    let hundreds = value / 100;
    let rem = value % 100;

    let mut phrase = String::new();
    if hundreds > 0 {
        phrase.push_str(WORDS[hundreds as usize]);
        phrase.push_str(" सौ");
    }
    if rem > 0 {
        if !phrase.is_empty() {
            phrase.push(' ');
        }
        phrase.push_str(WORDS[rem as usize]);
    }

    RenderedSegment::new(phrase, hundreds > 0)
}

const fn rung(exponent: u32, word: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Fixed(word),
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 5] =
    [rung(3, "हज़ार"), rung(5, "लाख"), rung(7, "करोड़"), rung(9, "अरब"), rung(11, "खरब")];

fn ordinal_word(word: &str) -> String {
    format!("{word}वाँ")
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "hi",
    name: "Hindi",
    zero: "शून्य",
    negative: "ऋण",
    decimal_mark: "दशमलव",
    digits: ["शून्य", "एक", "दो", "तीन", "चार", "पाँच", "छह", "सात", "आठ", "नौ"],
    grouping: Grouping::SouthAsian,
    default_gender: Gender::Masculine,
    plural: PluralRule::OneOther,
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
        irregular: &[(1, "पहला"), (2, "दूसरा"), (3, "तीसरा"), (4, "चौथा"), (6, "छठा")],
        units: OrdinalUnits::FinalWord(ordinal_word),
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Binary { one: "रुपया", other: "रुपये" } },
        minor: UnitNoun { forms: ScaleForms::Binary { one: "पैसा", other: "पैसे" } },
        joiner: " और ",
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
        let hi = locale("hi").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("शून्य", 0),
            ("उन्नीस", 19),
            ("इक्कीस", 21),
            ("निन्यानवे", 99),
            ("एक सौ", 100),
            ("एक सौ पाँच", 105),
            ("एक हज़ार", 1_000),
            ("दस हज़ार", 10_000),
            ("एक लाख", 100_000),
            ("बारह लाख चौंतीस हज़ार पाँच सौ सड़सठ", 1_234_567),
            ("एक करोड़", 10_000_000),
            ("बारह करोड़ चौंतीस लाख छप्पन हज़ार सात सौ नवासी", 123_456_789),
            ("एक अरब", 1_000_000_000),
            ("ऋण सात", -7),
        ];
        for (expected, input) in cases {
            assert_eq!(hi.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let hi = locale("hi").unwrap();
        assert_eq!(hi.ordinal(1u64).unwrap(), "पहला");
        assert_eq!(hi.ordinal(4u64).unwrap(), "चौथा");
        assert_eq!(hi.ordinal(5u64).unwrap(), "पाँचवाँ");
        assert_eq!(hi.ordinal(21u64).unwrap(), "इक्कीसवाँ");
    }

    #[test]
    fn currency() {
        let hi = locale("hi").unwrap();
        let amount = crate::CurrencyAmount::parse("2.50").unwrap();
        assert_eq!(hi.currency(&amount, &Default::default()), "दो रुपये और पचास पैसे");
    }
}
