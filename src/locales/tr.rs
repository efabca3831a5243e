//! Turkish. Bare yüz/bin without bir, space-composed segments, ordinal
//! suffixes under four-way vowel harmony.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "sıfır", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz", "on", "on bir", "on iki",
    "on üç", "on dört", "on beş", "on altı", "on yedi", "on sekiz", "on dokuz",
];

static TENS: [&str; 10] =
    ["", "", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan"];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Multiplier { word: "yüz", omit_one: true, joined: false },
    compose: TensOnesJoin::Space,
    hundred_rem_sep: " ",
    standalone_one: None,
};

const fn rung(exponent: u32, word: &'static str, one: OneNumeral) -> ScaleWord {
    ScaleWord { exponent, forms: ScaleForms::Fixed(word), one, joined: false, gender: Gender::Masculine }
}

static SCALES: [ScaleWord; 6] = [
    rung(3, "bin", OneNumeral::Omit),
    rung(6, "milyon", OneNumeral::Keep),
    rung(9, "milyar", OneNumeral::Keep),
    rung(12, "trilyon", OneNumeral::Keep),
    rung(15, "katrilyon", OneNumeral::Keep),
    rung(18, "kentilyon", OneNumeral::Keep),
];

/// -inci with the connective n after a vowel, harmonized on the last vowel.
fn ordinal_word(word: &str) -> String {
    match word {
        "bir" => return "birinci".to_string(),
        "dört" => return "dördüncü".to_string(),
        _ => {}
    }
    let vowel = match word.chars().rev().find(|c| "aeıioöuü".contains(*c)) {
        Some('a') | Some('ı') => 'ı',
        Some('o') | Some('u') => 'u',
        Some('ö') | Some('ü') => 'ü',
        _ => 'i',
    };
    let ends_in_vowel = word.ends_with(['a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü']);
    if ends_in_vowel {
        format!("{word}nc{vowel}")
    } else {
        format!("{word}{vowel}nc{vowel}")
    }
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "tr",
    name: "Turkish",
    zero: "sıfır",
    negative: "eksi",
    decimal_mark: "virgül",
    digits: ["sıfır", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::Fixed,
    segment: SegmentRenderer::Triplet(&TRIPLET),
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
    ordinal: OrdinalRule { irregular: &[], units: OrdinalUnits::FinalWord(ordinal_word) },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("lira") },
        minor: UnitNoun { forms: ScaleForms::Fixed("kuruş") },
        joiner: " ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::NAIVE_LARGE_ORDINALS,
};

#[cfg(test)]
mod tests {
    use crate::locale;

    #[test]
    fn cardinals() {
        let tr = locale("tr").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("sıfır", 0),
            ("on bir", 11),
            ("yirmi bir", 21),
            ("yüz", 100),
            ("yüz on", 110),
            ("iki yüz", 200),
            ("bin", 1_000),
            ("iki bin", 2_000),
            ("yüz bin", 100_000),
            ("bir milyon", 1_000_000),
            ("eksi beş", -5),
        ];
        for (expected, input) in cases {
            assert_eq!(tr.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinal_vowel_harmony() {
        let tr = locale("tr").unwrap();
        let cases: Vec<(&str, u64)> = vec![
            ("birinci", 1),
            ("ikinci", 2),
            ("üçüncü", 3),
            ("dördüncü", 4),
            ("beşinci", 5),
            ("altıncı", 6),
            ("onuncu", 10),
            ("yirminci", 20),
            ("yirmi birinci", 21),
            ("yüzüncü", 100),
            ("bininci", 1_000),
            ("bir milyonuncu", 1_000_000),
        ];
        for (expected, input) in cases {
            assert_eq!(tr.ordinal(input).unwrap(), expected, "{input}");
        }
    }
}
