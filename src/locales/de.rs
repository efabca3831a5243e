//! German. Inverted tens ("einundzwanzig"), everything below a million
//! written as one compound, feminine "eine" before Million/Milliarde, the
//! final bare one spoken "eins".

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "null", "ein", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn", "elf", "zwölf",
    "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn", "neunzehn",
];

static TENS: [&str; 10] =
    ["", "", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig", "neunzig"];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Multiplier { word: "hundert", omit_one: false, joined: true },
    compose: TensOnesJoin::Inverted { connector: "und" },
    hundred_rem_sep: "",
    standalone_one: Some("eins"),
};

const fn big(exponent: u32, one: &'static str, other: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Binary { one, other },
        one: OneNumeral::Word("eine"),
        joined: false,
        gender: Gender::Feminine,
    }
}

static SCALES: [ScaleWord; 11] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Fixed("tausend"),
        one: OneNumeral::Keep,
        joined: true,
        gender: Gender::Masculine,
    },
    big(6, "Million", "Millionen"),
    big(9, "Milliarde", "Milliarden"),
    big(12, "Billion", "Billionen"),
    big(15, "Billiarde", "Billiarden"),
    big(18, "Trillion", "Trillionen"),
    big(21, "Trilliarde", "Trilliarden"),
    big(24, "Quadrillion", "Quadrillionen"),
    big(27, "Quadrilliarde", "Quadrilliarden"),
    big(30, "Quintillion", "Quintillionen"),
    big(33, "Quintilliarde", "Quintilliarden"),
];

/// -te below twenty, -ste from twenty up; the irregular stems are handled
/// as whole-number lookups or suffix matches.
fn ordinal_word(word: &str) -> String {
    const TE: [&str; 19] = [
        "ein", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn", "elf", "zwölf",
        "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn", "neunzehn",
    ];
    match word {
        "eins" | "ein" => "erste".to_string(),
        "drei" => "dritte".to_string(),
        "sieben" => "siebte".to_string(),
        "acht" => "achte".to_string(),
        w if TE.contains(&w) => format!("{w}te"),
        w => format!("{w}ste"),
    }
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "de",
    name: "German",
    zero: "null",
    negative: "minus",
    decimal_mark: "Komma",
    digits: ["null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::OneOther,
    segment: SegmentRenderer::Triplet(&TRIPLET),
    scales: &SCALES,
    alt_scales: None,
    join: JoinRule {
        group_sep: " ",
        scale_sep: " ",
        compound_below: 2,
        conjunction: None,
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule {
        irregular: &[(1_000_000, "millionste"), (1_000_000_000, "milliardste")],
        units: OrdinalUnits::FinalWord(ordinal_word),
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("Euro") },
        minor: UnitNoun { forms: ScaleForms::Fixed("Cent") },
        joiner: " und ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};

#[cfg(test)]
mod tests {
    use crate::{locale, CurrencyAmount};

    #[test]
    fn cardinals() {
        let de = locale("de").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("null", 0),
            ("eins", 1),
            ("einundzwanzig", 21),
            ("einhundert", 100),
            ("einhunderteins", 101),
            ("zweihundertvierunddreißig", 234),
            ("eintausend", 1_000),
            ("eintausendeins", 1_001),
            ("zweitausendfünfhundert", 2_500),
            ("eine Million", 1_000_000),
            ("zwei Millionen", 2_000_000),
            ("eine Million zweihundertvierunddreißigtausendfünfhundertsiebenundsechzig", 1_234_567),
            ("eine Milliarde", 1_000_000_000),
            ("minus sieben", -7),
        ];
        for (expected, input) in cases {
            assert_eq!(de.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let de = locale("de").unwrap();
        let cases: Vec<(&str, u64)> = vec![
            ("erste", 1),
            ("dritte", 3),
            ("siebte", 7),
            ("achte", 8),
            ("neunzehnte", 19),
            ("zwanzigste", 20),
            ("einundzwanzigste", 21),
            ("einhundertste", 100),
            ("eintausendste", 1_000),
            ("millionste", 1_000_000),
        ];
        for (expected, input) in cases {
            assert_eq!(de.ordinal(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn currency() {
        let de = locale("de").unwrap();
        let amount = CurrencyAmount::parse("3.40").unwrap();
        assert_eq!(de.currency(&amount, &Default::default()), "drei Euro und vierzig Cent");
        let amount = CurrencyAmount::parse("0.99").unwrap();
        assert_eq!(de.currency(&amount, &Default::default()), "neunundneunzig Cent");
    }
}
