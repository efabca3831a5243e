//! Norwegian (Bokmål). Compounded tens ("tjueen"), "og" before a final
//! small group, suffix-substituted ordinals.

use crate::table::{
    Conjunction, ConjunctionRule, CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule,
    OrdinalUnits, PluralRule, RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable,
    UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "null", "en", "to", "tre", "fire", "fem", "seks", "sju", "åtte", "ni", "ti", "elleve", "tolv",
    "tretten", "fjorten", "femten", "seksten", "sytten", "atten", "nitten",
];

static TENS: [&str; 10] = ["", "", "tjue", "tretti", "førti", "femti", "seksti", "sytti", "åtti", "nitti"];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Multiplier { word: "hundre", omit_one: true, joined: false },
    compose: TensOnesJoin::Joined,
    hundred_rem_sep: " og ",
    standalone_one: None,
};

const fn big(exponent: u32, one: &'static str, other: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Binary { one, other },
        one: OneNumeral::Word("en"),
        joined: false,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 7] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Fixed("tusen"),
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    big(6, "million", "millioner"),
    big(9, "milliard", "milliarder"),
    big(12, "billion", "billioner"),
    big(15, "billiard", "billiarder"),
    big(18, "trillion", "trillioner"),
    big(21, "trilliard", "trilliarder"),
];

static ORDINAL_STEMS: [(&str, &str); 19] = [
    ("elleve", "ellevte"),
    ("tretten", "trettende"),
    ("fjorten", "fjortende"),
    ("femten", "femtende"),
    ("seksten", "sekstende"),
    ("sytten", "syttende"),
    ("atten", "attende"),
    ("nitten", "nittende"),
    ("fire", "fjerde"),
    ("seks", "sjette"),
    ("åtte", "åttende"),
    ("tolv", "tolvte"),
    ("en", "første"),
    ("to", "andre"),
    ("tre", "tredje"),
    ("fem", "femte"),
    ("sju", "sjuende"),
    ("ni", "niende"),
    ("ti", "tiende"),
];

fn ordinal_word(word: &str) -> String {
    match word {
        "hundre" => return "hundrede".to_string(),
        "tusen" => return "tusende".to_string(),
        _ => {}
    }
    if word.ends_with("ti") && word.len() > 2 || word == "tjue" {
        // tens words: tjue -> tjuende, tretti -> trettiende.
        return if word == "tjue" { "tjuende".to_string() } else { format!("{word}ende") };
    }
    for (cardinal, ordinal) in ORDINAL_STEMS {
        if let Some(head) = word.strip_suffix(cardinal) {
            return format!("{head}{ordinal}");
        }
    }
    format!("{word}te")
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "no",
    name: "Norwegian",
    zero: "null",
    negative: "minus",
    decimal_mark: "komma",
    digits: ["null", "en", "to", "tre", "fire", "fem", "seks", "sju", "åtte", "ni"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::OneOther,
    segment: SegmentRenderer::Triplet(&TRIPLET),
    scales: &SCALES,
    alt_scales: None,
    join: JoinRule {
        group_sep: " ",
        scale_sep: " ",
        compound_below: 0,
        conjunction: Some(Conjunction { word: "og", rule: ConjunctionRule::FinalNoHundred, attached: false }),
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule { irregular: &[], units: OrdinalUnits::FinalWord(ordinal_word) },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Binary { one: "krone", other: "kroner" } },
        minor: UnitNoun { forms: ScaleForms::Fixed("øre") },
        joiner: " og ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::NAIVE_LARGE_ORDINALS,
};
