//! Danish. Vigesimal tens words, inverted ones with "og" ("enogtyve"),
//! "og" again before a final small group.

use crate::table::{
    Conjunction, ConjunctionRule, CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule,
    OrdinalUnits, PluralRule, RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable,
    UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "nul", "en", "to", "tre", "fire", "fem", "seks", "syv", "otte", "ni", "ti", "elleve", "tolv", "tretten",
    "fjorten", "femten", "seksten", "sytten", "atten", "nitten",
];

static TENS: [&str; 10] =
    ["", "", "tyve", "tredive", "fyrre", "halvtreds", "tres", "halvfjerds", "firs", "halvfems"];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Multiplier { word: "hundrede", omit_one: true, joined: false },
    compose: TensOnesJoin::Inverted { connector: "og" },
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
        forms: ScaleForms::Fixed("tusind"),
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

static ORDINAL_STEMS: [(&str, &str); 21] = [
    ("tretten", "trettende"),
    ("fjorten", "fjortende"),
    ("femten", "femtende"),
    ("seksten", "sekstende"),
    ("sytten", "syttende"),
    ("atten", "attende"),
    ("nitten", "nittende"),
    ("halvtreds", "halvtredsindstyvende"),
    ("halvfjerds", "halvfjerdsindstyvende"),
    ("halvfems", "halvfemsindstyvende"),
    ("tredive", "tredivte"),
    ("fyrre", "fyrretyvende"),
    ("tres", "tressindstyvende"),
    ("firs", "firsindstyvende"),
    ("tyve", "tyvende"),
    ("elleve", "ellevte"),
    ("fire", "fjerde"),
    ("otte", "ottende"),
    ("seks", "sjette"),
    ("tolv", "tolvte"),
    ("syv", "syvende"),
];

fn ordinal_word(word: &str) -> String {
    match word {
        "en" => return "første".to_string(),
        "to" => return "anden".to_string(),
        "tre" => return "tredje".to_string(),
        "fem" => return "femte".to_string(),
        "ni" => return "niende".to_string(),
        "ti" => return "tiende".to_string(),
        "hundrede" => return "hundrede".to_string(),
        "tusind" => return "tusinde".to_string(),
        _ => {}
    }
    for (cardinal, ordinal) in ORDINAL_STEMS {
        if let Some(head) = word.strip_suffix(cardinal) {
            return format!("{head}{ordinal}");
        }
    }
    format!("{word}te")
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "da",
    name: "Danish",
    zero: "nul",
    negative: "minus",
    decimal_mark: "komma",
    digits: ["nul", "en", "to", "tre", "fire", "fem", "seks", "syv", "otte", "ni"],
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

#[cfg(test)]
mod tests {
    use crate::locale;

    #[test]
    fn cardinals() {
        let da = locale("da").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("nul", 0),
            ("enogtyve", 21),
            ("halvtreds", 50),
            ("femoghalvtreds", 55),
            ("hundrede", 100),
            ("hundrede og fem", 105),
            ("to hundrede", 200),
            ("tusind", 1_000),
            ("tusind og en", 1_001),
            ("en million", 1_000_000),
            ("minus otte", -8),
        ];
        for (expected, input) in cases {
            assert_eq!(da.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let da = locale("da").unwrap();
        let cases: Vec<(&str, u64)> = vec![
            ("første", 1),
            ("anden", 2),
            ("fjerde", 4),
            ("tyvende", 20),
            ("enogtyvende", 21),
            ("halvtredsindstyvende", 50),
            ("hundrede", 100),
            ("tusinde", 1_000),
        ];
        for (expected, input) in cases {
            assert_eq!(da.ordinal(input).unwrap(), expected, "{input}");
        }
    }
}
