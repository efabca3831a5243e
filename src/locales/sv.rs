//! Swedish. Compounded segments ("tjugoett", "tvåhundra"), en miljon /
//! två miljoner, ordinals by suffix substitution on the final component.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "noll", "ett", "två", "tre", "fyra", "fem", "sex", "sju", "åtta", "nio", "tio", "elva", "tolv",
    "tretton", "fjorton", "femton", "sexton", "sjutton", "arton", "nitton",
];

static TENS: [&str; 10] =
    ["", "", "tjugo", "trettio", "fyrtio", "femtio", "sextio", "sjuttio", "åttio", "nittio"];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Multiplier { word: "hundra", omit_one: true, joined: true },
    compose: TensOnesJoin::Joined,
    hundred_rem_sep: "",
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
        joined: true,
        gender: Gender::Masculine,
    },
    big(6, "miljon", "miljoner"),
    big(9, "miljard", "miljarder"),
    big(12, "biljon", "biljoner"),
    big(15, "biljard", "biljarder"),
    big(18, "triljon", "triljoner"),
    big(21, "triljard", "triljarder"),
];

static ORDINAL_STEMS: [(&str, &str); 16] = [
    ("ett", "första"),
    ("två", "andra"),
    ("tretton", "trettonde"),
    ("fjorton", "fjortonde"),
    ("femton", "femtonde"),
    ("sexton", "sextonde"),
    ("sjutton", "sjuttonde"),
    ("arton", "artonde"),
    ("nitton", "nittonde"),
    ("tre", "tredje"),
    ("fyra", "fjärde"),
    ("fem", "femte"),
    ("sex", "sjätte"),
    ("sju", "sjunde"),
    ("åtta", "åttonde"),
    ("nio", "nionde"),
];

fn ordinal_word(word: &str) -> String {
    for (cardinal, ordinal) in ORDINAL_STEMS {
        if let Some(head) = word.strip_suffix(cardinal) {
            return format!("{head}{ordinal}");
        }
    }
    match word {
        "tio" => "tionde".to_string(),
        "elva" => "elfte".to_string(),
        "tolv" => "tolfte".to_string(),
        "hundra" => "hundrade".to_string(),
        "tusen" => "tusende".to_string(),
        w if w.ends_with("tio") || w.ends_with("tjugo") || w.ends_with("hundra") => format!("{w}nde"),
        w if w.ends_with("tusen") => format!("{w}de"),
        w => format!("{w}te"),
    }
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "sv",
    name: "Swedish",
    zero: "noll",
    negative: "minus",
    decimal_mark: "komma",
    digits: ["noll", "ett", "två", "tre", "fyra", "fem", "sex", "sju", "åtta", "nio"],
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
    ordinal: OrdinalRule { irregular: &[], units: OrdinalUnits::FinalWord(ordinal_word) },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Binary { one: "krona", other: "kronor" } },
        minor: UnitNoun { forms: ScaleForms::Fixed("öre") },
        joiner: " och ",
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
        let sv = locale("sv").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("noll", 0),
            ("tjugoett", 21),
            ("hundra", 100),
            ("hundraett", 101),
            ("tvåhundrafemtiosex", 256),
            ("tusen", 1_000),
            ("tvåtusen", 2_000),
            ("tvåtusenfemhundra", 2_500),
            ("en miljon", 1_000_000),
            ("två miljoner", 2_000_000),
            ("minus tolv", -12),
        ];
        for (expected, input) in cases {
            assert_eq!(sv.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let sv = locale("sv").unwrap();
        let cases: Vec<(&str, u64)> = vec![
            ("första", 1),
            ("andra", 2),
            ("tredje", 3),
            ("fjärde", 4),
            ("tolfte", 12),
            ("tjugonde", 20),
            ("tjugoförsta", 21),
            ("hundrade", 100),
            ("tusende", 1_000),
        ];
        for (expected, input) in cases {
            assert_eq!(sv.ordinal(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn currency() {
        let sv = locale("sv").unwrap();
        let amount = crate::CurrencyAmount::parse("2.50").unwrap();
        assert_eq!(sv.currency(&amount, &Default::default()), "två kronor och femtio öre");
    }
}
