//! Polish. Three plural forms on every scale word, lexicalized hundreds,
//! ordinals composed from dedicated tens and hundreds forms.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "zero", "jeden", "dwa", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć", "dziesięć",
    "jedenaście", "dwanaście", "trzynaście", "czternaście", "piętnaście", "szesnaście", "siedemnaście",
    "osiemnaście", "dziewiętnaście",
];

static ONES_F: [&str; 20] = [
    "zero", "jedna", "dwie", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć", "dziesięć",
    "jedenaście", "dwanaście", "trzynaście", "czternaście", "piętnaście", "szesnaście", "siedemnaście",
    "osiemnaście", "dziewiętnaście",
];

static TENS: [&str; 10] = [
    "", "", "dwadzieścia", "trzydzieści", "czterdzieści", "pięćdziesiąt", "sześćdziesiąt", "siedemdziesiąt",
    "osiemdziesiąt", "dziewięćdziesiąt",
];

static HUNDREDS: [&str; 10] = [
    "", "sto", "dwieście", "trzysta", "czterysta", "pięćset", "sześćset", "siedemset", "osiemset",
    "dziewięćset",
];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: Some(&ONES_F),
    tens: &TENS,
    hundreds: HundredsRule::Lookup(&HUNDREDS),
    compose: TensOnesJoin::Space,
    hundred_rem_sep: " ",
    standalone_one: None,
};

const fn rung(exponent: u32, one: &'static str, few: &'static str, many: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Triple { one, few, many },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 10] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Triple { one: "tysiąc", few: "tysiące", many: "tysięcy" },
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    rung(6, "milion", "miliony", "milionów"),
    rung(9, "miliard", "miliardy", "miliardów"),
    rung(12, "bilion", "biliony", "bilionów"),
    rung(15, "biliard", "biliardy", "biliardów"),
    rung(18, "trylion", "tryliony", "trylionów"),
    rung(21, "tryliard", "tryliardy", "tryliardów"),
    rung(24, "kwadrylion", "kwadryliony", "kwadrylionów"),
    rung(27, "kwadryliard", "kwadryliardy", "kwadryliardów"),
    rung(30, "kwintylion", "kwintyliony", "kwintylionów"),
];

static SMALL_ORDINALS: [&str; 20] = [
    "", "pierwszy", "drugi", "trzeci", "czwarty", "piąty", "szósty", "siódmy", "ósmy", "dziewiąty",
    "dziesiąty", "jedenasty", "dwunasty", "trzynasty", "czternasty", "piętnasty", "szesnasty", "siedemnasty",
    "osiemnasty", "dziewiętnasty",
];

static TENS_ORDINALS: [&str; 10] = [
    "", "", "dwudziesty", "trzydziesty", "czterdziesty", "pięćdziesiąty", "sześćdziesiąty",
    "siedemdziesiąty", "osiemdziesiąty", "dziewięćdziesiąty",
];

static HUNDREDS_ORDINALS: [&str; 10] = [
    "", "setny", "dwusetny", "trzechsetny", "czterechsetny", "pięćsetny", "sześćsetny", "siedemsetny",
    "osiemsetny", "dziewięćsetny",
];

/// Hundreds stay cardinal when a lower component follows; the last two
/// positions take ordinal forms ("sto dwudziesty pierwszy").
fn small_ordinal(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rem = n % 100;

    let mut parts = Vec::new();
    if hundreds > 0 {
        if rem == 0 {
            return HUNDREDS_ORDINALS[hundreds].to_string();
        }
        parts.push(HUNDREDS[hundreds].to_string());
    }
    if rem >= 20 {
        let mut word = TENS_ORDINALS[(rem / 10) as usize].to_string();
        if rem % 10 > 0 {
            word.push(' ');
            word.push_str(SMALL_ORDINALS[(rem % 10) as usize]);
        }
        parts.push(word);
    } else if rem > 0 {
        parts.push(SMALL_ORDINALS[rem as usize].to_string());
    }
    parts.join(" ")
}

static SCALE_ORDINALS: [&str; 4] = ["tysięczny", "milionowy", "miliardowy", "bilionowy"];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "pl",
    name: "Polish",
    zero: "zero",
    negative: "minus",
    decimal_mark: "przecinek",
    digits: ["zero", "jeden", "dwa", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::WestSlavic,
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
    ordinal: OrdinalRule {
        irregular: &[],
        units: OrdinalUnits::Composed { small: small_ordinal, scale: &SCALE_ORDINALS },
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Triple { one: "złoty", few: "złote", many: "złotych" } },
        minor: UnitNoun { forms: ScaleForms::Triple { one: "grosz", few: "grosze", many: "groszy" } },
        joiner: " i ",
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
        let pl = locale("pl").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("zero", 0),
            ("jeden", 1),
            ("dwadzieścia jeden", 21),
            ("sto", 100),
            ("dwieście", 200),
            ("pięćset pięć", 505),
            ("minus dwa", -2),
        ];
        for (expected, input) in cases {
            assert_eq!(pl.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn thousand_plural_boundaries() {
        let pl = locale("pl").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("tysiąc", 1_000),
            ("dwa tysiące", 2_000),
            ("cztery tysiące", 4_000),
            ("pięć tysięcy", 5_000),
            ("jedenaście tysięcy", 11_000),
            ("dwadzieścia dwa tysiące", 22_000),
            ("dwadzieścia jeden tysięcy", 21_000),
            ("jeden milion", 1_000_000),
            ("dwa miliony", 2_000_000),
            ("pięć milionów", 5_000_000),
        ];
        for (expected, input) in cases {
            assert_eq!(pl.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let pl = locale("pl").unwrap();
        let cases: Vec<(&str, u64)> = vec![
            ("pierwszy", 1),
            ("dwunasty", 12),
            ("dwudziesty pierwszy", 21),
            ("setny", 100),
            ("sto dwudziesty pierwszy", 121),
            ("tysięczny", 1_000),
            ("dwa tysięczny", 2_000),
            ("milionowy", 1_000_000),
        ];
        for (expected, input) in cases {
            assert_eq!(pl.ordinal(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn currency() {
        let pl = locale("pl").unwrap();
        let cases: Vec<(&str, &str)> = vec![
            ("jeden złoty", "1"),
            ("dwa złote i pięćdziesiąt groszy", "2.50"),
            ("pięć złotych", "5"),
            ("jeden grosz", "0.01"),
        ];
        for (expected, input) in cases {
            let amount = CurrencyAmount::parse(input).unwrap();
            assert_eq!(pl.currency(&amount, &Default::default()), expected, "{input}");
        }
    }
}
