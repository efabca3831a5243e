//! Czech. Absolute few window (2 through 4 regardless of position),
//! feminine miliarda, lexicalized hundreds.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "nula", "jeden", "dva", "tři", "čtyři", "pět", "šest", "sedm", "osm", "devět", "deset", "jedenáct",
    "dvanáct", "třináct", "čtrnáct", "patnáct", "šestnáct", "sedmnáct", "osmnáct", "devatenáct",
];

static ONES_F: [&str; 20] = [
    "nula", "jedna", "dvě", "tři", "čtyři", "pět", "šest", "sedm", "osm", "devět", "deset", "jedenáct",
    "dvanáct", "třináct", "čtrnáct", "patnáct", "šestnáct", "sedmnáct", "osmnáct", "devatenáct",
];

static TENS: [&str; 10] =
    ["", "", "dvacet", "třicet", "čtyřicet", "padesát", "šedesát", "sedmdesát", "osmdesát", "devadesát"];

static HUNDREDS: [&str; 10] = [
    "", "sto", "dvě stě", "tři sta", "čtyři sta", "pět set", "šest set", "sedm set", "osm set", "devět set",
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

static SCALES: [ScaleWord; 6] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Triple { one: "tisíc", few: "tisíce", many: "tisíc" },
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 6,
        forms: ScaleForms::Triple { one: "milion", few: "miliony", many: "milionů" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 9,
        forms: ScaleForms::Triple { one: "miliarda", few: "miliardy", many: "miliard" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Feminine,
    },
    ScaleWord {
        exponent: 12,
        forms: ScaleForms::Triple { one: "bilion", few: "biliony", many: "bilionů" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 15,
        forms: ScaleForms::Triple { one: "biliarda", few: "biliardy", many: "biliard" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Feminine,
    },
    ScaleWord {
        exponent: 18,
        forms: ScaleForms::Triple { one: "trilion", few: "triliony", many: "trilionů" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
];

static SMALL_ORDINALS: [&str; 20] = [
    "", "první", "druhý", "třetí", "čtvrtý", "pátý", "šestý", "sedmý", "osmý", "devátý", "desátý",
    "jedenáctý", "dvanáctý", "třináctý", "čtrnáctý", "patnáctý", "šestnáctý", "sedmnáctý", "osmnáctý",
    "devatenáctý",
];

static TENS_ORDINALS: [&str; 10] = [
    "", "", "dvacátý", "třicátý", "čtyřicátý", "padesátý", "šedesátý", "sedmdesátý", "osmdesátý",
    "devadesátý",
];

static HUNDREDS_ORDINALS: [&str; 10] = [
    "", "stý", "dvoustý", "třístý", "čtyřstý", "pětistý", "šestistý", "sedmistý", "osmistý", "devítistý",
];

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

static SCALE_ORDINALS: [&str; 3] = ["tisící", "miliontý", "miliardtý"];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "cs",
    name: "Czech",
    zero: "nula",
    negative: "minus",
    decimal_mark: "celá",
    digits: ["nula", "jedna", "dva", "tři", "čtyři", "pět", "šest", "sedm", "osm", "devět"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::CzechSlovak,
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
        major: UnitNoun { forms: ScaleForms::Triple { one: "koruna", few: "koruny", many: "korun" } },
        minor: UnitNoun { forms: ScaleForms::Triple { one: "haléř", few: "haléře", many: "haléřů" } },
        joiner: " ",
        major_gender: Some(Gender::Feminine),
        minor_gender: Some(Gender::Masculine),
    },
    flags: LocaleFlags::empty(),
};

#[cfg(test)]
mod tests {
    use crate::{locale, CurrencyAmount};

    #[test]
    fn cardinals() {
        let cs = locale("cs").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("nula", 0),
            ("dvacet jeden", 21),
            ("dvě stě", 200),
            ("pět set", 500),
            ("tisíc", 1_000),
            ("dva tisíce", 2_000),
            ("pět tisíc", 5_000),
            ("dvacet dva tisíc", 22_000),
            ("jeden milion", 1_000_000),
            ("dva miliony", 2_000_000),
            ("jedna miliarda", 1_000_000_000),
            ("dvě miliardy", 2_000_000_000),
        ];
        for (expected, input) in cases {
            assert_eq!(cs.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let cs = locale("cs").unwrap();
        assert_eq!(cs.ordinal(1u64).unwrap(), "první");
        assert_eq!(cs.ordinal(21u64).unwrap(), "dvacátý první");
        assert_eq!(cs.ordinal(100u64).unwrap(), "stý");
        assert_eq!(cs.ordinal(1_000u64).unwrap(), "tisící");
    }

    #[test]
    fn currency() {
        let cs = locale("cs").unwrap();
        let amount = CurrencyAmount::parse("2.50").unwrap();
        assert_eq!(cs.currency(&amount, &Default::default()), "dvě koruny padesát haléřů");
        let amount = CurrencyAmount::parse("1").unwrap();
        assert_eq!(cs.currency(&amount, &Default::default()), "jedna koruna");
    }
}
