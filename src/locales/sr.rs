//! Serbian (Latin script). Feminine hiljada with East-Slavic style plural
//! windows, final-component ordinals.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "nula", "jedan", "dva", "tri", "četiri", "pet", "šest", "sedam", "osam", "devet", "deset", "jedanaest",
    "dvanaest", "trinaest", "četrnaest", "petnaest", "šesnaest", "sedamnaest", "osamnaest", "devetnaest",
];

static ONES_F: [&str; 20] = [
    "nula", "jedna", "dve", "tri", "četiri", "pet", "šest", "sedam", "osam", "devet", "deset", "jedanaest",
    "dvanaest", "trinaest", "četrnaest", "petnaest", "šesnaest", "sedamnaest", "osamnaest", "devetnaest",
];

static TENS: [&str; 10] = [
    "", "", "dvadeset", "trideset", "četrdeset", "pedeset", "šezdeset", "sedamdeset", "osamdeset",
    "devedeset",
];

static HUNDREDS: [&str; 10] = [
    "", "sto", "dvesta", "trista", "četiristo", "petsto", "šeststo", "sedamsto", "osamsto", "devetsto",
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

static SCALES: [ScaleWord; 5] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Triple { one: "hiljada", few: "hiljade", many: "hiljada" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Feminine,
    },
    ScaleWord {
        exponent: 6,
        forms: ScaleForms::Triple { one: "milion", few: "miliona", many: "miliona" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 9,
        forms: ScaleForms::Triple { one: "milijarda", few: "milijarde", many: "milijardi" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Feminine,
    },
    ScaleWord {
        exponent: 12,
        forms: ScaleForms::Triple { one: "bilion", few: "biliona", many: "biliona" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 15,
        forms: ScaleForms::Triple { one: "bilijarda", few: "bilijarde", many: "bilijardi" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Feminine,
    },
];

static SMALL_ORDINALS: [&str; 20] = [
    "", "prvi", "drugi", "treći", "četvrti", "peti", "šesti", "sedmi", "osmi", "deveti", "deseti",
    "jedanaesti", "dvanaesti", "trinaesti", "četrnaesti", "petnaesti", "šesnaesti", "sedamnaesti",
    "osamnaesti", "devetnaesti",
];

static TENS_ORDINALS: [&str; 10] = [
    "", "", "dvadeseti", "trideseti", "četrdeseti", "pedeseti", "šezdeseti", "sedamdeseti", "osamdeseti",
    "devedeseti",
];

static HUNDREDS_ORDINALS: [&str; 10] = [
    "", "stoti", "dvestoti", "tristoti", "četiristoti", "petstoti", "šeststoti", "sedamstoti", "osamstoti",
    "devetstoti",
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
        let tens = (rem / 10) as usize;
        let ones = (rem % 10) as usize;
        if ones == 0 {
            parts.push(TENS_ORDINALS[tens].to_string());
        } else {
            parts.push(TENS[tens].to_string());
            parts.push(SMALL_ORDINALS[ones].to_string());
        }
    } else if rem > 0 {
        parts.push(SMALL_ORDINALS[rem as usize].to_string());
    }
    parts.join(" ")
}

static SCALE_ORDINALS: [&str; 3] = ["hiljaditi", "milioniti", "milijarditi"];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "sr",
    name: "Serbian",
    zero: "nula",
    negative: "minus",
    decimal_mark: "zapeta",
    digits: ["nula", "jedan", "dva", "tri", "četiri", "pet", "šest", "sedam", "osam", "devet"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::EastSlavic,
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
        major: UnitNoun { forms: ScaleForms::Triple { one: "dinar", few: "dinara", many: "dinara" } },
        minor: UnitNoun { forms: ScaleForms::Triple { one: "para", few: "pare", many: "para" } },
        joiner: " ",
        major_gender: Some(Gender::Masculine),
        minor_gender: Some(Gender::Feminine),
    },
    flags: LocaleFlags::empty(),
};

#[cfg(test)]
mod tests {
    use crate::locale;

    #[test]
    fn cardinals() {
        let sr = locale("sr").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("nula", 0),
            ("dvadeset jedan", 21),
            ("sto dvadeset tri", 123),
            ("jedna hiljada", 1_000),
            ("dve hiljade", 2_000),
            ("pet hiljada", 5_000),
            ("jedan milion", 1_000_000),
            ("dva miliona", 2_000_000),
        ];
        for (expected, input) in cases {
            assert_eq!(sr.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let sr = locale("sr").unwrap();
        assert_eq!(sr.ordinal(1u64).unwrap(), "prvi");
        assert_eq!(sr.ordinal(21u64).unwrap(), "dvadeset prvi");
        assert_eq!(sr.ordinal(100u64).unwrap(), "stoti");
        assert_eq!(sr.ordinal(1_000u64).unwrap(), "hiljaditi");
    }
}
