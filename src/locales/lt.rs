//! Lithuanian. Wide few window (final digit 2 through 9 outside teens),
//! case-marked hundreds, masculine/feminine small numerals.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "nulis", "vienas", "du", "trys", "keturi", "penki", "šeši", "septyni", "aštuoni", "devyni", "dešimt",
    "vienuolika", "dvylika", "trylika", "keturiolika", "penkiolika", "šešiolika", "septyniolika",
    "aštuoniolika", "devyniolika",
];

static ONES_F: [&str; 20] = [
    "nulis", "viena", "dvi", "trys", "keturios", "penkios", "šešios", "septynios", "aštuonios", "devynios",
    "dešimt", "vienuolika", "dvylika", "trylika", "keturiolika", "penkiolika", "šešiolika", "septyniolika",
    "aštuoniolika", "devyniolika",
];

static TENS: [&str; 10] = [
    "", "", "dvidešimt", "trisdešimt", "keturiasdešimt", "penkiasdešimt", "šešiasdešimt",
    "septyniasdešimt", "aštuoniasdešimt", "devyniasdešimt",
];

static HUNDREDS: [&str; 10] = [
    "", "šimtas", "du šimtai", "trys šimtai", "keturi šimtai", "penki šimtai", "šeši šimtai",
    "septyni šimtai", "aštuoni šimtai", "devyni šimtai",
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

static SCALES: [ScaleWord; 5] = [
    rung(3, "tūkstantis", "tūkstančiai", "tūkstančių"),
    rung(6, "milijonas", "milijonai", "milijonų"),
    rung(9, "milijardas", "milijardai", "milijardų"),
    rung(12, "trilijonas", "trilijonai", "trilijonų"),
    rung(15, "kvadrilijonas", "kvadrilijonai", "kvadrilijonų"),
];

static SMALL_ORDINALS: [&str; 20] = [
    "", "pirmas", "antras", "trečias", "ketvirtas", "penktas", "šeštas", "septintas", "aštuntas",
    "devintas", "dešimtas", "vienuoliktas", "dvyliktas", "tryliktas", "keturioliktas", "penkioliktas",
    "šešioliktas", "septynioliktas", "aštuonioliktas", "devynioliktas",
];

static TENS_ORDINALS: [&str; 10] = [
    "", "", "dvidešimtas", "trisdešimtas", "keturiasdešimtas", "penkiasdešimtas", "šešiasdešimtas",
    "septyniasdešimtas", "aštuoniasdešimtas", "devyniasdešimtas",
];

fn small_ordinal(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rem = n % 100;

    let mut parts = Vec::new();
    if hundreds > 0 {
        if rem == 0 {
            let mut word = HUNDREDS[hundreds].to_string();
            // šimtas -> šimtasis; the multiplier word stays cardinal.
            word.push_str("is");
            return word;
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

static SCALE_ORDINALS: [&str; 3] = ["tūkstantasis", "milijonasis", "milijardasis"];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "lt",
    name: "Lithuanian",
    zero: "nulis",
    negative: "minus",
    decimal_mark: "kablelis",
    digits: ["nulis", "vienas", "du", "trys", "keturi", "penki", "šeši", "septyni", "aštuoni", "devyni"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::Baltic,
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
        major: UnitNoun { forms: ScaleForms::Triple { one: "euras", few: "eurai", many: "eurų" } },
        minor: UnitNoun { forms: ScaleForms::Triple { one: "centas", few: "centai", many: "centų" } },
        joiner: " ",
        major_gender: Some(Gender::Masculine),
        minor_gender: Some(Gender::Masculine),
    },
    flags: LocaleFlags::NAIVE_LARGE_ORDINALS,
};
