//! Latvian. Singular agreement with any final digit 1 outside teens
//! ("divdesmit viens tūkstotis"), -ais ordinals.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "nulle", "viens", "divi", "trīs", "četri", "pieci", "seši", "septiņi", "astoņi", "deviņi", "desmit",
    "vienpadsmit", "divpadsmit", "trīspadsmit", "četrpadsmit", "piecpadsmit", "sešpadsmit", "septiņpadsmit",
    "astoņpadsmit", "deviņpadsmit",
];

static ONES_F: [&str; 20] = [
    "nulle", "viena", "divas", "trīs", "četras", "piecas", "sešas", "septiņas", "astoņas", "deviņas",
    "desmit", "vienpadsmit", "divpadsmit", "trīspadsmit", "četrpadsmit", "piecpadsmit", "sešpadsmit",
    "septiņpadsmit", "astoņpadsmit", "deviņpadsmit",
];

static TENS: [&str; 10] = [
    "", "", "divdesmit", "trīsdesmit", "četrdesmit", "piecdesmit", "sešdesmit", "septiņdesmit",
    "astoņdesmit", "deviņdesmit",
];

static HUNDREDS: [&str; 10] = [
    "", "simts", "divi simti", "trīs simti", "četri simti", "pieci simti", "seši simti", "septiņi simti",
    "astoņi simti", "deviņi simti",
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

const fn rung(exponent: u32, one: &'static str, other: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Binary { one, other },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 5] = [
    rung(3, "tūkstotis", "tūkstoši"),
    rung(6, "miljons", "miljoni"),
    rung(9, "miljards", "miljardi"),
    rung(12, "triljons", "triljoni"),
    rung(15, "kvadriljons", "kvadriljoni"),
];

static SMALL_ORDINALS: [&str; 20] = [
    "", "pirmais", "otrais", "trešais", "ceturtais", "piektais", "sestais", "septītais", "astotais",
    "devītais", "desmitais", "vienpadsmitais", "divpadsmitais", "trīspadsmitais", "četrpadsmitais",
    "piecpadsmitais", "sešpadsmitais", "septiņpadsmitais", "astoņpadsmitais", "deviņpadsmitais",
];

fn small_ordinal(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rem = n % 100;

    let mut parts = Vec::new();
    if hundreds > 0 {
        if rem == 0 {
            // simts -> simtais, divi simti -> divi simtais.
            let word = HUNDREDS[hundreds];
            return format!("{}ais", &word[..word.len() - 1]);
        }
        parts.push(HUNDREDS[hundreds].to_string());
    }
    if rem >= 20 {
        let tens = (rem / 10) as usize;
        let ones = (rem % 10) as usize;
        if ones == 0 {
            parts.push(format!("{}ais", TENS[tens]));
        } else {
            parts.push(TENS[tens].to_string());
            parts.push(SMALL_ORDINALS[ones].to_string());
        }
    } else if rem > 0 {
        parts.push(SMALL_ORDINALS[rem as usize].to_string());
    }
    parts.join(" ")
}

static SCALE_ORDINALS: [&str; 3] = ["tūkstošais", "miljonais", "miljardais"];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "lv",
    name: "Latvian",
    zero: "nulle",
    negative: "mīnus",
    decimal_mark: "komats",
    digits: ["nulle", "viens", "divi", "trīs", "četri", "pieci", "seši", "septiņi", "astoņi", "deviņi"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::LastOne,
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
        major: UnitNoun { forms: ScaleForms::Fixed("eiro") },
        minor: UnitNoun { forms: ScaleForms::Binary { one: "cents", other: "centi" } },
        joiner: " un ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::NAIVE_LARGE_ORDINALS,
};
