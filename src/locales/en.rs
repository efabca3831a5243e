//! English. Reference locale: British "and" before a final small group,
//! hyphenated tens, short scale by default with the traditional long scale
//! behind `CardinalOptions::long_scale`.

use crate::table::{
    Conjunction, ConjunctionRule, CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule,
    OrdinalUnits, PluralRule, RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable,
    UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve",
    "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

static TENS: [&str; 10] = ["", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Multiplier { word: "hundred", omit_one: false, joined: false },
    compose: TensOnesJoin::Hyphen,
    hundred_rem_sep: " and ",
    standalone_one: None,
};

const fn rung(exponent: u32, word: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Fixed(word),
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    }
}

static SHORT: [ScaleWord; 11] = [
    rung(3, "thousand"),
    rung(6, "million"),
    rung(9, "billion"),
    rung(12, "trillion"),
    rung(15, "quadrillion"),
    rung(18, "quintillion"),
    rung(21, "sextillion"),
    rung(24, "septillion"),
    rung(27, "octillion"),
    rung(30, "nonillion"),
    rung(33, "decillion"),
];

static LONG: [ScaleWord; 11] = [
    rung(3, "thousand"),
    rung(6, "million"),
    rung(9, "milliard"),
    rung(12, "billion"),
    rung(15, "billiard"),
    rung(18, "trillion"),
    rung(21, "trilliard"),
    rung(24, "quadrillion"),
    rung(27, "quadrilliard"),
    rung(30, "quintillion"),
    rung(33, "quintilliard"),
];

fn ordinal_word(word: &str) -> String {
    match word {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{w}th"),
    }
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "en",
    name: "English",
    zero: "zero",
    negative: "minus",
    decimal_mark: "point",
    digits: ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::OneOther,
    segment: SegmentRenderer::Triplet(&TRIPLET),
    scales: &SHORT,
    alt_scales: Some(&LONG),
    join: JoinRule {
        group_sep: " ",
        scale_sep: " ",
        compound_below: 0,
        conjunction: Some(Conjunction { word: "and", rule: ConjunctionRule::FinalNoHundred, attached: false }),
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule { irregular: &[], units: OrdinalUnits::FinalWord(ordinal_word) },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Binary { one: "dollar", other: "dollars" } },
        minor: UnitNoun { forms: ScaleForms::Binary { one: "cent", other: "cents" } },
        joiner: " and ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};
